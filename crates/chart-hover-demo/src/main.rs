// File: crates/chart-hover-demo/src/main.rs
// Summary: Demo loads OHLC CSV, derives a multi-series line dataset, sweeps a pointer across
// both panes and prints what the sidebar would show.

use anyhow::{Context, Result};
use chart_hover::{
    last_values, ChartConfig, ChartGeometry, ChartView, HoverDetail, HoverSnapshot, HoverUpdate, LineSample, Mode, OhlcvSample,
    SeriesDescriptor, SurfaceRect,
};
use std::path::{Path, PathBuf};

const SURFACE_WIDTH: f64 = 1024.0;
const SURFACE_HEIGHT: f64 = 520.0;
const SWEEP_STEPS: usize = 8;

fn main() -> Result<()> {
    env_logger::init();

    // Args: [csv path] [config.json]
    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let config = match args.next() {
        Some(p) => {
            let raw = std::fs::read_to_string(&p).with_context(|| format!("reading config '{p}'"))?;
            ChartConfig::from_json_str(&raw).with_context(|| format!("parsing config '{p}'"))?
        }
        None => ChartConfig::default(),
    };

    let candles = match csv_arg {
        Some(raw) => {
            let (path, used_alt) = resolve_path(&raw)?;
            log::info!("using input file {}", path.display());
            if used_alt {
                log::info!("extension swapped between .csv/.cvs");
            }
            load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            log::info!("no CSV given, using synthetic candles");
            synthetic_candles(48)
        }
    };
    if candles.is_empty() {
        anyhow::bail!("no candles loaded, check headers/delimiter");
    }
    log::info!("loaded {} candles", candles.len());

    let series = vec![
        SeriesDescriptor::new("close", "Close", "#2563eb"),
        SeriesDescriptor::new("typical", "Typical (HLC/3)", "#16a34a"),
        SeriesDescriptor::new("median", "Median (HL/2)", "#f59e0b"),
    ];
    let lines = derive_lines(&candles);

    let surface = SurfaceRect::sized(SURFACE_WIDTH, SURFACE_HEIGHT);
    let geometry = ChartGeometry::new(surface, config.margins);

    // End-of-line markers sit at the last value of each series on the line pane.
    println!("Legend:");
    for e in last_values(&lines, &series) {
        let marker = e.value.map(|v| geometry.y_for_value(&config.line_domain, v));
        println!("  {:<16} {:>10}  marker y {}", e.label, fmt_opt(e.value), fmt_opt(marker));
    }

    let mut view = ChartView::new(config, series, lines, candles);

    for mode in [Mode::Line, Mode::Candle] {
        view.set_mode(mode);
        println!("\n== {mode:?} ==");
        for step in 0..=SWEEP_STEPS {
            let t = step as f64 / SWEEP_STEPS as f64;
            let x = t * SURFACE_WIDTH;
            let y = (1.0 - t) * SURFACE_HEIGHT;
            if view.pointer_move(x, y, &surface) == HoverUpdate::Updated {
                if let Some(h) = view.hover() {
                    print_sidebar(h);
                }
            }
        }
        if view.pointer_leave() == HoverUpdate::Cleared {
            println!("  (pointer left, sidebar cleared)");
        }
    }
    Ok(())
}

fn print_sidebar(h: &HoverSnapshot) {
    print!("  x={:>7.1} y={:>6.1} | {} | price ${:.2}", h.px_x, h.px_y, h.time, h.interpolated_value);
    match &h.detail {
        HoverDetail::Line { values } => {
            for v in values {
                print!(" | {} {}", v.key, fmt_opt(v.value));
            }
        }
        HoverDetail::Candle { open, high, low, close, volume } => {
            print!(" | O {open:.2} H {high:.2} L {low:.2} C {close:.2} V {}", fmt_opt(*volume));
        }
    }
    println!();
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

/// Line series derived from candles: close, typical price and median price.
fn derive_lines(candles: &[OhlcvSample]) -> Vec<LineSample> {
    candles
        .iter()
        .map(|c| {
            LineSample::new(c.time.clone())
                .with("close", c.close)
                .with("typical", (c.high + c.low + c.close) / 3.0)
                .with("median", (c.high + c.low) / 2.0)
        })
        .collect()
}

fn synthetic_candles(n: usize) -> Vec<OhlcvSample> {
    let mut price = 10_000.0f64;
    let start = 1_700_000_000i64;
    (0..n)
        .map(|i| {
            let o = price;
            let c = o + ((i as f64) * 0.7).sin() * 40.0;
            price = c;
            OhlcvSample {
                time: time_label(start + i as i64 * 3600),
                open: o,
                high: o.max(c) + 15.0,
                low: o.min(c) - 15.0,
                close: c,
                volume: Some(1_000.0 + (i % 7) as f64 * 120.0),
            }
        })
        .collect()
}

/// Locate the input file. Exports sometimes arrive as `.cvs`, so a missing
/// `.csv` is retried with the other spelling (and vice versa).
/// The flag is true when the swapped name was used.
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let given = PathBuf::from(raw);
    if given.exists() {
        return Ok((given, false));
    }
    let swapped = given
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .and_then(|e| match e.as_str() {
            "csv" => Some(given.with_extension("cvs")),
            "cvs" => Some(given.with_extension("csv")),
            _ => None,
        })
        .filter(|alt| alt.exists());
    match swapped {
        Some(alt) => Ok((alt, true)),
        None => anyhow::bail!("file not found: {}", given.display()),
    }
}

/// Load Binance-like OHLC(V) CSV into samples. Rows missing any of O/H/L/C are skipped.
fn load_ohlc_csv(path: &Path) -> Result<Vec<OhlcvSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        log::warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        let time = i_time
            .and_then(|ix| rec.get(ix))
            .map(parse_time_label)
            .unwrap_or_else(|| row.to_string());

        let (o, h, l, c) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close));
        if let (Some(open), Some(high), Some(low), Some(close)) = (o, h, l, c) {
            out.push(OhlcvSample { time, open, high, low, close, volume: parse(i_volume) });
        }
    }
    Ok(out)
}

/// Epoch seconds/milliseconds become a UTC label; anything else is kept verbatim.
fn parse_time_label(s: &str) -> String {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(n) if n > 10_i64.pow(12) => time_label(n / 1000), // epoch ms -> sec
        Ok(n) if n > 10_i64.pow(9) => time_label(n),
        _ => s.to_string(),
    }
}

fn time_label(epoch_secs: i64) -> String {
    chrono::DateTime::from_timestamp(epoch_secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}
