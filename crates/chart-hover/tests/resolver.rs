// File: crates/chart-hover/tests/resolver.rs
// Purpose: Pointer resolution against margins, domains and dataset edges.

use chart_hover::types::{LINE_Y_MAX, LINE_Y_MIN, OHLCV_Y_MAX, OHLCV_Y_MIN};
use chart_hover::{project, resolve, resolve_client, ChartGeometry, HoverDetail, LineSample, Margins, OhlcvSample, Pane, SeriesDescriptor, SurfaceRect, ValueDomain};

fn line_data(n: usize) -> Vec<LineSample> {
    (0..n).map(|i| LineSample::new(format!("t{i}")).with("p", 100.0 * (i + 1) as f64)).collect()
}

fn candles(n: usize) -> Vec<OhlcvSample> {
    (0..n)
        .map(|i| {
            let o = 9500.0 + i as f64;
            OhlcvSample::try_new(format!("c{i}"), o, o + 20.0, o - 20.0, o + 5.0, Some(1000.0)).unwrap()
        })
        .collect()
}

fn margined(width: f64, height: f64) -> ChartGeometry {
    ChartGeometry::new(SurfaceRect::sized(width, height), Margins::new(24, 120, 20, 60))
}

#[test]
fn three_sample_midpoint_resolves_to_middle() {
    let data = vec![
        LineSample::new("t0").with("p", 100.0),
        LineSample::new("t1").with("p", 200.0),
        LineSample::new("t2").with("p", 300.0),
    ];
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = ChartGeometry::unmargined(300.0, 200.0);
    let r = resolve(150.0, 50.0, &g, &pane).expect("resolution");
    assert_eq!(r.sample_index, 1);
}

#[test]
fn margin_edges_map_to_first_and_last_sample() {
    let data = line_data(10);
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = margined(624.0, 400.0);
    assert_eq!(g.plot_width(), 480.0);

    assert_eq!(resolve(24.0, 0.0, &g, &pane).unwrap().sample_index, 0);
    assert_eq!(resolve(504.0, 0.0, &g, &pane).unwrap().sample_index, 9);
    // Inside the margins the index saturates instead of skewing.
    assert_eq!(resolve(5.0, 0.0, &g, &pane).unwrap().sample_index, 0);
    assert_eq!(resolve(600.0, 0.0, &g, &pane).unwrap().sample_index, 9);
}

#[test]
fn column_centres_resolve_to_their_sample() {
    for n in [1usize, 2, 3, 7, 10, 250] {
        let data = line_data(n);
        let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
        let g = margined(624.0, 400.0);
        let plot_w = g.plot_width();
        for i in 0..n {
            let x = if n == 1 { 24.0 + plot_w / 2.0 } else { 24.0 + plot_w * i as f64 / (n - 1) as f64 };
            let r = resolve(x, 100.0, &g, &pane).unwrap();
            assert_eq!(r.sample_index, i, "n={n} i={i} x={x}");
        }
    }
}

#[test]
fn top_and_bottom_edges_hit_domain_bounds() {
    let data = line_data(4);
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = margined(624.0, 400.0);
    assert_eq!(resolve(100.0, 0.0, &g, &pane).unwrap().interpolated_value, LINE_Y_MAX);
    assert_eq!(resolve(100.0, 400.0, &g, &pane).unwrap().interpolated_value, LINE_Y_MIN);
    // Beyond the box clamps to the same edges.
    assert_eq!(resolve(100.0, -50.0, &g, &pane).unwrap().interpolated_value, LINE_Y_MAX);
    assert_eq!(resolve(100.0, 999.0, &g, &pane).unwrap().interpolated_value, LINE_Y_MIN);
}

#[test]
fn interpolated_value_is_rounded_to_cents() {
    let data = line_data(2);
    let domain = ValueDomain::new(0.0, 1.0).unwrap();
    let pane = Pane::Line { dataset: &data, domain };
    let g = ChartGeometry::unmargined(100.0, 3.0);
    let r = resolve(0.0, 1.0, &g, &pane).unwrap();
    assert_eq!(r.interpolated_value, 0.67);
}

#[test]
fn candle_and_line_panes_use_their_own_domains() {
    let lines = line_data(5);
    let bars = candles(5);
    let g = ChartGeometry::unmargined(400.0, 200.0);
    let line = Pane::Line { dataset: &lines, domain: ValueDomain::line() };
    let candle = Pane::Candle { dataset: &bars, domain: ValueDomain::candle() };

    let lr = resolve(200.0, 100.0, &g, &line).unwrap();
    let cr = resolve(200.0, 100.0, &g, &candle).unwrap();
    assert_eq!(lr.interpolated_value, 10325.0);
    assert_eq!(cr.interpolated_value, 9900.0);

    assert_eq!(resolve(0.0, 0.0, &g, &candle).unwrap().interpolated_value, OHLCV_Y_MAX);
    assert_eq!(resolve(0.0, 200.0, &g, &candle).unwrap().interpolated_value, OHLCV_Y_MIN);
}

#[test]
fn empty_candle_dataset_is_no_update() {
    let bars: Vec<OhlcvSample> = Vec::new();
    let pane = Pane::Candle { dataset: &bars, domain: ValueDomain::candle() };
    let g = ChartGeometry::unmargined(400.0, 200.0);
    assert!(resolve(10.0, 10.0, &g, &pane).is_none());
}

#[test]
fn zero_area_surface_defaults_ratios_to_zero() {
    let data = line_data(6);
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = ChartGeometry::new(SurfaceRect::sized(0.0, 0.0), Margins::default());
    let r = resolve(50.0, 50.0, &g, &pane).unwrap();
    assert_eq!(r.sample_index, 0);
    assert_eq!(r.interpolated_value, LINE_Y_MAX);
    assert_eq!((r.px_x, r.px_y), (0.0, 0.0));
    assert!(r.interpolated_value.is_finite());
}

#[test]
fn client_coordinates_subtract_surface_origin() {
    let data = line_data(3);
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = ChartGeometry::new(SurfaceRect::from_ltwh(100.0, 40.0, 300.0, 200.0), Margins::new(0, 0, 0, 0));
    let r = resolve_client(400.0, 240.0, &g, &pane).unwrap();
    assert_eq!(r.sample_index, 2);
    assert_eq!((r.px_x, r.px_y), (300.0, 200.0));
}

#[test]
fn repeated_resolution_is_identical() {
    let data = line_data(17);
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = margined(800.0, 450.0);
    let a = resolve(333.3, 123.4, &g, &pane);
    let b = resolve(333.3, 123.4, &g, &pane);
    assert_eq!(a, b);
}

#[test]
fn projection_keeps_pointer_value_separate_from_sample_values() {
    let data = vec![
        LineSample::new("09:00").with("gpt", 10100.0).with("claude", 10200.0),
        LineSample::new("09:05").with("gpt", 10110.0),
    ];
    let series = vec![
        SeriesDescriptor::new("gpt", "GPT", "#111"),
        SeriesDescriptor::new("claude", "Claude", "#222"),
    ];
    let pane = Pane::Line { dataset: &data, domain: ValueDomain::line() };
    let g = ChartGeometry::unmargined(100.0, 100.0);

    let r = resolve(100.0, 50.0, &g, &pane).unwrap();
    let snap = project(&r, &pane, &series).unwrap();
    assert_eq!(snap.time, "09:05");
    assert_eq!(snap.interpolated_value, 10325.0);
    assert_eq!(snap.value_of("gpt"), Some(10110.0));
    assert_eq!(snap.value_of("claude"), None);
    assert_eq!(snap.series_values()[0].key, "gpt");
    assert_eq!((snap.px_x, snap.px_y), (100.0, 50.0));
}

#[test]
fn candle_projection_copies_ohlcv_verbatim() {
    let mut bars = candles(3);
    bars[1].volume = None;
    let pane = Pane::Candle { dataset: &bars, domain: ValueDomain::candle() };
    let g = ChartGeometry::unmargined(200.0, 100.0);

    let r = resolve(100.0, 0.0, &g, &pane).unwrap();
    let snap = project(&r, &pane, &[]).unwrap();
    assert_eq!(snap.time, "c1");
    assert_eq!(
        snap.detail,
        HoverDetail::Candle { open: 9501.0, high: 9521.0, low: 9481.0, close: 9506.0, volume: None }
    );
    assert!(snap.series_values().is_empty());
}
