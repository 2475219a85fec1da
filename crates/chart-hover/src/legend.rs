// File: crates/chart-hover/src/legend.rs
// Summary: Legend and tooltip row helpers derived from series descriptors.

use crate::hover::SeriesValue;
use crate::series::{LineSample, SeriesDescriptor};

/// One legend / end-of-line marker row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub color: &'a str,
    pub value: Option<f64>,
}

/// Latest value of every series, taken from the last line sample.
/// Empty when there is no data yet.
pub fn last_values<'a>(dataset: &[LineSample], series: &'a [SeriesDescriptor]) -> Vec<LegendEntry<'a>> {
    let Some(last) = dataset.last() else { return Vec::new() };
    series
        .iter()
        .map(|s| LegendEntry {
            key: &s.key,
            label: &s.label,
            color: &s.color,
            value: last.get(&s.key),
        })
        .collect()
}

/// Tooltip row: a hovered per-series value with its descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow<'a> {
    pub series: &'a SeriesDescriptor,
    pub value: Option<f64>,
}

/// Rows for the per-series tooltip in descriptor order. When a line is
/// highlighted only that series is kept.
pub fn tooltip_rows<'a>(
    values: &[SeriesValue],
    series: &'a [SeriesDescriptor],
    active_line: Option<&str>,
) -> Vec<TooltipRow<'a>> {
    series
        .iter()
        .filter(|s| active_line.map_or(true, |k| s.key == k))
        .map(|s| TooltipRow {
            series: s,
            value: values.iter().find(|v| v.key == s.key).and_then(|v| v.value),
        })
        .collect()
}
