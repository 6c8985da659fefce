//! Bounded-width ASCII trend chart.
//!
//! Maps an arbitrary price range onto a fixed number of terminal columns with
//! exact column accounting: for every rendered bar the four segments (leading
//! spaces, low dashes, high dashes, trailing spaces) sum to the plot width.

use log::debug;

use crate::domain::{DailyBar, TrendSeries};
use crate::error::ChartError;

/// "YYYY-MM-DD |" prefix on every bar row.
const DATE_COL_WIDTH: usize = 12;

/// Columns reserved outside the plot area: the date column, the marker
/// column, and the trailing "| low close high" labels. Label width scales
/// with the current-price string length so the numbers align regardless of
/// magnitude.
pub const fn fixed_overhead(current_price_len: usize) -> usize {
    DATE_COL_WIDTH + 1 + 2 + 3 * current_price_len + 2
}

/// Render the chart for a series.
///
/// Fails with [`ChartError::NoData`] on an empty series and
/// [`ChartError::Layout`] when `total_width` leaves no plot columns. Both are
/// per-symbol conditions; callers skip this chart and keep going.
pub fn render(
    series: &TrendSeries,
    total_width: usize,
    current_price_len: usize,
) -> Result<String, ChartError> {
    let bars = series.bars();
    if bars.is_empty() {
        return Err(ChartError::NoData);
    }

    let overhead = fixed_overhead(current_price_len);
    let graph_width = match total_width.checked_sub(overhead) {
        Some(width) if width > 0 => width,
        _ => {
            return Err(ChartError::Layout {
                total_width,
                overhead,
            })
        }
    };

    let sv = bars.iter().map(DailyBar::low).fold(f64::INFINITY, f64::min);
    let lv = bars
        .iter()
        .map(DailyBar::high)
        .fold(f64::NEG_INFINITY, f64::max);
    debug!("chart range {sv}..{lv} over {graph_width} columns");

    let mut out = String::new();
    out.push_str(&scale_line(sv, lv, graph_width));
    out.push_str(&border_line(graph_width));

    if lv == sv {
        // Perfectly flat series: slots-per-unit is undefined, so every row is
        // a single centered marker with no dash extension. An explicit branch,
        // not a guarded division.
        let initial = graph_width / 2;
        for bar in bars {
            out.push_str(&row(bar, initial, 0, 0, graph_width - initial, current_price_len));
        }
    } else {
        let slots_per_unit = graph_width as f64 / (lv - sv);
        for bar in bars {
            let (initial, low_dashes, high_dashes, fin) =
                segment_widths(bar, sv, slots_per_unit, graph_width);
            out.push_str(&row(bar, initial, low_dashes, high_dashes, fin, current_price_len));
        }
    }

    out.push_str(&border_line(graph_width));
    out.push_str(&format!(
        "{:indent$}each column represents ${:.4}\n",
        "",
        (lv - sv) / graph_width as f64,
        indent = DATE_COL_WIDTH
    ));

    Ok(out)
}

/// Integer segment widths for one bar. The trailing-space segment is always
/// the remainder, so the four widths sum to `graph_width` exactly. Should the
/// floored leading terms overshoot the plot width, the high dashes are
/// truncated first, then the low dashes: both tolerate truncation better
/// than a misaligned marker.
fn segment_widths(
    bar: &DailyBar,
    sv: f64,
    slots_per_unit: f64,
    graph_width: usize,
) -> (usize, usize, usize, usize) {
    let scale = |units: f64| ((units * slots_per_unit).floor().max(0.0)) as usize;

    let mut initial = scale(bar.low() - sv).min(graph_width);
    let mut low_dashes = scale(bar.close() - bar.low());
    let mut high_dashes = scale(bar.high() - bar.close());

    let mut overshoot = (initial + low_dashes + high_dashes).saturating_sub(graph_width);
    if overshoot > 0 {
        let cut = overshoot.min(high_dashes);
        high_dashes -= cut;
        overshoot -= cut;

        let cut = overshoot.min(low_dashes);
        low_dashes -= cut;
        overshoot -= cut;

        initial -= overshoot;
    }

    let fin = graph_width - initial - low_dashes - high_dashes;
    (initial, low_dashes, high_dashes, fin)
}

fn row(
    bar: &DailyBar,
    initial: usize,
    low_dashes: usize,
    high_dashes: usize,
    fin: usize,
    price_len: usize,
) -> String {
    let date = bar.date();
    format!(
        "{:04}-{:02}-{:02} |{}{}o{}{}| {:>w$.2} {:>w$.2} {:>w$.2}\n",
        date.year(),
        u8::from(date.month()),
        date.day(),
        " ".repeat(initial),
        "-".repeat(low_dashes),
        "-".repeat(high_dashes),
        " ".repeat(fin),
        bar.low(),
        bar.close(),
        bar.high(),
        w = price_len,
    )
}

/// Scale header: the smallest value at the left edge, the midpoint centered,
/// the largest value at the right edge of the plot area.
fn scale_line(sv: f64, lv: f64, graph_width: usize) -> String {
    let span = graph_width + 1;
    let mut cells = vec![' '; span];

    let place = |cells: &mut Vec<char>, text: &str, at: usize| {
        for (offset, ch) in text.chars().enumerate() {
            let index = at + offset;
            if index < cells.len() {
                cells[index] = ch;
            }
        }
    };

    let low_label = format!("{sv:.2}");
    let mid_label = format!("{:.2}", (sv + lv) / 2.0);
    let high_label = format!("{lv:.2}");

    let mid_at = (span / 2).saturating_sub(mid_label.len() / 2);
    let high_at = span.saturating_sub(high_label.len());

    place(&mut cells, &low_label, 0);
    place(&mut cells, &mid_label, mid_at);
    place(&mut cells, &high_label, high_at);

    format!(
        "{:indent$}{}\n",
        "",
        cells.into_iter().collect::<String>(),
        indent = DATE_COL_WIDTH
    )
}

fn border_line(graph_width: usize) -> String {
    format!(
        "{:indent$}+{}+\n",
        "",
        "-".repeat(graph_width + 1),
        indent = DATE_COL_WIDTH - 1
    )
}
