use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::{ACCENT, diverging_color, symmetric_extent};
use crate::data::histogram::ScoreHistogram;
use crate::data::model::AggregateRow;

const PLOT_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Sentiment polarity spread (histogram of raw scores)
// ---------------------------------------------------------------------------

pub fn polarity_histogram(ui: &mut Ui, histogram: &ScoreHistogram) {
    ui.strong("Sentiment Polarity Spread");

    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .fill(ACCENT)
                .name(format!("{:.2} … {:.2}", bin.start, bin.end))
        })
        .collect();

    Plot::new("polarity_spread")
        .height(PLOT_HEIGHT)
        .x_axis_label("sentiment_score")
        .y_axis_label("count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("articles").color(ACCENT));
        });
}

// ---------------------------------------------------------------------------
// Top source bias comparison (horizontal bars)
// ---------------------------------------------------------------------------

pub fn source_comparison(ui: &mut Ui, rows: &[AggregateRow]) {
    ui.strong("Top Source Bias Comparison");

    let extent = symmetric_extent(rows.iter().filter_map(|r| r.avg_score));
    let n = rows.len();

    // First ranked row is drawn at the top.
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let avg = row.avg_score?;
            Some(
                Bar::new((n - 1 - i) as f64, avg)
                    .width(0.7)
                    .fill(diverging_color(avg, extent))
                    .name(format!("{} ({avg:.2})", row.channel)),
            )
        })
        .collect();

    let labels: Vec<String> = rows.iter().rev().map(|r| r.channel.clone()).collect();

    Plot::new("source_comparison")
        .height(PLOT_HEIGHT)
        .x_axis_label("avg_score")
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("avg_score").horizontal());
        });
}
