//! Line-chart rendering for the rate curve.

use certeq_core::{HorizonDistribution, HorizonPoint};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::format::format_percentage;

/// Render the certainty-equivalent rate against the time horizon: the
/// single-draw sampled curve over the Monte Carlo median and P5-P95 band.
pub fn render_rate_curve(
    frame: &mut Frame,
    area: Rect,
    curve: &[HorizonPoint],
    bands: &[HorizonDistribution],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" CERTAINTY-EQUIVALENT DISCOUNT RATE ");

    if curve.is_empty() {
        let paragraph = Paragraph::new("No data to display").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let sampled: Vec<(f64, f64)> = curve
        .iter()
        .map(|p| (f64::from(p.horizon), p.rate))
        .collect();
    let band_series = |target: f64| -> Vec<(f64, f64)> {
        bands
            .iter()
            .filter_map(|d| d.percentile(target).map(|v| (f64::from(d.horizon), v)))
            .collect()
    };
    let p5 = band_series(0.05);
    let median = band_series(0.50);
    let p95 = band_series(0.95);

    let all_rates = sampled
        .iter()
        .chain(p5.iter())
        .chain(p95.iter())
        .map(|(_, rate)| *rate);
    let y_min = all_rates.clone().fold(f64::INFINITY, f64::min);
    let y_max = all_rates.fold(f64::NEG_INFINITY, f64::max);
    // Pad the value range so the extremes don't sit on the frame
    let y_pad = ((y_max - y_min) * 0.1).max(1e-4);
    let y_bounds = [y_min - y_pad, y_max + y_pad];

    let x_max = curve.iter().map(|p| f64::from(p.horizon)).fold(0.0, f64::max);
    let x_bounds = [0.0, x_max * 1.02];

    let x_labels = [0.0, x_max / 2.0, x_max]
        .iter()
        .map(|x| format!("{x:.0}"))
        .collect::<Vec<_>>();
    let y_labels = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
        .iter()
        .map(|y| format_percentage(*y))
        .collect::<Vec<_>>();

    let datasets = vec![
        Dataset::default()
            .name("P5")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&p5),
        Dataset::default()
            .name("P95")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&p95),
        Dataset::default()
            .name("median")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&median),
        Dataset::default()
            .name("sampled")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&sampled),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time Horizon (years)")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Certainty-Equivalent Rate")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
