/// Format a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a rate with basis-point precision, for values that differ in the
/// third decimal of a percent
pub fn format_rate(value: f64) -> String {
    format!("{:.3}%", value * 100.0)
}
