//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter proportion as a bar scaled against the chart maximum
#[must_use]
pub fn frequency_bar(proportion: f64, chart_max: f64, width: usize) -> String {
    if chart_max <= 0.0 {
        return "░".repeat(width);
    }
    create_progress_bar(proportion, chart_max, width)
}
