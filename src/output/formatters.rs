//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one histogram row bar, scaled against the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 {
        return "░".repeat(width);
    }
    create_progress_bar(count as f64, max_count as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn distribution_bar_scales_to_largest_bucket() {
        let bar = distribution_bar(5, 10, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn distribution_bar_handles_empty_histogram() {
        let bar = distribution_bar(0, 0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }
}
