//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render feedback as symbols: `●` exact, `○` misplaced, `·` absent
#[must_use]
pub fn feedback_symbols(feedback: Feedback) -> String {
    let mut result = String::new();
    for _ in 0..feedback.exact() {
        result.push('●');
    }
    for _ in 0..feedback.misplaced() {
        result.push('○');
    }
    for _ in 0..feedback.absent() {
        result.push('·');
    }
    result
}

/// Create a fixed-width histogram bar
#[must_use]
pub fn histogram_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_follow_the_triple() {
        assert_eq!(feedback_symbols(Feedback::new(2, 1, 1)), "●●○·");
        assert_eq!(feedback_symbols(Feedback::new(0, 0, 4)), "····");
        assert_eq!(feedback_symbols(Feedback::new(4, 0, 0)), "●●●●");
    }

    #[test]
    fn histogram_bar_empty() {
        assert_eq!(histogram_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn histogram_bar_full() {
        assert_eq!(histogram_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn histogram_bar_half() {
        assert_eq!(histogram_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn histogram_bar_clamps_overflow() {
        assert_eq!(histogram_bar(150.0, 100.0, 4), "████");
    }
}
