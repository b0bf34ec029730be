/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Severity color for a "higher is worse" score:
/// 0..=3 → green, 4..=7 → yellow, 8..=10 → red
pub fn color_for_severity(value: u8) -> &'static str {
    match value {
        0..=3 => GREEN,
        4..=7 => YELLOW,
        _ => RED,
    }
}

/// Wellness color: the inverse scale of `color_for_severity`.
pub fn color_for_wellness(value: f64) -> &'static str {
    if value >= 7.0 {
        GREEN
    } else if value >= 4.0 {
        YELLOW
    } else {
        RED
    }
}

/// Grey for empty optional text, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_bands() {
        assert_eq!(color_for_severity(3), GREEN);
        assert_eq!(color_for_severity(4), YELLOW);
        assert_eq!(color_for_severity(8), RED);
    }

    #[test]
    fn wellness_bands() {
        assert_eq!(color_for_wellness(7.2), GREEN);
        assert_eq!(color_for_wellness(5.0), YELLOW);
        assert_eq!(color_for_wellness(1.0), RED);
    }
}
