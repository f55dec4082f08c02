//! Console styling for REPL output.
//!
//! Every helper returns the styled text rather than printing it, so the REPL
//! can write to whichever stream it was given. Styling is skipped when
//! `NO_COLOR` is set or the target stream is not a terminal.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Style a banner for stdout.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// Style a success message for stdout.
#[must_use]
pub fn success(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).green().to_string()
    }
}

/// Style a warning for stderr.
#[must_use]
pub fn warning(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).for_stderr().yellow().to_string()
    }
}

/// Style an error for stderr.
#[must_use]
pub fn error(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).for_stderr().red().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn styled_text_keeps_content() {
        let plain = console::strip_ansi_codes(&header("Banner")).to_string();
        assert_eq!(plain, "Banner");
        let plain = console::strip_ansi_codes(&success("done")).to_string();
        assert_eq!(plain, "done");
        let plain = console::strip_ansi_codes(&warning("careful")).to_string();
        assert_eq!(plain, "careful");
        let plain = console::strip_ansi_codes(&error("broken")).to_string();
        assert_eq!(plain, "broken");
    }

    #[test]
    fn styles_empty_and_unicode() {
        assert_eq!(console::strip_ansi_codes(&header("")), "");
        assert_eq!(
            console::strip_ansi_codes(&warning("Fibonacci \u{2192} suite")),
            "Fibonacci \u{2192} suite"
        );
    }
}
