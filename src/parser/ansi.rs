//! Strip terminal escape sequences from captured benchmark output

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // CSI sequences (colors, cursor movement) and two-byte ESC sequences
    RE.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b[@-Z\\-_]").expect("ANSI escape pattern")
    })
}

/// Remove ANSI escape sequences; borrows when the line has none
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    if !line.contains('\x1b') {
        return Cow::Borrowed(line);
    }
    ansi_re().replace_all(line, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_borrowed() {
        assert!(matches!(strip_ansi("[PASS] 1.1 - ok"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strips_color_codes() {
        let raw = "\x1b[1;32m[PASS]\x1b[0m 1.1 - Ensure a separate partition";
        assert_eq!(strip_ansi(raw), "[PASS] 1.1 - Ensure a separate partition");
    }

    #[test]
    fn test_strips_bold_and_reset_only() {
        assert_eq!(strip_ansi("\x1b[1m\x1b[mtext"), "text");
    }

    #[test]
    fn test_keeps_brackets_without_escape() {
        assert_eq!(strip_ansi("[0m literal"), "[0m literal");
    }
}
