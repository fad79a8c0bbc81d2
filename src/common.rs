//! Shared helpers for indentation, quoting and error formatting

use colored::Colorize;

/// Returns `width` spaces.
pub(crate) fn indent(width: usize) -> String {
    " ".repeat(width)
}

/// Checks whether a string contains a character that clashes with the
/// rendered layout: anything other than ASCII word characters, whitespace,
/// `.` and `,`.
pub(crate) fn has_conflicting_chars(s: &str) -> bool {
    s.chars().any(|c| {
        !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || c == '.' || c == ',')
    })
}

/// Quote and escape a string as a JSON string literal.
pub(crate) fn json_quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => result.push_str(&format!("\\u{:04x}", c as u32)),
            _ => result.push(c),
        }
    }

    result.push('"');
    result
}

/// Formats a user-facing error line with a red `Error:` prefix unless
/// `no_color` is set.
pub fn format_error(message: &str, no_color: bool) -> String {
    if no_color {
        format!("Error: {}", message)
    } else {
        format!("{} {}", "Error:".red(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_empty() {
        assert_eq!(indent(0), "");
    }

    #[test]
    fn test_indent_spaces() {
        assert_eq!(indent(1), " ");
        assert_eq!(indent(5), "     ");
    }

    #[test]
    fn test_conflicting_chars() {
        assert!(!has_conflicting_chars("plain words, with punctuation."));
        assert!(!has_conflicting_chars("tabs\tand\nnewlines are fine"));
        assert!(!has_conflicting_chars("snake_case_42"));
        assert!(has_conflicting_chars("#irchannel"));
        assert!(has_conflicting_chars("key: value"));
        assert!(has_conflicting_chars("quoted \"text\""));
    }

    #[test]
    fn test_json_quote() {
        assert_eq!(json_quote("plain"), "\"plain\"");
        assert_eq!(json_quote("a\nb"), "\"a\\nb\"");
        assert_eq!(json_quote("tab\there"), "\"tab\\there\"");
        assert_eq!(json_quote("quote\"slash\\"), "\"quote\\\"slash\\\\\"");
        assert_eq!(json_quote("bell\u{7}"), "\"bell\\u0007\"");
    }

    #[test]
    fn test_format_error_no_color() {
        assert_eq!(format_error("Not valid JSON!", true), "Error: Not valid JSON!");
    }

    #[test]
    fn test_format_error_colored() {
        colored::control::set_override(true);
        let expected = format!("{} Not valid JSON!", "Error:".red());
        assert_eq!(format_error("Not valid JSON!", false), expected);
    }
}
