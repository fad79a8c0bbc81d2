//! The recursive layout engine.
//!
//! Decides, for every node of a [`Value`] tree, whether it renders inline on
//! its container's line or expands into a nested block, and assembles the
//! final sequence of output lines.

use crate::common::{format_error, has_conflicting_chars, indent, json_quote};
use crate::error::ParseError;
use crate::style::{AnsiStyler, Styler};
use crate::value::Value;

/// Renderer configuration options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Style name for mapping keys (default: "green")
    pub keys_color: String,
    /// Style name for the dash prefixing sequence elements (default: "green")
    pub dash_color: String,
    /// Style name shared by positive and negative numbers (default: "blue")
    pub number_color: String,
    /// Overrides `number_color` for numbers >= 0 when set
    pub positive_number_color: Option<String>,
    /// Overrides `number_color` for numbers < 0 when set
    pub negative_number_color: Option<String>,
    /// Style name for single-line strings. `None` leaves strings unstyled
    /// even when coloring is enabled
    pub string_color: Option<String>,
    /// Style name for multiline string blocks. `None` leaves them unstyled
    /// even when coloring is enabled
    pub multiline_string_color: Option<String>,
    /// Spaces per nesting level (default: 2)
    pub default_indentation: usize,
    /// Message rendered in place of an empty sequence
    pub empty_array_msg: String,
    /// Disable all styling
    pub no_color: bool,
    /// Disable column alignment of mapping values
    pub no_align: bool,
    /// JSON-quote strings containing characters that clash with the layout
    pub escape: bool,
    /// Render a sequence on its container's line when its first element is
    /// a serializable primitive
    pub inline_arrays: bool,
    /// Render undefined values instead of skipping them
    pub render_undefined: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            keys_color: "green".to_string(),
            dash_color: "green".to_string(),
            number_color: "blue".to_string(),
            positive_number_color: None,
            negative_number_color: None,
            string_color: None,
            multiline_string_color: None,
            default_indentation: 2,
            empty_array_msg: "(empty array)".to_string(),
            no_color: false,
            no_align: false,
            escape: false,
            inline_arrays: false,
            render_undefined: false,
        }
    }
}

/// Render a value tree as indented, optionally colorized text.
///
/// `indentation` is the left margin of the outermost lines, in columns.
pub fn render(value: &Value, options: &RenderOptions, indentation: usize) -> String {
    render_with_styler(value, options, indentation, &AnsiStyler)
}

/// Render a value tree through a caller-supplied [`Styler`].
pub fn render_with_styler(
    value: &Value,
    options: &RenderOptions,
    indentation: usize,
    styler: &dyn Styler,
) -> String {
    let renderer = Renderer { options, styler };
    renderer.render_value(value, indentation).join("\n")
}

/// Extract the first JSON fragment from `raw`, parse it, and render the
/// result. Parse failures come back as a formatted error line, never as an
/// error value.
pub fn render_text(raw: &str, options: &RenderOptions, indentation: usize) -> String {
    try_render_text(raw, options, indentation)
        .unwrap_or_else(|_| format_error("Not valid JSON!", options.no_color))
}

/// Fallible twin of [`render_text`], for callers that need to distinguish a
/// parse failure from rendered output.
pub fn try_render_text(
    raw: &str,
    options: &RenderOptions,
    indentation: usize,
) -> Result<String, ParseError> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let (passthrough, fragment) = split_fragment(raw);
    let parsed: serde_json::Value = serde_json::from_str(fragment).map_err(ParseError::new)?;

    let mut output = String::new();
    if let Some(prefix) = passthrough {
        output.push_str(prefix);
        output.push('\n');
    }
    output.push_str(&render(&Value::from(parsed), options, indentation));
    Ok(output)
}

/// Locates the earlier of the first `{` and first `[` in `raw`; text before
/// it is passed through verbatim. Without any bracket the whole input goes
/// to the parser, which then reports the failure.
fn split_fragment(raw: &str) -> (Option<&str>, &str) {
    if raw.starts_with('{') || raw.starts_with('[') {
        return (None, raw);
    }

    let start = match (raw.find('{'), raw.find('[')) {
        (Some(object), Some(array)) => object.min(array),
        (Some(object), None) => object,
        (None, Some(array)) => array,
        (None, None) => return (None, raw),
    };

    (Some(&raw[..start]), &raw[start..])
}

struct Renderer<'a> {
    options: &'a RenderOptions,
    styler: &'a dyn Styler,
}

impl<'a> Renderer<'a> {
    /// Main rendering entry point: one output line per element of the
    /// returned vector.
    fn render_value(&self, value: &Value, indentation: usize) -> Vec<String> {
        let escaped;
        let value = match value {
            Value::String(s) | Value::MultilineString(s)
                if self.options.escape && has_conflicting_chars(s) =>
            {
                escaped = Value::String(json_quote(s));
                &escaped
            }
            _ => value,
        };

        if !self.is_printable(value) {
            return Vec::new();
        }

        if self.is_serializable(value, false) {
            return vec![indent(indentation) + &self.style_scalar(value)];
        }

        match value {
            Value::MultilineString(s) => self.render_multiline(s, indentation),
            Value::Sequence(elements) => self.render_sequence(elements, indentation),
            Value::Mapping(entries) => self.render_mapping(entries, indentation),
            Value::Error { message, stack } => {
                let entries = vec![
                    ("message".to_string(), Value::string(message.clone())),
                    (
                        "stack".to_string(),
                        Value::Sequence(stack.iter().cloned().map(Value::string).collect()),
                    ),
                ];
                self.render_mapping(&entries, indentation)
            }
            // Every remaining variant is serializable and was handled above
            _ => Vec::new(),
        }
    }

    /// Renders a multiline string as an indented block between `"""`
    /// delimiters.
    fn render_multiline(&self, text: &str, indentation: usize) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(indent(indentation) + &self.paint_multiline("\"\"\""));

        let content_indentation = indentation + self.options.default_indentation;
        for line in text.split('\n') {
            lines.push(indent(content_indentation) + &self.paint_multiline(line));
        }

        lines.push(indent(indentation) + &self.paint_multiline("\"\"\""));
        lines
    }

    fn render_sequence(&self, elements: &[Value], indentation: usize) -> Vec<String> {
        if elements.is_empty() {
            return vec![indent(indentation) + &self.options.empty_array_msg];
        }

        let mut output = Vec::new();
        for element in elements {
            if !self.is_printable(element) {
                continue;
            }

            let mut line = indent(indentation) + &self.paint(&self.options.dash_color, "- ");

            if self.is_serializable(element, false) {
                // Serializable elements share the dash line
                line.push_str(&self.render_value(element, 0)[0]);
                output.push(line);
            } else {
                output.push(line);
                output.extend(
                    self.render_value(element, indentation + self.options.default_indentation),
                );
            }
        }
        output
    }

    fn render_mapping(&self, entries: &[(String, Value)], indentation: usize) -> Vec<String> {
        let max_key_width = if self.options.no_align {
            0
        } else {
            self.max_key_width(entries)
        };

        let mut output = Vec::new();
        for (key, value) in entries {
            if !self.is_printable(value) {
                continue;
            }

            let label = format!("{}: ", key);
            let mut line = indent(indentation) + &self.paint(&self.options.keys_color, &label);

            if self.is_serializable(value, false) {
                // Pad the value so inline values line up in one column
                let padding = if self.options.no_align {
                    0
                } else {
                    max_key_width - key.chars().count()
                };
                line.push_str(&self.render_value(value, padding)[0]);
                output.push(line);
            } else {
                output.push(line);
                output.extend(
                    self.render_value(value, indentation + self.options.default_indentation),
                );
            }
        }
        output
    }

    /// Longest key among entries whose value will actually be printed.
    fn max_key_width(&self, entries: &[(String, Value)]) -> usize {
        entries
            .iter()
            .filter(|(_, value)| self.is_printable(value))
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Whether `value` produces any output at all.
    fn is_printable(&self, value: &Value) -> bool {
        !matches!(value, Value::Undefined) || self.options.render_undefined
    }

    /// Whether `value` fits on the same line as its container's prefix.
    ///
    /// With `inline_arrays` enabled, only a sequence's first element is
    /// probed; later elements are deliberately not inspected.
    fn is_serializable(&self, value: &Value, only_primitives: bool) -> bool {
        match value {
            Value::Bool(_)
            | Value::Number(_)
            | Value::Function
            | Value::Null
            | Value::Undefined
            | Value::Date(_)
            | Value::String(_) => true,
            Value::Sequence(elements) if self.options.inline_arrays && !only_primitives => {
                elements
                    .first()
                    .map_or(true, |first| self.is_serializable(first, true))
            }
            _ => false,
        }
    }

    /// Applies a named style unless styling is disabled.
    fn paint(&self, name: &str, text: &str) -> String {
        if self.options.no_color {
            text.to_string()
        } else {
            self.styler.apply(name, text)
        }
    }

    fn paint_multiline(&self, line: &str) -> String {
        match &self.options.multiline_string_color {
            Some(name) if !self.options.no_color => self.styler.apply(name, line),
            _ => line.to_string(),
        }
    }

    /// One-line textual form of a serializable value, styled per its type.
    fn style_scalar(&self, value: &Value) -> String {
        if self.options.no_color {
            return raw_text(value);
        }

        match value {
            Value::String(s) => match &self.options.string_color {
                Some(name) => self.styler.apply(name, s),
                None => s.clone(),
            },
            Value::Bool(true) => self.styler.apply("green", "true"),
            Value::Bool(false) => self.styler.apply("red", "false"),
            Value::Null => self.styler.apply("grey", "null"),
            Value::Undefined => self.styler.apply("grey", "undefined"),
            Value::Number(n) => {
                let name = if is_negative(n) {
                    self.options
                        .negative_number_color
                        .as_deref()
                        .unwrap_or(&self.options.number_color)
                } else {
                    self.options
                        .positive_number_color
                        .as_deref()
                        .unwrap_or(&self.options.number_color)
                };
                self.styler.apply(name, &n.to_string())
            }
            // Dates, functions and inline sequences keep their default form
            _ => raw_text(value),
        }
    }
}

/// Default textual form of a serializable value, without styling.
fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) | Value::MultilineString(s) => s.clone(),
        Value::Date(s) => s.clone(),
        Value::Function => "function() {}".to_string(),
        Value::Sequence(elements) => elements
            .iter()
            .map(raw_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Mapping(_) | Value::Error { .. } => String::new(),
    }
}

fn is_negative(n: &serde_json::Number) -> bool {
    n.as_f64().map_or(false, |f| f < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> RenderOptions {
        RenderOptions {
            no_color: true,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_simple_mapping() {
        let data = Value::from(json!({
            "name": "Alice",
            "age": 30
        }));
        let result = render(&data, &plain(), 0);
        assert_eq!(result, "name: Alice\nage:  30");
    }

    #[test]
    fn test_nested_mapping() {
        let data = Value::from(json!({
            "user": {
                "name": "Bob",
                "id": 123
            }
        }));
        let result = render(&data, &plain(), 0);
        assert_eq!(result, "user: \n  name: Bob\n  id:   123");
    }

    #[test]
    fn test_sequence_of_strings() {
        let data = Value::from(json!(["first", "second"]));
        let result = render(&data, &plain(), 0);
        assert_eq!(result, "- first\n- second");
    }

    #[test]
    fn test_nested_sequence() {
        let data = Value::from(json!(["first", ["nested 1", "nested 2"]]));
        let result = render(&data, &plain(), 0);
        assert_eq!(result, "- first\n- \n  - nested 1\n  - nested 2");
    }

    #[test]
    fn test_empty_sequence_message() {
        let data = Value::from(json!([]));
        let options = RenderOptions {
            empty_array_msg: "(none)".to_string(),
            ..plain()
        };
        assert_eq!(render(&data, &options, 0), "(none)");
    }

    #[test]
    fn test_base_indentation() {
        let data = Value::from(json!("a string"));
        assert_eq!(render(&data, &plain(), 4), "    a string");
    }

    #[test]
    fn test_multiline_string_block() {
        let data = Value::from(json!("multiple\nlines"));
        let result = render(&data, &plain(), 4);
        assert_eq!(result, "    \"\"\"\n      multiple\n      lines\n    \"\"\"");
    }

    #[test]
    fn test_escape_of_conflicting_string() {
        let options = RenderOptions {
            escape: true,
            ..plain()
        };
        let data = Value::from(json!("#irchannel"));
        assert_eq!(render(&data, &options, 4), "    \"#irchannel\"");
    }

    #[test]
    fn test_escape_collapses_multiline() {
        let options = RenderOptions {
            escape: true,
            ..plain()
        };
        let data = Value::from(json!("#one\n#two"));
        assert_eq!(render(&data, &options, 0), "\"#one\\n#two\"");
    }

    #[test]
    fn test_alignment_padding() {
        let data = Value::from(json!({"aaaa": "x", "b": "y"}));
        assert_eq!(render(&data, &plain(), 0), "aaaa: x\nb:    y");
    }

    #[test]
    fn test_no_align_disables_padding() {
        let data = Value::from(json!({"aaaa": "x", "b": "y"}));
        let options = RenderOptions {
            no_align: true,
            ..plain()
        };
        assert_eq!(render(&data, &options, 0), "aaaa: x\nb: y");
    }

    #[test]
    fn test_alignment_ignores_unprintable_keys() {
        let data = Value::Mapping(vec![
            ("longestkey".to_string(), Value::Undefined),
            ("b".to_string(), Value::from(1i64)),
        ]);
        assert_eq!(render(&data, &plain(), 0), "b: 1");
    }

    #[test]
    fn test_undefined_skipped_in_containers() {
        let data = Value::Mapping(vec![
            ("foo".to_string(), Value::Undefined),
            (
                "bar".to_string(),
                Value::Sequence(vec![
                    Value::from(1i64),
                    Value::Undefined,
                    Value::from(2i64),
                ]),
            ),
        ]);
        let result = render(&data, &plain(), 0);
        assert_eq!(result, "bar: \n  - 1\n  - 2");
    }

    #[test]
    fn test_render_undefined_option() {
        let data = Value::Mapping(vec![
            ("foo".to_string(), Value::Undefined),
            ("bar".to_string(), Value::from(1i64)),
        ]);
        let options = RenderOptions {
            render_undefined: true,
            ..plain()
        };
        let result = render(&data, &options, 0);
        assert_eq!(result, "foo: undefined\nbar: 1");
    }

    #[test]
    fn test_undefined_top_level_is_empty() {
        assert_eq!(render(&Value::Undefined, &plain(), 4), "");
    }

    #[test]
    fn test_undefined_top_level_with_option() {
        let options = RenderOptions {
            render_undefined: true,
            ..plain()
        };
        assert_eq!(render(&Value::Undefined, &options, 4), "    undefined");
    }

    #[test]
    fn test_function_placeholder() {
        let data = Value::Sequence(vec![Value::from("first"), Value::Function]);
        assert_eq!(render(&data, &plain(), 0), "- first\n- function() {}");
    }

    #[test]
    fn test_date_renders_verbatim() {
        let data = Value::date("Mon Apr 14 2025 12:00:00 GMT+0000");
        assert_eq!(
            render(&data, &RenderOptions::default(), 0),
            "Mon Apr 14 2025 12:00:00 GMT+0000"
        );
    }

    #[test]
    fn test_error_as_synthetic_mapping() {
        let data = Value::error(
            "boom",
            vec!["frame one".to_string(), "frame two".to_string()],
        );
        let result = render(&data, &plain(), 0);
        assert_eq!(
            result,
            "message: boom\nstack: \n  - frame one\n  - frame two"
        );
    }

    #[test]
    fn test_inline_arrays_join_elements() {
        let data = Value::from(json!({"installs": ["first", "second", false, 13]}));
        let options = RenderOptions {
            inline_arrays: true,
            ..plain()
        };
        assert_eq!(
            render(&data, &options, 0),
            "installs: first, second, false, 13"
        );
    }

    #[test]
    fn test_inline_array_probes_only_first_element() {
        let data = Value::from(json!({"k": [1, "x", []]}));
        let options = RenderOptions {
            inline_arrays: true,
            ..plain()
        };
        assert_eq!(render(&data, &options, 0), "k: 1, x, ");
    }

    #[test]
    fn test_inline_array_with_unserializable_head_expands() {
        let data = Value::from(json!({"k": [["a", "b"], "c"]}));
        let options = RenderOptions {
            inline_arrays: true,
            ..plain()
        };
        assert_eq!(render(&data, &options, 0), "k: \n  - a, b\n  - c");
    }

    #[test]
    fn test_split_fragment_prefers_earlier_bracket() {
        assert_eq!(
            split_fragment("noise {\"a\":1}"),
            (Some("noise "), "{\"a\":1}")
        );
        assert_eq!(split_fragment("noise [1]"), (Some("noise "), "[1]"));
        assert_eq!(
            split_fragment("x [1] {\"a\":1}"),
            (Some("x "), "[1] {\"a\":1}")
        );
        assert_eq!(split_fragment("{\"a\":1}"), (None, "{\"a\":1}"));
        assert_eq!(split_fragment("no brackets"), (None, "no brackets"));
    }

    #[test]
    fn test_render_text_empty_input() {
        assert_eq!(render_text("", &plain(), 0), "");
    }

    #[test]
    fn test_render_text_passthrough_prefix() {
        let result = render_text("noise {\"a\":1}", &plain(), 0);
        assert_eq!(result, "noise \na: 1");
    }

    #[test]
    fn test_render_text_invalid_json() {
        assert_eq!(
            render_text("{\"a\":}", &plain(), 0),
            "Error: Not valid JSON!"
        );
    }

    #[test]
    fn test_render_text_rejects_trailing_comma() {
        assert_eq!(
            render_text("{\"a\": [1, 2,]}", &plain(), 0),
            "Error: Not valid JSON!"
        );
    }

    #[test]
    fn test_try_render_text_reports_failure() {
        assert!(try_render_text("not json at all", &plain(), 0).is_err());
    }

    #[test]
    fn test_lines_have_no_embedded_newlines() {
        let data = Value::from(json!({
            "text": "a\nb",
            "items": [1, [2, 3]],
            "empty": []
        }));
        let rendered = render(&data, &plain(), 0);
        let relined = rendered.split('\n').collect::<Vec<_>>().join("\n");
        assert_eq!(rendered, relined);
        assert_eq!(rendered.split('\n').count(), 12);
    }
}
