//! Name-keyed text styling.
//!
//! The renderer never touches the terminal directly; it asks a [`Styler`]
//! to apply a named style to a piece of text. The default implementation
//! maps style names onto ANSI colors via the `colored` crate.

use colored::{Color, Colorize};

/// Capability for applying a named style to a piece of text.
pub trait Styler {
    /// Applies the style `name` to `text` and returns the styled form.
    /// Unknown names return the text unchanged.
    fn apply(&self, name: &str, text: &str) -> String;
}

/// ANSI styler backed by the `colored` crate.
///
/// Recognizes the eight standard colors, their `bright` variants,
/// `grey`/`gray`, and the special `rainbow` style which cycles a fixed
/// palette per character.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

const RAINBOW: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
];

impl Styler for AnsiStyler {
    fn apply(&self, name: &str, text: &str) -> String {
        if name == "rainbow" {
            return rainbow(text);
        }
        match parse_color(name) {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}

fn parse_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::BrightBlack,
        "bright black" => Color::BrightBlack,
        "bright red" => Color::BrightRed,
        "bright green" => Color::BrightGreen,
        "bright yellow" => Color::BrightYellow,
        "bright blue" => Color::BrightBlue,
        "bright magenta" => Color::BrightMagenta,
        "bright cyan" => Color::BrightCyan,
        "bright white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Colors each character with the next entry of the rainbow palette.
/// Spaces stay unstyled but still advance the cycle.
fn rainbow(text: &str) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        if c == ' ' {
            out.push(c);
        } else {
            let glyph = c.to_string();
            out.push_str(&glyph.as_str().color(RAINBOW[i % RAINBOW.len()]).to_string());
        }
    }
    out
}

/// Identity styler: returns every input unchanged. Useful in tests and when
/// embedding the renderer where ANSI sequences are unwanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn apply(&self, _name: &str, text: &str) -> String {
        text.to_string()
    }
}
