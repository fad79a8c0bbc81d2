//! # json2pretty_rs
//!
//! A fast JSON pretty printer: renders a decoded JSON document (or any
//! directly constructed [`Value`] tree) as indented, optionally colorized,
//! human-readable text.
//!
//! Scalars and single-line strings render inline next to their key or dash
//! prefix, nested structures expand into indented blocks, and mapping values
//! are column-aligned to the longest key. Free-form text containing an
//! embedded JSON fragment can be rendered with [`render_text`], which passes
//! any leading noise through untouched.
//!
//! ## Example
//!
//! ```rust
//! use json2pretty_rs::{render, RenderOptions, Value};
//! use serde_json::json;
//!
//! let data = Value::from(json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["admin", "user"]
//! }));
//!
//! let options = RenderOptions {
//!     no_color: true,
//!     ..RenderOptions::default()
//! };
//!
//! let text = render(&data, &options, 0);
//! assert_eq!(text, "name: Alice\nage:  30\ntags: \n  - admin\n  - user");
//! ```

mod common;
mod error;
mod renderer;
mod style;
mod value;

// Re-export public API
pub use common::format_error;
pub use error::ParseError;
pub use renderer::{render, render_text, render_with_styler, try_render_text, RenderOptions};
pub use style::{AnsiStyler, PlainStyler, Styler};
pub use value::Value;
