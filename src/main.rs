//! Command-line front end: reads JSON from a file or standard input and
//! prints the rendered result.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use json2pretty_rs::{format_error, try_render_text, RenderOptions};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Render JSON as colorized, indented, human-readable text.
#[derive(Debug, Parser)]
#[command(name = "json2pretty", version, about)]
struct Cli {
    /// JSON file to render; reads standard input when omitted
    file: Option<PathBuf>,

    /// Style name for mapping keys
    #[arg(long = "keys", value_name = "COLOR", env = "JSON2PRETTY_KEYS")]
    keys_color: Option<String>,

    /// Style name for the dash prefixing array elements
    #[arg(long = "dash", value_name = "COLOR", env = "JSON2PRETTY_DASH")]
    dash_color: Option<String>,

    /// Spaces per nesting level
    #[arg(long, value_name = "N", env = "JSON2PRETTY_INDENT")]
    indent: Option<usize>,

    /// Style name for strings (unstyled when omitted)
    #[arg(long = "string", value_name = "COLOR", env = "JSON2PRETTY_STRING")]
    string_color: Option<String>,

    /// Style name for multiline string blocks (unstyled when omitted)
    #[arg(
        long = "multiline-string",
        value_name = "COLOR",
        env = "JSON2PRETTY_MULTILINE_STRING"
    )]
    multiline_string_color: Option<String>,

    /// Style name for numbers
    #[arg(long = "number", value_name = "COLOR", env = "JSON2PRETTY_NUMBER")]
    number_color: Option<String>,

    /// Style name for numbers >= 0, overriding --number
    #[arg(
        long = "positive-number",
        value_name = "COLOR",
        env = "JSON2PRETTY_NUMBER_POSITIVE"
    )]
    positive_number_color: Option<String>,

    /// Style name for numbers < 0, overriding --number
    #[arg(
        long = "negative-number",
        value_name = "COLOR",
        env = "JSON2PRETTY_NUMBER_NEGATIVE"
    )]
    negative_number_color: Option<String>,

    /// Disable all styling
    #[arg(long = "nocolor", env = "JSON2PRETTY_NOCOLOR")]
    no_color: bool,

    /// Disable column alignment of values
    #[arg(long = "noalign", env = "JSON2PRETTY_NOALIGN")]
    no_align: bool,

    /// JSON-quote strings containing characters that clash with the layout
    #[arg(long, env = "JSON2PRETTY_ESCAPE")]
    escape: bool,

    /// Render arrays of primitives on a single line
    #[arg(long = "inline-arrays", env = "JSON2PRETTY_INLINE_ARRAYS")]
    inline_arrays: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(color) = &self.keys_color {
            options.keys_color = color.clone();
        }
        if let Some(color) = &self.dash_color {
            options.dash_color = color.clone();
        }
        if let Some(color) = &self.number_color {
            options.number_color = color.clone();
        }
        options.positive_number_color = self.positive_number_color.clone();
        options.negative_number_color = self.negative_number_color.clone();
        options.string_color = self.string_color.clone();
        options.multiline_string_color = self.multiline_string_color.clone();
        if let Some(indent) = self.indent {
            options.default_indentation = indent;
        }
        options.no_color = self.no_color;
        options.no_align = self.no_align;
        options.escape = self.escape;
        options.inline_arrays = self.inline_arrays;
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let options = cli.render_options();

    let raw = match &cli.file {
        Some(path) => {
            debug!("rendering file {}", path.display());
            match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    eprintln!(
                        "{}",
                        format_error(
                            &format!("File '{}' does not exist", path.display()),
                            options.no_color,
                        )
                    );
                    process::exit(1);
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("failed to read '{}'", path.display()));
                }
            }
        }
        None => {
            debug!("reading standard input until end of stream");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };

    match try_render_text(&raw, &options, 0) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            debug!("parse failed: {}", err);
            eprintln!("{}", format_error("Not valid JSON!", options.no_color));
            process::exit(1);
        }
    }

    Ok(())
}
