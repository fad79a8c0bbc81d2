use json2pretty_rs::{render_text, RenderOptions};

fn main() {
    println!("=== Rendering JSON embedded in text ===\n");

    // A JSON fragment preceded by log noise: the noise passes through
    // untouched and the fragment is rendered below it.
    println!("1. Leading noise:");
    let raw = r#"2025-04-14T12:00:00Z worker[42]: emitted {"event": "build", "ok": true, "steps": ["fetch", "compile", "link"]}"#;
    println!("{}\n", render_text(raw, &RenderOptions::default(), 0));

    // Invalid input never panics or errors, it renders an error line.
    println!("2. Invalid JSON:");
    let raw = r#"{"event": "build", "ok": }"#;
    println!("{}\n", render_text(raw, &RenderOptions::default(), 0));

    // Plain-text styling for environments without a terminal.
    println!("3. Without colors:");
    let options = RenderOptions {
        no_color: true,
        ..RenderOptions::default()
    };
    let raw = r#"{"event": "build", "ok": true}"#;
    println!("{}", render_text(raw, &options, 0));
}
