use json2pretty_rs::{render, RenderOptions, Value};
use serde_json::json;

fn main() {
    println!("=== JSON rendering examples ===\n");

    // Example 1: Simple object
    println!("1. Simple object:");
    let data = Value::from(json!({
        "name": "Alice",
        "age": 30,
        "active": true
    }));
    println!("{}\n", render(&data, &RenderOptions::default(), 0));

    // Example 2: Nested object with aligned values
    println!("2. Nested object:");
    let data = Value::from(json!({
        "user": {
            "id": 123,
            "name": "Bob",
            "email": "bob@example.com"
        },
        "status": "active"
    }));
    println!("{}\n", render(&data, &RenderOptions::default(), 0));

    // Example 3: Arrays, empty and not
    println!("3. Arrays:");
    let data = Value::from(json!({
        "tags": ["admin", "user", "developer"],
        "drafts": []
    }));
    println!("{}\n", render(&data, &RenderOptions::default(), 0));

    // Example 4: Inline arrays
    println!("4. Inline arrays:");
    let options = RenderOptions {
        inline_arrays: true,
        ..RenderOptions::default()
    };
    println!("{}\n", render(&data, &options, 0));

    // Example 5: Multiline strings
    println!("5. Multiline string:");
    let data = Value::from(json!({
        "motd": "Welcome!\nThe build is green.\nShip it."
    }));
    let options = RenderOptions {
        multiline_string_color: Some("cyan".to_string()),
        ..RenderOptions::default()
    };
    println!("{}\n", render(&data, &options, 0));

    // Example 6: Custom colors and indentation
    println!("6. Custom colors and indentation:");
    let data = Value::from(json!({
        "balance": 42.5,
        "debt": -3.75,
        "nested": {"deep": {"deeper": "value"}}
    }));
    let options = RenderOptions {
        keys_color: "rainbow".to_string(),
        positive_number_color: Some("green".to_string()),
        negative_number_color: Some("red".to_string()),
        default_indentation: 4,
        ..RenderOptions::default()
    };
    println!("{}\n", render(&data, &options, 0));

    // Example 7: Runtime values without a JSON form
    println!("7. Runtime values:");
    let data = Value::Mapping(vec![
        ("when".to_string(), Value::date("Mon Apr 14 2025 12:00:00 GMT+0000")),
        ("callback".to_string(), Value::Function),
        (
            "failure".to_string(),
            Value::error(
                "connection refused",
                vec!["at connect".to_string(), "at main".to_string()],
            ),
        ),
    ]);
    println!("{}", render(&data, &RenderOptions::default(), 0));
}
