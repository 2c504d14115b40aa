//! Using the aton! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_aton::{aton, encode, encode_value, AtonOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = AtonOptions::default();

    let nil_val = aton!(nil);
    let bool_val = aton!(true);
    let number = aton!(42);
    let text = aton!("Hello, ATON!");

    println!("Scalars:");
    println!("  nil:    {}", encode_value(&nil_val, &options)?);
    println!("  bool:   {}", encode_value(&bool_val, &options)?);
    println!("  number: {}", encode_value(&number, &options)?);
    println!("  text:   {}\n", encode_value(&text, &options)?);

    let numbers = aton!([1, 2, 3, 4, 5]);
    let mixed = aton!([1, "two", true, nil]);

    println!("Lists (single line):");
    println!("  Numbers: {}", numbers);
    println!("  Mixed:   {}\n", mixed);

    let user = aton!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    });

    println!("Dicts:");
    println!("{}", encode(&user)?);

    let config = aton!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "name": "mydb"
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}", encode(&config)?);

    let items = vec![
        aton!({"id": 1, "status": "active"}),
        aton!({"id": 2, "status": "pending"}),
        aton!({"id": 3, "status": "completed"}),
    ];

    let summary = aton!({
        "total": 3,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}", encode(&summary)?);

    println!("Accessing values:");
    if let Some(name) = config.get("app").and_then(|app| app.get("name")).and_then(Value::as_str) {
        println!("  App name: {}", name);
    }
    if let Some(features) = config.get("features").and_then(Value::as_list) {
        println!("  Features: {}", features.len());
    }

    Ok(())
}
