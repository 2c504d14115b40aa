//! Customizing ATON output and parsing with AtonOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_aton::{
    decode_with_options, from_str, to_string, to_string_with_options, AtonOptions, Indent,
    LineEnding,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    servers: Vec<Server>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        servers: vec![
            Server {
                host: "alpha".to_string(),
                port: 8080,
            },
            Server {
                host: "beta".to_string(),
                port: 8081,
            },
        ],
    };

    // Default format: tab indent, implicit root
    println!("Default:");
    println!("{}", to_string(&config)?);

    // Two-space indent with the root wrapped in braces
    println!("Spaces and root braces:");
    let braced = AtonOptions::new()
        .with_indent(Indent::Spaces(2))
        .with_root_braces(true);
    let text = to_string_with_options(&config, &braced)?;
    println!("{}", text);
    let back: Config = from_str(&text)?;
    assert_eq!(config, back);

    // Windows line endings
    let crlf = AtonOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&config, &crlf)?;
    println!("CRLF output is {} bytes", text.len());

    // Lenient vs strict parsing of truncated input
    let truncated = "@name MyApp @servers ( { @host alpha";
    let lenient = decode_with_options(truncated, &AtonOptions::default())?;
    println!("\nLenient parse of truncated input: {}", lenient);
    match decode_with_options(truncated, &AtonOptions::strict()) {
        Ok(_) => println!("Strict parse unexpectedly succeeded"),
        Err(e) => println!("Strict parse: {}", e),
    }

    // Tight nesting limit
    let shallow = AtonOptions::new().with_max_depth(2);
    match to_string_with_options(&config, &shallow) {
        Ok(_) => println!("Depth 2 was enough"),
        Err(e) => println!("Depth 2: {}", e),
    }

    Ok(())
}
