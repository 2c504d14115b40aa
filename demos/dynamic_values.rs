//! Decoding and inspecting ATON documents without a schema.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_aton::{decode, encode, from_value, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

const DOCUMENT: &str = "
@host localhost
@port <8080>
@ratio <0.75>
@features ( auth logging metrics )
@owner { @id <7> @name [Dana Scully] @roles ( admin ) }
@[display name] [My Service]
@debug <true>
@fallback <nil>
";

fn describe(value: &Value) -> String {
    match value {
        Value::Dict(dict) => format!("dict with {} entries", dict.len()),
        Value::List(list) => format!("list of {}", list.len()),
        other => format!("{} {}", other.type_name(), other),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = decode(DOCUMENT)?;

    println!("Decoded entries:");
    if let Some(dict) = config.as_dict() {
        for (key, value) in dict {
            println!("  {:<14} {}", key, describe(value));
        }
    }

    // Typed access
    let port = config.get("port").and_then(Value::as_i64).unwrap_or(80);
    let ratio = config.get("ratio").and_then(Value::as_f64).unwrap_or(1.0);
    println!("\nport = {}, ratio = {}", port, ratio);

    // Pull a sub-tree into a struct
    if let Some(owner) = config.get("owner").cloned() {
        let user: User = from_value(owner)?;
        println!("owner = {:?}", user);
    }

    // Mutate and re-encode
    if let Some(dict) = config.as_dict_mut() {
        dict.insert("port".to_string(), Value::from(9090));
        dict.remove("fallback");
        let extra = to_value(&User {
            id: 8,
            name: "Fox Mulder".to_string(),
            roles: vec!["viewer".to_string()],
        })?;
        dict.insert("guest".to_string(), extra);
    }

    println!("\nRe-encoded:\n{}", encode(&config)?);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_dict: {}", config.is_dict());
    println!("  is_list: {}", config.is_list());
    println!("  is_str:  {}", config.is_str());

    Ok(())
}
