//! Example declaration generation from a JSON descriptor document.
//!
//! Run with: `cargo run --example generate [path/to/types.json]`
//!
//! Without an argument, a small built-in document is used.

use tsdecl::prelude::*;

const DEMO_DOCUMENT: &str = r#"{
    "types": [
        { "key": "string", "name": "string", "kind": "primitive", "primitive": "string" },
        { "key": "i32", "name": "i32", "kind": "primitive", "primitive": "i32" },
        { "key": "Shop.Status", "name": "Status", "namespace": "Shop", "kind": "enum",
          "values": [
              { "name": "Open", "value": 1 },
              { "name": "Shipped", "value": 2 },
              { "name": "Cancelled", "value": 8 }
          ] },
        { "key": "Shop.Product", "name": "Product", "namespace": "Shop", "kind": "class",
          "properties": [
              { "name": "Name", "type": "string" },
              { "name": "Price", "type": "i32" }
          ] },
        { "key": "Shop.Product[]", "name": "Product[]", "kind": "collection", "element": "Shop.Product" },
        { "key": "Shop.Order", "name": "Order", "namespace": "Shop", "kind": "class",
          "properties": [
              { "name": "Products", "type": "Shop.Product[]" },
              { "name": "State", "type": "Shop.Status" },
              { "name": "Note", "type": "string", "optional": true }
          ] }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let descriptors = match std::env::args().nth(1) {
        Some(path) => read_descriptors(&path)?,
        None => parse_descriptors(DEMO_DOCUMENT)?,
    };

    let script = definitions(&descriptors)
        .for_type("Shop.Order")
        .generate()?;

    println!("{script}");
    Ok(())
}
