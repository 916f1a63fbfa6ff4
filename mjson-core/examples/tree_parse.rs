//! Example: Parse a document and walk the tree.
//!
//! Run with: cargo run --example tree_parse

use mjson_core::{Document, JsonObject, Value};

fn main() {
    let input = r#"{
  "name": { "first": "sam", "last": "doe" },
  "title": "engineer",
  "address": {
    "street": "1 Main St",
    "geo": { "lat": "40.7", "lng": "-74.0" }
  },
  "note": "says \"hi\"\n\tthen leaves"
}"#;

    let doc = Document::parse(input).expect("parse failed");

    println!("=== Document Tree ===\n");
    print_document(&doc, 0);

    println!("\n=== Lookups ===\n");
    if let Some(name) = doc.get_object("name") {
        println!("first: {:?}", name.get_string("first"));
        println!("last:  {:?}", name.get_string("last"));
    }
    println!("title: {:?}", doc.get_string("title"));
    println!("missing: {:?}", doc.get_string("missing"));
}

fn print_document(doc: &Document, depth: usize) {
    let indent = "  ".repeat(depth);

    // Map iteration order is unspecified; sort for stable output.
    let mut entries: Vec<_> = doc.entries().collect();
    entries.sort_by_key(|(key, _)| *key);

    for (key, value) in entries {
        match value {
            Value::String(s) => println!("{}{:?}: {:?}", indent, key, s),
            Value::Object(child) => {
                println!("{}{:?}:", indent, key);
                print_document(child, depth + 1);
            }
        }
    }
}
