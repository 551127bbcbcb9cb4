//! Generate JSON Schema for the termfolio configuration
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema > config-schema.json

use schemars::schema_for;
use termfolio::config::Config;

fn main() {
    let schema = schema_for!(Config);
    let output = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema");
    println!("{}", output);
}
