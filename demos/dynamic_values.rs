//! Building segment values programmatically and inspecting decoded ones.
//!
//! Run with: cargo run --example dynamic_values

use hl7v2_codec::{catalog, decode_segment, encode_segment, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Values are built positionally; absent slots are explicit.
    let values = vec![
        Value::UInt(1),
        Value::from("L"),
        Value::Repeat(vec![
            Value::from("first line"),
            Value::from("uses | and ^ freely"),
        ]),
        Value::Absent,
    ];

    let line = encode_segment(&values, catalog::NTE)?;
    println!("wire form: {line}");

    // Decoded values can be walked generically
    let segment = decode_segment(&line, catalog::NTE)?;
    for (slot, value) in catalog::NTE.fields.iter().zip(&segment.fields) {
        println!("{:>16}: {} = {:?}", slot.name, value.kind_name(), value);
    }

    assert_eq!(segment.fields, values);
    println!("✓ Round-trip successful");

    Ok(())
}
