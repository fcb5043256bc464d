//! Basic segment decoding and encoding.
//!
//! Run with: cargo run --example simple

use hl7v2_codec::{catalog, decode_segment, encode_segment};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let raw = "NTE|1|L|Free text~more text|RE";

    // Decode against the built-in NTE schema
    let segment = decode_segment(raw, catalog::NTE)?;
    println!("segment id: {}", segment.id);
    println!("setId:      {:?}", segment.field(1).as_uint());
    println!("source:     {:?}", segment.field(2).as_str());
    for (i, comment) in segment.field(3).as_repeats().unwrap_or(&[]).iter().enumerate() {
        println!("comment[{}]: {:?}", i, comment.as_str());
    }

    // Encode back to the wire form
    let line = encode_segment(&segment.fields, catalog::NTE)?;
    assert_eq!(line, raw);
    println!("✓ Round-trip successful");

    Ok(())
}
