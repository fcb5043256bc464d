//! Decoding a message that uses non-default delimiters.
//!
//! Run with: cargo run --example custom_separators

use hl7v2_codec::{catalog, decode_segment_with_separators, Separators};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The header advertises its own delimiter set; sniff it instead of
    // assuming the conventional characters.
    let header = "MSH#*!%$#SENDING_APP#SENDING_FAC###20240607120000";
    let seps = Separators::from_header(header)?;
    println!("field separator in effect: {:?}", seps.field);
    println!("encoding characters:       {}", seps.encoding_characters());

    let msh = decode_segment_with_separators(header, catalog::MSH, &seps)?;
    println!(
        "sending application: {:?}",
        msh.field(3).as_components().unwrap()[0].as_str()
    );

    // The same separators then apply to every other line of the message
    let nte =
        decode_segment_with_separators("NTE#1##admitted from ER!kept overnight", catalog::NTE, &seps)?;
    println!(
        "comments: {:?}",
        nte.field(3)
            .as_repeats()
            .unwrap()
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
    );

    Ok(())
}
