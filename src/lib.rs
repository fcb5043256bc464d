//! # hl7v2_codec
//!
//! A schema-driven codec for the HL7 v2.x pipe-delimited wire format.
//!
//! ## What this crate is
//!
//! HL7 v2.x messages are lines of delimiter-separated fields using a strict
//! hierarchy of four separator characters plus an escape character. This
//! crate implements the generic engine under that format — the part every
//! segment and composite type shares:
//!
//! - **Separator configuration**: the five characters, with a process-wide
//!   default and per-call override
//! - **Escaping**: literal delimiters in leaf values to/from `\F\`-style
//!   sequences
//! - **Primitive conversions**: optional unsigned integers, digit-exact
//!   decimals, and fixed-width date/times, all culture-invariant
//! - **Recursive composite codec**: slot-table-driven splitting/joining with
//!   trailing-empty trimming
//! - **Segment codec**: leading-id validation and the message-header special
//!   case
//!
//! Segments and composite types themselves are *data*: declarative
//! [`Slot`]/[`SegmentSchema`] tables the codec interprets (a starter set
//! ships in [`catalog`]). There is no per-segment code anywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use hl7v2_codec::{decode_segment, encode_segment, catalog, Value};
//!
//! let segment = decode_segment("NTE|1|L|Free text~more text|RE", catalog::NTE).unwrap();
//!
//! assert_eq!(segment.field(1).as_uint(), Some(1));
//! assert_eq!(segment.field(2).as_str(), Some("L"));
//! assert_eq!(
//!     segment.field(3).as_repeats().unwrap()[1].as_str(),
//!     Some("more text")
//! );
//!
//! // Round-trips exactly
//! let line = encode_segment(&segment.fields, catalog::NTE).unwrap();
//! assert_eq!(line, "NTE|1|L|Free text~more text|RE");
//! ```
//!
//! ### Declaring your own segment
//!
//! ```rust
//! use hl7v2_codec::{decode_segment, SegmentSchema, Slot, SlotKind};
//!
//! static ZBT_FIELDS: &[Slot] = &[
//!     Slot::single("batchId", SlotKind::UInt),
//!     Slot::repeated("tag", SlotKind::Text),
//! ];
//! static ZBT: SegmentSchema = SegmentSchema::new("ZBT", ZBT_FIELDS);
//!
//! let segment = decode_segment("ZBT|7|a~b~c", &ZBT).unwrap();
//! assert_eq!(segment.field(2).as_repeats().map(<[_]>::len), Some(3));
//! ```
//!
//! ### Non-default separators
//!
//! ```rust
//! use hl7v2_codec::{decode_segment_with_separators, catalog, Separators};
//!
//! // Sniff the delimiters the sender actually used
//! let raw = "MSH#*!%$#LAB#FAC";
//! let seps = Separators::from_header(raw).unwrap();
//! let header = decode_segment_with_separators(raw, catalog::MSH, &seps).unwrap();
//! assert_eq!(header.field(3).as_components().unwrap()[0].as_str(), Some("LAB"));
//! ```
//!
//! ## Guarantees
//!
//! - **Round-trip**: decoding an encoded segment reproduces the original
//!   values, including absent fields, repetitions, nesting, and escaped
//!   characters.
//! - **Culture invariance**: numeric and date/time output never depends on a
//!   process locale; decimals always use `.`.
//! - **Positional honesty**: interior empty fields stay as placeholders;
//!   only trailing empties are trimmed; malformed leaf tokens are reported
//!   with their 1-based field position, never coerced to defaults.
//! - **No panics, no unsafe**: all public APIs return [`Result`]; parsing is
//!   bounds-checked throughout.
//!
//! ## Format documentation
//!
//! See the [`spec`] module for the wire-format rules this crate implements.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod escape;
pub mod primitive;
pub mod schema;
pub mod separators;
pub mod spec;
pub mod value;

pub use codec::{Level, Segment};
pub use error::{Error, Result};
pub use primitive::{TimePrecision, Timestamp};
pub use schema::{Cardinality, SegmentSchema, Slot, SlotKind};
pub use separators::Separators;
pub use value::Value;

/// Decodes one raw segment line against a schema using the process-wide
/// default separators.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{decode_segment, catalog};
///
/// let segment = decode_segment("EVN|A01|20240607131500", catalog::EVN).unwrap();
/// assert_eq!(segment.field(1).as_str(), Some("A01"));
/// ```
///
/// # Errors
///
/// Returns [`Error::WrongSegmentId`] if the line's leading token does not
/// match the schema, or [`Error::MalformedScalar`] for an unparseable leaf
/// token.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_segment(raw: &str, schema: &SegmentSchema) -> Result<Segment> {
    let seps = Separators::resolve(None);
    codec::decode_segment_with_separators(raw, schema, &seps)
}

/// Decodes one raw segment line with an explicit separator set.
///
/// With an explicit set the call is a pure function of its inputs: no global
/// state is read.
///
/// # Errors
///
/// Same as [`decode_segment`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_segment_with_separators(
    raw: &str,
    schema: &SegmentSchema,
    seps: &Separators,
) -> Result<Segment> {
    codec::decode_segment_with_separators(raw, schema, seps)
}

/// Encodes field values into one raw segment line using the process-wide
/// default separators.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{encode_segment, catalog, Value};
///
/// let values = vec![Value::UInt(1), Value::from("L")];
/// assert_eq!(encode_segment(&values, catalog::NTE).unwrap(), "NTE|1|L");
/// ```
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when a value does not fit its slot's
/// declared kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_segment(values: &[Value], schema: &SegmentSchema) -> Result<String> {
    let seps = Separators::resolve(None);
    codec::encode_segment_with_separators(values, schema, &seps)
}

/// Encodes field values into one raw segment line with an explicit separator
/// set.
///
/// # Errors
///
/// Same as [`encode_segment`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_segment_with_separators(
    values: &[Value],
    schema: &SegmentSchema,
    seps: &Separators,
) -> Result<String> {
    codec::encode_segment_with_separators(values, schema, seps)
}

/// Decodes a raw line by looking its leading id up in the built-in
/// [`catalog::registry`].
///
/// For a header line the separators are sniffed from the line itself; for
/// everything else the process-wide default applies.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::decode_any;
///
/// let segment = decode_any("NTE|1|L|note").unwrap();
/// assert_eq!(segment.id, "NTE");
///
/// assert!(decode_any("QQQ|1").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownSegment`] when no schema is registered for the
/// line's id, plus everything [`decode_segment`] can report.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_any(raw: &str) -> Result<Segment> {
    let id: String = raw
        .chars()
        .take(3)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    let schema = catalog::registry()
        .get(id.as_str())
        .copied()
        .ok_or(Error::UnknownSegment(id))?;
    let seps = if schema.header {
        Separators::from_header(raw)?
    } else {
        Separators::resolve(None)
    };
    codec::decode_segment_with_separators(raw, schema, &seps)
}
