//! Property-based tests - pragmatic approach testing core roundtrip guarantees
//!
//! These complement the example-driven integration tests by verifying the
//! escape codec and the segment codec across a wide range of generated
//! inputs.

use proptest::prelude::*;
use hl7v2_codec::{
    decode_segment, encode_segment, escape, SegmentSchema, Separators, Slot, SlotKind, Value,
};

static GRID_FIELDS: &[Slot] = &[
    Slot::single("n", SlotKind::UInt),
    Slot::single("t", SlotKind::Text),
    Slot::repeated("r", SlotKind::Text),
];
static GRID: SegmentSchema = SegmentSchema::new("ZPP", GRID_FIELDS);

fn text_value() -> impl Strategy<Value = Value> {
    // Includes separator and escape characters so escaping gets exercised.
    "[ -~]{0,24}".prop_map(|s| {
        if s.is_empty() {
            Value::Absent
        } else {
            Value::Text(s)
        }
    })
}

fn field_values() -> impl Strategy<Value = Vec<Value>> {
    (
        proptest::option::of(any::<u32>()),
        text_value(),
        prop::collection::vec("[ -~]{1,12}".prop_map(Value::from), 0..4),
    )
        .prop_map(|(n, t, reps)| {
            let r = if reps.is_empty() {
                Value::Absent
            } else {
                Value::Repeat(reps)
            };
            vec![Value::from(n), t, r]
        })
}

proptest! {
    #[test]
    fn prop_escape_roundtrip(s in "[ -~]{0,64}") {
        let seps = Separators::default();
        let escaped = escape::escape(&s, &seps);
        prop_assert!(!escaped.contains(seps.field));
        prop_assert!(!escaped.contains(seps.component));
        prop_assert!(!escaped.contains(seps.repetition));
        prop_assert!(!escaped.contains(seps.subcomponent));
        prop_assert_eq!(escape::unescape(&escaped, &seps).into_owned(), s);
    }

    #[test]
    fn prop_segment_roundtrip(values in field_values()) {
        let line = encode_segment(&values, &GRID).unwrap();
        let segment = decode_segment(&line, &GRID).unwrap();
        prop_assert_eq!(segment.fields, values);
    }

    #[test]
    fn prop_encode_is_stable(values in field_values()) {
        // Encoding a decode of an encode reproduces the first encoding.
        let first = encode_segment(&values, &GRID).unwrap();
        let again = encode_segment(&decode_segment(&first, &GRID).unwrap().fields, &GRID).unwrap();
        prop_assert_eq!(first, again);
    }

    #[test]
    fn prop_uint_decode_never_defaults(n in any::<u32>()) {
        // A present integer decodes to exactly itself, an absent one to Absent.
        let line = format!("ZPP|{n}");
        let segment = decode_segment(&line, &GRID).unwrap();
        prop_assert_eq!(segment.field(1).as_uint(), Some(n));
        prop_assert!(segment.field(2).is_absent());
    }
}
