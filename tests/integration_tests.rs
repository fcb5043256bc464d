//! Integration tests for the segment codec's observable contract: exact
//! round-trips, trailing-empty trimming with interior preservation, fail-fast
//! id validation, escaping, and the message-header special case.

use hl7v2_codec::{
    catalog, decode_segment, decode_segment_with_separators, encode_segment,
    encode_segment_with_separators, Error, SegmentSchema, Separators, Slot, SlotKind,
    TimePrecision, Value,
};
use rust_decimal::Decimal;

static TRIO_FIELDS: &[Slot] = &[
    Slot::single("a", SlotKind::Text),
    Slot::single("b", SlotKind::Text),
    Slot::single("c", SlotKind::Text),
];
static TRIO: SegmentSchema = SegmentSchema::new("ZTR", TRIO_FIELDS);

#[test]
fn roundtrip_every_slot_shape() {
    // One repeated slot, one nested composite, one absent, one escaped leaf.
    static INNER: &[Slot] = &[
        Slot::single("code", SlotKind::Text),
        Slot::single("label", SlotKind::Text),
    ];
    static FIELDS: &[Slot] = &[
        Slot::single("count", SlotKind::UInt),
        Slot::repeated("pair", SlotKind::Composite(INNER)),
        Slot::single("gap", SlotKind::Text),
        Slot::single("note", SlotKind::Text),
    ];
    static SEG: SegmentSchema = SegmentSchema::new("ZRT", FIELDS);

    let values = vec![
        Value::UInt(9),
        Value::Repeat(vec![
            Value::Composite(vec![Value::from("1"), Value::from("one")]),
            Value::Composite(vec![Value::from("2"), Value::from("two")]),
        ]),
        Value::Absent,
        Value::from("pipe | inside"),
    ];

    let line = encode_segment(&values, &SEG).unwrap();
    assert_eq!(line, "ZRT|9|1^one~2^two||pipe \\F\\ inside");

    let segment = decode_segment(&line, &SEG).unwrap();
    assert_eq!(segment.fields, values);
}

#[test]
fn trailing_trimmed_interior_preserved() {
    // Interior empty retained
    let values = vec![Value::from("A"), Value::Absent, Value::from("C")];
    assert_eq!(encode_segment(&values, &TRIO).unwrap(), "ZTR|A||C");

    // Trailing absent trimmed
    let values = vec![Value::from("A"), Value::from("B"), Value::Absent];
    assert_eq!(encode_segment(&values, &TRIO).unwrap(), "ZTR|A|B");

    // Decoding the trimmed form restores the absent slot
    let segment = decode_segment("ZTR|A|B", &TRIO).unwrap();
    assert_eq!(
        segment.fields,
        vec![Value::from("A"), Value::from("B"), Value::Absent]
    );
}

#[test]
fn wrong_id_is_detected() {
    let err = decode_segment("XYZ|1|2", &TRIO).unwrap_err();
    assert_eq!(err, Error::wrong_segment_id("ZTR", "XYZ"));
}

#[test]
fn id_comparison_is_case_insensitive() {
    let segment = decode_segment("ztr|x", &TRIO).unwrap();
    assert_eq!(segment.id, "ZTR");
    assert_eq!(segment.field(1).as_str(), Some("x"));
}

#[test]
fn escaped_leaf_roundtrips_without_raw_separators() {
    let values = vec![Value::from("a|b"), Value::Absent, Value::Absent];
    let line = encode_segment(&values, &TRIO).unwrap();

    // No raw field separator beyond the structural one after the id
    assert_eq!(line, "ZTR|a\\F\\b");
    assert_eq!(line.matches('|').count(), 1);

    let segment = decode_segment(&line, &TRIO).unwrap();
    assert_eq!(segment.field(1).as_str(), Some("a|b"));
}

#[test]
fn numeric_rendering_is_invariant() {
    static FIELDS: &[Slot] = &[Slot::single("q", SlotKind::Decimal)];
    static SEG: SegmentSchema = SegmentSchema::new("ZNM", FIELDS);

    let value: Decimal = "1234.5".parse().unwrap();
    let line = encode_segment(&[Value::Decimal(value)], &SEG).unwrap();
    assert_eq!(line, "ZNM|1234.5");
}

#[test]
fn repetition_over_composites_nests_correctly() {
    static PAIR: &[Slot] = &[
        Slot::single("x", SlotKind::UInt),
        Slot::single("y", SlotKind::UInt),
    ];
    static FIELDS: &[Slot] = &[Slot::repeated("points", SlotKind::Composite(PAIR))];
    static SEG: SegmentSchema = SegmentSchema::new("ZPT", FIELDS);

    let segment = decode_segment("ZPT|1^2~3^4", &SEG).unwrap();
    assert_eq!(
        segment.field(1),
        &Value::Repeat(vec![
            Value::Composite(vec![Value::UInt(1), Value::UInt(2)]),
            Value::Composite(vec![Value::UInt(3), Value::UInt(4)]),
        ])
    );

    let line = encode_segment(&segment.fields, &SEG).unwrap();
    assert_eq!(line, "ZPT|1^2~3^4");
}

#[test]
fn nte_end_to_end() {
    let raw = "NTE|1|L|Free text~more text|RE";
    let segment = decode_segment(raw, catalog::NTE).unwrap();

    assert_eq!(segment.field(1), &Value::UInt(1));
    assert_eq!(segment.field(2).as_str(), Some("L"));
    assert_eq!(
        segment.field(3),
        &Value::Repeat(vec![Value::from("Free text"), Value::from("more text")])
    );
    assert_eq!(segment.field(4).as_str(), Some("RE"));

    assert_eq!(encode_segment(&segment.fields, catalog::NTE).unwrap(), raw);
}

#[test]
fn msh_prelude_is_derived_not_decoded() {
    let raw = "MSH|^~\\&|SEND^APP|FAC|||20240607120000||ADT^A01|MSG001|P|2.3";
    let segment = decode_segment(raw, catalog::MSH).unwrap();

    assert_eq!(segment.field(1).as_str(), Some("|"));
    assert_eq!(segment.field(2).as_str(), Some("^~\\&"));
    assert_eq!(
        segment.field(9),
        &Value::Composite(vec![
            Value::from("ADT"),
            Value::from("A01"),
            Value::Absent,
        ])
    );

    assert_eq!(encode_segment(&segment.fields, catalog::MSH).unwrap(), raw);
}

#[test]
fn msh_encode_ignores_caller_supplied_prelude_values() {
    // Whatever the caller puts in positions 1 and 2 is replaced by the
    // active separators.
    let mut values = vec![Value::from("garbage"), Value::from("junk")];
    values.push(Value::Composite(vec![Value::from("APP")]));
    let line = encode_segment(&values, catalog::MSH).unwrap();
    assert_eq!(line, "MSH|^~\\&|APP");
}

#[test]
fn custom_separators_thread_through_whole_call() {
    let seps = Separators::new('!', '%', '@', '+', '#').unwrap();
    static FIELDS: &[Slot] = &[
        Slot::repeated("r", SlotKind::Text),
        Slot::single("t", SlotKind::Text),
    ];
    static SEG: SegmentSchema = SegmentSchema::new("ZCS", FIELDS);

    let values = vec![
        Value::Repeat(vec![Value::from("a"), Value::from("b!c")]),
        Value::from("plain"),
    ];
    let line = encode_segment_with_separators(&values, &SEG, &seps).unwrap();
    assert_eq!(line, "ZCS!a%b#F#c!plain");

    let segment = decode_segment_with_separators(&line, &SEG, &seps).unwrap();
    assert_eq!(segment.fields, values);
}

#[test]
fn malformed_scalar_reports_field_position() {
    static FIELDS: &[Slot] = &[
        Slot::single("ok", SlotKind::Text),
        Slot::single("when", SlotKind::Time(TimePrecision::Second)),
    ];
    static SEG: SegmentSchema = SegmentSchema::new("ZMS", FIELDS);

    let err = decode_segment("ZMS|fine|not-a-date", &SEG).unwrap_err();
    assert_eq!(err, Error::malformed_scalar(2, "timestamp", "not-a-date"));
}

#[test]
fn fully_absent_segment_is_just_the_id() {
    let values = vec![Value::Absent, Value::Absent, Value::Absent];
    assert_eq!(encode_segment(&values, &TRIO).unwrap(), "ZTR");

    let segment = decode_segment("ZTR", &TRIO).unwrap();
    assert!(segment.fields.iter().all(Value::is_absent));
}
