//! The recursive composite codec and the segment codec built on top of it.
//!
//! ## Decoding
//!
//! Decoding is positional, table-driven splitting. A raw string is split on
//! the separator for its level; each piece is matched against the slot table
//! in order. A missing or empty piece is [`Value::Absent`]; a repeated slot's
//! piece is split again on the repetition separator before each element goes
//! through the slot's sub-type decoder; a composite slot recurses one
//! separator level deeper with its own table. Extra trailing pieces beyond
//! the declared slots are ignored, so schemas from older versions keep
//! working against newer messages.
//!
//! ## Encoding
//!
//! Encoding is the mirror image: render each slot (absent renders empty),
//! join on the level's separator, then trim only the *trailing* run of empty
//! renderings. Interior empties stay as placeholders, which is what keeps
//! positions aligned on the way back in.
//!
//! ## The segment layer
//!
//! [`decode_segment_with_separators`] splits on the field separator, checks
//! the leading 3-letter id case-insensitively (failing fast with
//! [`Error::WrongSegmentId`] on mismatch), and hands the remaining pieces to
//! the composite machinery. The message header is special-cased: its first
//! two field positions carry the field separator itself and the
//! encoding-characters string, both derived from the active [`Separators`]
//! rather than decoded.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::{catalog, codec, Separators, Value};
//!
//! let seps = Separators::default();
//! let segment =
//!     codec::decode_segment_with_separators("NTE|1|L|Free text~more text|RE", catalog::NTE, &seps)
//!         .unwrap();
//! assert_eq!(segment.field(1), &Value::UInt(1));
//! assert_eq!(
//!     segment.field(3).as_repeats().map(<[_]>::len),
//!     Some(2)
//! );
//! ```

use crate::{escape, primitive, Timestamp};
use crate::{Cardinality, Error, Result, SegmentSchema, Separators, Slot, SlotKind, Value};

/// The separator level a composite slot table is nested at.
///
/// Fields split on the component separator; components split on the
/// subcomponent separator; there is nothing deeper. The field separator is
/// handled by the segment layer and the repetition separator by cardinality,
/// so neither is a `Level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Component,
    Subcomponent,
}

impl Level {
    /// The separator character for this level.
    #[inline]
    #[must_use]
    pub fn separator(self, seps: &Separators) -> char {
        match self {
            Level::Component => seps.component,
            Level::Subcomponent => seps.subcomponent,
        }
    }

    /// The next level down, if one exists.
    #[inline]
    #[must_use]
    pub const fn deeper(self) -> Option<Level> {
        match self {
            Level::Component => Some(Level::Subcomponent),
            Level::Subcomponent => None,
        }
    }
}

/// A decoded segment: the canonical id plus one [`Value`] per declared field
/// slot, in wire order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// The canonical (schema) segment id.
    pub id: String,
    /// One value per schema slot; index 0 is wire field 1.
    pub fields: Vec<Value>,
}

static ABSENT: Value = Value::Absent;

impl Segment {
    /// The value at a 1-based wire field position.
    ///
    /// Positions outside the schema's range return [`Value::Absent`], the
    /// same state an omitted trailing field decodes to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::{catalog, decode_segment, Value};
    ///
    /// let segment = decode_segment("NTE|1|L", catalog::NTE).unwrap();
    /// assert_eq!(segment.field(2).as_str(), Some("L"));
    /// assert!(segment.field(4).is_absent());
    /// assert!(segment.field(99).is_absent());
    /// ```
    #[must_use]
    pub fn field(&self, position: usize) -> &Value {
        position
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .unwrap_or(&ABSENT)
    }
}

/// Decodes a composite string against a slot table at the given level.
///
/// An empty input decodes every slot to [`Value::Absent`].
///
/// # Errors
///
/// Returns [`Error::MalformedScalar`] (with the offending slot's 1-based
/// position) when a leaf token does not parse as its declared primitive, and
/// [`Error::NestingTooDeep`] for composite slots declared below the
/// subcomponent level.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{codec::{decode_composite, Level}, catalog, Separators, Value};
///
/// let seps = Separators::default();
/// let parts = decode_composite("88304^Biopsy^CPT4", catalog::CE, Level::Component, &seps).unwrap();
/// assert_eq!(parts[1].as_str(), Some("Biopsy"));
/// ```
pub fn decode_composite(
    raw: &str,
    slots: &[Slot],
    level: Level,
    seps: &Separators,
) -> Result<Vec<Value>> {
    if raw.is_empty() {
        return Ok(vec![Value::Absent; slots.len()]);
    }
    let pieces: Vec<&str> = raw.split(level.separator(seps)).collect();
    let mut values = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let piece = pieces.get(index).copied().unwrap_or("");
        let value =
            decode_slot(piece, slot, level.deeper(), seps).map_err(|e| e.at_field(index + 1))?;
        values.push(value);
    }
    Ok(values)
}

/// Encodes slot values back to a composite string at the given level.
///
/// Absent slots render empty; the trailing run of empty renderings is
/// trimmed; interior empties are kept as placeholders.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when a value does not fit its slot's
/// declared kind, and [`Error::NestingTooDeep`] for composite slots below the
/// subcomponent level.
pub fn encode_composite(
    values: &[Value],
    slots: &[Slot],
    level: Level,
    seps: &Separators,
) -> Result<String> {
    let mut rendered = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let value = values.get(index).unwrap_or(&ABSENT);
        let piece =
            encode_slot(value, slot, level.deeper(), seps).map_err(|e| e.at_field(index + 1))?;
        rendered.push(piece);
    }
    trim_trailing_empty(&mut rendered);
    Ok(rendered.join(&level.separator(seps).to_string()))
}

/// Decodes one raw segment line against its schema.
///
/// # Errors
///
/// Returns [`Error::WrongSegmentId`] when the leading token does not match
/// the schema's id (case-insensitive), plus everything
/// [`decode_composite`] can report, with positions counted in segment field
/// numbering.
pub fn decode_segment_with_separators(
    raw: &str,
    schema: &SegmentSchema,
    seps: &Separators,
) -> Result<Segment> {
    let pieces: Vec<&str> = raw.split(seps.field).collect();
    // split always yields at least one piece
    let found = pieces[0];
    if !found.eq_ignore_ascii_case(schema.id) {
        return Err(Error::wrong_segment_id(schema.id, found));
    }

    let mut fields = Vec::with_capacity(schema.fields.len());
    let data_pieces: &[&str];
    let data_slots: &[Slot];
    if schema.header {
        // The header's first two positions are not decodable slots: field 1
        // is the field separator itself and field 2 the encoding characters,
        // both fixed by the active separator set.
        fields.push(Value::Text(seps.field.to_string()));
        fields.push(Value::Text(seps.encoding_characters()));
        data_slots = schema.fields.get(2..).unwrap_or(&[]);
        data_pieces = pieces.get(2..).unwrap_or(&[]);
    } else {
        data_slots = schema.fields;
        data_pieces = pieces.get(1..).unwrap_or(&[]);
    }

    for (offset, slot) in data_slots.iter().enumerate() {
        let piece = data_pieces.get(offset).copied().unwrap_or("");
        let position = fields.len() + 1;
        let value = decode_slot(piece, slot, Some(Level::Component), seps)
            .map_err(|e| e.at_field(position))?;
        fields.push(value);
    }

    Ok(Segment {
        id: schema.id.to_string(),
        fields,
    })
}

/// Encodes field values into one raw segment line.
///
/// The id is prepended, fields join on the field separator, and the trailing
/// run of absent fields is trimmed. For a header schema the first two value
/// positions are ignored and re-derived from `seps`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when a value does not fit its slot.
pub fn encode_segment_with_separators(
    values: &[Value],
    schema: &SegmentSchema,
    seps: &Separators,
) -> Result<String> {
    let (data_slots, data_values, lead) = if schema.header {
        (
            schema.fields.get(2..).unwrap_or(&[]),
            values.get(2..).unwrap_or(&[]),
            2,
        )
    } else {
        (schema.fields, values, 0)
    };

    let mut rendered = Vec::with_capacity(data_slots.len());
    for (offset, slot) in data_slots.iter().enumerate() {
        let value = data_values.get(offset).unwrap_or(&ABSENT);
        let piece = encode_slot(value, slot, Some(Level::Component), seps)
            .map_err(|e| e.at_field(offset + lead + 1))?;
        rendered.push(piece);
    }
    trim_trailing_empty(&mut rendered);

    let mut line = String::with_capacity(raw_capacity(&rendered, schema.id.len()));
    line.push_str(schema.id);
    if schema.header {
        line.push(seps.field);
        line.push_str(&seps.encoding_characters());
    }
    for piece in &rendered {
        line.push(seps.field);
        line.push_str(piece);
    }
    Ok(line)
}

/// Decodes a slot's piece, honoring its cardinality.
fn decode_slot(
    piece: &str,
    slot: &Slot,
    sublevel: Option<Level>,
    seps: &Separators,
) -> Result<Value> {
    if piece.is_empty() {
        return Ok(Value::Absent);
    }
    match slot.cardinality {
        Cardinality::Repeated => {
            let elements = piece
                .split(seps.repetition)
                .map(|element| decode_element(element, slot.kind, sublevel, seps))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Repeat(elements))
        }
        Cardinality::Single => decode_element(piece, slot.kind, sublevel, seps),
    }
}

/// Decodes one element (a whole piece, or one repetition of it) by its kind.
fn decode_element(
    piece: &str,
    kind: SlotKind,
    sublevel: Option<Level>,
    seps: &Separators,
) -> Result<Value> {
    if piece.is_empty() {
        return Ok(Value::Absent);
    }
    match kind {
        SlotKind::Text => Ok(Value::Text(escape::unescape(piece, seps).into_owned())),
        SlotKind::UInt => primitive::parse_uint(piece).map(Value::from),
        SlotKind::Decimal => primitive::parse_decimal(piece).map(Value::from),
        SlotKind::Time(max) => Timestamp::parse(piece, max).map(Value::from),
        SlotKind::Composite(subslots) => {
            let level = sublevel.ok_or(Error::NestingTooDeep { position: 0 })?;
            decode_composite(piece, subslots, level, seps).map(Value::Composite)
        }
    }
}

/// Encodes a slot's value, honoring its cardinality.
///
/// A repeated slot accepts either a [`Value::Repeat`] list or a bare single
/// value (treated as one repetition), which keeps hand-built values terse.
fn encode_slot(
    value: &Value,
    slot: &Slot,
    sublevel: Option<Level>,
    seps: &Separators,
) -> Result<String> {
    match (slot.cardinality, value) {
        (_, Value::Absent) => Ok(String::new()),
        (Cardinality::Repeated, Value::Repeat(elements)) => {
            let parts = elements
                .iter()
                .map(|element| encode_element(element, slot.kind, sublevel, seps))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(&seps.repetition.to_string()))
        }
        (Cardinality::Single, Value::Repeat(_)) => Err(Error::type_mismatch(
            0,
            slot.kind.name(),
            "repetition list",
        )),
        (_, single) => encode_element(single, slot.kind, sublevel, seps),
    }
}

/// Encodes one element by its kind.
fn encode_element(
    value: &Value,
    kind: SlotKind,
    sublevel: Option<Level>,
    seps: &Separators,
) -> Result<String> {
    match (kind, value) {
        (_, Value::Absent) => Ok(String::new()),
        (SlotKind::Text, Value::Text(s)) => Ok(escape::escape(s, seps).into_owned()),
        (SlotKind::UInt, Value::UInt(n)) => Ok(n.to_string()),
        (SlotKind::Decimal, Value::Decimal(d)) => Ok(d.to_string()),
        // A timestamp renders at its own carried precision.
        (SlotKind::Time(_), Value::Time(ts)) => Ok(ts.render()),
        (SlotKind::Composite(subslots), Value::Composite(parts)) => {
            let level = sublevel.ok_or(Error::NestingTooDeep { position: 0 })?;
            encode_composite(parts, subslots, level, seps)
        }
        (kind, other) => Err(Error::type_mismatch(0, kind.name(), other.kind_name())),
    }
}

fn trim_trailing_empty(rendered: &mut Vec<String>) {
    while rendered.last().is_some_and(String::is_empty) {
        rendered.pop();
    }
}

fn raw_capacity(rendered: &[String], id_len: usize) -> usize {
    id_len + rendered.iter().map(|p| p.len() + 1).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimePrecision;

    static NAME: &[Slot] = &[
        Slot::single("family", SlotKind::Text),
        Slot::single("given", SlotKind::Text),
    ];

    static SAMPLE_FIELDS: &[Slot] = &[
        Slot::single("setId", SlotKind::UInt),
        Slot::single("name", SlotKind::Composite(NAME)),
        Slot::repeated("alias", SlotKind::Text),
        Slot::single("score", SlotKind::Decimal),
        Slot::single("seen", SlotKind::Time(TimePrecision::Second)),
    ];
    static SAMPLE: SegmentSchema = SegmentSchema::new("ZZS", SAMPLE_FIELDS);

    fn seps() -> Separators {
        Separators::default()
    }

    #[test]
    fn test_decode_full_line() {
        let segment = decode_segment_with_separators(
            "ZZS|3|Smith^John|a~b|12.5|20240607131500",
            &SAMPLE,
            &seps(),
        )
        .unwrap();
        assert_eq!(segment.field(1), &Value::UInt(3));
        assert_eq!(
            segment.field(2),
            &Value::Composite(vec![Value::from("Smith"), Value::from("John")])
        );
        assert_eq!(
            segment.field(3),
            &Value::Repeat(vec![Value::from("a"), Value::from("b")])
        );
        assert!(segment.field(4).is_decimal());
        assert_eq!(segment.field(5).as_time().unwrap().render(), "20240607131500");
    }

    #[test]
    fn test_interior_absent_does_not_shift() {
        let segment =
            decode_segment_with_separators("ZZS|1||alias", &SAMPLE, &seps()).unwrap();
        assert!(segment.field(2).is_absent());
        assert_eq!(
            segment.field(3),
            &Value::Repeat(vec![Value::from("alias")])
        );
        assert!(segment.field(4).is_absent());
    }

    #[test]
    fn test_extra_trailing_pieces_ignored() {
        let segment = decode_segment_with_separators(
            "ZZS|1|||||future|fields",
            &SAMPLE,
            &seps(),
        )
        .unwrap();
        assert_eq!(segment.fields.len(), SAMPLE_FIELDS.len());
    }

    #[test]
    fn test_malformed_scalar_names_position() {
        let err = decode_segment_with_separators("ZZS|abc", &SAMPLE, &seps()).unwrap_err();
        assert_eq!(
            err,
            Error::malformed_scalar(1, "unsigned integer", "abc")
        );
    }

    #[test]
    fn test_encode_trims_trailing_only() {
        let values = vec![
            Value::UInt(1),
            Value::Absent,
            Value::Repeat(vec![Value::from("x")]),
            Value::Absent,
            Value::Absent,
        ];
        let line = encode_segment_with_separators(&values, &SAMPLE, &seps()).unwrap();
        assert_eq!(line, "ZZS|1||x");
    }

    #[test]
    fn test_encode_type_mismatch() {
        let values = vec![Value::from("not a number")];
        let err = encode_segment_with_separators(&values, &SAMPLE, &seps()).unwrap_err();
        assert_eq!(err, Error::type_mismatch(1, "unsigned integer", "text"));
    }

    #[test]
    fn test_bare_value_in_repeated_slot() {
        let values = vec![Value::Absent, Value::Absent, Value::from("solo")];
        let line = encode_segment_with_separators(&values, &SAMPLE, &seps()).unwrap();
        assert_eq!(line, "ZZS|||solo");
    }

    #[test]
    fn test_composite_roundtrip_with_subcomponents() {
        static INNER: &[Slot] = &[
            Slot::single("a", SlotKind::Text),
            Slot::single("b", SlotKind::Text),
        ];
        static OUTER: &[Slot] = &[
            Slot::single("left", SlotKind::Composite(INNER)),
            Slot::single("right", SlotKind::Text),
        ];
        let seps = seps();
        let parts = decode_composite("x&y^z", OUTER, Level::Component, &seps).unwrap();
        assert_eq!(
            parts,
            vec![
                Value::Composite(vec![Value::from("x"), Value::from("y")]),
                Value::from("z"),
            ]
        );
        let encoded = encode_composite(&parts, OUTER, Level::Component, &seps).unwrap();
        assert_eq!(encoded, "x&y^z");
    }

    #[test]
    fn test_nesting_too_deep() {
        static INNER: &[Slot] = &[Slot::single("a", SlotKind::Text)];
        static TOO_DEEP: &[Slot] = &[Slot::single("x", SlotKind::Composite(INNER))];
        let err =
            decode_composite("anything", TOO_DEEP, Level::Subcomponent, &seps()).unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { position: 1 });
    }

    #[test]
    fn test_empty_input_decodes_all_absent() {
        let parts = decode_composite("", NAME, Level::Component, &seps()).unwrap();
        assert_eq!(parts, vec![Value::Absent, Value::Absent]);
    }
}
