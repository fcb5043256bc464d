//! Declarative slot tables describing segments and composite types.
//!
//! The codec itself knows nothing about any particular segment. Every segment
//! and composite type is described as data: an ordered table of [`Slot`]s,
//! each naming its position's semantic meaning, its sub-type ([`SlotKind`]),
//! and whether it may repeat ([`Cardinality`]). A [`SegmentSchema`] ties a
//! field table to a 3-letter segment id.
//!
//! All constructors are `const`, so whole catalogs are plain `static` tables
//! (see [`crate::catalog`]) with no startup cost and no registration step.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::{Slot, SlotKind, SegmentSchema};
//!
//! static NTE_FIELDS: &[Slot] = &[
//!     Slot::single("setId", SlotKind::UInt),
//!     Slot::single("sourceOfComment", SlotKind::Text),
//!     Slot::repeated("comment", SlotKind::Text),
//!     Slot::single("commentType", SlotKind::Text),
//! ];
//! static NTE: SegmentSchema = SegmentSchema::new("NTE", NTE_FIELDS);
//!
//! assert_eq!(NTE.position_of("comment"), Some(3));
//! ```

use crate::TimePrecision;

/// Whether a slot holds one value or a repetition-separated list of values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Repeated,
}

/// The sub-type occupying a slot.
///
/// Leaf kinds decode through the primitive conversion layer; `Composite`
/// recurses one separator level deeper with its own slot table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// Plain string, escaped on the wire.
    Text,
    /// Optional unsigned integer.
    UInt,
    /// Optional decimal, digit-exact.
    Decimal,
    /// Optional date/time; the parameter is the deepest precision the slot
    /// accepts (shallower tokens are fine and keep their own precision).
    Time(TimePrecision),
    /// A nested composite type with its own ordered slot table.
    Composite(&'static [Slot]),
}

impl SlotKind {
    /// A short name for the kind, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SlotKind::Text => "text",
            SlotKind::UInt => "unsigned integer",
            SlotKind::Decimal => "decimal",
            SlotKind::Time(_) => "timestamp",
            SlotKind::Composite(_) => "composite",
        }
    }
}

/// One positional slot in a segment's field list or a composite's component
/// list.
///
/// The slot's position is its index in the containing table (1-based on the
/// wire, after the segment id); it is not stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// The semantic name of the position, camelCased as in the HL7 tables.
    pub name: &'static str,
    pub kind: SlotKind,
    pub cardinality: Cardinality,
}

impl Slot {
    /// A slot holding at most one value.
    #[must_use]
    pub const fn single(name: &'static str, kind: SlotKind) -> Self {
        Slot {
            name,
            kind,
            cardinality: Cardinality::Single,
        }
    }

    /// A slot whose wire value may be a repetition-separated list.
    #[must_use]
    pub const fn repeated(name: &'static str, kind: SlotKind) -> Self {
        Slot {
            name,
            kind,
            cardinality: Cardinality::Repeated,
        }
    }
}

/// A segment's identity and field layout.
///
/// `header` marks the message-header segment, whose first two field positions
/// are not ordinary slots: they carry the field separator itself and the
/// encoding-characters string, derived directly from the active
/// [`Separators`](crate::Separators). The codec special-cases them ahead of
/// the generic field loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentSchema {
    /// The 3-letter segment id, uppercase.
    pub id: &'static str,
    /// `true` for the message header (MSH-style prelude handling).
    pub header: bool,
    /// Field slots in wire order. For a header segment the first two entries
    /// describe the separator-derived positions and are never decoded.
    pub fields: &'static [Slot],
}

impl SegmentSchema {
    /// An ordinary segment schema.
    #[must_use]
    pub const fn new(id: &'static str, fields: &'static [Slot]) -> Self {
        SegmentSchema {
            id,
            header: false,
            fields,
        }
    }

    /// A message-header schema with the two separator-derived lead fields.
    #[must_use]
    pub const fn header(id: &'static str, fields: &'static [Slot]) -> Self {
        SegmentSchema {
            id,
            header: true,
            fields,
        }
    }

    /// Looks up a field's 1-based wire position by its semantic name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::catalog;
    ///
    /// assert_eq!(catalog::NTE.position_of("setId"), Some(1));
    /// assert_eq!(catalog::NTE.position_of("nope"), None);
    /// ```
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|slot| slot.name == name)
            .map(|i| i + 1)
    }

    /// The slot at a 1-based wire position, if declared.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<&Slot> {
        position.checked_sub(1).and_then(|i| self.fields.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PAIR: &[Slot] = &[
        Slot::single("first", SlotKind::Text),
        Slot::single("second", SlotKind::UInt),
    ];
    static SEG: SegmentSchema = SegmentSchema::new("ZZT", PAIR);

    #[test]
    fn test_const_tables() {
        assert_eq!(SEG.id, "ZZT");
        assert!(!SEG.header);
        assert_eq!(SEG.fields.len(), 2);
    }

    #[test]
    fn test_position_lookup() {
        assert_eq!(SEG.position_of("first"), Some(1));
        assert_eq!(SEG.position_of("second"), Some(2));
        assert_eq!(SEG.position_of("third"), None);
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(SEG.slot(2).map(|s| s.name), Some("second"));
        assert_eq!(SEG.slot(0), None);
        assert_eq!(SEG.slot(3), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SlotKind::Decimal.name(), "decimal");
        assert_eq!(SlotKind::Composite(PAIR).name(), "composite");
    }
}
