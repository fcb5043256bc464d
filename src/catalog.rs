//! Built-in schema tables for common composite types and segments.
//!
//! Everything here is data, not logic: each table is a `static` list of
//! [`Slot`]s (or a [`SegmentSchema`] wrapping one) that the generic codec
//! interprets. The full HL7 standard defines hundreds of these per version;
//! this catalog carries the handful a core codec is exercised with, and
//! downstream crates declare their own tables the same way — nothing in the
//! codec privileges the ones shipped here.
//!
//! Field numbering and names follow the v2.3 tables.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::{catalog, decode_any};
//!
//! let segment = decode_any("NTE|1|L|Lab comment").unwrap();
//! assert_eq!(segment.id, "NTE");
//!
//! // The registry maps ids to schemas
//! assert!(catalog::registry().contains_key("PID"));
//! assert!(!catalog::registry().contains_key("ZZZ"));
//! ```

use indexmap::IndexMap;
use std::sync::OnceLock;

use crate::{SegmentSchema, Slot, SlotKind, TimePrecision};

// ---------------------------------------------------------------------------
// Composite types
// ---------------------------------------------------------------------------

/// HD — hierarchic designator.
pub static HD: &[Slot] = &[
    Slot::single("namespaceId", SlotKind::Text),
    Slot::single("universalId", SlotKind::Text),
    Slot::single("universalIdType", SlotKind::Text),
];

/// CE — coded element.
pub static CE: &[Slot] = &[
    Slot::single("identifier", SlotKind::Text),
    Slot::single("text", SlotKind::Text),
    Slot::single("nameOfCodingSystem", SlotKind::Text),
    Slot::single("alternateIdentifier", SlotKind::Text),
    Slot::single("alternateText", SlotKind::Text),
    Slot::single("nameOfAlternateCodingSystem", SlotKind::Text),
];

/// MSG — message type.
pub static MSG: &[Slot] = &[
    Slot::single("messageCode", SlotKind::Text),
    Slot::single("triggerEvent", SlotKind::Text),
    Slot::single("messageStructure", SlotKind::Text),
];

/// PT — processing type.
pub static PT: &[Slot] = &[
    Slot::single("processingId", SlotKind::Text),
    Slot::single("processingMode", SlotKind::Text),
];

/// CX — extended composite id with check digit. The assigning authority and
/// facility are HD values one level deeper, so their parts arrive
/// subcomponent-separated on the wire.
pub static CX: &[Slot] = &[
    Slot::single("idNumber", SlotKind::Text),
    Slot::single("checkDigit", SlotKind::Text),
    Slot::single("checkDigitScheme", SlotKind::Text),
    Slot::single("assigningAuthority", SlotKind::Composite(HD)),
    Slot::single("identifierTypeCode", SlotKind::Text),
    Slot::single("assigningFacility", SlotKind::Composite(HD)),
];

/// XPN — extended person name.
pub static XPN: &[Slot] = &[
    Slot::single("familyName", SlotKind::Text),
    Slot::single("givenName", SlotKind::Text),
    Slot::single("middleInitialOrName", SlotKind::Text),
    Slot::single("suffix", SlotKind::Text),
    Slot::single("prefix", SlotKind::Text),
    Slot::single("degree", SlotKind::Text),
    Slot::single("nameTypeCode", SlotKind::Text),
];

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

static MSH_FIELDS: &[Slot] = &[
    // Positions 1 and 2 are derived from the active separators, never decoded.
    Slot::single("fieldSeparator", SlotKind::Text),
    Slot::single("encodingCharacters", SlotKind::Text),
    Slot::single("sendingApplication", SlotKind::Composite(HD)),
    Slot::single("sendingFacility", SlotKind::Composite(HD)),
    Slot::single("receivingApplication", SlotKind::Composite(HD)),
    Slot::single("receivingFacility", SlotKind::Composite(HD)),
    Slot::single("dateTimeOfMessage", SlotKind::Time(TimePrecision::Second)),
    Slot::single("security", SlotKind::Text),
    Slot::single("messageType", SlotKind::Composite(MSG)),
    Slot::single("messageControlId", SlotKind::Text),
    Slot::single("processingId", SlotKind::Composite(PT)),
    Slot::single("versionId", SlotKind::Text),
];

/// MSH — message header. The only header-flagged schema in the catalog.
pub static MSH: &SegmentSchema = &SegmentSchema::header("MSH", MSH_FIELDS);

static EVN_FIELDS: &[Slot] = &[
    Slot::single("eventTypeCode", SlotKind::Text),
    Slot::single("recordedDateTime", SlotKind::Time(TimePrecision::Second)),
    Slot::single("dateTimePlannedEvent", SlotKind::Time(TimePrecision::Second)),
    Slot::single("eventReasonCode", SlotKind::Text),
    Slot::single("operatorId", SlotKind::Text),
];

/// EVN — event type.
pub static EVN: &SegmentSchema = &SegmentSchema::new("EVN", EVN_FIELDS);

static NTE_FIELDS: &[Slot] = &[
    Slot::single("setId", SlotKind::UInt),
    Slot::single("sourceOfComment", SlotKind::Text),
    Slot::repeated("comment", SlotKind::Text),
    Slot::single("commentType", SlotKind::Text),
];

/// NTE — notes and comments.
pub static NTE: &SegmentSchema = &SegmentSchema::new("NTE", NTE_FIELDS);

static PID_FIELDS: &[Slot] = &[
    Slot::single("setId", SlotKind::UInt),
    Slot::single("patientId", SlotKind::Composite(CX)),
    Slot::repeated("patientIdentifierList", SlotKind::Composite(CX)),
    Slot::repeated("alternatePatientId", SlotKind::Composite(CX)),
    Slot::repeated("patientName", SlotKind::Composite(XPN)),
    Slot::repeated("mothersMaidenName", SlotKind::Composite(XPN)),
    Slot::single("dateTimeOfBirth", SlotKind::Time(TimePrecision::Second)),
    Slot::single("administrativeSex", SlotKind::Text),
];

/// PID — patient identification (fields 1–8).
pub static PID: &SegmentSchema = &SegmentSchema::new("PID", PID_FIELDS);

static OBX_FIELDS: &[Slot] = &[
    Slot::single("setId", SlotKind::UInt),
    Slot::single("valueType", SlotKind::Text),
    Slot::single("observationIdentifier", SlotKind::Composite(CE)),
    Slot::single("observationSubId", SlotKind::Text),
    Slot::repeated("observationValue", SlotKind::Text),
    Slot::single("units", SlotKind::Composite(CE)),
    Slot::single("referencesRange", SlotKind::Text),
    Slot::repeated("abnormalFlags", SlotKind::Text),
    Slot::single("probability", SlotKind::Decimal),
    Slot::repeated("natureOfAbnormalTest", SlotKind::Text),
    Slot::single("observationResultStatus", SlotKind::Text),
    Slot::single(
        "dateLastObservationNormalValue",
        SlotKind::Time(TimePrecision::Second),
    ),
    Slot::single("userDefinedAccessChecks", SlotKind::Text),
    Slot::single(
        "dateTimeOfTheObservation",
        SlotKind::Time(TimePrecision::Second),
    ),
];

/// OBX — observation/result (fields 1–14).
pub static OBX: &SegmentSchema = &SegmentSchema::new("OBX", OBX_FIELDS);

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The built-in schemas keyed by segment id, in catalog order.
///
/// Built once on first use. [`crate::decode_any`] consults this to pick a
/// schema from a raw line's leading id.
#[must_use]
pub fn registry() -> &'static IndexMap<&'static str, &'static SegmentSchema> {
    static REGISTRY: OnceLock<IndexMap<&'static str, &'static SegmentSchema>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = IndexMap::new();
        for schema in [MSH, EVN, NTE, PID, OBX] {
            map.insert(schema.id, schema);
        }
        map
    })
}
