//! Dynamic value representation for decoded fields.
//!
//! This module provides the [`Value`] enum which represents the decoded result
//! of any field or composite slot: absent, one of the leaf scalars, a nested
//! composite, or an ordered list of repetitions.
//!
//! ## Core shape
//!
//! - [`Value::Absent`]: the slot was empty or missing from the end of the line
//! - [`Value::Text`], [`Value::UInt`], [`Value::Decimal`], [`Value::Time`]:
//!   leaf scalars, already unescaped and converted
//! - [`Value::Composite`]: an ordered list of sub-slot values, one per slot of
//!   the composite type
//! - [`Value::Repeat`]: an ordered list of elements of a repeated slot, each
//!   element decoded independently
//!
//! Absence is a distinct state, never conflated with an empty string or a
//! default number: an absent trailing field decodes to the same `Absent` it
//! was encoded from, which is what makes round-trips exact.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::Value;
//!
//! let v = Value::from("Free text");
//! assert!(v.is_text());
//! assert_eq!(v.as_str(), Some("Free text"));
//!
//! let absent = Value::from(None::<u32>);
//! assert!(absent.is_absent());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// The decoded result of one field or composite slot.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::Value;
///
/// let comment = Value::Repeat(vec![
///     Value::from("Free text"),
///     Value::from("more text"),
/// ]);
/// assert_eq!(comment.as_repeats().map(<[_]>::len), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Value {
    /// The slot holds nothing: empty on the wire, or trimmed off the end.
    #[default]
    Absent,
    /// A plain string leaf, unescaped.
    Text(String),
    /// An unsigned integer leaf.
    UInt(u32),
    /// A decimal leaf, digit-exact.
    Decimal(Decimal),
    /// A date/time leaf at its own precision.
    Time(Timestamp),
    /// A nested composite: one value per sub-slot, in slot order.
    Composite(Vec<Value>),
    /// A repeated slot: one value per repetition, in wire order.
    Repeat(Vec<Value>),
}

impl Value {
    /// Returns `true` if the slot holds nothing.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if the value is a text leaf.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is an unsigned integer leaf.
    #[inline]
    #[must_use]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Value::UInt(_))
    }

    /// Returns `true` if the value is a decimal leaf.
    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    /// Returns `true` if the value is a date/time leaf.
    #[inline]
    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    /// Returns `true` if the value is a nested composite.
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Value::Composite(_))
    }

    /// Returns `true` if the value is a repetition list.
    #[inline]
    #[must_use]
    pub const fn is_repeat(&self) -> bool {
        matches!(self, Value::Repeat(_))
    }

    /// If the value is a text leaf, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Value;
    ///
    /// assert_eq!(Value::from("RE").as_str(), Some("RE"));
    /// assert_eq!(Value::UInt(1).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an unsigned integer leaf, returns it.
    #[inline]
    #[must_use]
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a decimal leaf, returns it.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// If the value is a date/time leaf, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<&Timestamp> {
        match self {
            Value::Time(ts) => Some(ts),
            _ => None,
        }
    }

    /// If the value is a composite, returns its sub-slot values.
    #[inline]
    #[must_use]
    pub fn as_components(&self) -> Option<&[Value]> {
        match self {
            Value::Composite(parts) => Some(parts),
            _ => None,
        }
    }

    /// If the value is a repetition list, returns its elements.
    #[inline]
    #[must_use]
    pub fn as_repeats(&self) -> Option<&[Value]> {
        match self {
            Value::Repeat(elements) => Some(elements),
            _ => None,
        }
    }

    /// A short name for the variant, used in type-mismatch diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Text(_) => "text",
            Value::UInt(_) => "unsigned integer",
            Value::Decimal(_) => "decimal",
            Value::Time(_) => "timestamp",
            Value::Composite(_) => "composite",
            Value::Repeat(_) => "repetition list",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Time(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Absent,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Repeat(elements)
    }
}
