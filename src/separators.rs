//! Separator configuration for HL7v2 encoding.
//!
//! This module provides [`Separators`], the immutable set of five characters
//! that drive every split and join in the codec:
//!
//! - **Field** (`|` by convention)
//! - **Repetition** (`~`)
//! - **Component** (`^`)
//! - **Subcomponent** (`&`)
//! - **Escape** (`\`)
//!
//! A single encode or decode call uses exactly one [`Separators`] value from
//! start to finish. Callers either pass one explicitly (making the operation a
//! pure function of its inputs) or rely on the process-wide default, which is
//! set once at startup and copied on every read so concurrent operations can
//! never observe a torn update.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::Separators;
//!
//! // The conventional characters
//! let seps = Separators::default();
//! assert_eq!(seps.field, '|');
//! assert_eq!(seps.encoding_characters(), "^~\\&");
//!
//! // Sniff the actual delimiters out of a received MSH line
//! let seps = Separators::from_header("MSH|^~\\&|SENDER|FAC").unwrap();
//! assert_eq!(seps.escape, '\\');
//! ```

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{Error, Result};

/// The five delimiter/escape characters in effect for one encode/decode call.
///
/// All five characters must be mutually distinct; [`Separators::new`] rejects
/// duplicates with [`Error::InconsistentSeparators`] since a duplicated
/// character makes every parse ambiguous.
///
/// The type is `Copy` on purpose: the codec takes it by value so a single call
/// sees one consistent set throughout its recursion, regardless of what other
/// threads do to the process default meanwhile.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::Separators;
///
/// let standard = Separators::default();
/// assert_eq!(standard, Separators::STANDARD);
///
/// let custom = Separators::new('!', '~', '^', '&', '\\').unwrap();
/// assert_eq!(custom.field, '!');
///
/// // Duplicates are rejected
/// assert!(Separators::new('|', '|', '^', '&', '\\').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    pub field: char,
    pub repetition: char,
    pub component: char,
    pub subcomponent: char,
    pub escape: char,
}

static PROCESS_DEFAULT: OnceLock<Separators> = OnceLock::new();

impl Separators {
    /// The conventional HL7v2 characters: `|` `~` `^` `&` `\`.
    pub const STANDARD: Separators = Separators {
        field: '|',
        repetition: '~',
        component: '^',
        subcomponent: '&',
        escape: '\\',
    };

    /// Creates a validated `Separators` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentSeparators`] if any character appears in
    /// more than one role.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Separators;
    ///
    /// let seps = Separators::new('|', '~', '^', '&', '\\').unwrap();
    /// assert_eq!(seps, Separators::STANDARD);
    /// ```
    pub fn new(
        field: char,
        repetition: char,
        component: char,
        subcomponent: char,
        escape: char,
    ) -> Result<Self> {
        let seps = Separators {
            field,
            repetition,
            component,
            subcomponent,
            escape,
        };
        seps.check_distinct()?;
        Ok(seps)
    }

    /// Reads the delimiter set out of a raw MSH line.
    ///
    /// The message header carries its own delimiters: the character after the
    /// `MSH` id is the field separator, and the following four characters are
    /// the component, repetition, escape, and subcomponent separators in that
    /// order. This is how a receiver discovers non-default separators before
    /// decoding anything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongSegmentId`] if the line does not start with `MSH`
    /// (case-insensitive), a generic error if the prelude is truncated, and
    /// [`Error::InconsistentSeparators`] if the advertised characters collide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Separators;
    ///
    /// let seps = Separators::from_header("MSH|^~\\&|EPIC|EPICADT").unwrap();
    /// assert_eq!(seps, Separators::STANDARD);
    ///
    /// let seps = Separators::from_header("MSH#*!%$#APP").unwrap();
    /// assert_eq!(seps.field, '#');
    /// assert_eq!(seps.component, '*');
    /// ```
    pub fn from_header(raw: &str) -> Result<Self> {
        let id: String = raw.chars().take(3).collect();
        if !id.eq_ignore_ascii_case("MSH") {
            return Err(Error::wrong_segment_id("MSH", &id));
        }
        let mut chars = raw.chars().skip(3);
        let mut next = |role: &str| {
            chars
                .next()
                .ok_or_else(|| Error::message(format!("MSH prelude truncated before {role}")))
        };
        let field = next("the field separator")?;
        let component = next("the component separator")?;
        let repetition = next("the repetition separator")?;
        let escape = next("the escape character")?;
        let subcomponent = next("the subcomponent separator")?;
        Separators::new(field, repetition, component, subcomponent, escape)
    }

    /// Renders the MSH-2 encoding-characters string: component, repetition,
    /// escape, subcomponent, in that order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hl7v2_codec::Separators;
    ///
    /// assert_eq!(Separators::STANDARD.encoding_characters(), "^~\\&");
    /// ```
    #[must_use]
    pub fn encoding_characters(&self) -> String {
        let mut out = String::with_capacity(4);
        out.push(self.component);
        out.push(self.repetition);
        out.push(self.escape);
        out.push(self.subcomponent);
        out
    }

    /// Returns `true` if `ch` plays any of the five roles.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        ch == self.field
            || ch == self.repetition
            || ch == self.component
            || ch == self.subcomponent
            || ch == self.escape
    }

    /// Installs `seps` as the process-wide default used by the convenience
    /// entry points when no explicit value is supplied.
    ///
    /// The default can be set at most once, before any encode/decode traffic;
    /// afterwards it is effectively immutable, so concurrent readers never
    /// race a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if a default has already been installed.
    pub fn set_process_default(seps: Separators) -> Result<()> {
        seps.check_distinct()?;
        PROCESS_DEFAULT
            .set(seps)
            .map_err(|_| Error::message("process-wide separators already configured"))
    }

    /// Returns the process-wide default, or [`Separators::STANDARD`] if none
    /// was installed.
    #[must_use]
    pub fn process_default() -> Separators {
        PROCESS_DEFAULT.get().copied().unwrap_or(Separators::STANDARD)
    }

    /// Resolves the separators for one call: the explicit value if provided,
    /// else the process-wide default.
    #[must_use]
    pub fn resolve(explicit: Option<Separators>) -> Separators {
        explicit.unwrap_or_else(Separators::process_default)
    }

    fn check_distinct(&self) -> Result<()> {
        let roles = [
            self.field,
            self.repetition,
            self.component,
            self.subcomponent,
            self.escape,
        ];
        for (i, ch) in roles.iter().enumerate() {
            if roles[i + 1..].contains(ch) {
                return Err(Error::InconsistentSeparators(*ch));
            }
        }
        Ok(())
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators::STANDARD
    }
}
