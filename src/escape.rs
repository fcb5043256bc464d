//! Escaping codec for leaf string values.
//!
//! HL7v2 field content may legitimately contain the delimiter characters
//! themselves. Before a leaf string goes on the wire it is rewritten so every
//! literal delimiter (or escape character) becomes a three-character escape
//! sequence: the escape character, a single mnemonic letter, and the escape
//! character again.
//!
//! | Sequence | Stands for |
//! |----------|------------|
//! | `\F\` | the field separator |
//! | `\S\` | the component separator |
//! | `\T\` | the subcomponent separator |
//! | `\R\` | the repetition separator |
//! | `\E\` | the escape character itself |
//!
//! (Shown with the conventional `\` escape; the actual character comes from the
//! active [`Separators`].)
//!
//! Escaping applies only at leaf-string production time. Applying it to an
//! already-delimited composite substring would corrupt the very separators
//! being protected, so the codec calls [`escape`] strictly after all splitting
//! and before all joining.
//!
//! ## Unknown sequences
//!
//! HL7 defines further escapes this core does not interpret (highlighting,
//! hex data, locally defined sequences). [`unescape`] passes any sequence it
//! does not recognize through verbatim, byte for byte, so decoding stays
//! lossless for them; [`validate`] is available for callers that want strict
//! rejection instead.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::{escape, Separators};
//!
//! let seps = Separators::default();
//! let escaped = escape::escape("rate: 5|7", &seps);
//! assert_eq!(escaped, "rate: 5\\F\\7");
//! assert_eq!(escape::unescape(&escaped, &seps), "rate: 5|7");
//! ```

use std::borrow::Cow;

use crate::{Error, Result, Separators};

const FIELD_CODE: char = 'F';
const COMPONENT_CODE: char = 'S';
const SUBCOMPONENT_CODE: char = 'T';
const REPETITION_CODE: char = 'R';
const ESCAPE_CODE: char = 'E';

/// Escapes every literal delimiter/escape character in a leaf string.
///
/// Returns the input unchanged (borrowed, no allocation) when it contains no
/// character needing escape.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{escape::escape, Separators};
///
/// let seps = Separators::default();
/// assert_eq!(escape("plain text", &seps), "plain text");
/// assert_eq!(escape("a^b&c", &seps), "a\\S\\b\\T\\c");
/// assert_eq!(escape("back\\slash", &seps), "back\\E\\slash");
/// ```
#[must_use]
pub fn escape<'a>(value: &'a str, seps: &Separators) -> Cow<'a, str> {
    if !value.chars().any(|ch| seps.contains(ch)) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        let code = if ch == seps.field {
            Some(FIELD_CODE)
        } else if ch == seps.component {
            Some(COMPONENT_CODE)
        } else if ch == seps.subcomponent {
            Some(SUBCOMPONENT_CODE)
        } else if ch == seps.repetition {
            Some(REPETITION_CODE)
        } else if ch == seps.escape {
            Some(ESCAPE_CODE)
        } else {
            None
        };
        match code {
            Some(code) => {
                out.push(seps.escape);
                out.push(code);
                out.push(seps.escape);
            }
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`escape`], recovering the original leaf string.
///
/// The five known sequences map back to their literal characters. Anything
/// else that looks like an escape sequence (unknown mnemonic, multi-character
/// body, or an unterminated trailing escape) is passed through verbatim.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{escape::unescape, Separators};
///
/// let seps = Separators::default();
/// assert_eq!(unescape("a\\F\\b", &seps), "a|b");
/// // Unknown sequences survive untouched
/// assert_eq!(unescape("\\H\\bold\\N\\", &seps), "\\H\\bold\\N\\");
/// ```
#[must_use]
pub fn unescape<'a>(value: &'a str, seps: &Separators) -> Cow<'a, str> {
    if !value.contains(seps.escape) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find(seps.escape) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match take_sequence(tail, seps) {
            Some((body, consumed)) => {
                match decode_code(body, seps) {
                    Some(literal) => out.push(literal),
                    // Not one of ours: emit the sequence untouched.
                    None => out.push_str(&tail[..consumed]),
                }
                rest = &tail[consumed..];
            }
            // Unterminated: keep the rest of the string as-is.
            None => {
                out.push_str(tail);
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Checks that every escape sequence in `value` uses a recognized mnemonic.
///
/// # Errors
///
/// Returns [`Error::MalformedEscape`] for the first unknown or unterminated
/// sequence encountered.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{escape::validate, Separators};
///
/// let seps = Separators::default();
/// assert!(validate("a\\F\\b", &seps).is_ok());
/// assert!(validate("a\\Z\\b", &seps).is_err());
/// assert!(validate("dangling\\", &seps).is_err());
/// ```
pub fn validate(value: &str, seps: &Separators) -> Result<()> {
    let mut rest = value;
    while let Some(pos) = rest.find(seps.escape) {
        let tail = &rest[pos..];
        match take_sequence(tail, seps) {
            Some((body, consumed)) => {
                if decode_code(body, seps).is_none() {
                    return Err(Error::malformed_escape(&tail[..consumed]));
                }
                rest = &tail[consumed..];
            }
            None => return Err(Error::malformed_escape(tail)),
        }
    }
    Ok(())
}

/// Extracts the sequence starting at an escape character: returns the body
/// between the two escape characters and the total byte length consumed
/// (opening escape through closing escape inclusive). `None` if unterminated.
fn take_sequence<'a>(tail: &'a str, seps: &Separators) -> Option<(&'a str, usize)> {
    let esc_len = seps.escape.len_utf8();
    let after = &tail[esc_len..];
    let close = after.find(seps.escape)?;
    Some((&after[..close], esc_len + close + esc_len))
}

fn decode_code(body: &str, seps: &Separators) -> Option<char> {
    let mut chars = body.chars();
    let code = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match code {
        FIELD_CODE => Some(seps.field),
        COMPONENT_CODE => Some(seps.component),
        SUBCOMPONENT_CODE => Some(seps.subcomponent),
        REPETITION_CODE => Some(seps.repetition),
        ESCAPE_CODE => Some(seps.escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seps() -> Separators {
        Separators::default()
    }

    #[test]
    fn test_clean_string_borrows() {
        let value = "no special characters here";
        assert!(matches!(escape(value, &seps()), Cow::Borrowed(_)));
        assert!(matches!(unescape(value, &seps()), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_all_five() {
        let escaped = escape("|~^&\\", &seps());
        assert_eq!(escaped, "\\F\\\\R\\\\S\\\\T\\\\E\\");
    }

    #[test]
    fn test_roundtrip_mixed() {
        let original = "Smith & Jones | 5^N~2";
        let escaped = escape(original, &seps());
        assert!(!escaped.contains('|'));
        assert!(!escaped.contains('&'));
        assert_eq!(unescape(&escaped, &seps()), original);
    }

    #[test]
    fn test_unknown_sequence_passes_through() {
        let text = "before\\X0A\\after";
        assert_eq!(unescape(text, &seps()), text);
    }

    #[test]
    fn test_unterminated_passes_through() {
        let text = "dangling\\F";
        assert_eq!(unescape(text, &seps()), text);
    }

    #[test]
    fn test_validate_rejects_unknown() {
        let err = validate("a\\Z\\b", &seps()).unwrap_err();
        assert_eq!(err, Error::malformed_escape("\\Z\\"));
    }

    #[test]
    fn test_custom_escape_character() {
        let custom = Separators::new('|', '~', '^', '&', '#').unwrap();
        let escaped = escape("a|b#c", &custom);
        assert_eq!(escaped, "a#F#b#E#c");
        assert_eq!(unescape(&escaped, &custom), "a|b#c");
    }
}
