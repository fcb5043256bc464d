//! HL7 v2.x Pipe-Encoding Rules
//!
//! This module documents the delimited wire format as implemented by this
//! library.
//!
//! # Overview
//!
//! An HL7 v2.x message is a sequence of segments, one per line. Each segment
//! is a 3-letter uppercase identifier followed by delimiter-separated field
//! values. The format uses a strict hierarchy of four separator characters
//! plus one escape character; the conventional set is:
//!
//! | Role | Character |
//! |------|-----------|
//! | Field separator | `\|` |
//! | Repetition separator | `~` |
//! | Component separator | `^` |
//! | Subcomponent separator | `&` |
//! | Escape character | `\` |
//!
//! All five are configurable per message; the message header advertises the
//! set in effect (see *The message header* below).
//!
//! # Separator hierarchy
//!
//! Separators nest strictly:
//!
//! ```text
//! field separator  >  repetition  >  component  >  subcomponent
//! ```
//!
//! A split at one level never touches a separator belonging to a deeper
//! level. A field may be:
//!
//! - empty (the value is absent),
//! - a scalar leaf,
//! - a component-separator-joined composite, each component of which may
//!   itself be a subcomponent-separated composite,
//! - or a repetition-separator-joined list of any of the former.
//!
//! ```text
//! PID|3|123^4^M11~456^7^M11|...
//!       \_______________/
//!        two repetitions, each a 3-component composite
//! ```
//!
//! # Trailing-empty trimming
//!
//! Encoders omit the trailing run of empty fields (and components, and
//! subcomponents):
//!
//! ```text
//! NTE|1|L          not  NTE|1|L||
//! ```
//!
//! Interior empties are kept as placeholders so positions stay aligned:
//!
//! ```text
//! NTE|1||comment   (field 2 absent, field 3 present)
//! ```
//!
//! Decoders treat a missing trailing field and an empty interior field the
//! same way: the value is absent. Extra trailing fields beyond what a schema
//! declares are ignored, which keeps older schemas forward-compatible with
//! newer message versions.
//!
//! # Escape sequences
//!
//! Literal delimiter characters inside leaf values are escaped with the
//! escape character bracketing a one-letter mnemonic:
//!
//! | Sequence | Literal |
//! |----------|---------|
//! | `\F\` | field separator |
//! | `\S\` | component separator |
//! | `\T\` | subcomponent separator |
//! | `\R\` | repetition separator |
//! | `\E\` | escape character |
//!
//! The standard defines further sequences (highlighting `\H\`/`\N\`, hex data
//! `\Xdd..\`, locally defined `\Zdd..\`). This library passes those through
//! verbatim in both directions rather than interpreting them.
//!
//! # Scalar rendering
//!
//! - **Numbers** render with ASCII digits and `.` as the decimal point, no
//!   grouping separators, independent of any process locale.
//! - **Date/times** render as fixed-width digit strings that grow to the
//!   right with precision: `YYYY`, `YYYYMM`, `YYYYMMDD`, `YYYYMMDDHHMM`,
//!   `YYYYMMDDHHMMSS`.
//! - **Empty** is absence, for every scalar domain. `0` and the empty string
//!   are different values.
//!
//! # The message header
//!
//! The MSH segment carries the delimiter set itself. The character
//! immediately after `MSH` is the field separator in effect, and field 1 (the
//! four characters after that) is the encoding-characters string: component,
//! repetition, escape, subcomponent, in that order:
//!
//! ```text
//! MSH|^~\&|SENDING_APP|SENDING_FAC|...
//!    ^----
//!    field separator, then MSH-2 = ^~\&
//! ```
//!
//! Because these two positions *define* the delimiters, they are fixed,
//! read-only, and derived from the active separator set rather than decoded
//! or encoded as ordinary fields.
//!
//! # Segment identifiers
//!
//! The leading token of every segment is compared case-insensitively against
//! the expected 3-letter id before any field is decoded; a mismatch is a
//! hard error, since it means the line was handed to the wrong schema.
//!
//! # A complete example
//!
//! ```text
//! NTE|1|L|Free text~more text|RE
//! ```
//!
//! decoded against the NTE schema yields
//!
//! ```text
//! setId           = 1
//! sourceOfComment = "L"
//! comment         = ["Free text", "more text"]
//! commentType     = "RE"
//! ```
//!
//! and re-encoding those values reproduces the identical line.

// This module contains only documentation; no implementation code
