//! UUID text decoding.
//!
//! uuidex-core takes a UUID in its canonical hyphenated text form and returns
//! a structured description of the fields encoded in it: variant, version,
//! the version-specific field layout, and a best-effort reconstruction of any
//! embedded timestamp.
//!
//! ## Canonical input form
//! - Five hyphen-separated hex groups of lengths 8-4-4-4-12
//! - Case-insensitive; uuidex normalises to lowercase
//! - Example: `c232ab00-9414-11ec-b3c8-6f6bdeced846`
//!
//! Malformed input (wrong grouping, wrong group lengths, non-hex characters)
//! is rejected with a [`DecodeError`] before any field is interpreted.
//!
//! ## What gets decoded
//! - The **variant** (top two bits of group 4's first nibble) selects the
//!   UUID family: NCS compatibility, RFC 4122/9562, or Microsoft GUID.
//! - The **version** (top nibble of group 3) selects the field layout within
//!   the family: Gregorian time-based (v1/v6), DCE Security (v2), name-based
//!   hashes (v3/v5), random (v4), Unix-epoch time-based (v7), custom (v8).
//!   Reserved or undocumented versions fall back to an opaque three-part
//!   layout, as does everything under the NCS and Microsoft families.
//! - The all-zero and all-`f` sentinel strings short-circuit to fixed
//!   NIL/MAX records before any dispatch.
//!
//! ## Timestamps
//! v1 and v6 carry a 60-bit count of 100 ns ticks since the Gregorian reform
//! date (1582-10-15); v7 carries 48 bits of Unix milliseconds. Both render as
//! calendar time in UTC or, on request, the system's local timezone
//! ([`TimeDisplay`]). A count that cannot be placed on the calendar is
//! reported as its raw hex composite instead of failing the decode.
//!
//! ## Output shapes
//! [`DecodedUuid`] is the structured record; its [`Display`](std::fmt::Display)
//! impl renders the human-readable field report, and
//! [`DecodedUuid::report`] flattens it into the legacy six-slot [`Report`]
//! shape.

mod decoders;
mod dispatch;
mod fields;
mod record;
mod timestamp;

pub use dispatch::VariantKind;
pub use record::{
    DecodedUuid, HashAlgorithm, HashFields, NodeField, OpaqueParts, Report, TimeFields,
    UnixTimeFields, VersionFields,
};
pub use timestamp::TimeDisplay;

/// Error type for UUID decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input did not split into five hyphen-separated groups.
    #[error("expected five hyphen-separated groups, got {count}: '{input}'")]
    GroupCount { input: String, count: usize },
    /// A group had the wrong number of characters.
    #[error("group {group} must be {expected} hex characters, got {actual}: '{input}'")]
    GroupLength {
        input: String,
        group: usize,
        expected: usize,
        actual: usize,
    },
    /// A group contained a character outside `0-9a-fA-F`.
    #[error("non-hexadecimal character in group {group}: '{input}'")]
    NonHexDigit { input: String, group: usize },
}

/// Result type for UUID decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decodes a UUID string into its field description.
///
/// `time_display` selects how reconstructed timestamps are rendered;
/// [`TimeDisplay::Utc`] is the default mode.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input is not in canonical
/// `8-4-4-4-12` hex form. Nothing else fails: unknown versions decode
/// through the generic layout and timestamp reconstruction falls back to
/// raw hex.
pub fn decode(input: &str, time_display: TimeDisplay) -> DecodeResult<DecodedUuid> {
    let split = fields::SplitFields::parse(input)?;

    // The whole-string sentinels win over bit-level dispatch.
    if let Some(sentinel) = record::sentinel_record(&split) {
        return Ok(sentinel);
    }

    let variant = VariantKind::from_bits(split.variant);
    let kind = dispatch::decoder_for(variant, split.version);
    let fields = decoders::run(kind, &split, time_display);

    Ok(DecodedUuid {
        uuid: split.uuid.clone(),
        variant: split.variant,
        variant_text: variant.text().to_owned(),
        version: split.version,
        version_text: dispatch::version_text(variant, split.version).to_owned(),
        fields,
    })
}
