//! Variant/version dispatch.
//!
//! Decoding is a two-level lookup: the variant selects one of three
//! 16-entry version tables, and the table entry names the field-layout
//! decoder to run. Only the RFC 4122/9562 table has named layouts; the NCS
//! and Microsoft GUID families decode every version generically.

/// UUID family selector, the top two bits of group 4's first nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VariantKind {
    /// Bit patterns `00` and `01`: the pre-RFC Apollo NCS encoding.
    NcsCompatibility,
    /// Bit pattern `10`: RFC 4122/9562.
    Rfc,
    /// Bit pattern `11`: Microsoft GUID, plus the future-reserved space.
    MicrosoftGuid,
}

impl VariantKind {
    /// Maps the raw two-bit variant value onto its family.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 | 1 => Self::NcsCompatibility,
            2 => Self::Rfc,
            _ => Self::MicrosoftGuid,
        }
    }

    /// Human-readable family name.
    pub fn text(self) -> &'static str {
        match self {
            Self::NcsCompatibility => "NCS compatibility",
            Self::Rfc => "RFC 4122/9562",
            Self::MicrosoftGuid => "Microsoft GUID",
        }
    }
}

/// Field-layout decoders a version table entry can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DecoderKind {
    /// v1: Gregorian time-based, fields stored low-to-high.
    Gregorian,
    /// v6: Gregorian time-based, fields stored high-to-low.
    ReorderedGregorian,
    /// v3: embedded MD5 fragments.
    Md5,
    /// v5: embedded SHA-1 fragments.
    Sha1,
    /// v4: random payload.
    Random,
    /// v7: 48-bit Unix millisecond timestamp plus random payload.
    UnixMs,
    /// v8: vendor-defined payload.
    Custom,
    /// Reserved, undocumented, or pre-RFC versions: opaque three-part split.
    Generic,
}

/// RFC 4122/9562 version table. Versions 0 and 15 decode generically and
/// carry reserved text; 2 (DCE Security) has no documented field layout.
const RFC_VERSIONS: [DecoderKind; 16] = [
    DecoderKind::Generic,
    DecoderKind::Gregorian,
    DecoderKind::Generic,
    DecoderKind::Md5,
    DecoderKind::Random,
    DecoderKind::Sha1,
    DecoderKind::ReorderedGregorian,
    DecoderKind::UnixMs,
    DecoderKind::Custom,
    DecoderKind::Generic,
    DecoderKind::Generic,
    DecoderKind::Generic,
    DecoderKind::Generic,
    DecoderKind::Generic,
    DecoderKind::Generic,
    DecoderKind::Generic,
];

/// Version bits predate the version concept in the NCS era.
const NCS_VERSIONS: [DecoderKind; 16] = [DecoderKind::Generic; 16];

/// Microsoft never documented per-version GUID layouts.
const GUID_VERSIONS: [DecoderKind; 16] = [DecoderKind::Generic; 16];

pub(crate) fn decoder_for(variant: VariantKind, version: u8) -> DecoderKind {
    let table = match variant {
        VariantKind::NcsCompatibility => &NCS_VERSIONS,
        VariantKind::Rfc => &RFC_VERSIONS,
        VariantKind::MicrosoftGuid => &GUID_VERSIONS,
    };
    table[usize::from(version & 0x0f)]
}

pub(crate) fn version_text(variant: VariantKind, version: u8) -> &'static str {
    match (variant, version) {
        (_, 0) => "Reserved / NIL",
        (_, 15) => "Reserved / MAX",
        (VariantKind::Rfc, 1) => "Gregorian time-based",
        (VariantKind::Rfc, 2) => "DCE Security",
        (VariantKind::Rfc, 3) => "Name-based (MD5)",
        (VariantKind::Rfc, 4) => "Random",
        (VariantKind::Rfc, 5) => "Name-based (SHA-1)",
        (VariantKind::Rfc, 6) => "Reordered Gregorian time-based",
        (VariantKind::Rfc, 7) => "Unix Epoch time-based",
        (VariantKind::Rfc, 8) => "Custom",
        (VariantKind::Rfc, _) => "Reserved for future definition",
        (VariantKind::NcsCompatibility, _) => "Undefined (NCS era)",
        (VariantKind::MicrosoftGuid, _) => "Undocumented (Microsoft GUID)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_bits() {
        assert_eq!(VariantKind::from_bits(0), VariantKind::NcsCompatibility);
        assert_eq!(VariantKind::from_bits(1), VariantKind::NcsCompatibility);
        assert_eq!(VariantKind::from_bits(2), VariantKind::Rfc);
        assert_eq!(VariantKind::from_bits(3), VariantKind::MicrosoftGuid);
    }

    #[test]
    fn rfc_table_names_decoders() {
        assert_eq!(decoder_for(VariantKind::Rfc, 1), DecoderKind::Gregorian);
        assert_eq!(decoder_for(VariantKind::Rfc, 3), DecoderKind::Md5);
        assert_eq!(decoder_for(VariantKind::Rfc, 4), DecoderKind::Random);
        assert_eq!(decoder_for(VariantKind::Rfc, 5), DecoderKind::Sha1);
        assert_eq!(
            decoder_for(VariantKind::Rfc, 6),
            DecoderKind::ReorderedGregorian
        );
        assert_eq!(decoder_for(VariantKind::Rfc, 7), DecoderKind::UnixMs);
        assert_eq!(decoder_for(VariantKind::Rfc, 8), DecoderKind::Custom);
    }

    #[test]
    fn undocumented_versions_fall_back_to_generic() {
        assert_eq!(decoder_for(VariantKind::Rfc, 2), DecoderKind::Generic);
        assert_eq!(decoder_for(VariantKind::Rfc, 9), DecoderKind::Generic);
        assert_eq!(decoder_for(VariantKind::Rfc, 14), DecoderKind::Generic);
        for version in 0..16 {
            assert_eq!(
                decoder_for(VariantKind::NcsCompatibility, version),
                DecoderKind::Generic
            );
            assert_eq!(
                decoder_for(VariantKind::MicrosoftGuid, version),
                DecoderKind::Generic
            );
        }
    }

    #[test]
    fn version_text_by_family() {
        assert_eq!(version_text(VariantKind::Rfc, 2), "DCE Security");
        assert_eq!(version_text(VariantKind::Rfc, 0), "Reserved / NIL");
        assert_eq!(version_text(VariantKind::MicrosoftGuid, 15), "Reserved / MAX");
        assert_eq!(
            version_text(VariantKind::Rfc, 11),
            "Reserved for future definition"
        );
        assert_eq!(
            version_text(VariantKind::NcsCompatibility, 4),
            "Undefined (NCS era)"
        );
        assert_eq!(
            version_text(VariantKind::MicrosoftGuid, 4),
            "Undocumented (Microsoft GUID)"
        );
    }
}
