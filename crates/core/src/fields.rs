//! Hyphen-group splitting and variant/version bit extraction.
//!
//! A canonical UUID string is five hyphen-separated hex groups of lengths
//! 8-4-4-4-12. The version occupies the top nibble of group 3; the variant
//! occupies the top two bits of group 4's first nibble. Everything else is
//! version-specific payload, kept here as lowercase hex sub-strings so the
//! per-version decoders can recombine them without re-parsing the input.

use crate::{DecodeError, DecodeResult};

pub(crate) const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";
pub(crate) const MAX_UUID: &str = "ffffffff-ffff-ffff-ffff-ffffffffffff";

const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// The split sub-fields of one UUID, computed once per decode call.
///
/// All hex strings are lowercase. `part_c2` has the variant bits already
/// masked out of its first nibble.
#[derive(Clone, Debug)]
pub(crate) struct SplitFields {
    /// The whole input, normalised to lowercase.
    pub uuid: String,
    /// Top two bits of group 4's first nibble (0-3).
    pub variant: u8,
    /// Top nibble of group 3 (0-15).
    pub version: u8,
    /// Group 1 (8 hex digits, 32 bits).
    pub part_a1: String,
    /// Group 2 (4 hex digits, 16 bits).
    pub part_a0: String,
    /// Group 3 minus the version nibble (3 hex digits, 12 bits).
    pub part_b: String,
    /// Group 4 with the variant bits masked out (4 hex digits, 14 bits).
    pub part_c2: String,
    /// First 4 hex digits of group 5.
    pub part_c1: String,
    /// Last 8 hex digits of group 5.
    pub part_c0: String,
}

impl SplitFields {
    /// Splits and validates a UUID string.
    ///
    /// Validation is strict: exactly five groups, lengths 8-4-4-4-12, hex
    /// characters only. Anything else is rejected before any field is
    /// interpreted.
    pub fn parse(input: &str) -> DecodeResult<Self> {
        let lower = input.trim().to_ascii_lowercase();
        let groups: Vec<&str> = lower.split('-').collect();

        if groups.len() != GROUP_LENGTHS.len() {
            return Err(DecodeError::GroupCount {
                input: input.to_owned(),
                count: groups.len(),
            });
        }
        for (index, (group, expected)) in groups.iter().zip(GROUP_LENGTHS).enumerate() {
            if group.len() != expected {
                return Err(DecodeError::GroupLength {
                    input: input.to_owned(),
                    group: index + 1,
                    expected,
                    actual: group.len(),
                });
            }
            if !group.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
                return Err(DecodeError::NonHexDigit {
                    input: input.to_owned(),
                    group: index + 1,
                });
            }
        }

        let version = hex_nibble(groups[2].as_bytes()[0]);
        let variant_nibble = hex_nibble(groups[3].as_bytes()[0]);
        let variant = (variant_nibble >> 2) & 0b11;
        // The low two bits of the nibble belong to the payload.
        let part_c2 = format!("{:x}{}", variant_nibble & 0b11, &groups[3][1..]);

        let split = Self {
            variant,
            version,
            part_a1: groups[0].to_owned(),
            part_a0: groups[1].to_owned(),
            part_b: groups[2][1..].to_owned(),
            part_c2,
            part_c1: groups[4][..4].to_owned(),
            part_c0: groups[4][4..].to_owned(),
            uuid: lower,
        };
        Ok(split)
    }

    /// Groups 1 and 2 combined (12 hex digits, 48 bits).
    pub fn part_a(&self) -> String {
        format!("{}{}", self.part_a1, self.part_a0)
    }

    /// The masked group 4 plus group 5 (16 hex digits).
    pub fn part_c(&self) -> String {
        format!("{}{}{}", self.part_c2, self.part_c1, self.part_c0)
    }

    pub fn is_nil(&self) -> bool {
        self.uuid == NIL_UUID
    }

    pub fn is_max(&self) -> bool {
        self.uuid == MAX_UUID
    }
}

/// Value of one validated lowercase hex digit.
fn hex_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        _ => byte - b'a' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_canonical_uuid() {
        let split = SplitFields::parse("C232AB00-9414-11EC-B3C8-6F6BDECED846").unwrap();

        assert_eq!(split.uuid, "c232ab00-9414-11ec-b3c8-6f6bdeced846");
        assert_eq!(split.part_a1, "c232ab00");
        assert_eq!(split.part_a0, "9414");
        assert_eq!(split.version, 1);
        assert_eq!(split.part_b, "1ec");
        assert_eq!(split.variant, 2);
        // 'b' = 0b1011: top two bits are the variant, low two stay in part_c2.
        assert_eq!(split.part_c2, "33c8");
        assert_eq!(split.part_c1, "6f6b");
        assert_eq!(split.part_c0, "deced846");
    }

    #[test]
    fn combines_composite_parts() {
        let split = SplitFields::parse("5df41881-3aed-3515-88a7-2f4a814cf09e").unwrap();

        assert_eq!(split.part_a(), "5df418813aed");
        assert_eq!(split.part_c(), "08a72f4a814cf09e");
    }

    #[test]
    fn extracts_variant_bits() {
        let variant_of = |group4: &str| {
            let uuid = format!("00000000-0000-0000-{group4}-000000000000");
            SplitFields::parse(&uuid).unwrap().variant
        };

        assert_eq!(variant_of("0abc"), 0);
        assert_eq!(variant_of("4abc"), 1);
        assert_eq!(variant_of("8abc"), 2);
        assert_eq!(variant_of("cabc"), 3);
        assert_eq!(variant_of("fabc"), 3);
    }

    #[test]
    fn extracts_version_nibble() {
        for version in 0..16u8 {
            let uuid = format!("00000000-0000-{version:x}000-8000-000000000000");
            assert_eq!(SplitFields::parse(&uuid).unwrap().version, version);
        }
    }

    #[test]
    fn sentinel_predicates() {
        let nil = SplitFields::parse("00000000-0000-0000-0000-000000000000").unwrap();
        assert!(nil.is_nil());
        assert!(!nil.is_max());

        let max = SplitFields::parse("FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF").unwrap();
        assert!(max.is_max());
        assert!(!max.is_nil());
    }

    #[test]
    fn rejects_wrong_group_count() {
        let result = SplitFields::parse("c232ab00-9414-11ec-b3c86f6bdeced846");
        assert!(matches!(result, Err(DecodeError::GroupCount { count: 4, .. })));

        let result = SplitFields::parse("no hyphens at all");
        assert!(matches!(result, Err(DecodeError::GroupCount { count: 1, .. })));
    }

    #[test]
    fn rejects_wrong_group_length() {
        let result = SplitFields::parse("c232ab0-9414-11ec-b3c8-6f6bdeced846");
        assert!(matches!(
            result,
            Err(DecodeError::GroupLength {
                group: 1,
                expected: 8,
                actual: 7,
                ..
            })
        ));

        let result = SplitFields::parse("c232ab00-9414-11ec-b3c8-6f6bdeced8461");
        assert!(matches!(
            result,
            Err(DecodeError::GroupLength { group: 5, .. })
        ));
    }

    #[test]
    fn rejects_non_hex_characters() {
        let result = SplitFields::parse("c232ab00-9414-11ec-b3c8-6f6bdecedg46");
        assert!(matches!(result, Err(DecodeError::NonHexDigit { group: 5, .. })));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(SplitFields::parse("").is_err());
    }
}
