//! Per-version field decoders.
//!
//! Each decoder is a pure function over the split sub-fields; the dispatch
//! tables in [`crate::dispatch`] decide which one runs. Only the time-based
//! layouts look at the display mode.

use crate::dispatch::DecoderKind;
use crate::fields::SplitFields;
use crate::record::{
    HashAlgorithm, HashFields, NodeField, OpaqueParts, TimeFields, UnixTimeFields, VersionFields,
};
use crate::timestamp::{self, TimeDisplay};

pub(crate) fn run(kind: DecoderKind, split: &SplitFields, display: TimeDisplay) -> VersionFields {
    match kind {
        DecoderKind::Gregorian => gregorian(split, display),
        DecoderKind::ReorderedGregorian => reordered_gregorian(split, display),
        DecoderKind::Md5 => VersionFields::NameBased(name_based(split, HashAlgorithm::Md5)),
        DecoderKind::Sha1 => VersionFields::NameBased(name_based(split, HashAlgorithm::Sha1)),
        DecoderKind::Random => VersionFields::Random(three_part(split)),
        DecoderKind::UnixMs => unix_time(split, display),
        DecoderKind::Custom => VersionFields::Custom(three_part(split)),
        DecoderKind::Generic => VersionFields::Opaque(three_part(split)),
    }
}

/// v1 stores the tick count low-to-high: group 1 is time_low, group 2 is
/// time_mid, and the group 3 remainder is time_high.
fn gregorian(split: &SplitFields, display: TimeDisplay) -> VersionFields {
    let high = &split.part_b;
    let mid = &split.part_a0;
    let low = &split.part_a1;
    let raw = format!("{high}{mid}{low}");
    let ticks = timestamp::unordered_ticks(high, mid, low);

    VersionFields::GregorianTime(time_fields(
        split,
        high,
        mid,
        low,
        timestamp::render_gregorian(ticks, &raw, display),
    ))
}

/// v6 stores the same tick count high-to-low, so the fields read straight
/// off the groups.
fn reordered_gregorian(split: &SplitFields, display: TimeDisplay) -> VersionFields {
    let high = &split.part_a1;
    let mid = &split.part_a0;
    let low = &split.part_b;
    let raw = format!("{high}{mid}{low}");
    let ticks = timestamp::ordered_ticks(high, mid, low);

    VersionFields::ReorderedGregorianTime(time_fields(
        split,
        high,
        mid,
        low,
        timestamp::render_gregorian(ticks, &raw, display),
    ))
}

fn time_fields(
    split: &SplitFields,
    high: &str,
    mid: &str,
    low: &str,
    rendered: String,
) -> TimeFields {
    TimeFields {
        time_high: high.to_owned(),
        time_mid: mid.to_owned(),
        time_low: low.to_owned(),
        clock_seq: split.part_c2.clone(),
        node: NodeField::new(format!("{}{}", split.part_c1, split.part_c0)),
        timestamp: rendered,
    }
}

/// v3/v5 carry fragments of a name hash; the fragments are reported as
/// stored, never recomputed.
fn name_based(split: &SplitFields, algorithm: HashAlgorithm) -> HashFields {
    let high = split.part_a();
    let mid = split.part_b.clone();
    let low = split.part_c();
    let digest = format!("{high}{mid}{low}");

    HashFields {
        algorithm,
        high,
        mid,
        low,
        digest,
    }
}

fn unix_time(split: &SplitFields, display: TimeDisplay) -> VersionFields {
    let unix_ts_ms = split.part_a();
    let rand_a = split.part_b.clone();
    let rand_b = split.part_c();
    let combined = format!("{rand_a}{rand_b}");
    let millis = timestamp::hex(&unix_ts_ms);

    VersionFields::UnixTime(UnixTimeFields {
        timestamp: timestamp::render_unix_millis(millis, &unix_ts_ms, display),
        unix_ts_ms,
        rand_a,
        rand_b,
        combined,
    })
}

fn three_part(split: &SplitFields) -> OpaqueParts {
    let part_a = split.part_a();
    let part_b = split.part_b.clone();
    let part_c = split.part_c();
    let combined = format!("{part_a}{part_b}{part_c}");

    OpaqueParts {
        part_a,
        part_b,
        part_c,
        combined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(uuid: &str) -> SplitFields {
        SplitFields::parse(uuid).unwrap()
    }

    #[test]
    fn gregorian_maps_groups_low_to_high() {
        let fields = run(
            DecoderKind::Gregorian,
            &split("C232AB00-9414-11EC-B3C8-6F6BDECED846"),
            TimeDisplay::Utc,
        );

        let VersionFields::GregorianTime(t) = fields else {
            panic!("expected the v1 layout, got {fields:?}");
        };
        assert_eq!(t.time_high, "1ec");
        assert_eq!(t.time_mid, "9414");
        assert_eq!(t.time_low, "c232ab00");
        assert_eq!(t.clock_seq, "33c8");
        assert_eq!(t.node.raw, "6f6bdeced846");
        assert!(!t.node.multicast);
        assert_eq!(t.timestamp, "2022-02-22 19:22:22.000.000 UTC");
    }

    #[test]
    fn reordered_gregorian_maps_groups_high_to_low() {
        let fields = run(
            DecoderKind::ReorderedGregorian,
            &split("1EC9414C-232A-6B00-B3C8-9F6BDECED846"),
            TimeDisplay::Utc,
        );

        let VersionFields::ReorderedGregorianTime(t) = fields else {
            panic!("expected the v6 layout, got {fields:?}");
        };
        assert_eq!(t.time_high, "1ec9414c");
        assert_eq!(t.time_mid, "232a");
        assert_eq!(t.time_low, "b00");
        assert!(t.node.multicast);
        // Same instant as the v1 example: the groups are reordered, the
        // tick count is not.
        assert_eq!(t.timestamp, "2022-02-22 19:22:22.000.000 UTC");
    }

    #[test]
    fn name_based_concatenates_fragments() {
        let fields = run(
            DecoderKind::Md5,
            &split("5df41881-3aed-3515-88a7-2f4a814cf09e"),
            TimeDisplay::Utc,
        );

        let VersionFields::NameBased(h) = fields else {
            panic!("expected a hash layout, got {fields:?}");
        };
        assert_eq!(h.algorithm, HashAlgorithm::Md5);
        assert_eq!(h.high, "5df418813aed");
        assert_eq!(h.mid, "515");
        assert_eq!(h.low, "08a72f4a814cf09e");
        assert_eq!(h.digest, format!("{}{}{}", h.high, h.mid, h.low));
    }

    #[test]
    fn unix_time_reads_48_bit_millis() {
        let fields = run(
            DecoderKind::UnixMs,
            &split("017F22E2-79B0-7CC3-98C4-DC0C0C07398F"),
            TimeDisplay::Utc,
        );

        let VersionFields::UnixTime(u) = fields else {
            panic!("expected the v7 layout, got {fields:?}");
        };
        assert_eq!(u.unix_ts_ms, "017f22e279b0");
        assert_eq!(u.rand_a, "cc3");
        assert_eq!(u.rand_b, "18c4dc0c0c07398f");
        assert_eq!(u.combined, "cc318c4dc0c0c07398f");
        assert_eq!(u.timestamp, "2022-02-22 19:22:22.000 UTC");
    }

    #[test]
    fn three_part_layouts_share_the_split() {
        let source = split("919108f7-52d1-4320-9bac-f847db4148a8");

        for kind in [DecoderKind::Random, DecoderKind::Custom, DecoderKind::Generic] {
            let (part_a, part_b, part_c, combined) = match run(kind, &source, TimeDisplay::Utc) {
                VersionFields::Random(p)
                | VersionFields::Custom(p)
                | VersionFields::Opaque(p) => (p.part_a, p.part_b, p.part_c, p.combined),
                other => panic!("expected a three-part layout, got {other:?}"),
            };
            assert_eq!(part_a, "919108f752d1");
            assert_eq!(part_b, "320");
            assert_eq!(part_c, "1bacf847db4148a8");
            assert_eq!(combined, format!("{part_a}{part_b}{part_c}"));
        }
    }
}
