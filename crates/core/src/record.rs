//! Decoded-record types.
//!
//! The primary shape is [`DecodedUuid`] with a [`VersionFields`] tagged union:
//! each UUID version carries a different field set, so the record is a sum
//! type discriminated by version rather than one wide struct. For consumers
//! of the legacy flat shape, [`DecodedUuid::report`] flattens the union back
//! into the six-slot [`Report`] layout.

use std::collections::BTreeMap;
use std::fmt;

use crate::fields::SplitFields;

/// A fully decoded UUID.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedUuid {
    /// The input, normalised to lowercase.
    pub uuid: String,
    /// Raw two-bit variant value (0-3).
    pub variant: u8,
    /// Variant family name, or the forced sentinel text for NIL/MAX.
    pub variant_text: String,
    /// Raw four-bit version value (0-15).
    pub version: u8,
    /// Version name within the family, or the forced sentinel text.
    pub version_text: String,
    /// Version-specific field layout.
    pub fields: VersionFields,
}

/// Per-version field layouts.
///
/// Which variant you get is decided by the dispatch tables; the two sentinel
/// variants are only produced by the whole-string NIL/MAX short-circuit and
/// carry no sub-fields at all.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "layout", rename_all = "snake_case"))]
pub enum VersionFields {
    /// The all-zero sentinel.
    Nil,
    /// The all-`f` sentinel.
    Max,
    /// v1: Gregorian time-based, fields stored low-to-high.
    GregorianTime(TimeFields),
    /// v6: Gregorian time-based, fields stored high-to-low.
    ReorderedGregorianTime(TimeFields),
    /// v3 and v5: embedded name-hash fragments.
    NameBased(HashFields),
    /// v4: random payload.
    Random(OpaqueParts),
    /// v7: Unix millisecond timestamp plus random payload.
    UnixTime(UnixTimeFields),
    /// v8: vendor-defined payload.
    Custom(OpaqueParts),
    /// Reserved, undocumented, or pre-RFC layouts.
    Opaque(OpaqueParts),
}

/// Fields shared by the two Gregorian time-based versions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeFields {
    /// High bits of the 60-bit tick count, as stored.
    pub time_high: String,
    pub time_mid: String,
    pub time_low: String,
    /// The variant-masked clock sequence group.
    pub clock_seq: String,
    pub node: NodeField,
    /// Reconstructed calendar time, or the raw hex composite when the tick
    /// count cannot be placed on the calendar.
    pub timestamp: String,
}

/// The 48-bit node identifier of v1/v6.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeField {
    /// 12 hex digits.
    pub raw: String,
    /// Bit 3 of the first nibble: set for multicast, clear for a unicast
    /// MAC address.
    pub multicast: bool,
}

impl NodeField {
    pub(crate) fn new(raw: String) -> Self {
        let multicast = raw
            .as_bytes()
            .first()
            .copied()
            .map(|b| match b {
                b'0'..=b'9' => b - b'0',
                _ => b - b'a' + 10,
            })
            .map(|nibble| nibble & 0b1000 != 0)
            .unwrap_or(false);
        Self { raw, multicast }
    }

    /// Colon-separated hex byte pairs, MAC-address style.
    pub fn mac(&self) -> String {
        self.raw
            .as_bytes()
            .chunks(2)
            .map(|pair| std::str::from_utf8(pair).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(":")
    }
}

/// Embedded hash fragments of the name-based versions.
///
/// These are the UUID's stored bits, displayed, never recomputed: the
/// version and variant nibbles have already overwritten parts of the
/// original digest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HashFields {
    pub algorithm: HashAlgorithm,
    pub high: String,
    pub mid: String,
    pub low: String,
    /// `high + mid + low`.
    pub digest: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HashAlgorithm {
    Md5,
    Sha1,
}

impl HashAlgorithm {
    pub fn label(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
        }
    }

    /// Key prefix for the flat report's named fields.
    fn key_prefix(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
        }
    }
}

/// The three-part split used by the random, custom, and generic layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpaqueParts {
    /// Groups 1-2 (12 hex digits).
    pub part_a: String,
    /// Group 3 minus the version nibble (3 hex digits).
    pub part_b: String,
    /// Variant-masked group 4 plus group 5 (16 hex digits).
    pub part_c: String,
    /// `part_a + part_b + part_c`.
    pub combined: String,
}

/// v7 fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnixTimeFields {
    /// 48-bit Unix millisecond count (12 hex digits).
    pub unix_ts_ms: String,
    /// Group 3 remainder.
    pub rand_a: String,
    /// Variant-masked group 4 plus group 5.
    pub rand_b: String,
    /// `rand_a + rand_b`.
    pub combined: String,
    /// Reconstructed calendar time, or the raw hex on calendar overflow.
    pub timestamp: String,
}

/// The legacy flat record shape.
///
/// Six generic labeled slots, a named `0x`-prefixed composite of the
/// version-specific payload, and the version-specific raw fields flattened
/// alongside. Unused slots stay empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    #[cfg_attr(feature = "serde", serde(rename = "UUID"))]
    pub uuid: String,
    #[cfg_attr(feature = "serde", serde(rename = "Variant"))]
    pub variant: u8,
    #[cfg_attr(feature = "serde", serde(rename = "VariantText"))]
    pub variant_text: String,
    #[cfg_attr(feature = "serde", serde(rename = "Version"))]
    pub version: u8,
    #[cfg_attr(feature = "serde", serde(rename = "VersionText"))]
    pub version_text: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value1Name"))]
    pub value1_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value1"))]
    pub value1: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value2Name"))]
    pub value2_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value2"))]
    pub value2: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value3Name"))]
    pub value3_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value3"))]
    pub value3: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value4Name"))]
    pub value4_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value4"))]
    pub value4: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value5Name"))]
    pub value5_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value5"))]
    pub value5: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value6Name"))]
    pub value6_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value6"))]
    pub value6: String,
    #[cfg_attr(feature = "serde", serde(rename = "NumberName"))]
    pub number_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "NumberText"))]
    pub number_text: String,
    /// Version-specific raw fields (`time_low`, `clock_seq`, `md5_high`, ...).
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub named: BTreeMap<String, String>,
}

impl Report {
    fn fill_slots(&mut self, slots: Vec<(String, String)>) {
        let targets = [
            (&mut self.value1_name, &mut self.value1),
            (&mut self.value2_name, &mut self.value2),
            (&mut self.value3_name, &mut self.value3),
            (&mut self.value4_name, &mut self.value4),
            (&mut self.value5_name, &mut self.value5),
            (&mut self.value6_name, &mut self.value6),
        ];
        for ((name_slot, value_slot), (name, value)) in targets.into_iter().zip(slots) {
            *name_slot = name;
            *value_slot = value;
        }
    }

    fn set_number(&mut self, name: &str, composite: &str) {
        self.number_name = name.to_owned();
        self.number_text = format!("0x{composite}");
    }

    fn name(&mut self, key: &str, value: impl AsRef<str>) {
        self.named.insert(key.to_owned(), value.as_ref().to_owned());
    }

    /// The six slots in order, for rendering.
    pub fn slots(&self) -> [(&str, &str); 6] {
        [
            (&self.value1_name, &self.value1),
            (&self.value2_name, &self.value2),
            (&self.value3_name, &self.value3),
            (&self.value4_name, &self.value4),
            (&self.value5_name, &self.value5),
            (&self.value6_name, &self.value6),
        ]
    }
}

impl DecodedUuid {
    /// Flattens the record into the legacy six-slot shape.
    pub fn report(&self) -> Report {
        let mut report = Report {
            uuid: self.uuid.clone(),
            variant: self.variant,
            variant_text: self.variant_text.clone(),
            version: self.version,
            version_text: self.version_text.clone(),
            ..Report::default()
        };

        match &self.fields {
            VersionFields::Nil | VersionFields::Max => {}
            VersionFields::GregorianTime(t) | VersionFields::ReorderedGregorianTime(t) => {
                report.fill_slots(vec![
                    ("Time High".to_owned(), t.time_high.clone()),
                    ("Time Mid".to_owned(), t.time_mid.clone()),
                    ("Time Low".to_owned(), t.time_low.clone()),
                    ("Clock Sequence".to_owned(), t.clock_seq.clone()),
                    ("Node".to_owned(), t.node.mac()),
                    ("Timestamp".to_owned(), t.timestamp.clone()),
                ]);
                let composite = format!("{}{}{}", t.time_high, t.time_mid, t.time_low);
                report.set_number("Timestamp", &composite);
                report.name("time_high", &t.time_high);
                report.name("time_mid", &t.time_mid);
                report.name("time_low", &t.time_low);
                report.name("clock_seq", &t.clock_seq);
                report.name("node", t.node.mac());
                report.name("multicast", t.node.multicast.to_string());
                report.name("timestamp", &t.timestamp);
            }
            VersionFields::NameBased(h) => {
                let label = h.algorithm.label();
                report.fill_slots(vec![
                    (format!("{label} High"), h.high.clone()),
                    (format!("{label} Mid"), h.mid.clone()),
                    (format!("{label} Low"), h.low.clone()),
                ]);
                report.set_number(label, &h.digest);
                let prefix = h.algorithm.key_prefix();
                report.name(&format!("{prefix}_high"), &h.high);
                report.name(&format!("{prefix}_mid"), &h.mid);
                report.name(&format!("{prefix}_low"), &h.low);
                report.name(label, &h.digest);
            }
            VersionFields::Random(p) => {
                report.fill_slots(vec![
                    ("Random A".to_owned(), p.part_a.clone()),
                    ("Random B".to_owned(), p.part_b.clone()),
                    ("Random C".to_owned(), p.part_c.clone()),
                ]);
                report.set_number("Random", &p.combined);
                report.name("random_a", &p.part_a);
                report.name("random_b", &p.part_b);
                report.name("random_c", &p.part_c);
                report.name("Random", &p.combined);
            }
            VersionFields::UnixTime(u) => {
                report.fill_slots(vec![
                    ("Unix Timestamp (ms)".to_owned(), u.unix_ts_ms.clone()),
                    ("Rand A".to_owned(), u.rand_a.clone()),
                    ("Rand B".to_owned(), u.rand_b.clone()),
                    ("Timestamp".to_owned(), u.timestamp.clone()),
                ]);
                report.set_number("Random", &u.combined);
                report.name("unix_ts_ms", &u.unix_ts_ms);
                report.name("rand_a", &u.rand_a);
                report.name("rand_b", &u.rand_b);
                report.name("Random", &u.combined);
                report.name("timestamp", &u.timestamp);
            }
            VersionFields::Custom(p) => {
                report.fill_slots(vec![
                    ("Custom A".to_owned(), p.part_a.clone()),
                    ("Custom B".to_owned(), p.part_b.clone()),
                    ("Custom C".to_owned(), p.part_c.clone()),
                ]);
                report.set_number("Custom", &p.combined);
                report.name("custom_a", &p.part_a);
                report.name("custom_b", &p.part_b);
                report.name("custom_c", &p.part_c);
                report.name("Custom", &p.combined);
            }
            VersionFields::Opaque(p) => {
                report.fill_slots(vec![
                    ("Part A".to_owned(), p.part_a.clone()),
                    ("Part B".to_owned(), p.part_b.clone()),
                    ("Part C".to_owned(), p.part_c.clone()),
                ]);
                report.set_number("Random", &p.combined);
                report.name("part_a", &p.part_a);
                report.name("part_b", &p.part_b);
                report.name("part_c", &p.part_c);
                report.name("Random", &p.combined);
            }
        }

        report
    }
}

impl fmt::Display for DecodedUuid {
    /// Renders the human-readable field report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report();
        write!(f, "{:<16}{}", "UUID:", report.uuid)?;
        write!(
            f,
            "\n{:<16}{} ({})",
            "Variant:", report.variant, report.variant_text
        )?;
        write!(
            f,
            "\n{:<16}{} ({})",
            "Version:", report.version, report.version_text
        )?;
        for (name, value) in report.slots() {
            if !name.is_empty() {
                write!(f, "\n{:<16}{}", format!("{name}:"), value)?;
            }
        }
        if !report.number_name.is_empty() {
            write!(
                f,
                "\n{:<16}{}",
                format!("{}:", report.number_name),
                report.number_text
            )?;
        }
        Ok(())
    }
}

/// Builds the fixed NIL/MAX record when the whole input matches a sentinel
/// literal. Numeric variant/version still come from the bits; the text
/// fields are forced and no sub-fields are populated.
pub(crate) fn sentinel_record(split: &SplitFields) -> Option<DecodedUuid> {
    let (variant_text, version_text, fields) = if split.is_nil() {
        ("NIL Value", "Reserved / NIL", VersionFields::Nil)
    } else if split.is_max() {
        ("MAX Value", "Reserved / MAX", VersionFields::Max)
    } else {
        return None;
    };

    Some(DecodedUuid {
        uuid: split.uuid.clone(),
        variant: split.variant,
        variant_text: variant_text.to_owned(),
        version: split.version,
        version_text: version_text.to_owned(),
        fields,
    })
}
