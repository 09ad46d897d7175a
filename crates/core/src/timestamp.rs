//! Calendar reconstruction for the time-based UUID versions.
//!
//! v1 and v6 both carry a 60-bit count of 100 ns ticks since the Gregorian
//! reform date (1582-10-15T00:00:00Z); they differ only in how the count is
//! split across the hex groups. v7 carries 48 bits of Unix milliseconds.
//! Reconstruction is best-effort: a value that cannot be placed on the
//! calendar is reported as its raw hex composite instead of failing the
//! decode.

use chrono::{DateTime, Local, Utc};

/// Milliseconds from the Gregorian reform date to the Unix epoch.
const GREGORIAN_TO_UNIX_MS: i64 = 12_219_292_800_000;

/// Output mode for reconstructed timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeDisplay {
    /// `YYYY-MM-DD HH:MM:SS.mmm[.uuu] UTC`
    #[default]
    Utc,
    /// `MM/DD/YYYY, HH:MM:SS.mmm[.uuu] AM|PM` in the system timezone.
    Local,
}

/// Reassembles the v1 tick count: time_high (12 bits), time_mid (16 bits),
/// time_low (32 bits).
pub(crate) fn unordered_ticks(high: &str, mid: &str, low: &str) -> Option<u64> {
    Some((hex(high)? << 48) | (hex(mid)? << 32) | hex(low)?)
}

/// Reassembles the v6 tick count: time_high (32 bits), time_mid (16 bits),
/// time_low (12 bits).
pub(crate) fn ordered_ticks(high: &str, mid: &str, low: &str) -> Option<u64> {
    Some((hex(high)? << 28) | (hex(mid)? << 12) | hex(low)?)
}

pub(crate) fn hex(field: &str) -> Option<u64> {
    u64::from_str_radix(field, 16).ok()
}

/// Renders a Gregorian-epoch tick count, with the microsecond remainder
/// injected after the millisecond field.
pub(crate) fn render_gregorian(ticks: Option<u64>, raw_hex: &str, display: TimeDisplay) -> String {
    let millis = ticks.map(|t| (t / 10_000) as i64 - GREGORIAN_TO_UNIX_MS);
    let micros = ticks.map(|t| (t % 10_000) / 10);
    render(millis, micros.map(|m| m as u32), raw_hex, display)
}

/// Renders a Unix millisecond count. v7 encodes nothing finer than a
/// millisecond, so no microsecond field is injected.
pub(crate) fn render_unix_millis(
    millis: Option<u64>,
    raw_hex: &str,
    display: TimeDisplay,
) -> String {
    render(millis.map(|m| m as i64), None, raw_hex, display)
}

fn render(
    unix_millis: Option<i64>,
    micros: Option<u32>,
    raw_hex: &str,
    display: TimeDisplay,
) -> String {
    let Some(utc) = unix_millis.and_then(DateTime::<Utc>::from_timestamp_millis) else {
        tracing::warn!("timestamp outside the calendar range, reporting raw hex: 0x{raw_hex}");
        return format!("0x{raw_hex}");
    };
    let micros_field = match micros {
        Some(m) => format!(".{m:03}"),
        None => String::new(),
    };
    match display {
        TimeDisplay::Utc => {
            format!("{}{} UTC", utc.format("%Y-%m-%d %H:%M:%S%.3f"), micros_field)
        }
        TimeDisplay::Local => {
            let local = utc.with_timezone(&Local);
            format!(
                "{}{} {}",
                local.format("%m/%d/%Y, %I:%M:%S%.3f"),
                micros_field,
                local.format("%p")
            )
        }
    }
}
