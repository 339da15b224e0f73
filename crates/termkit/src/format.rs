//! Byte-size humanization.
//!
//! Scaling is binary (1024) while the labels are the short decimal-looking
//! ones the cluster reports have always used (`kb`, `mb`, ...). The threshold
//! is strict: exactly 1024 bytes stays in the smaller unit.

/// Base unit label, used when no scaling happens.
const BASE_UNIT: &str = "b";

/// Unit labels in scaling order.
const UNITS: [&str; 4] = ["kb", "mb", "gb", "tb"];

/// Scaling step between two consecutive units.
const STEP: f64 = 1024.0;

/// Scale a byte count into a `(value, unit)` pair.
///
/// ```
/// use termkit::format::humanize_bytes;
///
/// assert_eq!(humanize_bytes(2048.0), (2.0, "kb"));
/// assert_eq!(humanize_bytes(1024.0), (1024.0, "b"));
/// ```
#[must_use]
pub fn humanize_bytes(bytes: f64) -> (f64, &'static str) {
    let mut value = bytes;
    let mut unit = BASE_UNIT;

    for next in UNITS {
        if value <= STEP {
            break;
        }
        value /= STEP;
        unit = next;
    }

    (value, unit)
}

/// Format a byte count as `"<value with two decimals> <unit>"`.
///
/// ```
/// use termkit::format::format_bytes;
///
/// assert_eq!(format_bytes(0.0), "0.00 b");
/// assert_eq!(format_bytes(1025.0), "1.00 kb");
/// ```
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    let (value, unit) = humanize_bytes(bytes);
    format!("{value:.2} {unit}")
}
