//! Wall-clock timestamps for per-draw reseeding.

use chrono::Utc;

/// Current wall-clock time in nanoseconds since the Unix epoch.
///
/// Falls back to the sub-second nanosecond component when the full
/// timestamp does not fit in an `i64` (after the year 2262).
pub fn timestamp_nanos() -> u64 {
    let now = Utc::now();
    match now.timestamp_nanos_opt() {
        Some(nanos) => nanos as u64,
        None => u64::from(now.timestamp_subsec_nanos()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        let lower = 1_577_836_800_000_000_000_u64;
        assert!(timestamp_nanos() > lower);
    }
}
