//! Timestamp formatting helpers

use chrono::{DateTime, Utc};

/// Format a timestamp as a fixed-width date string for file names,
/// `%Y%m%dT%H%M%SZ` (UTC, truncated to second precision).
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ru_di_cy::timestamp::file_datestr;
///
/// let t = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(file_datestr(t), "20200102T030405Z");
/// ```
#[must_use]
pub fn file_datestr(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}
