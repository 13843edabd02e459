//! Resolving the local calendar date from a canonical timezone name.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// The UTC offset for `canonical_timezone`, e.g. "Pacific/Auckland", at the
/// current instant. Returns `None` for unknown timezone names.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's calendar date in the timezone given by `offset`.
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

#[cfg(test)]
mod tests {
    use time::UtcOffset;

    use super::get_local_offset;

    #[test]
    fn known_timezone_resolves_to_an_offset() {
        assert!(get_local_offset("Pacific/Auckland").is_some());
        assert_eq!(get_local_offset("UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn unknown_timezone_resolves_to_none() {
        assert_eq!(get_local_offset("Middle/Nowhere"), None);
    }
}
