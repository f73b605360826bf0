// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

/// A fixed "medium date, no time" format, e.g. `Mar 3, 1990`.
///
/// Parsing accepts both abbreviated and full month names (`Mar 3, 1990`, `March 3, 1990`).
/// Parsed dates resolve to midnight in `timezone`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormat {
    pub input_pattern: String,
    pub output_pattern: String,
    pub timezone: FixedOffset,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            // %B accepts the abbreviated month name as well when parsing.
            input_pattern: "%B %d, %Y".to_string(),
            output_pattern: "%b %-d, %Y".to_string(),
            timezone: Utc.fix(),
        }
    }
}

impl DateFormat {
    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(value.trim(), &self.input_pattern).ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        self.timezone
            .from_local_datetime(&midnight)
            .single()
            .map(|date| date.with_timezone(&Utc))
    }

    pub fn format(&self, date: &DateTime<Utc>) -> String {
        date.with_timezone(&self.timezone)
            .format(&self.output_pattern)
            .to_string()
    }
}
