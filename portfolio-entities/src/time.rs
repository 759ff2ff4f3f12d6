use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A timestamp in UTC with millisecond precision.
///
/// The inner value is the number of milliseconds since the unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<TimestampMs> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: TimestampMs) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::try_from(*self)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
        {
            Some(formatted) => f.write_str(&formatted),
            // Out of the representable range
            None => write!(f, "{}ms", self.0),
        }
    }
}
