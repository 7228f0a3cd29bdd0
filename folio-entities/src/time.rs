use std::{fmt, ops};

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * 1_000)
    }

    pub const fn as_secs(self) -> i64 {
        self.0 / 1_000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        Self::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl ops::Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.whole_milliseconds() as i64)
    }
}

impl ops::Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.whole_milliseconds() as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::try_from(*self).map_err(|_| fmt::Error)?;
        let formatted = dt.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let m1 = t1.as_millis();
        let t2 = Timestamp::from_millis(m1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn convert_from_into_offset_date_time() {
        let t1 = Timestamp::from_millis(1_700_000_000_123);
        let dt = OffsetDateTime::try_from(t1).unwrap();
        assert_eq!(Timestamp::from(dt), t1);
    }

    #[test]
    fn display_rfc3339() {
        let t = Timestamp::from_secs(0);
        assert_eq!(t.to_string(), "1970-01-01T00:00:00Z");
    }
}
