//! Waktu di wire: nanoseconds sejak epoch, milliseconds untuk interval,
//! hari sejak epoch untuk tanggal bursa.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Days, NaiveDate, Utc};

use super::primitive::Primitive;

/// UTC timestamp in nanoseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcTimestampNanos(pub u64);

impl UtcTimestampNanos {
    /// Null value of `UTCTimestampNanosOptional`.
    pub const NULL: Self = Self(0);

    /// Timestamp saat ini
    #[inline(always)]
    pub fn now() -> Self {
        Self(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0),
        )
    }

    #[inline(always)]
    pub const fn nanos(&self) -> u64 {
        self.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        let secs = (self.0 / 1_000_000_000) as i64;
        let nanos = (self.0 % 1_000_000_000) as u32;
        DateTime::from_timestamp(secs, nanos).unwrap_or_default()
    }

    /// Timestamps before the epoch saturate to zero.
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_nanos_opt().unwrap_or(0).max(0) as u64)
    }
}

impl Primitive for UtcTimestampNanos {
    const SIZE: usize = 8;

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        Self(u64::read_le(buf))
    }

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        self.0.write_le(buf);
    }
}

impl fmt::Debug for UtcTimestampNanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for UtcTimestampNanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y%m%d-%H:%M:%S%.9f"))
    }
}

/// Time interval in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DeltaInMillis(pub u64);

impl DeltaInMillis {
    #[inline(always)]
    pub const fn millis(&self) -> u64 {
        self.0
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    pub fn from_duration(value: Duration) -> Self {
        Self(value.as_millis() as u64)
    }
}

impl Primitive for DeltaInMillis {
    const SIZE: usize = 8;

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        Self(u64::read_le(buf))
    }

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        self.0.write_le(buf);
    }
}

/// Local market date: days since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalMktDate(pub u16);

impl LocalMktDate {
    /// Null value of `LocalMktDateOptional`.
    pub const NULL: Self = Self(0);

    #[inline(always)]
    pub const fn days(&self) -> u16 {
        self.0
    }

    pub fn to_date(&self) -> NaiveDate {
        NaiveDate::default()
            .checked_add_days(Days::new(self.0 as u64))
            .unwrap_or_default()
    }

    /// Dates outside `1970-01-01 ..= 2149-06-06` return `None`.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let days = date.signed_duration_since(NaiveDate::default()).num_days();
        u16::try_from(days).ok().map(Self)
    }

    /// Midnight UTC of the date.
    pub fn to_timestamp(&self) -> UtcTimestampNanos {
        UtcTimestampNanos(self.0 as u64 * 86_400 * 1_000_000_000)
    }

    /// Whole days of the timestamp; `None` after 2149-06-06.
    pub fn from_timestamp(value: UtcTimestampNanos) -> Option<Self> {
        u16::try_from(value.0 / (86_400 * 1_000_000_000))
            .ok()
            .map(Self)
    }
}

impl Primitive for LocalMktDate {
    const SIZE: usize = 2;

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        Self(u16::read_le(buf))
    }

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        self.0.write_le(buf);
    }
}

impl fmt::Debug for LocalMktDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LocalMktDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_date().format("%Y%m%d"))
    }
}
