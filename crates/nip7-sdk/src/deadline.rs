use chrono::{DateTime, TimeDelta, Utc};

/// Catapult nemesis block timestamp, in milliseconds since the Unix epoch.
/// Deadlines are encoded relative to it.
pub const NEMESIS_EPOCH_MS: i64 = 1_459_468_800_000;

/// Transaction deadline in milliseconds since the nemesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deadline(u64);

impl Deadline {
    /// A deadline `hours` from now, clamped to the representable range.
    pub fn create(hours: i64) -> Self {
        let at = TimeDelta::try_hours(hours)
            .and_then(|delta| Utc::now().checked_add_signed(delta))
            .unwrap_or(if hours < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        Self::from_datetime(at)
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        let relative = at.timestamp_millis() - NEMESIS_EPOCH_MS;
        Self(relative.max(0) as u64)
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.0).ok()?.checked_add(NEMESIS_EPOCH_MS)?;
        DateTime::from_timestamp_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_in_the_future() {
        let now = Deadline::from_datetime(Utc::now());
        let later = Deadline::create(1);
        assert!(later > now);
        assert!(later.raw() - now.raw() <= 3_600_000 + 1_000);
    }

    #[test]
    fn out_of_range_hours_clamp() {
        let far = Deadline::create(i64::MAX);
        assert!(far > Deadline::create(1));
        assert_eq!(far, Deadline::from_datetime(DateTime::<Utc>::MAX_UTC));
        assert_eq!(Deadline::create(i64::MIN).raw(), 0);
    }

    #[test]
    fn raw_round_trip_through_datetime() {
        let deadline = Deadline::from_raw(0x19_4E2B_A525);
        let at = deadline.to_datetime().unwrap();
        assert_eq!(Deadline::from_datetime(at), deadline);
    }

    #[test]
    fn nemesis_is_zero() {
        let nemesis = DateTime::from_timestamp_millis(NEMESIS_EPOCH_MS).unwrap();
        assert_eq!(Deadline::from_datetime(nemesis).raw(), 0);
    }
}
