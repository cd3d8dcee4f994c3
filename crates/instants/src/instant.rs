//! The zone-attributed point-in-time value type.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    Timelike, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::InstantError;
#[cfg(feature = "system-clock")]
use crate::provider::DEFAULT_ZONE;
use crate::zone;

/// An immutable point in time: a canonical UTC timestamp bound to the IANA
/// zone it should be read in.
///
/// The UTC timestamp is the single stored truth; every calendar field
/// (year, hour, day-of-week, …) is derived through the zone's rules on
/// access. The zone is resolved once at construction, so an `Instant` that
/// exists always has a valid zone and its accessors cannot fail.
///
/// Equality covers both the timestamp and the zone: two `Instant`s at the
/// same UTC nanosecond in different zones are *not* equal, although the
/// ordering helpers ([`Instant::is_before`] and friends) treat them as
/// simultaneous. Because of that deliberate asymmetry this type does not
/// implement `PartialOrd`.
#[derive(Clone)]
pub struct Instant {
    utc: DateTime<Utc>,
    tz: Tz,
}

impl Instant {
    /// Build an `Instant` from any offset-bearing timestamp, normalizing
    /// it to UTC. The offset may be non-zero; it is folded into the
    /// timestamp, not rejected (contrast [`zone::utc_to_local`]).
    pub fn new(value: DateTime<FixedOffset>, zone_id: &str) -> Result<Self, InstantError> {
        Ok(Self::from_utc_in(
            value.with_timezone(&Utc),
            zone::resolve_zone(zone_id)?,
        ))
    }

    /// Build an `Instant` from a UTC timestamp.
    pub fn from_utc(value: DateTime<Utc>, zone_id: &str) -> Result<Self, InstantError> {
        Ok(Self::from_utc_in(value, zone::resolve_zone(zone_id)?))
    }

    /// Interpret `local` as zone-naive wall-clock time in `zone_id`
    /// (lenient across DST gaps and overlaps) and bind the result.
    pub fn from_local(local: NaiveDateTime, zone_id: &str) -> Result<Self, InstantError> {
        let tz = zone::resolve_zone(zone_id)?;
        Ok(Self::from_utc_in(zone::local_to_utc_in(local, tz), tz))
    }

    /// Build an `Instant` over an already-resolved zone. Infallible; the
    /// factory uses this after resolving its provider's zone once.
    pub fn from_utc_in(value: DateTime<Utc>, tz: Tz) -> Self {
        Self { utc: value, tz }
    }

    /// The current moment bound to `zone_id`, or to [`DEFAULT_ZONE`] when
    /// omitted.
    ///
    /// Convenience path; production code should route through
    /// [`crate::InstantClock`] so the time source stays substitutable.
    #[cfg(feature = "system-clock")]
    pub fn now(zone_id: Option<&str>) -> Result<Self, InstantError> {
        Self::from_utc(Utc::now(), zone_id.unwrap_or(DEFAULT_ZONE))
    }

    /// The canonical UTC timestamp.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// The IANA identifier of the bound zone.
    pub fn zone_id(&self) -> &'static str {
        self.tz.name()
    }

    /// The resolved zone.
    pub fn zone(&self) -> Tz {
        self.tz
    }

    /// The wall-clock value in the bound zone (no offset attached).
    pub fn local_date_time(&self) -> NaiveDateTime {
        zone::utc_to_local_in(self.utc, self.tz)
    }

    /// The calendar date in the bound zone.
    pub fn local_date(&self) -> NaiveDate {
        self.local_date_time().date()
    }

    /// The time of day in the bound zone.
    pub fn local_time(&self) -> NaiveTime {
        self.local_date_time().time()
    }

    pub fn year(&self) -> i32 {
        self.local_date_time().year()
    }

    pub fn month(&self) -> u32 {
        self.local_date_time().month()
    }

    pub fn day(&self) -> u32 {
        self.local_date_time().day()
    }

    pub fn hour(&self) -> u32 {
        self.local_date_time().hour()
    }

    pub fn minute(&self) -> u32 {
        self.local_date_time().minute()
    }

    pub fn second(&self) -> u32 {
        self.local_date_time().second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.local_date_time().nanosecond()
    }

    pub fn day_of_week(&self) -> Weekday {
        self.local_date_time().weekday()
    }

    /// Shift by a fixed elapsed duration, zone unchanged.
    ///
    /// This is pure UTC arithmetic: crossing a DST transition changes the
    /// apparent local time-of-day, which is the point.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's representable range, matching
    /// chrono's own `+` operator.
    pub fn add(&self, delta: TimeDelta) -> Self {
        Self::from_utc_in(self.utc + delta, self.tz)
    }

    /// Shift backwards by a fixed elapsed duration, zone unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's representable range.
    pub fn subtract(&self, delta: TimeDelta) -> Self {
        Self::from_utc_in(self.utc - delta, self.tz)
    }

    /// Elapsed time from `other` to `self` (left minus right), independent
    /// of either zone.
    pub fn since(&self, other: &Instant) -> TimeDelta {
        self.utc - other.utc
    }

    /// Calendar-month arithmetic over the **UTC** calendar fields, with
    /// end-of-month clamping (Jan 31 + 1 month = Feb 29 in a leap year).
    ///
    /// Operating on UTC rather than local fields means the apparent local
    /// time-of-day can shift when a DST transition falls between the two
    /// month boundaries.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's representable range.
    pub fn add_months(&self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.utc.checked_add_months(Months::new(months as u32))
        } else {
            self.utc.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        Self::from_utc_in(shifted.expect("instant out of representable range"), self.tz)
    }

    /// Calendar-year arithmetic; see [`Instant::add_months`].
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's representable range.
    pub fn add_years(&self, years: i32) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// Midnight of this instant's *local* calendar date, converted back to
    /// UTC with the bound zone preserved. Idempotent.
    pub fn start_of_day(&self) -> Self {
        let midnight = self.local_date().and_time(NaiveTime::MIN);
        Self::from_utc_in(zone::local_to_utc_in(midnight, self.tz), self.tz)
    }

    /// The single ordering function: UTC timestamps only, zones ignored.
    pub fn cmp_utc(&self, other: &Instant) -> Ordering {
        self.utc.cmp(&other.utc)
    }

    pub fn is_before(&self, other: &Instant) -> bool {
        self.cmp_utc(other) == Ordering::Less
    }

    pub fn is_at_or_before(&self, other: &Instant) -> bool {
        self.cmp_utc(other) != Ordering::Greater
    }

    pub fn is_after(&self, other: &Instant) -> bool {
        self.cmp_utc(other) == Ordering::Greater
    }

    pub fn is_at_or_after(&self, other: &Instant) -> bool {
        self.cmp_utc(other) != Ordering::Less
    }

    /// `-1`/`0`/`1` by UTC order against a dynamically-typed argument.
    ///
    /// `None` and non-`Instant` payloads fail with
    /// [`InstantError::NotComparable`]; callers holding two `Instant`s
    /// should prefer [`Instant::cmp_utc`].
    pub fn compare_to(&self, other: Option<&dyn Any>) -> Result<i32, InstantError> {
        let Some(other) = other else {
            return Err(InstantError::NotComparable { what: "null" });
        };
        let Some(other) = other.downcast_ref::<Instant>() else {
            return Err(InstantError::NotComparable {
                what: "a value that is not an Instant",
            });
        };
        Ok(match self.cmp_utc(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }
}

/// Equality is structural over (UTC timestamp, zone); the zone is part of
/// identity, not just presentation. Written out by hand so it stays
/// independent of any internal representation or caching choice.
impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.utc == other.utc && self.tz == other.tz
    }
}

impl Eq for Instant {}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.utc.hash(state);
        self.tz.name().hash(state);
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instant")
            .field("utc", &self.utc)
            .field("zone", &self.tz.name())
            .finish()
    }
}

/// Local short date/time followed by the parenthesized zone identifier,
/// e.g. `1/1/2024 5:00 AM ( America/New_York )`.
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ( {} )",
            self.local_date_time().format("%-m/%-d/%Y %-I:%M %p"),
            self.tz.name()
        )
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use chrono::DateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Instant;

    #[derive(Serialize, Deserialize)]
    struct Repr {
        utc: String,
        zone: String,
    }

    impl Serialize for Instant {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Repr {
                utc: self.utc().to_rfc3339(),
                zone: self.zone_id().to_string(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Instant {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::deserialize(deserializer)?;
            let value = DateTime::parse_from_rfc3339(&repr.utc).map_err(de::Error::custom)?;
            Instant::new(value, &repr.zone).map_err(de::Error::custom)
        }
    }
}
