//! Zone resolution and the two conversion functions everything else is
//! built on.
//!
//! The IANA rule database itself is chrono-tz's concern; this module only
//! decides *how* its answers are applied:
//!
//! - local → UTC is **lenient**: wall-clock times repeated by a fall-back
//!   transition map to the earlier of their two instants, and wall-clock
//!   times skipped by a spring-forward gap are shifted forward by the
//!   width of the gap (02:30 becomes 03:30 across a one-hour gap). Neither
//!   case is an error.
//! - UTC → local is **strict**: the input must carry a zero offset, and
//!   the result is a zone-naive wall-clock value with the offset
//!   discarded.

use chrono::offset::LocalResult;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::InstantError;

/// Look up a zone identifier in the tzdb.
///
/// An empty identifier is a validation error distinct from an unknown one.
pub fn resolve_zone(zone_id: &str) -> Result<Tz, InstantError> {
    if zone_id.is_empty() {
        return Err(InstantError::MissingZone);
    }
    zone_id.parse::<Tz>().map_err(|_| InstantError::ZoneNotFound {
        zone_id: zone_id.to_string(),
    })
}

/// Interpret `local` as wall-clock time in `zone_id` and return the
/// corresponding UTC instant, resolving DST ambiguity leniently.
pub fn local_to_utc(local: NaiveDateTime, zone_id: &str) -> Result<DateTime<Utc>, InstantError> {
    Ok(local_to_utc_in(local, resolve_zone(zone_id)?))
}

/// Convert a true UTC value to the wall-clock time of `zone_id`.
///
/// Unlike [`crate::Instant::new`], which normalizes any offset, this
/// function rejects inputs carrying a non-zero offset.
pub fn utc_to_local(
    value: DateTime<FixedOffset>,
    zone_id: &str,
) -> Result<NaiveDateTime, InstantError> {
    if value.offset().local_minus_utc() != 0 {
        return Err(InstantError::NotUtc {
            offset: *value.offset(),
        });
    }
    Ok(utc_to_local_in(value.with_timezone(&Utc), resolve_zone(zone_id)?))
}

/// Lenient local → UTC over an already-resolved zone. Infallible.
pub(crate) fn local_to_utc_in(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(mapped) => mapped.with_timezone(&Utc),
        // Fall-back repeats an hour of wall-clock time; take the earlier
        // of the two instants.
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        // Spring-forward skipped this wall-clock time. Interpret it with
        // the offset in force just before the gap, which lands the result
        // past the transition, shifted forward by the gap's width.
        LocalResult::None => {
            let offset = offset_before_gap(local, tz);
            let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

/// UTC → local wall clock over an already-resolved zone. Infallible.
pub(crate) fn utc_to_local_in(utc: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    tz.from_utc_datetime(&utc.naive_utc()).naive_local()
}

/// Offset in force just before the gap that swallowed `local`.
///
/// Transitions fall on multiples of 30 minutes in every tzdb zone, so a
/// 30-minute backward scan always lands on a mappable wall-clock time
/// within a few steps.
fn offset_before_gap(local: NaiveDateTime, tz: Tz) -> FixedOffset {
    let mut probe = local;
    loop {
        probe -= TimeDelta::minutes(30);
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(mapped) => return mapped.offset().fix(),
            LocalResult::Ambiguous(earlier, _) => return earlier.offset().fix(),
            LocalResult::None => {}
        }
    }
}
