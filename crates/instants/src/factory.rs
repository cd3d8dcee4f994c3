//! Builds [`Instant`]s from heterogeneous inputs over one bound zone.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::InstantError;
use crate::instant::Instant;
use crate::provider::ZoneProvider;
use crate::zone;

/// An [`Instant`] factory bound to a single zone.
///
/// The provider's zone is resolved exactly once, at construction, so the
/// offset- and local-value constructors cannot fail afterwards; only text
/// parsing can.
#[derive(Debug, Clone)]
pub struct InstantFactory {
    tz: Tz,
}

impl InstantFactory {
    pub fn new(provider: &dyn ZoneProvider) -> Result<Self, InstantError> {
        Ok(Self {
            tz: zone::resolve_zone(provider.get())?,
        })
    }

    /// The identifier of the bound zone.
    pub fn zone_id(&self) -> &'static str {
        self.tz.name()
    }

    /// Wrap an offset-bearing timestamp, normalizing it to UTC.
    pub fn from_offset(&self, value: DateTime<FixedOffset>) -> Instant {
        Instant::from_utc_in(value.with_timezone(&Utc), self.tz)
    }

    /// Parse RFC 3339 / round-trip ISO text into an offset-bearing
    /// timestamp, then wrap it.
    pub fn from_text(&self, text: &str) -> Result<Instant, InstantError> {
        let parsed = DateTime::parse_from_rfc3339(text).map_err(|source| InstantError::Parse {
            text: text.to_string(),
            source,
        })?;
        Ok(self.from_offset(parsed))
    }

    /// Treat `local` as zone-naive wall-clock time in the bound zone.
    pub fn from_local(&self, local: NaiveDateTime) -> Instant {
        Instant::from_utc_in(zone::local_to_utc_in(local, self.tz), self.tz)
    }
}
