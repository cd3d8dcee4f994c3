//! Pluggable source of the application's default zone identifier.

use crate::error::InstantError;
use crate::zone;

/// Zone identifier used when callers do not configure one.
pub const DEFAULT_ZONE: &str = "America/New_York";

/// Yields the zone identifier an application should use by default.
///
/// Swap the implementation for environment-, tenant-, or request-scoped
/// resolution; nothing downstream depends on the strategy.
pub trait ZoneProvider: Send + Sync {
    fn get(&self) -> &str;
}

/// A provider holding one configured identifier, validated up front.
///
/// This is explicit configuration rather than process-global state: build
/// it once with the zone you want and inject it wherever a default zone is
/// needed.
#[derive(Debug, Clone)]
pub struct FixedZoneProvider {
    zone_id: String,
}

impl FixedZoneProvider {
    pub fn new(zone_id: impl Into<String>) -> Result<Self, InstantError> {
        let zone_id = zone_id.into();
        zone::resolve_zone(&zone_id)?;
        Ok(Self { zone_id })
    }
}

impl Default for FixedZoneProvider {
    fn default() -> Self {
        Self {
            zone_id: DEFAULT_ZONE.to_string(),
        }
    }
}

impl ZoneProvider for FixedZoneProvider {
    fn get(&self) -> &str {
        &self.zone_id
    }
}
