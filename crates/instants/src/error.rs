//! Error taxonomy for instant construction, conversion, and comparison.
//!
//! Every error here is raised synchronously at the call that triggers it;
//! there is no retry and no partially-constructed value. DST ambiguity and
//! gaps are *not* errors — the lenient conversion in [`crate::zone`]
//! resolves them deterministically.

use chrono::FixedOffset;
use thiserror::Error;

/// All failures the library can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantError {
    /// A zone identifier was empty where one is required.
    #[error("a time zone identifier is required")]
    MissingZone,

    /// The zone identifier is not a recognized IANA tzdb name.
    #[error("unknown time zone identifier `{zone_id}`")]
    ZoneNotFound { zone_id: String },

    /// The strict UTC-to-local conversion was handed a value carrying a
    /// non-zero offset.
    #[error("expected a UTC value, found offset {offset}")]
    NotUtc { offset: FixedOffset },

    /// Text handed to the factory could not be parsed as a timestamp.
    #[error("`{text}` is not a recognizable timestamp")]
    Parse {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    /// `compare_to` was handed something that is not an `Instant`.
    #[error("an Instant cannot be compared to {what}")]
    NotComparable { what: &'static str },
}
