//! Zone-aware instants: a value type that keeps a canonical UTC timestamp
//! *and* the IANA zone it belongs to, so local calendar derivation stays
//! correct across DST transitions while comparison and persistence stay in
//! UTC.
//!
//! ```
//! use instants::{FixedZoneProvider, InstantExt, InstantFactory};
//!
//! let provider = FixedZoneProvider::new("America/New_York")?;
//! let factory = InstantFactory::new(&provider)?;
//! let opened = factory.from_text("2024-01-01T20:00:00-05:00")?;
//!
//! assert_eq!(opened.hour(), 20);
//! assert_eq!(opened.to_utc_iso_string(), "2024-01-02T01:00:00.000000000+00:00");
//! assert_eq!(
//!     opened.start_of_day().to_utc_iso_string(),
//!     "2024-01-01T05:00:00.000000000+00:00",
//! );
//! # Ok::<(), instants::InstantError>(())
//! ```

pub mod clock;
pub mod error;
pub mod ext;
pub mod factory;
pub mod instant;
pub mod provider;
pub mod zone;

pub use clock::*;
pub use error::*;
pub use ext::*;
pub use factory::*;
pub use instant::*;
pub use provider::*;
pub use zone::*;

pub use chrono::{TimeDelta, Weekday};
pub use chrono_tz::Tz;
