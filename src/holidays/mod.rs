//! Public holiday tables for Australian jurisdictions.
//!
//! Holiday data is scraped from government pages whose markup changes from
//! time to time, so each jurisdiction has its own [`HolidayExtractor`]
//! adapter. The calculator only ever sees the resulting [`HolidayMap`].
//!
//! # Example
//!
//! ```
//! use business_days::holidays::Jurisdiction;
//!
//! let jurisdiction: Jurisdiction = "nsw".parse().unwrap();
//! assert_eq!(jurisdiction, Jurisdiction::NewSouthWales);
//! assert_eq!(jurisdiction.extractor().jurisdiction(), jurisdiction);
//! ```

mod markup;
mod new_south_wales;
mod service;
mod source;
mod victoria;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayMap;

pub use new_south_wales::NewSouthWalesExtractor;
pub use service::{HolidayService, validate_year};
pub use source::{HolidaySource, ReqwestSource};
pub use victoria::VictoriaExtractor;

/// A state whose public holiday calendar can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Jurisdiction {
    /// Victoria.
    Victoria,
    /// New South Wales.
    NewSouthWales,
}

impl Jurisdiction {
    /// Every supported jurisdiction.
    pub const ALL: [Jurisdiction; 2] = [Jurisdiction::Victoria, Jurisdiction::NewSouthWales];

    /// The identifier used in URLs and configuration.
    pub fn id(self) -> &'static str {
        match self {
            Jurisdiction::Victoria => "victoria",
            Jurisdiction::NewSouthWales => "new-south-wales",
        }
    }

    /// The extractor for this jurisdiction's holiday page.
    pub fn extractor(self) -> &'static dyn HolidayExtractor {
        match self {
            Jurisdiction::Victoria => &VictoriaExtractor,
            Jurisdiction::NewSouthWales => &NewSouthWalesExtractor,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Jurisdiction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "victoria" | "vic" => Ok(Jurisdiction::Victoria),
            "new-south-wales" | "new_south_wales" | "nsw" => Ok(Jurisdiction::NewSouthWales),
            _ => Err(EngineError::UnknownJurisdiction {
                name: s.to_string(),
            }),
        }
    }
}

/// Turns one jurisdiction's raw holiday document into a [`HolidayMap`].
///
/// Implementations are pure functions of the document text. They return
/// [`EngineError::HolidayTableNotFound`] when the expected structure is
/// missing altogether; individual rows they cannot read are skipped.
pub trait HolidayExtractor: Send + Sync {
    /// The jurisdiction this extractor understands.
    fn jurisdiction(&self) -> Jurisdiction;

    /// Extracts every holiday listed in `document`.
    fn extract(&self, document: &str) -> EngineResult<HolidayMap>;
}
