//! Junction detection pipeline.
//!
//! Control flow: [`JunctionDetector`] iterates all grid cells, the
//! [`ProximityFilter`] gates candidates, and the [`BasisSearch`] runs per
//! accepted candidate, consuming the row-extent cache built once up front.

mod critical;
mod detector;
mod filter;
mod search;

pub use critical::{find_critical_points, CriticalPoint};
pub use detector::{detect, JunctionDetector, JunctionMap, JunctionPoint};
pub use filter::ProximityFilter;
pub use search::{BasisSearch, SearchOutcome};
