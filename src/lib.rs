pub mod coverage;
pub mod harness;
pub mod shared;

pub mod prelude {
    pub use crate::coverage::{Config, CoverageArea, CoverageStats, Covered};
    pub use crate::harness::{Case, Report, Suite, distance_suite};
    pub use crate::shared::{Coordinate, Distance, EARTH_RADIUS, haversine};
}
