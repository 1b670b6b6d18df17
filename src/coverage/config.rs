use crate::shared::Distance;

pub struct Config {
    /// How far outside an area's edge a location may be and still count as reachable.
    pub max_distance: Distance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_distance: Distance::from_kilometers(50.0),
        }
    }
}
