//! Proximity queries over rectangular coverage areas.
//!
//! A location is reachable by an area when the area contains it or when the
//! nearest edge of the area lies within [`Config::max_distance`].

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::trace;

mod area;
mod config;
pub use area::*;
pub use config::*;

use crate::shared::{Coordinate, Distance};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Bound is not a finite number: {0}")]
    NonFinite(f64),
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("Latitude minimum {min} is greater than maximum {max}")]
    InvertedLatitude { min: f64, max: f64 },
    #[error("Longitude minimum {min} is greater than maximum {max}")]
    InvertedLongitude { min: f64, max: f64 },
}

pub trait Covered {
    fn coverage(&self) -> &CoverageArea;
}

impl Covered for CoverageArea {
    fn coverage(&self) -> &CoverageArea {
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageStats {
    pub total: usize,
    pub covering: usize,
    pub nearest: Distance,
    pub farthest: Distance,
    pub coverage_percentage: f64,
}

fn reachable(area: &CoverageArea, location: &Coordinate, max_distance: Distance) -> bool {
    area.contains(location) || area.distance_to_edge(location) <= max_distance
}

/// Items reachable from `location`, in input order.
pub fn filter_by_coverage<'a, T>(
    items: &'a [T],
    location: &Coordinate,
    config: &Config,
) -> Vec<&'a T>
where
    T: Send + Sync + Covered,
{
    let results: Vec<&T> = items
        .par_iter()
        .filter(|item| reachable(item.coverage(), location, config.max_distance))
        .collect();
    trace!(
        "{} of {} areas reachable from {location}",
        results.len(),
        items.len()
    );
    results
}

/// Items reachable from `location`, closest area center first.
pub fn nearest_by_coverage<'a, T>(
    items: &'a [T],
    location: &Coordinate,
    config: &Config,
) -> Vec<&'a T>
where
    T: Send + Sync + Covered,
{
    let mut results: Vec<(&T, Distance)> = items
        .par_iter()
        .filter_map(|item| {
            let area = item.coverage();
            if reachable(area, location, config.max_distance) {
                Some((item, area.distance_to_center(location)))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    trace!(
        "{} of {} areas reachable from {location}",
        results.len(),
        items.len()
    );
    results.into_iter().map(|(item, _)| item).collect()
}

pub fn coverage_stats<T: Covered>(items: &[T], location: &Coordinate) -> CoverageStats {
    let mut stats = CoverageStats {
        total: items.len(),
        ..Default::default()
    };

    for (i, item) in items.iter().enumerate() {
        let area = item.coverage();
        if area.contains(location) {
            stats.covering += 1;
        }
        let distance = area.distance_to_center(location);
        if i == 0 || distance < stats.nearest {
            stats.nearest = distance;
        }
        if i == 0 || distance > stats.farthest {
            stats.farthest = distance;
        }
    }

    if stats.total > 0 {
        stats.coverage_percentage = 100.0 * stats.covering as f64 / stats.total as f64;
    }
    stats
}
