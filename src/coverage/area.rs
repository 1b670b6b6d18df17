use serde::Serialize;

use crate::{
    coverage,
    shared::{Coordinate, Distance, haversine},
};

/// Inclusive latitude/longitude bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageArea {
    latitude_min: f64,
    latitude_max: f64,
    longitude_min: f64,
    longitude_max: f64,
}

impl CoverageArea {
    pub fn new(
        latitude_min: f64,
        latitude_max: f64,
        longitude_min: f64,
        longitude_max: f64,
    ) -> Result<Self, coverage::Error> {
        for value in [latitude_min, latitude_max, longitude_min, longitude_max] {
            if !value.is_finite() {
                return Err(coverage::Error::NonFinite(value));
            }
        }
        for value in [latitude_min, latitude_max] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(coverage::Error::LatitudeOutOfRange(value));
            }
        }
        for value in [longitude_min, longitude_max] {
            if !(-180.0..=180.0).contains(&value) {
                return Err(coverage::Error::LongitudeOutOfRange(value));
            }
        }
        if latitude_min > latitude_max {
            return Err(coverage::Error::InvertedLatitude {
                min: latitude_min,
                max: latitude_max,
            });
        }
        if longitude_min > longitude_max {
            return Err(coverage::Error::InvertedLongitude {
                min: longitude_min,
                max: longitude_max,
            });
        }
        Ok(Self {
            latitude_min,
            latitude_max,
            longitude_min,
            longitude_max,
        })
    }

    pub const fn latitude_range(&self) -> (f64, f64) {
        (self.latitude_min, self.latitude_max)
    }

    pub const fn longitude_range(&self) -> (f64, f64) {
        (self.longitude_min, self.longitude_max)
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.latitude_min..=self.latitude_max).contains(&coordinate.latitude)
            && (self.longitude_min..=self.longitude_max).contains(&coordinate.longitude)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: (self.latitude_min + self.latitude_max) / 2.0,
            longitude: (self.longitude_min + self.longitude_max) / 2.0,
        }
    }

    pub fn distance_to_center(&self, coordinate: &Coordinate) -> Distance {
        haversine(coordinate, &self.center())
    }

    /// Distance to the closest point of the box, zero when `coordinate` is inside.
    ///
    /// Longitudes are compared across the antimeridian as well, so a point at
    /// -179.9 is next to a box ending at 180.
    pub fn distance_to_edge(&self, coordinate: &Coordinate) -> Distance {
        if self.contains(coordinate) {
            return Distance::default();
        }
        let latitude = coordinate
            .latitude
            .clamp(self.latitude_min, self.latitude_max);
        [0.0, -360.0, 360.0]
            .into_iter()
            .map(|shift| {
                let closest = Coordinate {
                    latitude,
                    longitude: (coordinate.longitude + shift)
                        .clamp(self.longitude_min, self.longitude_max),
                };
                haversine(coordinate, &closest)
            })
            .fold(Distance::from_kilometers(f64::INFINITY), |nearest, d| {
                if d < nearest { d } else { nearest }
            })
    }
}

#[test]
fn center_test() {
    let area = CoverageArea::new(-44.0, -10.0, 112.0, 154.0).unwrap();
    assert_eq!(area.center(), Coordinate::new(-27.0, 133.0));
}

#[test]
fn inverted_bounds_test() {
    let result = CoverageArea::new(10.0, -10.0, 0.0, 1.0);
    assert_eq!(
        result,
        Err(coverage::Error::InvertedLatitude {
            min: 10.0,
            max: -10.0
        })
    );
}

#[test]
fn edge_across_antimeridian_test() {
    let area = CoverageArea::new(-10.0, 10.0, 170.0, 180.0).unwrap();
    let d = area.distance_to_edge(&Coordinate::new(0.0, -179.9));
    assert!((d.as_kilometers() - 11.12).abs() < 0.01);
}
