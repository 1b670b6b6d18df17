use std::{
    cmp,
    f64::consts::PI,
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Mean Earth radius.
pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

/// A great-circle distance, stored in kilometers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} km", self.0))
    }
}

impl Distance {
    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance / 1000.0)
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0
    }

    pub const fn as_meters(&self) -> f64 {
        self.0 * 1000.0
    }
}

/// A point on the sphere in decimal degrees.
///
/// No range checks are made: latitudes outside [-90, 90] or longitudes outside
/// [-180, 180] still produce a distance, it just may not mean anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance(&self, coord: &Self) -> Distance {
        haversine(self, coord)
    }
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance between two points using the haversine formula.
pub fn haversine(from: &Coordinate, to: &Coordinate) -> Distance {
    let lat1 = radians(from.latitude);
    let lon1 = radians(from.longitude);
    let lat2 = radians(to.latitude);
    let lon2 = radians(to.longitude);

    let dist_lat = lat2 - lat1;
    let dist_lon = lon2 - lon1;

    let a = f64::sin(dist_lat / 2.0) * f64::sin(dist_lat / 2.0)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(dist_lon / 2.0) * f64::sin(dist_lon / 2.0);
    let c = 2.0 * f64::asin(f64::sqrt(a));
    Distance::from_kilometers(EARTH_RADIUS.as_kilometers() * c)
}

#[test]
fn kilometer_storage_test() {
    let d = Distance::from_meters(1500.0);
    assert_eq!(d.as_kilometers(), 1.5);
    assert_eq!(d.to_string(), "1.5 km");
}

#[test]
fn coordinate_display_test() {
    let coord = Coordinate::new(-33.8568, 151.2153);
    assert_eq!(coord.to_string(), "-33.8568, 151.2153");
}

#[test]
fn coordinate_tuple_order_test() {
    let coord = Coordinate::from((59.370_136, 18.001_749));
    assert_eq!(coord.latitude, 59.370_136);
    assert_eq!(<(f64, f64)>::from(coord), (59.370_136, 18.001_749));
}
