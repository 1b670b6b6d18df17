use super::{Case, Suite};
use crate::shared::Coordinate;

const SYDNEY: Coordinate = Coordinate::new(-33.8568, 151.2153);
const MELBOURNE: Coordinate = Coordinate::new(-37.8136, 144.9631);
const PERTH: Coordinate = Coordinate::new(-31.9505, 115.8605);
const TOKYO: Coordinate = Coordinate::new(35.6762, 139.6503);
const LOS_ANGELES: Coordinate = Coordinate::new(34.0522, -118.2437);

/// The fixed haversine regression cases.
pub fn distance_suite() -> Suite {
    Suite::new()
        .with_case(Case::within("Zero distance", SYDNEY, SYDNEY, 0.0, 0.001))
        // 1% tolerance
        .with_case(Case::within(
            "Sydney to Melbourne",
            SYDNEY,
            MELBOURNE,
            714.0,
            7.0,
        ))
        .with_case(Case::within("Sydney to Perth", SYDNEY, PERTH, 3290.0, 33.0))
        .with_case(Case::within(
            "Across dateline",
            TOKYO,
            LOS_ANGELES,
            8800.0,
            100.0,
        ))
        // 10 degrees of latitude
        .with_case(Case::within(
            "North-South distance",
            Coordinate::new(60.0, 0.0),
            Coordinate::new(50.0, 0.0),
            1111.0,
            10.0,
        ))
        // 10 degrees of longitude on the equator
        .with_case(Case::within(
            "East-West distance",
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            1111.0,
            10.0,
        ))
        // pole to pole, half the circumference
        .with_case(Case::within(
            "Edge cases",
            Coordinate::new(90.0, 0.0),
            Coordinate::new(-90.0, 0.0),
            20015.0,
            50.0,
        ))
}
