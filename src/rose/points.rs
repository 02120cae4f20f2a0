//! Static data for the 32-wind rose.
//!
//! Rows ascend strictly by azimuth at 11.25 degree spacing. The final row
//! duplicates the first (North) at azimuth 360 so that every view closes
//! the wrap-around range at exactly 360 degrees.

use super::{CompassPoint, Level};

pub(crate) const POINTS: [CompassPoint; 33] = [
    CompassPoint {
        name: "North",
        abbr: "N",
        level: Level::Cardinal,
        azimuth: 0.0,
    },
    CompassPoint {
        name: "North by East",
        abbr: "NbE",
        level: Level::QuarterWind,
        azimuth: 11.25,
    },
    CompassPoint {
        name: "North-Northeast",
        abbr: "NNE",
        level: Level::HalfWind,
        azimuth: 22.5,
    },
    CompassPoint {
        name: "Northeast by North",
        abbr: "NEbN",
        level: Level::QuarterWind,
        azimuth: 33.75,
    },
    CompassPoint {
        name: "Northeast",
        abbr: "NE",
        level: Level::Intercardinal,
        azimuth: 45.0,
    },
    CompassPoint {
        name: "Northeast by East",
        abbr: "NEbE",
        level: Level::QuarterWind,
        azimuth: 56.25,
    },
    CompassPoint {
        name: "East-Northeast",
        abbr: "ENE",
        level: Level::HalfWind,
        azimuth: 67.5,
    },
    CompassPoint {
        name: "East by North",
        abbr: "EbN",
        level: Level::QuarterWind,
        azimuth: 78.75,
    },
    CompassPoint {
        name: "East",
        abbr: "E",
        level: Level::Cardinal,
        azimuth: 90.0,
    },
    CompassPoint {
        name: "East by South",
        abbr: "EbS",
        level: Level::QuarterWind,
        azimuth: 101.25,
    },
    CompassPoint {
        name: "East-Southeast",
        abbr: "ESE",
        level: Level::HalfWind,
        azimuth: 112.5,
    },
    CompassPoint {
        name: "Southeast by East",
        abbr: "SEbE",
        level: Level::QuarterWind,
        azimuth: 123.75,
    },
    CompassPoint {
        name: "Southeast",
        abbr: "SE",
        level: Level::Intercardinal,
        azimuth: 135.0,
    },
    CompassPoint {
        name: "Southeast by South",
        abbr: "SEbS",
        level: Level::QuarterWind,
        azimuth: 146.25,
    },
    CompassPoint {
        name: "South-Southeast",
        abbr: "SSE",
        level: Level::HalfWind,
        azimuth: 157.5,
    },
    CompassPoint {
        name: "South by East",
        abbr: "SbE",
        level: Level::QuarterWind,
        azimuth: 168.75,
    },
    CompassPoint {
        name: "South",
        abbr: "S",
        level: Level::Cardinal,
        azimuth: 180.0,
    },
    CompassPoint {
        name: "South by West",
        abbr: "SbW",
        level: Level::QuarterWind,
        azimuth: 191.25,
    },
    CompassPoint {
        name: "South-Southwest",
        abbr: "SSW",
        level: Level::HalfWind,
        azimuth: 202.5,
    },
    CompassPoint {
        name: "Southwest by South",
        abbr: "SWbS",
        level: Level::QuarterWind,
        azimuth: 213.75,
    },
    CompassPoint {
        name: "Southwest",
        abbr: "SW",
        level: Level::Intercardinal,
        azimuth: 225.0,
    },
    CompassPoint {
        name: "Southwest by West",
        abbr: "SWbW",
        level: Level::QuarterWind,
        azimuth: 236.25,
    },
    CompassPoint {
        name: "West-Southwest",
        abbr: "WSW",
        level: Level::HalfWind,
        azimuth: 247.5,
    },
    CompassPoint {
        name: "West by South",
        abbr: "WbS",
        level: Level::QuarterWind,
        azimuth: 258.75,
    },
    CompassPoint {
        name: "West",
        abbr: "W",
        level: Level::Cardinal,
        azimuth: 270.0,
    },
    CompassPoint {
        name: "West by North",
        abbr: "WbN",
        level: Level::QuarterWind,
        azimuth: 281.25,
    },
    CompassPoint {
        name: "West-Northwest",
        abbr: "WNW",
        level: Level::HalfWind,
        azimuth: 292.5,
    },
    CompassPoint {
        name: "Northwest by West",
        abbr: "NWbW",
        level: Level::QuarterWind,
        azimuth: 303.75,
    },
    CompassPoint {
        name: "Northwest",
        abbr: "NW",
        level: Level::Intercardinal,
        azimuth: 315.0,
    },
    CompassPoint {
        name: "Northwest by North",
        abbr: "NWbN",
        level: Level::QuarterWind,
        azimuth: 326.25,
    },
    CompassPoint {
        name: "North-Northwest",
        abbr: "NNW",
        level: Level::HalfWind,
        azimuth: 337.5,
    },
    CompassPoint {
        name: "North by West",
        abbr: "NbW",
        level: Level::QuarterWind,
        azimuth: 348.75,
    },
    // Wrap-around sentinel: same identity as row 0, closing azimuth 360.
    CompassPoint {
        name: "North",
        abbr: "N",
        level: Level::Cardinal,
        azimuth: 360.0,
    },
];
