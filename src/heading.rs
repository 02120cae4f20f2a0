//! Resolved heading values and their comparison semantics.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rose::{CompassPoint, Level};

/// A named heading resolved from an azimuth lookup.
///
/// The `azimuth` field holds the matched table point's anchor azimuth,
/// never the angle the lookup was asked about. Comparisons run over that
/// resolved azimuth: two headings are equal exactly when they landed on
/// the same table point, and the heading further clockwise from North is
/// the greater one. A coarse and a fine lookup therefore compare equal
/// precisely when the fine angle still resolves to the coarse point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    pub name: String,
    pub abbr: String,
    pub level: Level,
    pub azimuth: f64,
}

impl Heading {
    pub fn new(
        name: impl Into<String>,
        abbr: impl Into<String>,
        level: Level,
        azimuth: f64,
    ) -> Self {
        Self {
            name: name.into(),
            abbr: abbr.into(),
            level,
            azimuth,
        }
    }

    /// Construction-by-lookup shorthand over the shared [`crate::COMPASS`]
    /// table; interchangeable with [`crate::find_heading`] for any input.
    pub fn from_azimuth(azimuth: f64, order: u8) -> Result<Self> {
        crate::COMPASS.find_heading(azimuth, order)
    }
}

impl From<&CompassPoint> for Heading {
    fn from(point: &CompassPoint) -> Self {
        Self::new(point.name, point.abbr, point.level, point.azimuth)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Heading {
    fn eq(&self, other: &Self) -> bool {
        self.azimuth == other.azimuth
    }
}

impl PartialOrd for Heading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.azimuth.partial_cmp(&other.azimuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_name() {
        let heading = Heading::new("East", "E", Level::Cardinal, 90.0);
        assert_eq!(heading.to_string(), "East");
    }

    #[test]
    fn test_equality_ignores_level() {
        let coarse = Heading::new("North", "N", Level::Cardinal, 0.0);
        let fine = Heading::new("North", "N", Level::QuarterWind, 0.0);
        assert_eq!(coarse, fine);
    }

    #[test]
    fn test_ordering_is_clockwise_from_north() {
        let north = Heading::new("North", "N", Level::Cardinal, 0.0);
        let east = Heading::new("East", "E", Level::Cardinal, 90.0);
        assert!(north < east);
        assert!(east > north);
        assert!(north <= north.clone());
        assert!(north >= north.clone());
    }

    #[test]
    fn test_from_point_copies_identity() {
        let point = CompassPoint {
            name: "Southwest",
            abbr: "SW",
            level: Level::Intercardinal,
            azimuth: 225.0,
        };
        let heading = Heading::from(&point);
        assert_eq!(heading.name, "Southwest");
        assert_eq!(heading.abbr, "SW");
        assert_eq!(heading.level, Level::Intercardinal);
        assert_eq!(heading.azimuth, 225.0);
    }

    #[test]
    fn test_from_azimuth_matches_lookup() {
        let direct = Heading::from_azimuth(57.0, 4).unwrap();
        let looked_up = crate::find_heading(57.0, 4).unwrap();
        assert_eq!(direct, looked_up);
        assert_eq!(direct.name, looked_up.name);
    }
}
