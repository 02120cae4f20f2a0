//! The heading table and range selection over it.
//!
//! This module provides:
//! - The granularity tiers of the 32-wind rose ([`Level`])
//! - The ordered catalog of named directions ([`CompassPoint`], `points.rs`)
//! - Lookup of an arbitrary azimuth at a requested tier ([`CompassRose`])

mod points;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};
use crate::heading::Heading;

/// Granularity tier of a compass point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// North, East, South, West.
    Cardinal = 1,
    /// Adds Northeast, Southeast, Southwest, Northwest.
    Intercardinal = 2,
    /// Adds the half-winds (North-Northeast, East-Northeast, ...).
    HalfWind = 3,
    /// Adds the quarter-winds ("North by East", "Northeast by East", ...).
    QuarterWind = 4,
}

impl Level {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Cardinal => "cardinal",
            Level::Intercardinal => "intercardinal",
            Level::HalfWind => "half_wind",
            Level::QuarterWind => "quarter_wind",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = CompassError;

    fn try_from(order: u8) -> Result<Self> {
        match order {
            1 => Ok(Level::Cardinal),
            2 => Ok(Level::Intercardinal),
            3 => Ok(Level::HalfWind),
            4 => Ok(Level::QuarterWind),
            other => Err(CompassError::InvalidLevel(other)),
        }
    }
}

/// One row of the heading table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassPoint {
    /// Human-readable direction name, e.g. "Northeast by East".
    pub name: &'static str,
    /// Short code, e.g. "NEbE".
    pub abbr: &'static str,
    /// Granularity tier this point belongs to.
    pub level: Level,
    /// Anchor azimuth of the point in degrees clockwise from North.
    pub azimuth: f64,
}

/// The immutable heading table plus azimuth lookup over it.
///
/// The table is built once and shared read-only for the life of the
/// process via [`crate::COMPASS`]; no operation mutates it, so concurrent
/// reads are always safe. Rows ascend strictly by azimuth, from North at
/// 0 degrees to the wrap-around sentinel (North again) at exactly 360.
#[derive(Debug)]
pub struct CompassRose {
    points: &'static [CompassPoint],
}

impl CompassRose {
    pub fn new() -> Self {
        let rose = Self {
            points: &points::POINTS,
        };
        debug_assert!(
            rose.points.windows(2).all(|w| w[0].azimuth < w[1].azimuth),
            "heading table must ascend strictly by azimuth"
        );
        rose
    }

    /// Full ordered table, sentinel row included.
    pub fn points(&self) -> &[CompassPoint] {
        self.points
    }

    /// Ordered view of all points at `level` or coarser.
    ///
    /// The closing sentinel is tagged [`Level::Cardinal`] and is therefore
    /// present in every view, so each view covers the full circle.
    pub fn view(&self, level: Level) -> impl Iterator<Item = &CompassPoint> {
        self.points.iter().filter(move |p| p.level <= level)
    }

    /// [`CompassRose::view`] behind a plain integer order in 1-4, for
    /// callers holding unvalidated input.
    pub fn filtered_view(&self, order: u8) -> Result<Vec<&CompassPoint>> {
        let level = Level::try_from(order)?;
        Ok(self.view(level).collect())
    }

    /// Resolve `azimuth` to the nearest named point at `level`.
    ///
    /// Any finite angle is accepted; it is wrapped into [0, 360) first.
    /// The returned heading carries the matched point's own azimuth rather
    /// than the query angle, which is what makes heading equality
    /// range-based instead of exact-angle-based.
    pub fn find(&self, azimuth: f64, level: Level) -> Result<Heading> {
        let angle = azimuth.rem_euclid(360.0);

        let mut view = self.view(level).peekable();
        while let Some(point) = view.next() {
            let matched = match view.peek() {
                // A point owns the arc below the midpoint between itself
                // and its successor; a tie on the midpoint goes to the
                // successor.
                Some(next) => angle < (point.azimuth + next.azimuth) / 2.0,
                // The sentinel owns the residual arc up to 360.
                None => angle <= point.azimuth,
            };
            if matched {
                return Ok(Heading::from(point));
            }
        }

        Err(CompassError::Coverage {
            azimuth: angle,
            level: level.as_u8(),
        })
    }

    /// [`CompassRose::find`] with the level as a raw order in 1-4.
    pub fn find_heading(&self, azimuth: f64, order: u8) -> Result<Heading> {
        self.find(azimuth, Level::try_from(order)?)
    }
}

impl Default for CompassRose {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_try_from_valid() {
        assert_eq!(Level::try_from(1).unwrap(), Level::Cardinal);
        assert_eq!(Level::try_from(2).unwrap(), Level::Intercardinal);
        assert_eq!(Level::try_from(3).unwrap(), Level::HalfWind);
        assert_eq!(Level::try_from(4).unwrap(), Level::QuarterWind);
    }

    #[test]
    fn test_level_try_from_invalid() {
        assert!(matches!(
            Level::try_from(0),
            Err(CompassError::InvalidLevel(0))
        ));
        assert!(matches!(
            Level::try_from(5),
            Err(CompassError::InvalidLevel(5))
        ));
    }

    #[test]
    fn test_level_as_str() {
        assert_eq!(Level::Cardinal.as_str(), "cardinal");
        assert_eq!(Level::QuarterWind.as_str(), "quarter_wind");
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Cardinal < Level::Intercardinal);
        assert!(Level::HalfWind < Level::QuarterWind);
    }

    #[test]
    fn test_view_sizes() {
        let rose = CompassRose::new();
        assert_eq!(rose.view(Level::Cardinal).count(), 5);
        assert_eq!(rose.view(Level::Intercardinal).count(), 9);
        assert_eq!(rose.view(Level::HalfWind).count(), 17);
        assert_eq!(rose.view(Level::QuarterWind).count(), 33);
    }

    #[test]
    fn test_filtered_view_rejects_bad_order() {
        let rose = CompassRose::new();
        assert!(rose.filtered_view(0).is_err());
        assert!(rose.filtered_view(5).is_err());
        assert_eq!(rose.filtered_view(1).unwrap().len(), 5);
    }

    #[test]
    fn test_find_on_point_boundary() {
        let rose = CompassRose::new();
        let east = rose.find(90.0, Level::Cardinal).unwrap();
        assert_eq!(east.name, "East");
        assert_eq!(east.azimuth, 90.0);

        let nbe = rose.find(11.25, Level::QuarterWind).unwrap();
        assert_eq!(nbe.abbr, "NbE");
    }

    #[test]
    fn test_find_normalizes_input() {
        let rose = CompassRose::new();
        assert_eq!(
            rose.find(-10.0, Level::QuarterWind).unwrap(),
            rose.find(350.0, Level::QuarterWind).unwrap()
        );
        assert_eq!(
            rose.find(370.0, Level::QuarterWind).unwrap(),
            rose.find(10.0, Level::QuarterWind).unwrap()
        );
        // 360 wraps to 0 and resolves to the opening North row, not the
        // sentinel.
        let wrapped = rose.find(360.0, Level::Cardinal).unwrap();
        assert_eq!(wrapped.name, "North");
        assert_eq!(wrapped.azimuth, 0.0);
    }

    #[test]
    fn test_find_upper_arc_hits_sentinel() {
        let rose = CompassRose::new();
        let heading = rose.find(355.0, Level::Cardinal).unwrap();
        assert_eq!(heading.name, "North");
        assert_eq!(heading.azimuth, 360.0);
    }

    #[test]
    fn test_find_heading_rejects_bad_order() {
        let rose = CompassRose::new();
        assert!(matches!(
            rose.find_heading(10.0, 0),
            Err(CompassError::InvalidLevel(0))
        ));
        assert!(matches!(
            rose.find_heading(10.0, 7),
            Err(CompassError::InvalidLevel(7))
        ));
    }
}
