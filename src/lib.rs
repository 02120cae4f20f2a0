pub mod error;
pub mod heading;
pub mod rose;

use once_cell::sync::Lazy;

pub use error::{CompassError, Result};
pub use heading::Heading;
pub use rose::{CompassPoint, CompassRose, Level};

/// Shared heading table instance (lazily initialized)
pub static COMPASS: Lazy<CompassRose> = Lazy::new(CompassRose::new);

/// Resolve `azimuth` against the shared table at the given order (1-4).
pub fn find_heading(azimuth: f64, order: u8) -> Result<Heading> {
    COMPASS.find_heading(azimuth, order)
}
