use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Invalid heading level: {0} (expected 1-4)")]
    InvalidLevel(u8),

    #[error("Heading table does not cover azimuth {azimuth} at level {level}")]
    Coverage { azimuth: f64, level: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompassError>;
