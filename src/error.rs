//! Error types for the daylight library.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaylightError>;

/// Errors raised by the checked entry points.
///
/// The raw formula functions never fail; these only come from validation,
/// configuration and serialization.
#[derive(Error, Debug)]
pub enum DaylightError {
    /// Latitude outside [-90, 90] degrees or not finite.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Day of year outside [1, 366].
    #[error("invalid day of year {value} (must be between 1 and 366)")]
    InvalidDayOfYear { value: i32 },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl DaylightError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for DaylightError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Validates latitude is finite and within -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(DaylightError::InvalidLatitude { value: latitude });
    }
    Ok(latitude)
}

/// Validates day of year is within 1 to 366.
pub fn check_day_of_year(day_of_year: i32) -> Result<i32> {
    if !(1..=366).contains(&day_of_year) {
        return Err(DaylightError::InvalidDayOfYear { value: day_of_year });
    }
    Ok(day_of_year)
}
