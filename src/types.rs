use serde::{Deserialize, Serialize};

use crate::error::{check_latitude, Result};

/// Latitude in degrees, guaranteed finite and within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Latitude(f64);

impl Latitude {
    pub const EQUATOR: Latitude = Latitude(0.0);

    pub fn new(degrees: f64) -> Result<Self> {
        check_latitude(degrees).map(Self)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Latitude {
    type Error = crate::error::DaylightError;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

impl<'de> Deserialize<'de> for Latitude {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let degrees = f64::deserialize(deserializer)?;
        Self::new(degrees).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AstronomicalEvent {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl AstronomicalEvent {
    pub const ALL: [AstronomicalEvent; 4] = [
        AstronomicalEvent::MarchEquinox,
        AstronomicalEvent::JuneSolstice,
        AstronomicalEvent::SeptemberEquinox,
        AstronomicalEvent::DecemberSolstice,
    ];

    /// Fixed annotation day; not derived from the declination model.
    pub const fn day_of_year(self) -> i32 {
        match self {
            AstronomicalEvent::MarchEquinox => 80,
            AstronomicalEvent::JuneSolstice => 172,
            AstronomicalEvent::SeptemberEquinox => 266,
            AstronomicalEvent::DecemberSolstice => 356,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AstronomicalEvent::MarchEquinox => "March equinox",
            AstronomicalEvent::JuneSolstice => "June solstice",
            AstronomicalEvent::SeptemberEquinox => "September equinox",
            AstronomicalEvent::DecemberSolstice => "December solstice",
        }
    }

    pub const fn is_solstice(self) -> bool {
        matches!(
            self,
            AstronomicalEvent::JuneSolstice | AstronomicalEvent::DecemberSolstice
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day_of_year: i32,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub event: AstronomicalEvent,
    pub day_of_year: i32,
    pub label: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewMetadata {
    pub generated_at: String,
    pub point_count: usize,
    pub min_hours: f64,
    pub max_hours: f64,
    pub mean_hours: f64,
}

/// Everything a front end needs to draw one latitude: the map line,
/// the yearly curve and its annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatitudeView {
    pub latitude: Latitude,
    pub latitude_line: Vec<GeoPoint>,
    pub series: Vec<SeriesPoint>,
    pub markers: Vec<EventMarker>,
    pub metadata: ViewMetadata,
}
