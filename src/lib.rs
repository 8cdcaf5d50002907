pub mod angles;
pub mod config;
pub mod model;
pub mod error;
pub mod types;
pub mod view;

pub use angles::{
    day_of_year, deg_to_rad, doy_to_month_day, leap_year, rad_to_deg, solar_declination,
    solar_declination_deg, DAYS_PER_YEAR, DECLINATION_ANCHOR_DAY, EARTH_AXIAL_TILT,
};

pub use model::{
    daylight_hours, daylight_hours_on, hour_angle_cosine, hours_from_hour_angle_cosine,
    try_daylight_hours, yearly_series, YearlySeries, HOURS_PER_DAY, SERIES_DAYS,
};

pub use view::{
    event_markers, latitude_line, latitude_view, summary, to_json, try_latitude_view, Summary,
};

pub use crate::config::{DaylightConfig, LoggingConfig, OutputConfig, SliderConfig};

pub use error::{check_day_of_year, check_latitude, DaylightError, Result};

pub use types::{
    AstronomicalEvent, EventMarker, GeoPoint, Latitude, LatitudeView, SeriesPoint, ViewMetadata,
};
