use chrono::{Datelike, NaiveDate};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const DECLINATION_ANCHOR_DAY: i32 = 81;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> Option<i32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.ordinal() as i32)
}

pub fn doy_to_month_day(year: i32, doy: i32) -> Option<(u32, u32)> {
    let ordinal = u32::try_from(doy).ok()?;
    NaiveDate::from_yo_opt(year, ordinal).map(|d| (d.month(), d.day()))
}

/// `23.45° * sin(2π (n - 81) / 365)`. The `sin(360° (284 + n) / 365)` form
/// is the same curve, since 284 + 81 = 365.
pub fn solar_declination_deg(n: i32) -> f64 {
    let phase = 2.0 * std::f64::consts::PI * (n - DECLINATION_ANCHOR_DAY) as f64 / DAYS_PER_YEAR;
    EARTH_AXIAL_TILT * phase.sin()
}

pub fn solar_declination(n: i32) -> f64 {
    deg_to_rad(solar_declination_deg(n))
}
