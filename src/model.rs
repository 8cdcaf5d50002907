use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

use crate::angles;
use crate::error::{check_day_of_year, Result};
use crate::types::{Latitude, SeriesPoint};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const SERIES_DAYS: i32 = 365;

// -tan(φ) * tan(δ); leaves [-1, 1] under polar day or night.
pub fn hour_angle_cosine(latitude: f64, day_of_year: i32) -> f64 {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::solar_declination(day_of_year);
    -lat_rad.tan() * decl_rad.tan()
}

/// `cos_h <= -1` is polar day (24h), `cos_h >= 1` polar night (0h). Only values
/// strictly inside (-1, 1) reach `acos`, and those are clamped as well; the
/// result is saturated to [0, 24].
pub fn hours_from_hour_angle_cosine(cos_h: f64) -> f64 {
    let clamped = cos_h.clamp(-1.0, 1.0);
    let hours = if cos_h <= -1.0 {
        HOURS_PER_DAY
    } else if cos_h >= 1.0 {
        0.0
    } else {
        HOURS_PER_DAY * clamped.acos() / std::f64::consts::PI
    };
    hours.clamp(0.0, HOURS_PER_DAY)
}

pub fn daylight_hours(latitude: f64, day_of_year: i32) -> f64 {
    hours_from_hour_angle_cosine(hour_angle_cosine(latitude, day_of_year))
}

pub fn try_daylight_hours(latitude: f64, day_of_year: i32) -> Result<f64> {
    let latitude = Latitude::new(latitude)?;
    let day_of_year = check_day_of_year(day_of_year)?;
    Ok(daylight_hours(latitude.degrees(), day_of_year))
}

pub fn daylight_hours_on(latitude: f64, date: &NaiveDate) -> f64 {
    daylight_hours(latitude, date.ordinal() as i32)
}

pub fn yearly_series(latitude: f64) -> Vec<SeriesPoint> {
    YearlySeries::new(latitude).collect()
}

#[derive(Debug, Clone)]
pub struct YearlySeries {
    latitude: f64,
    next_day: i32,
}

impl YearlySeries {
    pub fn new(latitude: f64) -> Self {
        Self {
            latitude,
            next_day: 1,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl Iterator for YearlySeries {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<SeriesPoint> {
        if self.next_day > SERIES_DAYS {
            return None;
        }
        let day = self.next_day;
        self.next_day += 1;
        Some(SeriesPoint {
            day_of_year: day,
            hours: daylight_hours(self.latitude, day),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (SERIES_DAYS - self.next_day + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for YearlySeries {}

impl FusedIterator for YearlySeries {}
