use std::fmt;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::model::YearlySeries;
use crate::error::Result;
use crate::types::{
    AstronomicalEvent, EventMarker, GeoPoint, Latitude, LatitudeView, SeriesPoint, ViewMetadata,
};

/// Points of a parallel from -180° to 180° longitude, one per degree.
pub fn latitude_line(latitude: f64) -> Vec<GeoPoint> {
    (-180..=180)
        .map(|lon| GeoPoint {
            longitude: lon as f64,
            latitude,
        })
        .collect()
}

pub fn event_markers(series: &[SeriesPoint]) -> Vec<EventMarker> {
    AstronomicalEvent::ALL
        .iter()
        .filter_map(|&event| {
            let day = event.day_of_year();
            let point = series.iter().find(|p| p.day_of_year == day)?;
            Some(EventMarker {
                event,
                day_of_year: day,
                label: event.label().to_string(),
                hours: point.hours,
            })
        })
        .collect()
}

fn series_metadata(series: &[SeriesPoint]) -> ViewMetadata {
    let (min_hours, max_hours, total) = series.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(lo, hi, sum), p| (lo.min(p.hours), hi.max(p.hours), sum + p.hours),
    );
    let point_count = series.len();
    let (min_hours, max_hours, mean_hours) = if point_count == 0 {
        (0.0, 0.0, 0.0)
    } else {
        (min_hours, max_hours, total / point_count as f64)
    };

    ViewMetadata {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        point_count,
        min_hours,
        max_hours,
        mean_hours,
    }
}

pub fn latitude_view(latitude: Latitude) -> LatitudeView {
    let degrees = latitude.degrees();
    let series: Vec<SeriesPoint> = YearlySeries::new(degrees).collect();
    let markers = event_markers(&series);
    let metadata = series_metadata(&series);

    debug!(
        latitude = degrees,
        min_hours = metadata.min_hours,
        max_hours = metadata.max_hours,
        "built latitude view"
    );

    LatitudeView {
        latitude,
        latitude_line: latitude_line(degrees),
        series,
        markers,
        metadata,
    }
}

pub fn try_latitude_view(latitude: f64) -> Result<LatitudeView> {
    Ok(latitude_view(Latitude::new(latitude)?))
}

pub fn to_json(view: &LatitudeView, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(json)
}

/// Text rendering of a view: headline numbers, event markers and a monthly sample.
pub struct Summary<'a>(pub &'a LatitudeView);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let meta = &view.metadata;

        writeln!(f, "=== Daylight at latitude {:.1}° ===", view.latitude.degrees())?;
        writeln!(
            f,
            "Shortest day: {:.2} h, longest day: {:.2} h, mean: {:.2} h",
            meta.min_hours, meta.max_hours, meta.mean_hours
        )?;
        writeln!(f)?;
        writeln!(f, "--- Events ---")?;
        for marker in &view.markers {
            writeln!(
                f,
                "{:<18} day {:>3}  {:>5.2} h",
                marker.label, marker.day_of_year, marker.hours
            )?;
        }
        writeln!(f)?;
        writeln!(f, "--- Monthly sample ---")?;
        for point in view.series.iter().step_by(30) {
            writeln!(f, "day {:>3}  {:>5.2} h", point.day_of_year, point.hours)?;
        }
        Ok(())
    }
}

pub fn summary(view: &LatitudeView) -> String {
    Summary(view).to_string()
}
