//! Configuration for the daylight front end.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `DAYLIGHT_`-prefixed environment variables using `__` between nested keys
//! (e.g. `DAYLIGHT_OUTPUT__FORMAT=table`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{DaylightError, Result};

pub const ENV_PREFIX: &str = "DAYLIGHT";
pub const DEFAULT_CONFIG_FILE: &str = "daylight.toml";

const VALID_FORMATS: [&str; 2] = ["json", "table"];
const VALID_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaylightConfig {
    pub slider: SliderConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// The latitude control: range, granularity and labelled marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub mark_spacing: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: -90.0,
            max: 90.0,
            step: 1.0,
            default: 0.0,
            mark_spacing: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `json` or `table`
    pub format: String,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl SliderConfig {
    /// Clamps `value` into the slider range and rounds it to the nearest step.
    /// Reversed bounds are reordered rather than trusted.
    pub fn snap(&self, value: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let clamped = value.max(lo).min(hi);
        if !(self.step > 0.0) {
            return clamped;
        }
        let steps = ((clamped - lo) / self.step).round();
        (lo + steps * self.step).max(lo).min(hi)
    }

    /// Labelled mark positions, `min` to `max` every `mark_spacing` degrees.
    pub fn marks(&self) -> Vec<(f64, String)> {
        let count = ((self.max - self.min) / self.mark_spacing).floor() as usize;
        (0..=count)
            .map(|i| {
                let position = self.min + i as f64 * self.mark_spacing;
                (position, format!("{position}°"))
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.min) || !(-90.0..=90.0).contains(&self.max) {
            return Err(DaylightError::config(
                "slider range must lie within -90° and 90°",
            ));
        }
        if self.min >= self.max {
            return Err(DaylightError::config("slider min must be below max"));
        }
        if !(self.step > 0.0) {
            return Err(DaylightError::config("slider step must be positive"));
        }
        if !(self.mark_spacing > 0.0) {
            return Err(DaylightError::config("slider mark spacing must be positive"));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(DaylightError::config(format!(
                "slider default {} is outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

impl DaylightConfig {
    /// Loads from `./daylight.toml` (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    pub fn load_from_path(config_path: Option<&Path>) -> Result<Self> {
        let config_file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut builder = Config::builder();
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(FileFormat::Toml),
            );
        } else if config_path.is_some() {
            return Err(DaylightError::config(format!(
                "config file not found: {}",
                config_file.display()
            )));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: DaylightConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.slider.validate()?;

        if !VALID_FORMATS.contains(&self.output.format.as_str()) {
            return Err(DaylightError::config(format!(
                "invalid output format '{}'. Must be one of: {}",
                self.output.format,
                VALID_FORMATS.join(", ")
            )));
        }

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(DaylightError::config(format!(
                "invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                VALID_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    // Every test that loads through the environment layer holds this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvVars(&'static [(&'static str, &'static str)]);

    impl EnvVars {
        fn set(vars: &'static [(&'static str, &'static str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars)
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for (key, _) in self.0 {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = DaylightConfig::default();
        assert_eq!(config.slider.min, -90.0);
        assert_eq!(config.slider.max, 90.0);
        assert_eq!(config.slider.step, 1.0);
        assert_eq!(config.slider.default, 0.0);
        assert_eq!(config.output.format, "table");
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_marks() {
        let marks = SliderConfig::default().marks();
        assert_eq!(marks.len(), 13);
        assert_eq!(marks[0], (-90.0, "-90°".to_string()));
        assert_eq!(marks[6], (0.0, "0°".to_string()));
        assert_eq!(marks[12], (90.0, "90°".to_string()));
    }

    #[test]
    fn test_snap() {
        let slider = SliderConfig::default();
        assert_eq!(slider.snap(45.4), 45.0);
        assert_eq!(slider.snap(-12.6), -13.0);
        assert_eq!(slider.snap(120.0), 90.0);
        assert_eq!(slider.snap(-95.0), -90.0);

        let coarse = SliderConfig {
            step: 15.0,
            ..SliderConfig::default()
        };
        assert_eq!(coarse.snap(50.0), 45.0);
        assert_eq!(coarse.snap(53.0), 60.0);
    }

    #[test]
    fn test_snap_reversed_bounds() {
        let reversed = SliderConfig {
            min: 10.0,
            max: -10.0,
            ..SliderConfig::default()
        };
        assert_eq!(reversed.snap(0.0), 0.0);
        assert_eq!(reversed.snap(25.0), 10.0);
        assert_eq!(reversed.snap(-25.0), -10.0);

        let no_step = SliderConfig {
            step: 0.0,
            ..SliderConfig::default()
        };
        assert_eq!(no_step.snap(12.3), 12.3);
    }

    #[test]
    fn test_invalid_slider_ranges() {
        let mut config = DaylightConfig::default();
        config.slider.min = 10.0;
        config.slider.max = 10.0;
        assert!(config.validate().is_err());

        let mut config = DaylightConfig::default();
        config.slider.max = 100.0;
        assert!(config.validate().is_err());

        let mut config = DaylightConfig::default();
        config.slider.step = 0.0;
        assert!(config.validate().is_err());

        let mut config = DaylightConfig::default();
        config.slider.default = -91.0;
        assert!(config.validate().is_err());

        let mut config = DaylightConfig::default();
        config.slider.mark_spacing = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("mark spacing must be positive"));
    }

    #[test]
    fn test_invalid_strings() {
        let mut config = DaylightConfig::default();
        config.output.format = "csv".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid output format 'csv'"));

        let mut config = DaylightConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[slider]\nstep = 5.0\ndefault = 60.0\n\n[output]\nformat = \"json\"\npretty = false"
        )
        .unwrap();

        let config = DaylightConfig::load_from_path(Some(file.path())).unwrap();
        assert_eq!(config.slider.step, 5.0);
        assert_eq!(config.slider.default, 60.0);
        assert_eq!(config.slider.min, -90.0);
        assert_eq!(config.output.format, "json");
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[slider]\nstep = -1.0").unwrap();
        assert!(DaylightConfig::load_from_path(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let missing = Path::new("/nonexistent/daylight.toml");
        let err = DaylightConfig::load_from_path(Some(missing)).unwrap_err();
        assert!(matches!(err, DaylightError::Config { .. }));
    }

    #[test]
    fn test_environment_overrides_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[slider]\ndefault = 10.0\n\n[output]\nformat = \"table\"").unwrap();

        let _vars = EnvVars::set(&[
            ("DAYLIGHT_OUTPUT__FORMAT", "json"),
            ("DAYLIGHT_SLIDER__DEFAULT", "45"),
        ]);

        let config = DaylightConfig::load_from_path(Some(file.path())).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.slider.default, 45.0);
        assert_eq!(config.slider.step, 1.0);
    }

    #[test]
    fn test_load_without_file_reads_environment() {
        let _lock = env_lock();
        let _vars = EnvVars::set(&[("DAYLIGHT_LOGGING__LEVEL", "debug")]);

        let config = DaylightConfig::load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, "table");
    }

    #[test]
    fn test_environment_values_are_validated() {
        let _lock = env_lock();
        let _vars = EnvVars::set(&[("DAYLIGHT_OUTPUT__FORMAT", "xml")]);

        let err = DaylightConfig::load().unwrap_err();
        assert!(err.to_string().contains("invalid output format 'xml'"));
    }
}
