// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration supplied by the host.
//!
//! The only recognized option is `scan_interval`. Hosts spell durations in
//! several ways, all of which are accepted:
//!
//! | form | example |
//! |------|---------|
//! | seconds | `120`, `90.5` |
//! | clock string | `"00:02:00"`, `"02:00"`, `"120"` |
//! | mapping | `{"minutes": 2}`, `{"hours": 1, "seconds": 30}` |
//!
//! Other keys in the configuration block (such as `platform`) are ignored.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Configuration owned by one sensor instance.
///
/// # Examples
///
/// ```
/// use tarifa_si::config::PlatformConfig;
/// use std::time::Duration;
///
/// let config = PlatformConfig::from_value(&serde_json::json!({
///     "platform": "tarifa_si",
///     "scan_interval": 60
/// }))
/// .unwrap();
/// assert_eq!(config.scan_interval(), Duration::from_secs(60));
///
/// let config = PlatformConfig::default();
/// assert_eq!(config.scan_interval(), PlatformConfig::DEFAULT_SCAN_INTERVAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConfig {
    scan_interval: Duration,
}

impl PlatformConfig {
    /// Default polling cadence (5 minutes).
    pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(300);

    /// Creates a configuration with the default scan interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scan_interval: Self::DEFAULT_SCAN_INTERVAL,
        }
    }

    /// Sets the scan interval.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveScanInterval` if `interval` is zero.
    pub fn with_scan_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::NonPositiveScanInterval(0.0));
        }
        self.scan_interval = interval;
        Ok(self)
    }

    /// Reads the configuration from the host's configuration block.
    ///
    /// A missing or `null` `scan_interval` falls back to
    /// [`DEFAULT_SCAN_INTERVAL`](Self::DEFAULT_SCAN_INTERVAL).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if the block is not a mapping, and
    /// another `ConfigError` if `scan_interval` cannot be understood or is not
    /// positive.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let block = value
            .as_object()
            .ok_or_else(|| ConfigError::InvalidConfig(format!("expected a mapping, got {value}")))?;

        match block.get("scan_interval") {
            None | Some(Value::Null) => Ok(Self::new()),
            Some(raw) => {
                let interval = ScanInterval::deserialize(raw)
                    .map_err(|_| ConfigError::InvalidScanInterval(raw.to_string()))?;
                Self::new().with_scan_interval(interval.into_duration()?)
            }
        }
    }

    /// Returns the polling cadence.
    #[must_use]
    pub fn scan_interval(&self) -> Duration {
        self.scan_interval
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The accepted spellings of a duration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScanInterval {
    Seconds(f64),
    Clock(String),
    // Kept as a map so that arrays are not read positionally.
    Parts(Map<String, Value>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DurationParts {
    days: f64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    milliseconds: f64,
}

impl ScanInterval {
    fn into_duration(self) -> Result<Duration, ConfigError> {
        let seconds = match self {
            Self::Seconds(seconds) => seconds,
            Self::Clock(clock) => parse_clock(&clock)?,
            Self::Parts(map) => {
                let raw = Value::Object(map);
                let parts = DurationParts::deserialize(&raw)
                    .map_err(|_| ConfigError::InvalidScanInterval(raw.to_string()))?;
                parts.days * 86_400.0
                    + parts.hours * 3_600.0
                    + parts.minutes * 60.0
                    + parts.seconds
                    + parts.milliseconds / 1_000.0
            }
        };

        if !seconds.is_finite() {
            return Err(ConfigError::InvalidScanInterval(format!("{seconds}")));
        }
        if seconds <= 0.0 {
            return Err(ConfigError::NonPositiveScanInterval(seconds));
        }
        Duration::try_from_secs_f64(seconds)
            .map_err(|err| ConfigError::InvalidScanInterval(err.to_string()))
    }
}

/// Parses `"SS"`, `"MM:SS"` or `"HH:MM:SS"` into seconds.
fn parse_clock(clock: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidScanInterval(clock.to_string());

    let parts = clock
        .trim()
        .split(':')
        .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [seconds] => Ok(*seconds),
        [minutes, seconds] => Ok(minutes * 60.0 + seconds),
        [hours, minutes, seconds] => Ok(hours * 3_600.0 + minutes * 60.0 + seconds),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_option_uses_default() {
        let config = PlatformConfig::from_value(&json!({ "platform": "tarifa_si" })).unwrap();
        assert_eq!(config.scan_interval(), Duration::from_secs(300));
    }

    #[test]
    fn null_option_uses_default() {
        let config = PlatformConfig::from_value(&json!({ "scan_interval": null })).unwrap();
        assert_eq!(config, PlatformConfig::default());
    }

    #[test]
    fn integer_seconds() {
        let config = PlatformConfig::from_value(&json!({ "scan_interval": 60 })).unwrap();
        assert_eq!(config.scan_interval(), Duration::from_secs(60));
    }

    #[test]
    fn fractional_seconds() {
        let config = PlatformConfig::from_value(&json!({ "scan_interval": 1.5 })).unwrap();
        assert_eq!(config.scan_interval(), Duration::from_millis(1500));
    }

    #[test]
    fn clock_strings() {
        let cases = [
            ("00:05:00", 300),
            ("02:30", 150),
            ("45", 45),
            ("1:00:00", 3600),
        ];
        for (clock, expected) in cases {
            let config = PlatformConfig::from_value(&json!({ "scan_interval": clock })).unwrap();
            assert_eq!(
                config.scan_interval(),
                Duration::from_secs(expected),
                "{clock}"
            );
        }
    }

    #[test]
    fn duration_mapping() {
        let config =
            PlatformConfig::from_value(&json!({ "scan_interval": { "minutes": 2, "seconds": 5 } }))
                .unwrap();
        assert_eq!(config.scan_interval(), Duration::from_secs(125));
    }

    #[test]
    fn zero_is_rejected() {
        let err = PlatformConfig::from_value(&json!({ "scan_interval": 0 })).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveScanInterval(_)));
    }

    #[test]
    fn negative_is_rejected() {
        let err = PlatformConfig::from_value(&json!({ "scan_interval": -30 })).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveScanInterval(-30.0));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = PlatformConfig::from_value(&json!({ "scan_interval": "soon" })).unwrap_err();
        assert_eq!(err, ConfigError::InvalidScanInterval("soon".to_string()));

        let err = PlatformConfig::from_value(&json!({ "scan_interval": [1, 2] })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScanInterval(_)));

        let err =
            PlatformConfig::from_value(&json!({ "scan_interval": { "fortnights": 1 } }))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScanInterval(_)));
    }

    #[test]
    fn arrays_are_not_read_as_parts() {
        for raw in [json!([1, 2]), json!([60]), json!([0, 0, 5, 0, 0])] {
            let err = PlatformConfig::from_value(&json!({ "scan_interval": raw })).unwrap_err();
            assert_eq!(err, ConfigError::InvalidScanInterval(raw.to_string()));
        }
    }

    #[test]
    fn non_mapping_block_is_rejected() {
        for block in [json!(null), json!("tarifa_si"), json!([{ "scan_interval": 60 }])] {
            let err = PlatformConfig::from_value(&block).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidConfig(_)), "{block}");
        }
    }

    #[test]
    fn with_scan_interval_rejects_zero() {
        assert!(PlatformConfig::new().with_scan_interval(Duration::ZERO).is_err());
        let config = PlatformConfig::new()
            .with_scan_interval(Duration::from_secs(90))
            .unwrap();
        assert_eq!(config.scan_interval(), Duration::from_secs(90));
    }
}
