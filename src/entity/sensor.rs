// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The tarifa.si sensor entity.

use std::time::Duration;

use serde_json::{Map, Value};

use crate::config::PlatformConfig;
use crate::entity::Entity;
use crate::error::Result;
use crate::protocol::{FetcherConfig, TariffFetcher};

/// Whether the sensor has ever received data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorStatus {
    /// No fetch has succeeded yet.
    Uninitialized,
    /// At least one fetch succeeded; the last good values are held.
    HasData,
}

/// Sensor reporting the current electricity tariff.
///
/// The state is the `tariff` field of the last successful response; the
/// remaining fields are published as attributes. A failed update keeps the
/// previous values.
///
/// # Examples
///
/// ```no_run
/// use tarifa_si::config::PlatformConfig;
/// use tarifa_si::entity::{Entity, TarifaSiSensor};
///
/// # async fn example() -> tarifa_si::Result<()> {
/// let mut sensor = TarifaSiSensor::new(PlatformConfig::default())?;
///
/// sensor.update().await;
/// println!("{}: {:?}", sensor.name(), sensor.state());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TarifaSiSensor {
    fetcher: TariffFetcher,
    config: PlatformConfig,
    state: Option<Value>,
    attributes: Map<String, Value>,
}

impl TarifaSiSensor {
    /// Display name.
    pub const NAME: &'static str = "Tarifa SI Sensor";
    /// Display icon.
    pub const ICON: &'static str = "mdi:home-lightning-bolt-outline";
    /// Stable unique identifier.
    pub const UNIQUE_ID: &'static str = "tarifa_si_sensor";

    /// Creates a sensor polling the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: PlatformConfig) -> Result<Self> {
        Ok(Self::with_fetcher(TariffFetcher::new()?, config))
    }

    /// Creates a sensor from the host's raw configuration block.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(value: &Value) -> Result<Self> {
        let config = PlatformConfig::from_value(value)?;
        let fetcher = FetcherConfig::new().into_fetcher()?;
        Ok(Self::with_fetcher(fetcher, config))
    }

    /// Creates a sensor around an existing fetcher.
    #[must_use]
    pub fn with_fetcher(fetcher: TariffFetcher, config: PlatformConfig) -> Self {
        Self {
            fetcher,
            config,
            state: None,
            attributes: Map::new(),
        }
    }

    /// Returns whether the sensor holds data yet.
    #[must_use]
    pub fn status(&self) -> SensorStatus {
        if self.fetcher.snapshot().is_some() {
            SensorStatus::HasData
        } else {
            SensorStatus::Uninitialized
        }
    }

    /// Returns the underlying fetcher.
    #[must_use]
    pub fn fetcher(&self) -> &TariffFetcher {
        &self.fetcher
    }

    fn sync_from_snapshot(&mut self) {
        if let Some(snapshot) = self.fetcher.snapshot() {
            self.state = snapshot.tariff().cloned();
            self.attributes = snapshot.attributes();
        }
    }
}

impl Entity for TarifaSiSensor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn icon(&self) -> &str {
        Self::ICON
    }

    fn unique_id(&self) -> &str {
        Self::UNIQUE_ID
    }

    fn scan_interval(&self) -> Duration {
        self.config.scan_interval()
    }

    fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    fn extra_state_attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    async fn update(&mut self) {
        let refreshed = self.fetcher.refresh().await;
        self.sync_from_snapshot();
        if refreshed {
            tracing::debug!(state = ?self.state, "Tariff sensor updated");
        }
    }
}
