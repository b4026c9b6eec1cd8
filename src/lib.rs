// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tarifa_si` - current Slovenian electricity tariff as a home-automation sensor.
//!
//! The crate polls the public [tarifa.si](https://www.tarifa.si) endpoint and
//! exposes the tariff in force as a sensor entity. The host drives it: it
//! calls [`Entity::update`] on its own schedule and reads the state and
//! attributes afterwards.
//!
//! # Components
//!
//! - [`TariffFetcher`]: one HTTP GET per refresh, keeps the last good
//!   [`TariffSnapshot`]
//! - [`TarifaSiSensor`]: the entity wrapping the fetcher
//! - [`PlatformConfig`]: the `scan_interval` option read from the host
//!
//! # Failure handling
//!
//! Nothing is surfaced to the host. Timeouts, transport failures, error
//! statuses and malformed bodies are logged through [`tracing`] and the
//! previous reading is kept.
//!
//! # Quick Start
//!
//! ```no_run
//! use tarifa_si::{Entity, TarifaSiSensor};
//!
//! #[tokio::main]
//! async fn main() -> tarifa_si::Result<()> {
//!     let mut sensor = TarifaSiSensor::from_config(&serde_json::json!({
//!         "platform": "tarifa_si",
//!         "scan_interval": 60
//!     }))?;
//!
//!     let mut ticker = tokio::time::interval(sensor.scan_interval());
//!     loop {
//!         ticker.tick().await;
//!         sensor.update().await;
//!         println!("{:?} {:?}", sensor.state(), sensor.extra_state_attributes());
//!     }
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod protocol;
pub mod state;

pub use config::PlatformConfig;
pub use entity::{Entity, SensorStatus, TarifaSiSensor};
pub use error::{ConfigError, Error, FetchError, Result};
pub use protocol::{FetcherConfig, TariffFetcher};
pub use state::TariffSnapshot;
