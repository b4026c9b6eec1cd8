// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entities exposed to the home-automation host.
//!
//! The host owns scheduling: it calls [`Entity::update`] every
//! [`Entity::scan_interval`] and reads the other properties afterwards for
//! display and automations.

mod sensor;

use std::time::Duration;

use serde_json::{Map, Value};

pub use sensor::{SensorStatus, TarifaSiSensor};

/// Contract between an entity and the host that polls it.
#[allow(async_fn_in_trait)]
pub trait Entity {
    /// Human-readable name shown by the host.
    fn name(&self) -> &str;

    /// Icon identifier, e.g. `mdi:flash`.
    fn icon(&self) -> &str;

    /// Identifier that stays the same across restarts.
    fn unique_id(&self) -> &str;

    /// How often the host should call [`update`](Self::update).
    fn scan_interval(&self) -> Duration;

    /// Current primary value, or `None` while unknown.
    fn state(&self) -> Option<&Value>;

    /// Auxiliary values published alongside the state.
    fn extra_state_attributes(&self) -> &Map<String, Value>;

    /// Refreshes the entity from its data source.
    ///
    /// Must not fail; problems are logged and the previous values are kept.
    async fn update(&mut self);
}
