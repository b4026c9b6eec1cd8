// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the tarifa.si service.
//!
//! The service exposes a single unauthenticated endpoint,
//! `GET /api/tarifa/trenutna`, returning the tariff currently in force as a
//! JSON object. [`TariffFetcher`] performs that request and keeps the last
//! good answer.

mod http;

pub use http::{FetcherConfig, TariffFetcher};
