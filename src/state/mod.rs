// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tariff state held between polls.
//!
//! [`TariffSnapshot`] is the last payload the service returned successfully.
//! It is replaced wholesale on every successful fetch and left alone on
//! failure, so stale data is preferred over no data.
//!
//! # Examples
//!
//! ```
//! use tarifa_si::state::TariffSnapshot;
//!
//! let snapshot = TariffSnapshot::from_json(r#"{"tariff":"low","ends_in_hours":3}"#).unwrap();
//! let attributes = snapshot.attributes();
//!
//! assert_eq!(attributes["ends_in_hours"], 3);
//! assert!(attributes["season"].is_null());
//! ```

mod tariff_snapshot;

pub use tariff_snapshot::{ATTRIBUTE_KEYS, TariffSnapshot};
