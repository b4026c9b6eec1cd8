// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The last successfully parsed tariff payload.

use serde_json::{Map, Value};

/// Names of the auxiliary attributes, in the order the service reports them.
pub const ATTRIBUTE_KEYS: [&str; 7] = [
    "season",
    "start_hour",
    "started_before_hours",
    "start_day_difference",
    "end_hour",
    "end_day_difference",
    "ends_in_hours",
];

/// Snapshot of the current tariff as reported by the service.
///
/// Every field is kept as the raw JSON value the service sent. Nothing is
/// validated or derived; a field missing from the payload is `None`.
///
/// # Examples
///
/// ```
/// use tarifa_si::state::TariffSnapshot;
///
/// let snapshot = TariffSnapshot::from_json(r#"{"tariff":"high","season":"winter"}"#).unwrap();
/// assert_eq!(snapshot.tariff(), Some(&serde_json::json!("high")));
/// assert!(snapshot.end_hour.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TariffSnapshot {
    /// Current price tier.
    pub tariff: Option<Value>,
    /// Season the tier belongs to.
    pub season: Option<Value>,
    /// Hour at which the current tier started.
    pub start_hour: Option<Value>,
    /// How many hours ago the current tier started.
    pub started_before_hours: Option<Value>,
    /// Day offset of the start hour relative to today.
    pub start_day_difference: Option<Value>,
    /// Hour at which the current tier ends.
    pub end_hour: Option<Value>,
    /// Day offset of the end hour relative to today.
    pub end_day_difference: Option<Value>,
    /// How many hours remain until the current tier ends.
    pub ends_in_hours: Option<Value>,
}

impl TariffSnapshot {
    /// Parses a snapshot from a JSON response body.
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON or is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        Self::from_slice(body.as_bytes())
    }

    /// Parses a snapshot from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not UTF-8 encoded JSON, or the JSON
    /// is not an object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        // Going through a map keeps arrays from filling the fields positionally.
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Returns the current tariff value, if the service reported one.
    #[must_use]
    pub fn tariff(&self) -> Option<&Value> {
        self.tariff.as_ref()
    }

    /// Returns every field except the tariff as an attribute mapping.
    ///
    /// Every key is always present; fields missing from the payload map to
    /// `null`.
    #[must_use]
    pub fn attributes(&self) -> Map<String, Value> {
        let values = [
            &self.season,
            &self.start_hour,
            &self.started_before_hours,
            &self.start_day_difference,
            &self.end_hour,
            &self.end_day_difference,
            &self.ends_in_hours,
        ];

        ATTRIBUTE_KEYS
            .iter()
            .zip(values)
            .map(|(key, value)| ((*key).to_string(), value.clone().unwrap_or(Value::Null)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_full_payload() {
        let snapshot = TariffSnapshot::from_json(
            r#"{"tariff":"high","season":"winter","start_hour":17,"started_before_hours":1,
                "start_day_difference":0,"end_hour":20,"end_day_difference":0,"ends_in_hours":2}"#,
        )
        .unwrap();

        assert_eq!(snapshot.tariff(), Some(&json!("high")));
        assert_eq!(
            Value::Object(snapshot.attributes()),
            json!({
                "season": "winter",
                "start_hour": 17,
                "started_before_hours": 1,
                "start_day_difference": 0,
                "end_hour": 20,
                "end_day_difference": 0,
                "ends_in_hours": 2
            })
        );
    }

    #[test]
    fn missing_fields_become_null_attributes() {
        let snapshot = TariffSnapshot::from_json(r#"{"tariff":"low"}"#).unwrap();
        let attributes = snapshot.attributes();

        assert_eq!(attributes.len(), ATTRIBUTE_KEYS.len());
        assert!(attributes.values().all(Value::is_null));
    }

    #[test]
    fn values_pass_through_untouched() {
        let snapshot =
            TariffSnapshot::from_json(r#"{"tariff":3,"start_hour":"17:00","extra":true}"#).unwrap();

        assert_eq!(snapshot.tariff(), Some(&json!(3)));
        assert_eq!(snapshot.start_hour, Some(json!("17:00")));
    }

    #[test]
    fn null_tariff_is_absent() {
        let snapshot = TariffSnapshot::from_json(r#"{"tariff":null}"#).unwrap();
        assert!(snapshot.tariff().is_none());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(TariffSnapshot::from_json("[1, 2, 3]").is_err());
        assert!(TariffSnapshot::from_json("\"high\"").is_err());
        assert!(TariffSnapshot::from_json("<html></html>").is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(TariffSnapshot::from_slice(b"{\"tariff\":\"hi\xFFgh\"}").is_err());
        assert!(TariffSnapshot::from_slice(br#"{"tariff":"visoka"}"#).is_ok());
    }
}
