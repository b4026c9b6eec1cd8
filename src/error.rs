// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tarifa_si` library.
//!
//! Failures are split by concern: fetching the tariff from the remote API,
//! and reading the platform configuration. Fetch failures never escape
//! [`TariffFetcher::refresh`](crate::protocol::TariffFetcher::refresh); they
//! are only returned by the lower-level
//! [`TariffFetcher::fetch`](crate::protocol::TariffFetcher::fetch).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching the tariff failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The platform configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors that can occur during a single fetch of the current tariff.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_ms} ms")]
    Timeout {
        /// The endpoint that was queried.
        url: String,
        /// The configured timeout.
        timeout_ms: u64,
    },

    /// The request failed at the transport level.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The endpoint that was queried.
        url: String,
        /// The underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// The endpoint that was queried.
        url: String,
        /// The returned status code.
        status: reqwest::StatusCode,
    },

    /// The server answered with an empty body.
    #[error("received empty response from {url}")]
    EmptyBody {
        /// The endpoint that was queried.
        url: String,
    },

    /// The body is not a JSON object.
    #[error("failed to parse JSON from {url}: {source}")]
    Decode {
        /// The endpoint that was queried.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns the endpoint the failed request was sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::Transport { url, .. }
            | Self::Status { url, .. }
            | Self::EmptyBody { url }
            | Self::Decode { url, .. } => url,
        }
    }

    /// Returns `true` if this failure is logged as a warning rather than an error.
    ///
    /// An empty body means the service is reachable but has nothing to say,
    /// which is not treated as a fault.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyBody { .. })
    }
}

/// Errors related to the platform configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration block is not a mapping.
    #[error("invalid configuration block: {0}")]
    InvalidConfig(String),

    /// The scan interval is zero or negative.
    #[error("scan interval must be positive, got {0} s")]
    NonPositiveScanInterval(f64),

    /// The scan interval could not be understood.
    #[error("invalid scan interval: {0}")]
    InvalidScanInterval(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_display() {
        let err = FetchError::EmptyBody {
            url: "https://example.com/api".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "received empty response from https://example.com/api"
        );
    }

    #[test]
    fn only_empty_body_is_warning() {
        let empty = FetchError::EmptyBody {
            url: "u".to_string(),
        };
        let status = FetchError::Status {
            url: "u".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(empty.is_warning());
        assert!(!status.is_warning());
    }

    #[test]
    fn status_display_and_url() {
        let err = FetchError::Status {
            url: "https://example.com/api".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.url(), "https://example.com/api");
        assert_eq!(
            err.to_string(),
            "request to https://example.com/api returned HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::NonPositiveScanInterval(0.0).into();
        assert!(matches!(
            err,
            Error::Config(ConfigError::NonPositiveScanInterval(_))
        ));
    }

    #[test]
    fn decode_display() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::Decode {
            url: "https://example.com/api".to_string(),
            source,
        };
        assert!(
            err.to_string()
                .starts_with("failed to parse JSON from https://example.com/api: ")
        );
    }
}
