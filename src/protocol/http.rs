// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP fetcher for the tarifa.si current-tariff endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, FetchError};
use crate::state::TariffSnapshot;

// ============================================================================
// FetcherConfig
// ============================================================================

/// Configuration for a [`TariffFetcher`].
///
/// # Examples
///
/// ```
/// use tarifa_si::protocol::FetcherConfig;
/// use std::time::Duration;
///
/// // Public endpoint, 10 second timeout
/// let config = FetcherConfig::new();
///
/// // Custom endpoint and timeout
/// let config = FetcherConfig::new()
///     .with_url("http://127.0.0.1:8080/api/tarifa/trenutna")
///     .with_timeout(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    url: String,
    timeout: Duration,
}

impl FetcherConfig {
    /// Public endpoint reporting the tariff currently in force.
    pub const DEFAULT_URL: &'static str = "https://www.tarifa.si/api/tarifa/trenutna";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration pointing at the public endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`TariffFetcher`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_fetcher(self) -> Result<TariffFetcher, Error> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(TariffFetcher {
            url: self.url,
            timeout: self.timeout,
            client,
            snapshot: None,
        })
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TariffFetcher
// ============================================================================

/// Fetches the current tariff and keeps the last successful result.
///
/// [`refresh`](Self::refresh) never fails: every error is logged and the
/// previous [`TariffSnapshot`] is kept. Retrying is left to the caller's
/// polling cadence.
///
/// # Examples
///
/// ```no_run
/// use tarifa_si::protocol::TariffFetcher;
///
/// # async fn example() -> tarifa_si::Result<()> {
/// let mut fetcher = TariffFetcher::new()?;
/// fetcher.refresh().await;
///
/// if let Some(snapshot) = fetcher.snapshot() {
///     println!("Current tariff: {:?}", snapshot.tariff());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TariffFetcher {
    url: String,
    timeout: Duration,
    client: Client,
    snapshot: Option<TariffSnapshot>,
}

impl TariffFetcher {
    /// Creates a fetcher for the public endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, Error> {
        FetcherConfig::new().into_fetcher()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the last successfully parsed snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&TariffSnapshot> {
        self.snapshot.as_ref()
    }

    /// Fetches the current tariff and replaces the stored snapshot on success.
    ///
    /// Failures are logged once (an empty body as a warning, everything else
    /// as an error) and leave the stored snapshot untouched.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub async fn refresh(&mut self) -> bool {
        match self.fetch().await {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                true
            }
            Err(err) if err.is_warning() => {
                tracing::warn!(url = %err.url(), "{err}");
                false
            }
            Err(err) => {
                tracing::error!(url = %err.url(), error = %err, "Failed to refresh tariff");
                false
            }
        }
    }

    /// Performs a single request and parses the response.
    ///
    /// Does not touch the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request times out, fails in transit,
    /// returns a non-success status, returns an empty body, or returns
    /// something other than a JSON object.
    pub async fn fetch(&self) -> Result<TariffSnapshot, FetchError> {
        tracing::debug!(url = %self.url, "Fetching current tariff");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody {
                url: self.url.clone(),
            });
        }

        let snapshot = TariffSnapshot::from_slice(&body).map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })?;

        tracing::debug!(snapshot = ?snapshot, "Received tariff response");
        Ok(snapshot)
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            FetchError::Transport {
                url: self.url.clone(),
                source: err,
            }
        }
    }
}
