//! HTTP client for the coupon backend's REST API.
//!
//! Wraps `reqwest` with bearer-token auth, typed deserialization of the
//! camelCase wire shapes, and retry on transient failures. All list
//! endpoints return `ycp-core` models, converted from the wire records in
//! [`crate::types`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use ycp_core::geo::GeoPoint;
use ycp_core::models::{Collaborator, Promotion, Redemption};
use ycp_core::AppConfig;

use crate::error::BackendError;
use crate::retry::retry_with_backoff;
use crate::types::{CollaboratorRecord, PromotionRecord, RedemptionRecord};

/// Client for the coupon backend.
///
/// Use [`CouponClient::from_config`] for production or
/// [`CouponClient::with_base_url`] to point at a mock server in tests.
pub struct CouponClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl CouponClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BackendError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::build(
            &config.api_base_url,
            config.api_request_timeout_secs,
            &config.api_user_agent,
            config.api_token.as_deref(),
            config.api_max_retries,
            config.api_retry_backoff_base_ms,
        )
    }

    /// Creates a client with a custom base URL, no retries and an optional
    /// bearer token (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CouponClient::from_config`].
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        token: Option<&str>,
    ) -> Result<Self, BackendError> {
        Self::build(base_url, timeout_secs, "ycp/0.1 (test)", token, 0, 0)
    }

    fn build(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        token: Option<&str>,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: the base URL must end with exactly one slash so that
        // `Url::join` appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| BackendError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: token.map(str::to_owned),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches promotions whose closest branch lies within `radius_km` of
    /// `center`. The radius filter is applied server-side; the returned list
    /// is already trimmed.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Http`] on network failure or non-2xx status.
    /// - [`BackendError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn nearby_promotions(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Promotion>, BackendError> {
        let url = self.build_url(
            "v1/promotions/nearby",
            &[
                ("lat", center.latitude.to_string()),
                ("lon", center.longitude.to_string()),
                ("radiusKm", radius_km.to_string()),
            ],
        )?;
        let records: Vec<PromotionRecord> = self.get_with_retry(&url, "promotions/nearby").await?;
        Ok(records.into_iter().map(Promotion::from).collect())
    }

    /// Fetches collaborators with a branch within `radius_km` of `center`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CouponClient::nearby_promotions`].
    pub async fn nearby_collaborators(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Collaborator>, BackendError> {
        let url = self.build_url(
            "v1/collaborators/nearby",
            &[
                ("lat", center.latitude.to_string()),
                ("lon", center.longitude.to_string()),
                ("radiusKm", radius_km.to_string()),
            ],
        )?;
        let records: Vec<CollaboratorRecord> =
            self.get_with_retry(&url, "collaborators/nearby").await?;
        Ok(records.into_iter().map(Collaborator::from).collect())
    }

    /// Lists promotions, optionally filtered by category slug.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CouponClient::nearby_promotions`].
    pub async fn list_promotions(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Promotion>, BackendError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(slug) = category {
            params.push(("category", slug.to_string()));
        }
        let url = self.build_url("v1/promotions", &params)?;
        let records: Vec<PromotionRecord> = self.get_with_retry(&url, "promotions").await?;
        Ok(records.into_iter().map(Promotion::from).collect())
    }

    /// Fetches the user's redemption history.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CouponClient::nearby_promotions`].
    pub async fn redemption_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Redemption>, BackendError> {
        let url = self.build_url(&format!("v1/users/{user_id}/redemptions"), &[])?;
        let records: Vec<RedemptionRecord> = self.get_with_retry(&url, "redemptions").await?;
        Ok(records.into_iter().map(Redemption::from).collect())
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, BackendError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| BackendError::InvalidBaseUrl(format!("{path}: {e}")))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<Vec<T>, BackendError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.get_list(url.clone(), context)
        })
        .await
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as a
    /// JSON array of `T`.
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<Vec<T>, BackendError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
