//! REST client for the admin backend.
//!
//! Wraps the `Accounts`, `Applications` and `PhoneNumbers` resources using
//! [`reqwest`]. Every call carries the session's bearer token.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use telconf_core::resources::{Account, Application, ApplicationPayload, PhoneNumber};
use telconf_core::types::Sid;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Backend operations the form and account flows depend on.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_accounts(&self, token: &str) -> Result<Vec<Account>, ApiError>;

    async fn list_applications(&self, token: &str) -> Result<Vec<Application>, ApiError>;

    async fn list_phone_numbers(&self, token: &str) -> Result<Vec<PhoneNumber>, ApiError>;

    async fn create_application(
        &self,
        token: &str,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError>;

    async fn update_application(
        &self,
        token: &str,
        sid: &Sid,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError>;

    async fn delete_account(&self, token: &str, sid: &Sid) -> Result<(), ApiError>;
}

/// HTTP client for one admin backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Map non-2xx statuses to [`ApiError`], keeping the backend's `msg`.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn list_accounts(&self, token: &str) -> Result<Vec<Account>, ApiError> {
        self.get_json(token, "/Accounts").await
    }

    async fn list_applications(&self, token: &str) -> Result<Vec<Application>, ApiError> {
        self.get_json(token, "/Applications").await
    }

    async fn list_phone_numbers(&self, token: &str) -> Result<Vec<PhoneNumber>, ApiError> {
        self.get_json(token, "/PhoneNumbers").await
    }

    async fn create_application(
        &self,
        token: &str,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/Applications"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn update_application(
        &self,
        token: &str,
        sid: &Sid,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/Applications/{sid}")))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn delete_account(&self, token: &str, sid: &Sid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/Accounts/{sid}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }
}
