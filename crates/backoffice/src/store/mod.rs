//! Remote entity gateway over the Supabase row API.
//!
//! Five tables (`appointments`, `products`, `sellers`, `clients`, `sales`)
//! are accessed through PostgREST-style row operations: list, insert,
//! partial patch, and delete. There are no joins; cross-entity references
//! are resolved client-side by scanning loaded collections.
//!
//! Every operation returns `Result<_, StoreError>` uniformly. The original
//! system swallowed list/delete failures and surfaced create failures as
//! bare nulls; here the caller layer ([`crate::cache`], the CLI) decides
//! where to fail soft, so "empty because no rows" and "empty because the
//! transport died" stay distinguishable.
//!
//! The gateway performs no batching, no retries, and no idempotency keys:
//! each call is a single one-shot network operation, and a double-submit
//! will create duplicate rows.

mod appointments;
mod clients;
pub mod identity;
mod products;
pub mod rows;
mod sales;
mod sellers;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::StoreConfig;

pub use identity::{IdentityClient, IdentityError, IdentitySession};

/// Errors that can occur when talking to the backend store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store credentials were never configured.
    #[error("store is not configured (missing SUPABASE_URL / SUPABASE_ANON_KEY)")]
    NotConfigured,

    /// HTTP transport failed (network unreachable, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request (constraint violation, bad column...).
    #[error("store error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Whether this error means the backend could not be reached at all,
    /// as opposed to the backend rejecting the request.
    #[must_use]
    pub fn is_network(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Client for the backend row store.
///
/// Cheaply cloneable via `Arc`. Construction never fails: an unconfigured
/// client is valid and every operation on it returns
/// [`StoreError::NotConfigured`], mirroring how the system degrades when
/// credentials are absent.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl StoreClient {
    /// Create a new store client.
    ///
    /// The anonymous key is sent both as the `apikey` header and as a
    /// bearer token, per the Supabase REST convention.
    #[must_use]
    pub fn new(config: Option<&StoreConfig>) -> Self {
        let (client, base_url) = match config {
            Some(cfg) => {
                let key = cfg.anon_key.expose_secret();

                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                if let Ok(value) = HeaderValue::from_str(key) {
                    headers.insert("apikey", value);
                }
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {key}")) {
                    headers.insert(AUTHORIZATION, value);
                }

                let client = reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .unwrap_or_default();

                (client, Some(cfg.url.clone()))
            }
            None => (reqwest::Client::new(), None),
        };

        Self {
            inner: Arc::new(StoreClientInner { client, base_url }),
        }
    }

    /// Base URL, or `NotConfigured` when credentials were absent.
    fn base_url(&self) -> Result<&str, StoreError> {
        self.inner
            .base_url
            .as_deref()
            .ok_or(StoreError::NotConfigured)
    }

    /// Fetch all rows of a table, in store-native order.
    async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/rest/v1/{table}?select=*", self.base_url()?);
        let response = self.inner.client.get(&url).send().await?;
        Self::parse_body(response).await
    }

    /// Fetch the rows of a table matching a PostgREST filter expression.
    async fn select_where<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/rest/v1/{table}?select=*&{filter}", self.base_url()?);
        let response = self.inner.client.get(&url).send().await?;
        Self::parse_body(response).await
    }

    /// Insert one row and return the stored representation, including the
    /// store-assigned identifier.
    async fn insert_one<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = format!("{}/rest/v1/{table}?select=*", self.base_url()?);
        let response = self
            .inner
            .client
            .post(&url)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows: Vec<T> = Self::parse_body(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Parse("insert returned no representation".to_owned()))
    }

    /// Patch the row with the given identifier and return the refreshed
    /// representation.
    async fn patch_by_id<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = format!(
            "{}/rest/v1/{table}?id=eq.{}&select=*",
            self.base_url()?,
            urlencoding::encode(id)
        );
        let response = self
            .inner
            .client
            .patch(&url)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows: Vec<T> = Self::parse_body(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Parse("patch matched no rows".to_owned()))
    }

    /// Delete the row with the given identifier. Deleting a row that does
    /// not exist is not an error at the store level.
    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let url = format!(
            "{}/rest/v1/{table}?id=eq.{}",
            self.base_url()?,
            urlencoding::encode(id)
        );
        let response = self.inner.client.delete(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Interpret a store response: JSON body on success, `Api` error with
    /// the backend's message otherwise.
    async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| StoreError::Parse(format!("failed to parse response: {e}")))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("configured", &self.inner.base_url.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client_reports_not_configured() {
        let client = StoreClient::new(None);
        assert!(matches!(
            client.base_url(),
            Err(StoreError::NotConfigured)
        ));
    }

    #[test]
    fn test_store_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<StoreClient>();
        assert_send_sync::<StoreClient>();
    }

    #[test]
    fn test_api_error_is_not_network() {
        let err = StoreError::Api {
            status: 400,
            message: "bad request".to_owned(),
        };
        assert!(!err.is_network());
        assert!(!StoreError::NotConfigured.is_network());
    }
}
