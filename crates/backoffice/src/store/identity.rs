//! Identity-service client (Supabase GoTrue).
//!
//! Handles the password grant and explicit sign-out. The application-level
//! seller lookup that follows a successful exchange lives in
//! [`crate::services::auth`].

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::StoreConfig;

/// Errors that can occur during the identity exchange.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Identity credentials were never configured.
    #[error("identity service is not configured")]
    NotConfigured,

    /// HTTP transport failed (service unreachable, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identity service rejected the exchange (no such account, bad
    /// password, disabled identity).
    #[error("identity rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),
}

impl IdentityError {
    /// Whether this error means the identity service could not be reached
    /// at all. Callers present a different message for network failure
    /// versus bad credentials.
    #[must_use]
    pub fn is_network(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// A successful identity exchange.
#[derive(Debug, Clone)]
pub struct IdentitySession {
    /// Subject id; equals the seller row id in the application store.
    pub user_id: String,
    /// Bearer token for follow-up identity calls (notably sign-out).
    pub access_token: String,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
}

/// Client for the identity service.
///
/// Like [`crate::store::StoreClient`], construction never fails and an
/// unconfigured client reports [`IdentityError::NotConfigured`] on use.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<IdentityClientInner>,
}

struct IdentityClientInner {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl IdentityClient {
    /// Create a new identity client from the shared store configuration.
    #[must_use]
    pub fn new(config: Option<&StoreConfig>) -> Self {
        let (client, base_url) = match config {
            Some(cfg) => {
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                if let Ok(value) = HeaderValue::from_str(cfg.anon_key.expose_secret()) {
                    headers.insert("apikey", value);
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
            inner: Arc::new(IdentityClientInner { client, base_url }),
        }
    }

    fn base_url(&self) -> Result<&str, IdentityError> {
        self.inner
            .base_url
            .as_deref()
            .ok_or(IdentityError::NotConfigured)
    }

    /// Exchange email and password for an identity session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] for bad credentials and
    /// [`IdentityError::Http`] when the service cannot be reached; use
    /// [`IdentityError::is_network`] to tell the two apart.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentitySession, IdentityError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url()?);
        let response = self
            .inner
            .client
            .post(&url)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IdentityError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| IdentityError::Parse(format!("failed to parse token response: {e}")))?;

        Ok(IdentitySession {
            user_id: token.user.id,
            access_token: token.access_token,
        })
    }

    /// Invalidate an identity session at the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or rejects the call.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let url = format!("{}/auth/v1/logout", self.base_url()?);
        let response = self
            .inner
            .client
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(IdentityError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient")
            .field("configured", &self.inner.base_url.is_some())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client_reports_not_configured() {
        let client = IdentityClient::new(None);
        assert!(matches!(
            client.base_url(),
            Err(IdentityError::NotConfigured)
        ));
    }

    #[test]
    fn test_rejected_is_not_network() {
        let err = IdentityError::Rejected {
            status: 400,
            message: "invalid login credentials".to_owned(),
        };
        assert!(!err.is_network());
    }

    #[test]
    fn test_token_response_shape() {
        let body = r#"{
            "access_token": "jwt-value",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": "7c9e6679", "email": "luis@mw.com" }
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.user.id, "7c9e6679");
        assert_eq!(token.access_token, "jwt-value");
    }
}
