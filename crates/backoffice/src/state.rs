//! Shared application context.

use std::sync::Arc;

use mw_core::Seller;
use tracing::info;

use crate::config::AppConfig;
use crate::services::ai::InsightClient;
use crate::services::auth::AuthService;
use crate::services::session::SessionStore;
use crate::store::{IdentityClient, StoreClient};

/// Everything long-lived the application needs, behind one cheap clone.
///
/// Construction never fails: missing configuration degrades the relevant
/// client rather than the whole application.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AppConfig,
    store: StoreClient,
    identity: IdentityClient,
    insights: InsightClient,
    sessions: SessionStore,
}

impl AppState {
    /// Build the full context from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        Self::new(config)
    }

    /// Build the context from an already-loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let store = StoreClient::new(config.store.as_ref());
        let identity = IdentityClient::new(config.store.as_ref());
        let insights = InsightClient::new(config.gemini_api_key.clone());
        let sessions = SessionStore::new(config.session_file.clone());

        info!(
            store_configured = config.store.is_some(),
            insights_configured = insights.is_configured(),
            "application context ready"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                identity,
                insights,
                sessions,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }

    #[must_use]
    pub fn identity(&self) -> &IdentityClient {
        &self.inner.identity
    }

    #[must_use]
    pub fn insights(&self) -> &InsightClient {
        &self.inner.insights
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// The auth flow over this context's clients.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.store(), self.identity(), self.sessions())
    }

    /// The seller from a still-live persisted session, if any.
    #[must_use]
    pub fn restore_session(&self) -> Option<Seller> {
        self.inner.sessions.load().map(|s| s.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheaply_cloneable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<AppState>();
    }

    #[test]
    fn test_unconfigured_state_still_builds() {
        let state = AppState::new(AppConfig {
            store: None,
            gemini_api_key: None,
            session_file: std::env::temp_dir().join("mw-state-test-session.json"),
        });
        assert!(state.config().store.is_none());
        assert!(!state.insights().is_configured());
        assert!(state.restore_session().is_none());
    }
}
