//! Login and logout.
//!
//! Login is a two-step handshake: the identity service verifies the
//! credentials, then the application store confirms the subject still has
//! an active seller row. Only when both agree does a local session exist.

mod error;

pub use error::AuthError;

use mw_core::{Seller, SellerId};
use tracing::{info, instrument, warn};

use crate::services::session::{SessionStore, StoredSession};
use crate::store::{IdentityClient, IdentityError, StoreClient};

/// Borrowing facade over the pieces login needs.
///
/// Built on demand from [`crate::AppState`] rather than stored; it owns
/// nothing.
pub struct AuthService<'a> {
    store: &'a StoreClient,
    identity: &'a IdentityClient,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub fn new(
        store: &'a StoreClient,
        identity: &'a IdentityClient,
        sessions: &'a SessionStore,
    ) -> Self {
        Self {
            store,
            identity,
            sessions,
        }
    }

    /// Sign a seller in.
    ///
    /// Returns `Ok(Some(seller))` on success, with the session persisted.
    /// Returns `Ok(None)` when the credentials are wrong or the account has
    /// been deactivated; the caller cannot tell the two apart, which is
    /// deliberate.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] when the identity service is
    /// unreachable, so callers can suggest retrying instead of blaming the
    /// password.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Seller>, AuthError> {
        let identity = match self.identity.sign_in_with_password(email, password).await {
            Ok(identity) => identity,
            Err(IdentityError::Rejected { status, .. }) => {
                info!(status, "identity rejected credentials");
                return Ok(None);
            }
            Err(e) if e.is_network() => return Err(AuthError::Network),
            Err(e) => return Err(AuthError::Identity(e)),
        };

        let seller_id = SellerId::new(&identity.user_id);
        let Some(seller) = self.store.find_active_seller(&seller_id).await? else {
            // Valid credentials but no active seller row: revoke the token
            // we just minted so the identity session does not outlive the
            // rejection, then report it as a plain failed login.
            info!(seller_id = %seller_id, "no active seller for identity, revoking");
            if let Err(e) = self.identity.sign_out(&identity.access_token).await {
                warn!(error = %e, "failed to revoke identity session");
            }
            self.sessions.clear();
            return Ok(None);
        };

        self.sessions.save(&StoredSession::begin(seller.clone()))?;
        info!(seller_id = %seller.id, "login complete");
        Ok(Some(seller))
    }

    /// Sign out by discarding the local session record.
    ///
    /// The record holds no identity token, so there is nothing to revoke
    /// remotely; this never fails.
    #[instrument(skip_all)]
    pub fn logout(&self) {
        self.sessions.clear();
        info!("session cleared");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::session::StoredSession;
    use crate::store::IdentityError;
    use mw_core::{Email, SellerId};

    fn temp_sessions(name: &str) -> SessionStore {
        let dir = std::env::temp_dir().join(format!("mw-auth-test-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        SessionStore::new(dir.join("session.json"))
    }

    fn seller() -> Seller {
        Seller {
            id: SellerId::new("s-1"),
            name: "Luis".to_owned(),
            email: Email::parse("luis@mw.com").unwrap(),
            phone: "555-0100".to_owned(),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_unconfigured_identity_is_an_error_not_a_rejection() {
        let store = StoreClient::new(None);
        let identity = IdentityClient::new(None);
        let sessions = temp_sessions("unconfigured");
        sessions.clear();

        let auth = AuthService::new(&store, &identity, &sessions);
        let result = auth.login("luis@mw.com", "secret").await;

        // No credentials were checked, so this must not look like a wrong
        // password (`Ok(None)`); it is a service-side failure.
        assert!(matches!(
            result,
            Err(AuthError::Identity(IdentityError::NotConfigured))
        ));
        assert!(sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_does_not_create_a_session() {
        let store = StoreClient::new(None);
        let identity = IdentityClient::new(None);
        let sessions = temp_sessions("no-session");
        sessions.clear();

        let auth = AuthService::new(&store, &identity, &sessions);
        let _ = auth.login("luis@mw.com", "secret").await;
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_logout_discards_the_persisted_session() {
        let store = StoreClient::new(None);
        let identity = IdentityClient::new(None);
        let sessions = temp_sessions("logout");
        sessions.save(&StoredSession::begin(seller())).unwrap();
        assert!(sessions.load().is_some());

        AuthService::new(&store, &identity, &sessions).logout();
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_rejection_maps_to_non_network_auth_error() {
        let rejected = IdentityError::Rejected {
            status: 400,
            message: "invalid login credentials".to_owned(),
        };
        assert!(!rejected.is_network());
        assert!(!IdentityError::NotConfigured.is_network());
    }
}
