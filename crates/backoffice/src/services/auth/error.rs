use thiserror::Error;

use crate::services::session::SessionError;
use crate::store::{IdentityError, StoreError};

/// Errors surfaced by the login flow.
///
/// Bad credentials are not an error; [`super::AuthService::login`] reports
/// them as `Ok(None)`. These variants cover the cases a caller should show
/// as a failure rather than a rejection.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity service could not be reached at all.
    #[error("could not reach the identity service")]
    Network,

    /// The identity exchange failed for a reason other than credentials.
    #[error(transparent)]
    Identity(IdentityError),

    /// The seller lookup against the application store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The session record could not be persisted after a successful login.
    #[error(transparent)]
    Session(#[from] SessionError),
}
