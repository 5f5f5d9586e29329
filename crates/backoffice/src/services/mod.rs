//! Application services layered on top of the row gateway.

pub mod ai;
pub mod auth;
pub mod imaging;
pub mod session;

pub use ai::InsightClient;
pub use auth::{AuthError, AuthService};
pub use imaging::{ImageError, normalize, normalize_batch};
pub use session::{SessionStore, StoredSession};
