//! Seller entity.

use serde::{Deserialize, Serialize};

use crate::types::{Email, SellerId};

/// A seller account.
///
/// The email doubles as the login identifier at the identity service; the
/// `active` flag gates login. Passwords are write-only: they travel in
/// [`NewSeller`] and [`SellerUpdate`] but are never read back, so this
/// struct has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Store-assigned identifier, equal to the identity-service subject ID.
    pub id: SellerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    /// Whether the account may log in.
    pub active: bool,
}

/// Payload for creating a seller (admin-only path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSeller {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub active: bool,
    /// Initial password, forwarded to the store and never round-tripped.
    pub password: String,
}

/// Partial-field patch for a seller.
///
/// Only fields set to `Some` are sent; everything else is left untouched.
/// `password` rotates the credential when supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub active: Option<bool>,
    pub password: Option<String>,
}

impl SellerUpdate {
    /// Whether the patch would change anything at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.active.is_none()
            && self.password.is_none()
    }
}
