//! Client entity.

use serde::{Deserialize, Serialize};

use crate::types::ClientId;

/// A client record.
///
/// Created either by an admin or anonymously through the public storefront
/// contact form. In the storefront flow the `address` field is overloaded to
/// carry "interested in product X" free text instead of a physical address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier.
    pub id: ClientId,
    pub name: String,
    /// Contact email as typed into the form (not validated structurally;
    /// anonymous submissions are accepted as-is).
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Payload for creating a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl NewClient {
    /// A storefront lead: the address slot records the product the visitor
    /// asked about.
    #[must_use]
    pub fn storefront_lead(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        product_name: &str,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: Some(format!("Interesado en: {product_name}")),
        }
    }
}
