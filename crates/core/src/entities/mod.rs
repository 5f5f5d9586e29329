//! The five persisted record kinds.
//!
//! Each entity owns a store-assigned opaque ID and comes with the payload
//! types the gateway accepts: a `New*` struct for inserts (the entity minus
//! its ID) and, for sellers only, a partial-update patch.
//!
//! Cross-entity references (`Appointment::seller_id`, the three IDs on
//! `Sale`) are weak: they are lookup keys with no cascade. Deleting the
//! referenced row leaves the reference dangling by design; display layers
//! substitute a fallback label.

mod appointment;
mod client;
mod product;
mod sale;
mod seller;

pub use appointment::{Appointment, NewAppointment};
pub use client::{Client, NewClient};
pub use product::{NewProduct, Product, DEFAULT_CATEGORY, DEFAULT_STOCK};
pub use sale::{NewSale, Sale};
pub use seller::{NewSeller, Seller, SellerUpdate};
