//! Shared type definitions.

mod email;
mod id;
mod status;

pub use email::{Email, EmailError};
pub use id::{AppointmentId, ClientId, ProductId, SaleId, SellerId};
pub use status::{AppointmentStatus, PaymentMethod};
