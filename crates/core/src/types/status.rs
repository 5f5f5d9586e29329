//! Status and payment enums.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment.
///
/// Stored as lowercase strings in the `appointments.status` column. There is
/// deliberately no state machine: any status may be set to any other at any
/// time through the gateway's status-change operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Freshly booked, awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by a seller.
    Confirmed,
    /// Carried out.
    Completed,
    /// Called off.
    Cancelled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid appointment status: {s}")),
        }
    }
}

/// Payment method recorded on a sale.
///
/// The store keeps the Spanish labels the original forms submit, so the wire
/// values are the renamed strings below, not the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Efectivo")]
    Cash,
    #[serde(rename = "Tarjeta de Crédito")]
    CreditCard,
    #[serde(rename = "Tarjeta de Débito")]
    DebitCard,
    #[serde(rename = "Transferencia")]
    Transfer,
    #[serde(rename = "Otro")]
    Other,
}

impl PaymentMethod {
    /// The label as it appears on receipts and in the store.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Efectivo",
            Self::CreditCard => "Tarjeta de Crédito",
            Self::DebitCard => "Tarjeta de Débito",
            Self::Transfer => "Transferencia",
            Self::Other => "Otro",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Efectivo" | "cash" => Ok(Self::Cash),
            "Tarjeta de Crédito" | "credit-card" => Ok(Self::CreditCard),
            "Tarjeta de Débito" | "debit-card" => Ok(Self::DebitCard),
            "Transferencia" | "transfer" => Ok(Self::Transfer),
            "Otro" | "other" => Ok(Self::Other),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&AppointmentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");

        let parsed: AppointmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "pending".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Pending
        );
        assert!("unknown".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_payment_method_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"Tarjeta de Crédito\"");

        let parsed: PaymentMethod = serde_json::from_str("\"Efectivo\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Cash);
    }

    #[test]
    fn test_payment_method_cli_aliases() {
        assert_eq!(
            "debit-card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::DebitCard
        );
        assert_eq!(
            "Transferencia".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Transfer
        );
    }
}
