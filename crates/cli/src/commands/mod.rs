//! Command implementations.

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod list;
pub mod products;
pub mod sales;
pub mod sellers;

use mw_backoffice::AppState;
use mw_backoffice::services::auth::AuthError;
use mw_backoffice::services::imaging::ImageError;
use mw_backoffice::services::session::SessionError;
use mw_backoffice::store::StoreError;
use mw_core::{EmailError, Seller};
use thiserror::Error;

/// Errors a command can surface to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// No live session; the command needs one.
    #[error("no active session; run `mw login` first")]
    NoSession,

    /// A flag value could not be interpreted.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Image(#[from] ImageError),

    /// An image file could not be read from disk.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

/// The signed-in seller, or `NoSession`.
fn require_session(state: &AppState) -> Result<Seller, CliError> {
    state.restore_session().ok_or(CliError::NoSession)
}

fn parse_date(value: &str) -> Result<chrono::NaiveDate, CliError> {
    value
        .parse()
        .map_err(|_| CliError::invalid("date", format!("{value} (expected YYYY-MM-DD)")))
}

fn parse_time(value: &str) -> Result<chrono::NaiveTime, CliError> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| CliError::invalid("time", format!("{value} (expected HH:MM)")))
}

fn parse_money(field: &'static str, value: &str) -> Result<rust_decimal::Decimal, CliError> {
    value
        .parse()
        .map_err(|_| CliError::invalid(field, format!("{value} (expected a decimal amount)")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_both_precisions() {
        assert_eq!(
            parse_time("10:30").unwrap(),
            chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("10:30:15").unwrap(),
            chrono::NaiveTime::from_hms_opt(10, 30, 15).unwrap()
        );
        assert!(parse_time("mediodía").is_err());
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert!(parse_money("price", "12.50").is_ok());
        assert!(parse_money("price", "doce").is_err());
    }
}
