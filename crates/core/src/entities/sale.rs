//! Sale entity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ClientId, PaymentMethod, ProductId, SaleId, SellerId};

/// A recorded sale.
///
/// Atomic single-row insert; never updated, deleted individually. All three
/// references are weak. The `total` is computed by the caller before
/// submission and is not re-validated by the store (and the sale does not
/// adjust product stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Store-assigned identifier.
    pub id: SaleId,
    pub product_id: ProductId,
    pub client_id: ClientId,
    pub seller_id: SellerId,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub sale_price: Decimal,
    pub extra_costs: Decimal,
    /// `sale_price + extra_costs`, fixed at submission time.
    pub total: Decimal,
    pub notes: Option<String>,
}

/// Payload for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: ProductId,
    pub client_id: ClientId,
    pub seller_id: SellerId,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub sale_price: Decimal,
    pub extra_costs: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

impl NewSale {
    /// Build a sale payload with the total derived from price and extras.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn with_total(
        product_id: ProductId,
        client_id: ClientId,
        seller_id: SellerId,
        date: NaiveDate,
        payment_method: PaymentMethod,
        sale_price: Decimal,
        extra_costs: Decimal,
        notes: Option<String>,
    ) -> Self {
        Self {
            product_id,
            client_id,
            seller_id,
            date,
            payment_method,
            sale_price,
            extra_costs,
            total: sale_price + extra_costs,
            notes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_with_total_sums_price_and_extras() {
        let sale = NewSale::with_total(
            ProductId::new("p-1"),
            ClientId::new("c-1"),
            SellerId::new("s-1"),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            PaymentMethod::Transfer,
            money("1200.50"),
            money("49.50"),
            None,
        );
        assert_eq!(sale.total, money("1250.00"));
    }
}
