//! Sale operations for the row gateway.
//!
//! A sale is an atomic single-row insert. It does not adjust product stock
//! and is never updated after the fact, only deleted.

use tracing::instrument;

use mw_core::{NewSale, Sale, SaleId};

use super::rows::{NewSaleRow, SaleRow};
use super::{StoreClient, StoreError};

const TABLE: &str = "sales";

impl StoreClient {
    /// Fetch all sales, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unconfigured, unreachable, or
    /// rejects the request.
    #[instrument(skip(self))]
    pub async fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        let rows: Vec<SaleRow> = self.select_all(TABLE).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert one sale and return it with the store-assigned id.
    ///
    /// The total travels as computed by the caller; the store does not
    /// re-validate it against price and extras.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert.
    #[instrument(skip(self, new), fields(product_id = %new.product_id, total = %new.total))]
    pub async fn create_sale(&self, new: NewSale) -> Result<Sale, StoreError> {
        let row: SaleRow = self.insert_one(TABLE, &NewSaleRow::from(new)).await?;
        Ok(row.into())
    }

    /// Hard-delete one sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_sale(&self, id: &SaleId) -> Result<(), StoreError> {
        self.delete_by_id(TABLE, id.as_str()).await
    }
}
