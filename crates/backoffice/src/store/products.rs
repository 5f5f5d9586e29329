//! Product operations for the row gateway.
//!
//! Products are append/delete-only: there is deliberately no update
//! operation for catalog entries.

use tracing::instrument;

use mw_core::{NewProduct, Product, ProductId};

use super::rows::{NewProductRow, ProductRow};
use super::{StoreClient, StoreError};

const TABLE: &str = "products";

impl StoreClient {
    /// Fetch all products, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unconfigured, unreachable, or
    /// rejects the request.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = self.select_all(TABLE).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert one product and return it with the store-assigned id.
    ///
    /// Images must already be normalized; a row carrying many full-size
    /// images can exceed the store's payload limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert.
    #[instrument(skip(self, new), fields(name = %new.name, images = new.images.len()))]
    pub async fn create_product(&self, new: NewProduct) -> Result<Product, StoreError> {
        let row: ProductRow = self.insert_one(TABLE, &NewProductRow::from(new)).await?;
        Ok(row.into())
    }

    /// Hard-delete one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        self.delete_by_id(TABLE, id.as_str()).await
    }
}
