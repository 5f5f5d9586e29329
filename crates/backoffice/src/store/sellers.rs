//! Seller operations for the row gateway.

use tracing::instrument;

use mw_core::{NewSeller, Seller, SellerId, SellerUpdate};

use super::rows::{NewSellerRow, SellerPatchRow, SellerRow};
use super::{StoreClient, StoreError};

const TABLE: &str = "sellers";

impl StoreClient {
    /// Fetch all sellers, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unconfigured, unreachable, or
    /// rejects the request.
    #[instrument(skip(self))]
    pub async fn list_sellers(&self) -> Result<Vec<Seller>, StoreError> {
        let rows: Vec<SellerRow> = self.select_all(TABLE).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Look up one seller by id, restricted to active accounts.
    ///
    /// Used by the login flow: the seller id equals the identity-service
    /// subject id, and an inactive row must look like no row at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or rejects the query.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn find_active_seller(&self, id: &SellerId) -> Result<Option<Seller>, StoreError> {
        let filter = format!("id=eq.{}&active=eq.true", urlencoding::encode(id.as_str()));
        let rows: Vec<SellerRow> = self.select_where(TABLE, &filter).await?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    /// Insert one seller (admin path) and return it with the store id.
    ///
    /// The password in the payload is write-only; the returned entity does
    /// not carry it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert.
    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create_seller(&self, new: NewSeller) -> Result<Seller, StoreError> {
        let row: SellerRow = self.insert_one(TABLE, &NewSellerRow::from(new)).await?;
        Ok(row.into())
    }

    /// Patch one seller: only fields supplied in the update are changed.
    /// Returns the refreshed entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the patch or no row matches.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_seller(
        &self,
        id: &SellerId,
        update: SellerUpdate,
    ) -> Result<Seller, StoreError> {
        let row: SellerRow = self
            .patch_by_id(TABLE, id.as_str(), &SellerPatchRow::from(update))
            .await?;
        Ok(row.into())
    }

    /// Hard-delete one seller.
    ///
    /// Appointments and sales referencing the seller are left dangling by
    /// design; display layers substitute a fallback label.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_seller(&self, id: &SellerId) -> Result<(), StoreError> {
        self.delete_by_id(TABLE, id.as_str()).await
    }
}
