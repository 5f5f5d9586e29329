//! Client operations for the row gateway.

use tracing::instrument;

use mw_core::{Client, ClientId, NewClient};

use super::rows::{ClientRow, NewClientRow};
use super::{StoreClient, StoreError};

const TABLE: &str = "clients";

impl StoreClient {
    /// Fetch all clients, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unconfigured, unreachable, or
    /// rejects the request.
    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let rows: Vec<ClientRow> = self.select_all(TABLE).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert one client and return it with the store-assigned id.
    ///
    /// This path serves both the admin panel and the anonymous storefront
    /// contact form.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create_client(&self, new: NewClient) -> Result<Client, StoreError> {
        let row: ClientRow = self.insert_one(TABLE, &NewClientRow::from(new)).await?;
        Ok(row.into())
    }

    /// Hard-delete one client (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_client(&self, id: &ClientId) -> Result<(), StoreError> {
        self.delete_by_id(TABLE, id.as_str()).await
    }
}
