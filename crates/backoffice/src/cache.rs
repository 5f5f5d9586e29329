//! In-memory collections with optimistic mutation.
//!
//! The cache is populated once per session with a concurrent fetch of all
//! five collections and then kept in step with the store by the mutation
//! methods. Two write strategies coexist:
//!
//! - Creates are remote-first. The store assigns the id, so there is
//!   nothing sensible to show until it answers; a failed create leaves the
//!   cache untouched.
//! - Status changes and deletes are optimistic. The local row changes
//!   immediately and is restored to its prior state if the store refuses.
//!
//! Cross-entity references are weak. Accessors resolve them to display
//! labels and substitute a fixed fallback for rows that no longer exist.

use mw_core::{
    Appointment, AppointmentId, AppointmentStatus, Client, ClientId, NewAppointment, NewClient,
    NewProduct, NewSale, NewSeller, Product, ProductId, Sale, SaleId, Seller, SellerId,
    SellerUpdate,
};
use tracing::{instrument, warn};

use crate::store::{StoreClient, StoreError};

const NO_SELLER: &str = "-";
const MISSING_SELLER: &str = "Vendedor Eliminado";
const MISSING_PRODUCT: &str = "Producto Eliminado";
const MISSING_CLIENT: &str = "Cliente Eliminado";

/// Remove the first item matching `pred`, remembering where it sat.
fn take_by<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<(usize, T)> {
    let index = items.iter().position(pred)?;
    Some((index, items.remove(index)))
}

/// Undo a [`take_by`], tolerating the collection having shrunk since.
fn put_back<T>(items: &mut Vec<T>, index: usize, item: T) {
    let index = index.min(items.len());
    items.insert(index, item);
}

/// The session's working copy of the store.
#[derive(Debug, Default)]
pub struct DataCache {
    appointments: Vec<Appointment>,
    products: Vec<Product>,
    sellers: Vec<Seller>,
    clients: Vec<Client>,
    sales: Vec<Sale>,
}

impl DataCache {
    /// Fetch all five collections concurrently.
    ///
    /// # Errors
    ///
    /// Fails if any fetch fails; a session never starts on partial data.
    #[instrument(skip(store))]
    pub async fn load(store: &StoreClient) -> Result<Self, StoreError> {
        let (appointments, products, sellers, clients, sales) = tokio::try_join!(
            store.list_appointments(),
            store.list_products(),
            store.list_sellers(),
            store.list_clients(),
            store.list_sales(),
        )?;

        Ok(Self {
            appointments,
            products,
            sellers,
            clients,
            sales,
        })
    }

    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Display label for an optional seller reference.
    #[must_use]
    pub fn seller_label(&self, id: Option<&SellerId>) -> &str {
        match id {
            None => NO_SELLER,
            Some(id) => self
                .sellers
                .iter()
                .find(|s| &s.id == id)
                .map_or(MISSING_SELLER, |s| s.name.as_str()),
        }
    }

    /// Display label for a product reference.
    #[must_use]
    pub fn product_label(&self, id: &ProductId) -> &str {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .map_or(MISSING_PRODUCT, |p| p.name.as_str())
    }

    /// Display label for a client reference.
    #[must_use]
    pub fn client_label(&self, id: &ClientId) -> &str {
        self.clients
            .iter()
            .find(|c| &c.id == id)
            .map_or(MISSING_CLIENT, |c| c.name.as_str())
    }

    /// Look up a product by id, for price auto-fill and similar.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    // Creates: remote-first.

    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn create_appointment(
        &mut self,
        store: &StoreClient,
        new: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let created = store.create_appointment(new).await?;
        self.appointments.push(created.clone());
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn create_product(
        &mut self,
        store: &StoreClient,
        new: NewProduct,
    ) -> Result<Product, StoreError> {
        let created = store.create_product(new).await?;
        self.products.push(created.clone());
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn create_seller(
        &mut self,
        store: &StoreClient,
        new: NewSeller,
    ) -> Result<Seller, StoreError> {
        let created = store.create_seller(new).await?;
        self.sellers.push(created.clone());
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn create_client(
        &mut self,
        store: &StoreClient,
        new: NewClient,
    ) -> Result<Client, StoreError> {
        let created = store.create_client(new).await?;
        self.clients.push(created.clone());
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn create_sale(
        &mut self,
        store: &StoreClient,
        new: NewSale,
    ) -> Result<Sale, StoreError> {
        let created = store.create_sale(new).await?;
        self.sales.push(created.clone());
        Ok(created)
    }

    /// Replace a seller row with the store's refreshed copy.
    ///
    /// # Errors
    ///
    /// Returns the store error; the cache is untouched on failure.
    pub async fn update_seller(
        &mut self,
        store: &StoreClient,
        id: &SellerId,
        update: SellerUpdate,
    ) -> Result<Seller, StoreError> {
        let updated = store.update_seller(id, update).await?;
        if let Some(row) = self.sellers.iter_mut().find(|s| &s.id == id) {
            *row = updated.clone();
        }
        Ok(updated)
    }

    // Status change and deletes: optimistic with revert.

    /// Change an appointment's status, locally first.
    ///
    /// # Errors
    ///
    /// Returns the store error after restoring the prior status.
    #[instrument(skip(self, store), fields(id = %id, status = %status))]
    pub async fn set_appointment_status(
        &mut self,
        store: &StoreClient,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), StoreError> {
        let Some(row) = self.appointments.iter_mut().find(|a| &a.id == id) else {
            // Unknown locally; let the store be the judge.
            return store.set_appointment_status(id, status).await;
        };
        let previous = std::mem::replace(&mut row.status, status);

        if let Err(e) = store.set_appointment_status(id, status).await {
            warn!(error = %e, "status change refused, reverting");
            if let Some(row) = self.appointments.iter_mut().find(|a| &a.id == id) {
                row.status = previous;
            }
            return Err(e);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error after re-inserting the removed row.
    pub async fn delete_appointment(
        &mut self,
        store: &StoreClient,
        id: &AppointmentId,
    ) -> Result<(), StoreError> {
        let removed = take_by(&mut self.appointments, |a| &a.id == id);
        if let Err(e) = store.delete_appointment(id).await {
            if let Some((index, item)) = removed {
                put_back(&mut self.appointments, index, item);
            }
            return Err(e);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error after re-inserting the removed row.
    pub async fn delete_product(
        &mut self,
        store: &StoreClient,
        id: &ProductId,
    ) -> Result<(), StoreError> {
        let removed = take_by(&mut self.products, |p| &p.id == id);
        if let Err(e) = store.delete_product(id).await {
            if let Some((index, item)) = removed {
                put_back(&mut self.products, index, item);
            }
            return Err(e);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error after re-inserting the removed row.
    pub async fn delete_seller(
        &mut self,
        store: &StoreClient,
        id: &SellerId,
    ) -> Result<(), StoreError> {
        let removed = take_by(&mut self.sellers, |s| &s.id == id);
        if let Err(e) = store.delete_seller(id).await {
            if let Some((index, item)) = removed {
                put_back(&mut self.sellers, index, item);
            }
            return Err(e);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error after re-inserting the removed row.
    pub async fn delete_client(
        &mut self,
        store: &StoreClient,
        id: &ClientId,
    ) -> Result<(), StoreError> {
        let removed = take_by(&mut self.clients, |c| &c.id == id);
        if let Err(e) = store.delete_client(id).await {
            if let Some((index, item)) = removed {
                put_back(&mut self.clients, index, item);
            }
            return Err(e);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error after re-inserting the removed row.
    pub async fn delete_sale(
        &mut self,
        store: &StoreClient,
        id: &SaleId,
    ) -> Result<(), StoreError> {
        let removed = take_by(&mut self.sales, |s| &s.id == id);
        if let Err(e) = store.delete_sale(id).await {
            if let Some((index, item)) = removed {
                put_back(&mut self.sales, index, item);
            }
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    // An unconfigured client fails every call with `NotConfigured` without
    // touching the network, which is exactly what the revert paths need.
    fn failing_store() -> StoreClient {
        StoreClient::new(None)
    }

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: AppointmentId::new(id),
            client_name: "Ana".to_owned(),
            date: "2026-03-01".parse().unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            service: "Revisión".to_owned(),
            status,
            notes: None,
            seller_id: None,
        }
    }

    fn seller(id: &str, name: &str) -> Seller {
        Seller {
            id: SellerId::new(id),
            name: name.to_owned(),
            email: mw_core::Email::parse("luis@mw.com").unwrap(),
            phone: "555-0100".to_owned(),
            active: true,
        }
    }

    fn cache_with_appointments(rows: Vec<Appointment>) -> DataCache {
        DataCache {
            appointments: rows,
            ..DataCache::default()
        }
    }

    #[test]
    fn test_take_by_remembers_position() {
        let mut items = vec![1, 2, 3];
        let (index, item) = take_by(&mut items, |n| *n == 2).unwrap();
        assert_eq!((index, item), (1, 2));
        assert_eq!(items, vec![1, 3]);

        put_back(&mut items, index, item);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_put_back_clamps_index() {
        let mut items = vec![1];
        put_back(&mut items, 5, 9);
        assert_eq!(items, vec![1, 9]);
    }

    #[test]
    fn test_labels_resolve_and_fall_back() {
        let cache = DataCache {
            sellers: vec![seller("s-1", "Luis")],
            ..DataCache::default()
        };
        assert_eq!(cache.seller_label(Some(&SellerId::new("s-1"))), "Luis");
        assert_eq!(
            cache.seller_label(Some(&SellerId::new("s-gone"))),
            "Vendedor Eliminado"
        );
        assert_eq!(cache.seller_label(None), "-");
        assert_eq!(
            cache.product_label(&ProductId::new("p-gone")),
            "Producto Eliminado"
        );
        assert_eq!(
            cache.client_label(&ClientId::new("c-gone")),
            "Cliente Eliminado"
        );
    }

    #[tokio::test]
    async fn test_failed_create_leaves_cache_untouched() {
        let mut cache = DataCache::default();
        let result = cache
            .create_appointment(
                &failing_store(),
                NewAppointment::booking(
                    "Ana",
                    "2026-03-01".parse().unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                    "Revisión",
                ),
            )
            .await;

        assert!(result.is_err());
        assert!(cache.appointments().is_empty());
    }

    #[tokio::test]
    async fn test_failed_status_change_reverts() {
        let mut cache =
            cache_with_appointments(vec![appointment("a-1", AppointmentStatus::Pending)]);

        let result = cache
            .set_appointment_status(
                &failing_store(),
                &AppointmentId::new("a-1"),
                AppointmentStatus::Completed,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(cache.appointments()[0].status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_failed_delete_reinserts_at_position() {
        let mut cache = cache_with_appointments(vec![
            appointment("a-1", AppointmentStatus::Pending),
            appointment("a-2", AppointmentStatus::Pending),
            appointment("a-3", AppointmentStatus::Pending),
        ]);

        let result = cache
            .delete_appointment(&failing_store(), &AppointmentId::new("a-2"))
            .await;

        assert!(result.is_err());
        let ids: Vec<_> = cache
            .appointments()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a-1", "a-2", "a-3"]);
    }

    #[tokio::test]
    async fn test_status_change_of_unknown_row_does_not_insert() {
        let mut cache = cache_with_appointments(Vec::new());
        let result = cache
            .set_appointment_status(
                &failing_store(),
                &AppointmentId::new("a-404"),
                AppointmentStatus::Cancelled,
            )
            .await;
        assert!(result.is_err());
        assert!(cache.appointments().is_empty());
    }
}
