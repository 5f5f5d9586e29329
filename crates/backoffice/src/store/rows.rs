//! Wire-format row types and their conversions.
//!
//! The store keeps snake_case columns; the domain entities in `mw-core` use
//! Rust field names. Each entity gets a dedicated row struct per direction
//! (`*Row` for reads and full writes, `New*Row` for inserts, a patch struct
//! where partial updates exist), and the rename table is applied explicitly
//! and symmetrically: every field produced by a read is derivable by
//! applying the same mapping in reverse to what a write sends.
//!
//! Optional references travel as JSON null, never as an empty string; an
//! empty-string seller reference coming out of a form is normalized to
//! absent before encoding.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mw_core::{
    Appointment, AppointmentStatus, Client, Email, NewAppointment, NewClient, NewProduct, NewSale,
    NewSeller, PaymentMethod, Product, Sale, Seller, SellerUpdate,
};

// =============================================================================
// appointments
// =============================================================================

/// Stored appointment row (`appointments` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub seller_id: Option<String>,
}

/// Insert payload for `appointments` (store assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointmentRow {
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub seller_id: Option<String>,
}

/// Status-only patch for `appointments`.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentStatusPatch {
    pub status: AppointmentStatus,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id.into(),
            client_name: row.client_name,
            date: row.date,
            time: row.time,
            service: row.service,
            status: row.status,
            notes: row.notes,
            seller_id: row.seller_id.map(Into::into),
        }
    }
}

impl From<Appointment> for AppointmentRow {
    fn from(appt: Appointment) -> Self {
        Self {
            id: appt.id.into_inner(),
            client_name: appt.client_name,
            date: appt.date,
            time: appt.time,
            service: appt.service,
            status: appt.status,
            notes: appt.notes,
            seller_id: appt.seller_id.map(mw_core::SellerId::into_inner),
        }
    }
}

impl From<NewAppointment> for NewAppointmentRow {
    fn from(new: NewAppointment) -> Self {
        Self {
            client_name: new.client_name,
            date: new.date,
            time: new.time,
            service: new.service,
            status: new.status,
            notes: new.notes,
            // An unset reference is an explicit absence, never "".
            seller_id: new
                .seller_id
                .map(mw_core::SellerId::into_inner)
                .filter(|s| !s.is_empty()),
        }
    }
}

// =============================================================================
// products
// =============================================================================

/// Stored product row (`products` table).
///
/// `images` is nullable in the store; a null column reads back as an empty
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub images: Option<Vec<String>>,
    pub stock: i32,
}

/// Insert payload for `products`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProductRow {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            price: row.price,
            category: row.category,
            description: row.description,
            images: row.images.unwrap_or_default(),
            stock: row.stock,
        }
    }
}

impl From<Product> for ProductRow {
    fn from(prod: Product) -> Self {
        Self {
            id: prod.id.into_inner(),
            name: prod.name,
            price: prod.price,
            category: prod.category,
            description: prod.description,
            images: Some(prod.images),
            stock: prod.stock,
        }
    }
}

impl From<NewProduct> for NewProductRow {
    fn from(new: NewProduct) -> Self {
        Self {
            name: new.name,
            price: new.price,
            category: new.category,
            description: new.description,
            images: new.images,
            stock: new.stock,
        }
    }
}

// =============================================================================
// sellers
// =============================================================================

/// Stored seller row (`sellers` table).
///
/// The password column is write-only and deliberately has no field here:
/// reads never round-trip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRow {
    pub id: String,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub active: bool,
}

/// Insert payload for `sellers`, carrying the initial password.
#[derive(Debug, Clone, Serialize)]
pub struct NewSellerRow {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub active: bool,
    pub password: String,
}

/// Partial-field patch for `sellers`: only supplied columns are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SellerPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<SellerRow> for Seller {
    fn from(row: SellerRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            phone: row.phone,
            active: row.active,
        }
    }
}

impl From<Seller> for SellerRow {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id.into_inner(),
            name: seller.name,
            email: seller.email,
            phone: seller.phone,
            active: seller.active,
        }
    }
}

impl From<NewSeller> for NewSellerRow {
    fn from(new: NewSeller) -> Self {
        Self {
            name: new.name,
            email: new.email,
            phone: new.phone,
            active: new.active,
            password: new.password,
        }
    }
}

impl From<SellerUpdate> for SellerPatchRow {
    fn from(update: SellerUpdate) -> Self {
        Self {
            name: update.name,
            email: update.email,
            phone: update.phone,
            active: update.active,
            password: update.password,
        }
    }
}

// =============================================================================
// clients
// =============================================================================

/// Stored client row (`clients` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Insert payload for `clients`.
#[derive(Debug, Clone, Serialize)]
pub struct NewClientRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
        }
    }
}

impl From<Client> for ClientRow {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into_inner(),
            name: client.name,
            email: client.email,
            phone: client.phone,
            address: client.address,
        }
    }
}

impl From<NewClient> for NewClientRow {
    fn from(new: NewClient) -> Self {
        Self {
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address.filter(|s| !s.is_empty()),
        }
    }
}

// =============================================================================
// sales
// =============================================================================

/// Stored sale row (`sales` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRow {
    pub id: String,
    pub product_id: String,
    pub client_id: String,
    pub seller_id: String,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub sale_price: Decimal,
    pub extra_costs: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

/// Insert payload for `sales`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSaleRow {
    pub product_id: String,
    pub client_id: String,
    pub seller_id: String,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub sale_price: Decimal,
    pub extra_costs: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: row.id.into(),
            product_id: row.product_id.into(),
            client_id: row.client_id.into(),
            seller_id: row.seller_id.into(),
            date: row.date,
            payment_method: row.payment_method,
            sale_price: row.sale_price,
            extra_costs: row.extra_costs,
            total: row.total,
            notes: row.notes,
        }
    }
}

impl From<Sale> for SaleRow {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.into_inner(),
            product_id: sale.product_id.into_inner(),
            client_id: sale.client_id.into_inner(),
            seller_id: sale.seller_id.into_inner(),
            date: sale.date,
            payment_method: sale.payment_method,
            sale_price: sale.sale_price,
            extra_costs: sale.extra_costs,
            total: sale.total,
            notes: sale.notes,
        }
    }
}

impl From<NewSale> for NewSaleRow {
    fn from(new: NewSale) -> Self {
        Self {
            product_id: new.product_id.into_inner(),
            client_id: new.client_id.into_inner(),
            seller_id: new.seller_id.into_inner(),
            date: new.date,
            payment_method: new.payment_method,
            sale_price: new.sale_price,
            extra_costs: new.extra_costs,
            total: new.total,
            notes: new.notes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mw_core::{AppointmentId, SellerId};

    fn sample_appointment(seller: Option<&str>) -> Appointment {
        Appointment {
            id: AppointmentId::new("a-1"),
            client_name: "María Gómez".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            service: "Mantenimiento".to_owned(),
            status: AppointmentStatus::Pending,
            notes: Some("llamar antes".to_owned()),
            seller_id: seller.map(SellerId::new),
        }
    }

    #[test]
    fn test_appointment_row_roundtrip() {
        for seller in [None, Some("s-9")] {
            let appt = sample_appointment(seller);
            let row = AppointmentRow::from(appt.clone());
            assert_eq!(Appointment::from(row), appt);
        }
    }

    #[test]
    fn test_appointment_wire_columns_are_snake_case() {
        let row = AppointmentRow::from(sample_appointment(Some("s-9")));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["client_name"], "María Gómez");
        assert_eq!(json["seller_id"], "s-9");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_absent_seller_encodes_as_null_not_empty_string() {
        let mut new = NewAppointment::booking(
            "Pedro",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            "Asesoría",
        );
        // A form submits "" for the unselected option; the mapping must
        // normalize it to an explicit absence.
        new.seller_id = Some(SellerId::new(""));

        let row = NewAppointmentRow::from(new);
        assert_eq!(row.seller_id, None);

        let json = serde_json::to_value(&row).unwrap();
        assert!(json["seller_id"].is_null());
    }

    #[test]
    fn test_appointment_row_decodes_store_shape() {
        let body = r#"{
            "id": "3f9c",
            "client_name": "Ana",
            "date": "2024-01-03",
            "time": "10:00:00",
            "service": "Entrega",
            "status": "confirmed",
            "notes": null,
            "seller_id": null
        }"#;
        let row: AppointmentRow = serde_json::from_str(body).unwrap();
        let appt = Appointment::from(row);
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
        assert_eq!(appt.notes, None);
        assert_eq!(appt.seller_id, None);
    }

    #[test]
    fn test_product_null_images_read_as_empty() {
        let body = r#"{
            "id": "p-1",
            "name": "Bomba de agua",
            "price": "1500.00",
            "category": "Repuestos",
            "description": "",
            "images": null,
            "stock": 4
        }"#;
        let row: ProductRow = serde_json::from_str(body).unwrap();
        let product = Product::from(row);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_seller_row_never_carries_password() {
        let json = serde_json::to_value(SellerRow {
            id: "s-1".to_owned(),
            name: "Luis".to_owned(),
            email: Email::parse("luis@mw.com").unwrap(),
            phone: "555-1234".to_owned(),
            active: true,
        })
        .unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_seller_patch_sends_only_supplied_fields() {
        let patch = SellerPatchRow::from(SellerUpdate {
            phone: Some("555-9999".to_owned()),
            ..SellerUpdate::default()
        });
        let json = serde_json::to_value(&patch).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["phone"], "555-9999");
    }

    #[test]
    fn test_sale_row_roundtrip() {
        let sale = Sale {
            id: "v-1".into(),
            product_id: "p-1".into(),
            client_id: "c-1".into(),
            seller_id: "s-1".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            payment_method: PaymentMethod::CreditCard,
            sale_price: "100.00".parse().unwrap(),
            extra_costs: "5.00".parse().unwrap(),
            total: "105.00".parse().unwrap(),
            notes: None,
        };
        let row = SaleRow::from(sale.clone());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["payment_method"], "Tarjeta de Crédito");
        assert_eq!(Sale::from(row), sale);
    }
}
