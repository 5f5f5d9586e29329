//! Sale commands.

use chrono::Utc;
use mw_backoffice::{AppState, DataCache};
use mw_core::{ClientId, NewSale, PaymentMethod, ProductId, SaleId, SellerId};

use super::{CliError, parse_date, parse_money, require_session};

#[allow(clippy::too_many_arguments)]
pub async fn add(
    state: &AppState,
    product: &str,
    client: &str,
    seller: Option<String>,
    date: Option<String>,
    payment: &str,
    price: Option<String>,
    extra: &str,
    notes: Option<String>,
) -> Result<(), CliError> {
    let session = require_session(state)?;

    let payment: PaymentMethod = payment
        .parse()
        .map_err(|_| CliError::invalid("payment", payment))?;
    let date = match date {
        Some(value) => parse_date(&value)?,
        None => Utc::now().date_naive(),
    };
    let product_id = ProductId::new(product);
    let seller_id = seller.map_or(session.id, SellerId::new);

    let cache = DataCache::load(state.store()).await?;
    let sale_price = match price {
        Some(value) => parse_money("price", &value)?,
        // Auto-fill from the catalog, same as the sale form does.
        None => {
            cache
                .product(&product_id)
                .ok_or_else(|| {
                    CliError::invalid("product", format!("{product} is not in the catalog"))
                })?
                .price
        }
    };
    let extra_costs = parse_money("extra", extra)?;

    let new = NewSale::with_total(
        product_id,
        ClientId::new(client),
        seller_id,
        date,
        payment,
        sale_price,
        extra_costs,
        notes,
    );

    let created = state.store().create_sale(new).await?;
    println!("Recorded sale {} (total ${})", created.id, created.total);
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<(), CliError> {
    require_session(state)?;

    let mut cache = DataCache::load(state.store()).await?;
    cache.delete_sale(state.store(), &SaleId::new(id)).await?;
    println!("Deleted sale {id}");
    Ok(())
}
