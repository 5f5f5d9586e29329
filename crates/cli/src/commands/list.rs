//! Collection listings.
//!
//! Each listing is a fresh fetch; the CLI does not keep a cache between
//! invocations. Weak references are resolved against the collections
//! loaded for the listing itself.

use mw_backoffice::{AppState, DataCache};

use super::{CliError, require_session};

pub async fn appointments(state: &AppState) -> Result<(), CliError> {
    require_session(state)?;
    let cache = DataCache::load(state.store()).await?;

    for a in cache.appointments() {
        println!(
            "{}  {} {}  [{}]  {} - {}  (seller: {})",
            a.id,
            a.date,
            a.time.format("%H:%M"),
            a.status,
            a.client_name,
            a.service,
            cache.seller_label(a.seller_id.as_ref()),
        );
    }
    Ok(())
}

pub async fn products(state: &AppState) -> Result<(), CliError> {
    require_session(state)?;

    for p in state.store().list_products().await? {
        println!(
            "{}  {}  ${}  [{}]  stock: {}  images: {}",
            p.id,
            p.name,
            p.price,
            p.category,
            p.stock,
            p.images.len(),
        );
    }
    Ok(())
}

pub async fn sellers(state: &AppState) -> Result<(), CliError> {
    require_session(state)?;

    for s in state.store().list_sellers().await? {
        let flag = if s.active { "active" } else { "inactive" };
        println!("{}  {} <{}>  {}  [{}]", s.id, s.name, s.email, s.phone, flag);
    }
    Ok(())
}

pub async fn clients(state: &AppState) -> Result<(), CliError> {
    require_session(state)?;

    for c in state.store().list_clients().await? {
        println!(
            "{}  {} <{}>  {}  {}",
            c.id,
            c.name,
            c.email,
            c.phone,
            c.address.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

pub async fn sales(state: &AppState) -> Result<(), CliError> {
    require_session(state)?;
    let cache = DataCache::load(state.store()).await?;

    for s in cache.sales() {
        println!(
            "{}  {}  {} -> {}  {}  total ${} ({})",
            s.id,
            s.date,
            cache.product_label(&s.product_id),
            cache.client_label(&s.client_id),
            cache.seller_label(Some(&s.seller_id)),
            s.total,
            s.payment_method.label(),
        );
    }
    Ok(())
}
