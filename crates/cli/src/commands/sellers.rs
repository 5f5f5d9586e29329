//! Seller account commands.

use mw_backoffice::{AppState, DataCache};
use mw_core::{Email, NewSeller, SellerId, SellerUpdate};

use super::{CliError, require_session};

pub async fn create(
    state: &AppState,
    name: &str,
    email: &str,
    phone: &str,
    password: String,
    active: bool,
) -> Result<(), CliError> {
    require_session(state)?;

    let new = NewSeller {
        name: name.to_owned(),
        email: Email::parse(email)?,
        phone: phone.to_owned(),
        active,
        password,
    };

    let created = state.store().create_seller(new).await?;
    println!("Created seller {} <{}>", created.id, created.email);
    Ok(())
}

pub async fn update(
    state: &AppState,
    id: &str,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    active: Option<bool>,
    password: Option<String>,
) -> Result<(), CliError> {
    require_session(state)?;

    let update = SellerUpdate {
        name,
        email: email.map(|e| Email::parse(&e)).transpose()?,
        phone,
        active,
        password,
    };
    if update.is_empty() {
        return Err(CliError::invalid("update", "no fields to change"));
    }

    let updated = state
        .store()
        .update_seller(&SellerId::new(id), update)
        .await?;
    let flag = if updated.active { "active" } else { "inactive" };
    println!("Updated seller {} <{}> [{}]", updated.id, updated.email, flag);
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<(), CliError> {
    require_session(state)?;

    let mut cache = DataCache::load(state.store()).await?;
    cache
        .delete_seller(state.store(), &SellerId::new(id))
        .await?;
    println!("Deleted seller {id}");
    Ok(())
}
