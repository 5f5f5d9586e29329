//! Client commands.

use mw_backoffice::{AppState, DataCache};
use mw_core::{ClientId, NewClient};

use super::{CliError, require_session};

pub async fn register(
    state: &AppState,
    name: &str,
    email: &str,
    phone: &str,
    address: Option<String>,
    interest: Option<String>,
) -> Result<(), CliError> {
    let new = match interest {
        // Storefront lead: anonymous, no session check.
        Some(product_name) => NewClient::storefront_lead(name, email, phone, &product_name),
        None => {
            require_session(state)?;
            NewClient {
                name: name.to_owned(),
                email: email.to_owned(),
                phone: phone.to_owned(),
                address,
            }
        }
    };

    let created = state.store().create_client(new).await?;
    println!("Registered client {} ({})", created.id, created.name);
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<(), CliError> {
    require_session(state)?;

    let mut cache = DataCache::load(state.store()).await?;
    cache
        .delete_client(state.store(), &ClientId::new(id))
        .await?;
    println!("Deleted client {id}");
    Ok(())
}
