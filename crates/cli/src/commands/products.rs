//! Catalog commands.

use std::path::PathBuf;

use mw_backoffice::services::imaging;
use mw_backoffice::{AppState, DataCache};
use mw_core::{DEFAULT_CATEGORY, DEFAULT_STOCK, NewProduct, ProductId};

use super::{CliError, parse_money, require_session};

#[allow(clippy::too_many_arguments)]
pub async fn add(
    state: &AppState,
    name: &str,
    price: &str,
    category: Option<String>,
    description: Option<String>,
    details: Option<String>,
    image_paths: &[PathBuf],
    stock: Option<i32>,
) -> Result<(), CliError> {
    require_session(state)?;

    let price = parse_money("price", price)?;

    let mut raw_images = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        raw_images.push(std::fs::read(path)?);
    }

    // One bad file does not block the rest; it is reported and skipped.
    let mut images = Vec::with_capacity(raw_images.len());
    for (result, path) in imaging::normalize_batch(raw_images).await.into_iter().zip(image_paths) {
        match result {
            Ok(uri) => images.push(uri),
            Err(e) => eprintln!("skipping {}: {e}", path.display()),
        }
    }

    let description = match description {
        Some(text) => text,
        // Generated copy; degrades to a fixed message when unconfigured.
        None => {
            state
                .insights()
                .product_description(
                    name,
                    category.as_deref().unwrap_or(DEFAULT_CATEGORY),
                    details.as_deref().unwrap_or(""),
                )
                .await
        }
    };

    let new = NewProduct {
        name: name.to_owned(),
        price,
        category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        description,
        images,
        stock: stock.unwrap_or(DEFAULT_STOCK),
    };

    let created = state.store().create_product(new).await?;
    println!(
        "Added product {} ({}, {} images)",
        created.id,
        created.name,
        created.images.len()
    );
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<(), CliError> {
    require_session(state)?;

    let mut cache = DataCache::load(state.store()).await?;
    cache
        .delete_product(state.store(), &ProductId::new(id))
        .await?;
    println!("Deleted product {id}");
    Ok(())
}
