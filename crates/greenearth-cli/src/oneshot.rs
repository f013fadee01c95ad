//! Non-interactive commands.
//!
//! Each handler does one catalog or cart operation, prints the result to
//! stdout and returns. Catalog reads fall back to the offline catalog just
//! like the interactive storefront does.

use std::io;

use greenearth_cart::{CartEngine, CartStore, KeyValueStore};
use greenearth_catalog::CatalogClient;
use greenearth_core::MoneyLocale;
use greenearth_storefront::view::{render_cart, render_detail, render_grid};
use greenearth_storefront::{PlantDetail, Surface, TerminalSurface};

use crate::CartCommands;

pub(crate) async fn run_categories(catalog: &CatalogClient) -> anyhow::Result<()> {
    let fetched = catalog.categories().await;
    for category in &fetched.data {
        println!("{:>6}  {}", category.id, category.name);
    }
    Ok(())
}

pub(crate) async fn run_plants(
    catalog: &CatalogClient,
    category: Option<&str>,
    locale: MoneyLocale,
) -> anyhow::Result<()> {
    let fetched = match category {
        Some(id) if id != greenearth_core::ALL_CATEGORY_ID => {
            catalog.plants_by_category(id).await
        }
        _ => catalog.all_plants().await,
    };
    TerminalSurface::new(io::stdout()).grid(&render_grid(&fetched.data, locale));
    Ok(())
}

/// Prints one plant's details.
///
/// # Errors
///
/// Returns an error if neither the catalog nor the offline catalog knows
/// `id`.
pub(crate) async fn run_show(
    catalog: &CatalogClient,
    id: &str,
    locale: MoneyLocale,
) -> anyhow::Result<()> {
    let fields = catalog
        .plant_by_id(id)
        .await
        .data
        .ok_or_else(|| anyhow::anyhow!("plant '{id}' not found"))?;
    let detail = PlantDetail::provisional(&fields.into_plant());
    TerminalSurface::new(io::stdout()).detail(&render_detail(&detail, locale));
    Ok(())
}

/// Applies one cart command and prints the resulting cart.
///
/// # Errors
///
/// Returns an error if `cart add` names a plant that cannot be found.
pub(crate) async fn run_cart<S: KeyValueStore>(
    catalog: &CatalogClient,
    store: CartStore<S>,
    command: CartCommands,
    locale: MoneyLocale,
) -> anyhow::Result<()> {
    let mut engine = CartEngine::open(store);
    let view = match command {
        CartCommands::Show => engine.view(),
        CartCommands::Add { id } => {
            let plant = catalog
                .plant_by_id(&id)
                .await
                .data
                .ok_or_else(|| anyhow::anyhow!("plant '{id}' not found"))?
                .into_plant();
            // The record may omit its id; the requested one is authoritative.
            engine.add(&id, &plant.name, plant.price)
        }
        CartCommands::Inc { id } => engine.increase(&id),
        CartCommands::Dec { id } => engine.decrease(&id),
        CartCommands::Remove { id } => engine.remove(&id),
    };
    TerminalSurface::new(io::stdout()).cart(&render_cart(&view, locale));
    Ok(())
}

#[cfg(test)]
#[path = "oneshot_test.rs"]
mod tests;
