//! The storefront state machine.
//!
//! [`Storefront`] owns the catalog client, the cart engine and the display
//! surface. Every operation takes `&mut self` and awaits its own fetch before
//! returning, so a response can only ever be applied to the state that
//! requested it.

use greenearth_cart::{Cart, CartEngine, CartStore, CartView, KeyValueStore};
use greenearth_catalog::CatalogClient;
use greenearth_core::{Category, MoneyLocale, Plant, ALL_CATEGORY_ID};

use crate::detail::{DetailFill, PlantDetail};
use crate::error::StorefrontError;
use crate::surface::Surface;
use crate::view::{
    render_cart, render_categories, render_detail, render_grid, DetailOverlay, Grid,
};

pub struct Storefront<S, V> {
    catalog: CatalogClient,
    cart: CartEngine<S>,
    surface: V,
    locale: MoneyLocale,
    categories: Vec<Category>,
    active_category: String,
    grid: Grid,
    detail: Option<DetailFill>,
}

impl<S: KeyValueStore, V: Surface> Storefront<S, V> {
    /// Restores the persisted cart and shows it.
    pub fn new(
        catalog: CatalogClient,
        cart_store: CartStore<S>,
        surface: V,
        locale: MoneyLocale,
    ) -> Self {
        let mut storefront = Self {
            catalog,
            cart: CartEngine::open(cart_store),
            surface,
            locale,
            categories: Vec::new(),
            active_category: ALL_CATEGORY_ID.to_owned(),
            grid: Grid::Empty,
            detail: None,
        };
        let view = storefront.cart.view();
        storefront.show_cart(&view);
        storefront
    }

    /// Loads categories and the full plant listing.
    pub async fn start(&mut self) {
        self.load_categories().await;
    }

    /// Fetches and shows the category bar, then selects `"all"`.
    pub async fn load_categories(&mut self) {
        self.surface.busy(true);
        let fetched = self.catalog.categories().await;
        self.surface.busy(false);
        if fetched.is_fallback() {
            tracing::info!("showing offline categories");
        }
        self.categories = fetched.data;

        let bar = render_categories(&self.categories, &self.active_category);
        self.surface.categories(&bar);

        // "all" is always present after loading, so this cannot fail.
        if let Err(error) = self.select_category(ALL_CATEGORY_ID).await {
            tracing::warn!(%error, "could not select the default category");
        }
    }

    /// Marks `category_id` active and replaces the grid with its plants.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownCategory`] if `category_id` is not
    /// in the loaded category bar. Nothing changes in that case.
    pub async fn select_category(&mut self, category_id: &str) -> Result<(), StorefrontError> {
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(StorefrontError::UnknownCategory(category_id.to_owned()));
        }

        self.active_category = category_id.to_owned();
        let bar = render_categories(&self.categories, &self.active_category);
        self.surface.categories(&bar);

        self.surface.busy(true);
        let fetched = if category_id == ALL_CATEGORY_ID {
            self.catalog.all_plants().await
        } else {
            self.catalog.plants_by_category(category_id).await
        };
        self.surface.busy(false);

        tracing::debug!(
            category = category_id,
            count = fetched.data.len(),
            fallback = fetched.is_fallback(),
            "rendering plant grid"
        );
        self.grid = render_grid(&fetched.data, self.locale);
        self.surface.grid(&self.grid);
        Ok(())
    }

    /// Opens the detail view for card `number` (1-based).
    ///
    /// The overlay is shown at once from the card's own plant. The plant is
    /// then fetched by id, with the busy indicator on, and when that returns
    /// a record the overlay is shown again with the confirmed fields merged
    /// in. A failed fetch or a missing record leaves the first rendering in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NoSuchCard`] if the current grid has no
    /// such card.
    pub async fn open_details(&mut self, number: usize) -> Result<(), StorefrontError> {
        let plant: Plant = self
            .grid
            .card(number)
            .map(|card| card.details.plant.clone())
            .ok_or(StorefrontError::NoSuchCard(number))?;

        let mut fill = DetailFill::new(PlantDetail::provisional(&plant));
        self.surface.detail(&render_detail(&fill.provisional, self.locale));

        self.surface.busy(true);
        let confirmed = self.catalog.try_plant_by_id(&plant.id).await;
        self.surface.busy(false);

        match confirmed {
            Ok(Some(fields)) => {
                fill.confirm(fields);
                self.surface.detail(&render_detail(&fill.resolve(), self.locale));
            }
            Ok(None) => {
                tracing::debug!(plant_id = %plant.id, "catalog has no record, keeping card details");
            }
            Err(error) => {
                tracing::warn!(%error, plant_id = %plant.id, "keeping card details");
            }
        }

        self.detail = Some(fill);
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.detail = None;
        self.surface.detail(&DetailOverlay::closed());
    }

    /// Adds one unit of card `number`'s plant to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NoSuchCard`] if the current grid has no
    /// such card.
    pub fn add_to_cart(&mut self, number: usize) -> Result<(), StorefrontError> {
        let add = self
            .grid
            .card(number)
            .map(|card| card.add.clone())
            .ok_or(StorefrontError::NoSuchCard(number))?;
        let view = self.cart.add(&add.id, &add.name, add.price);
        self.show_cart(&view);
        Ok(())
    }

    pub fn increase_qty(&mut self, id: &str) {
        let view = self.cart.increase(id);
        self.show_cart(&view);
    }

    pub fn decrease_qty(&mut self, id: &str) {
        let view = self.cart.decrease(id);
        self.show_cart(&view);
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        let view = self.cart.remove(id);
        self.show_cart(&view);
    }

    /// Shows the cart again without changing it.
    pub fn show_cart_panel(&mut self) {
        let view = self.cart.view();
        self.show_cart(&view);
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The open detail view, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&DetailFill> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    fn show_cart(&mut self, view: &CartView) {
        self.surface.cart(&render_cart(view, self.locale));
    }
}
