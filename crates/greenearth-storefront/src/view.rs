//! Pure projections of storefront state for display.
//!
//! Nothing here performs I/O. A [`crate::surface::Surface`] turns these
//! values into output.

use greenearth_cart::CartView;
use greenearth_core::{format_money, Category, MoneyLocale, Plant};

use crate::detail::PlantDetail;

/// Placeholder shown instead of an empty grid.
pub const NO_RESULTS: &str = "No trees found.";

/// Image shown in the detail overlay when a plant has none.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=1200&auto=format&fit=crop";

const EXCERPT_LEN: usize = 110;
const DEFAULT_CATEGORY: &str = "Tree";
const DEFAULT_DETAIL_TITLE: &str = "Tree Details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBar {
    pub buttons: Vec<CategoryButton>,
}

impl CategoryBar {
    /// The button currently marked active.
    #[must_use]
    pub fn active(&self) -> Option<&CategoryButton> {
        self.buttons.iter().find(|b| b.active)
    }
}

/// Opens the detail view. Carries the full normalized plant so the view can
/// be filled without a network round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsTrigger {
    pub plant: Plant,
}

/// Adds one unit to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTrigger {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub category: String,
    pub price_label: String,
    pub details: DetailsTrigger,
    pub add: AddTrigger,
}

/// The plant listing. Cards are addressed by 1-based number.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Grid {
    #[default]
    Empty,
    Cards(Vec<Card>),
}

impl Grid {
    #[must_use]
    pub fn card(&self, number: usize) -> Option<&Card> {
        match self {
            Grid::Empty => None,
            Grid::Cards(cards) => number.checked_sub(1).and_then(|i| cards.get(i)),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Grid::Empty => &[],
            Grid::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelLine {
    pub id: String,
    pub name: String,
    /// `"<unit price> × <qty>"`.
    pub unit_label: String,
    pub qty: u32,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub lines: Vec<CartPanelLine>,
    pub total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub open: bool,
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price_label: String,
}

impl DetailOverlay {
    #[must_use]
    pub fn closed() -> Self {
        Self {
            open: false,
            title: String::new(),
            image: String::new(),
            description: String::new(),
            category: String::new(),
            price_label: String::new(),
        }
    }
}

/// Category buttons with exactly the button whose id is `active` marked.
#[must_use]
pub fn render_categories(categories: &[Category], active: &str) -> CategoryBar {
    CategoryBar {
        buttons: categories
            .iter()
            .map(|c| CategoryButton {
                id: c.id.clone(),
                name: c.name.clone(),
                active: c.id == active,
            })
            .collect(),
    }
}

#[must_use]
pub fn render_grid(items: &[Plant], locale: MoneyLocale) -> Grid {
    if items.is_empty() {
        return Grid::Empty;
    }
    Grid::Cards(items.iter().map(|plant| render_card(plant, locale)).collect())
}

fn render_card(plant: &Plant, locale: MoneyLocale) -> Card {
    Card {
        title: plant.name.clone(),
        image: (!plant.image.is_empty()).then(|| plant.image.clone()),
        excerpt: truncate(&plant.description, EXCERPT_LEN),
        category: if plant.category.is_empty() {
            DEFAULT_CATEGORY.to_owned()
        } else {
            plant.category.clone()
        },
        price_label: format_money(plant.price, locale),
        details: DetailsTrigger {
            plant: plant.clone(),
        },
        add: AddTrigger {
            id: plant.id.clone(),
            name: plant.name.clone(),
            price: if plant.price.is_finite() { plant.price } else { 0.0 },
        },
    }
}

#[must_use]
pub fn render_cart(view: &CartView, locale: MoneyLocale) -> CartPanel {
    CartPanel {
        lines: view
            .lines
            .iter()
            .map(|line| CartPanelLine {
                id: line.id.clone(),
                name: line.name.clone(),
                unit_label: format!("{} × {}", format_money(line.unit_price, locale), line.qty),
                qty: line.qty,
                amount_label: format_money(line.amount, locale),
            })
            .collect(),
        total_label: format_money(view.total, locale),
    }
}

#[must_use]
pub fn render_detail(detail: &PlantDetail, locale: MoneyLocale) -> DetailOverlay {
    DetailOverlay {
        open: true,
        title: if detail.name.is_empty() {
            DEFAULT_DETAIL_TITLE.to_owned()
        } else {
            detail.name.clone()
        },
        image: if detail.image.is_empty() {
            PLACEHOLDER_IMAGE.to_owned()
        } else {
            detail.image.clone()
        },
        description: detail.description.clone(),
        category: if detail.category.is_empty() {
            DEFAULT_CATEGORY.to_owned()
        } else {
            detail.category.clone()
        },
        price_label: format_money(detail.price, locale),
    }
}

/// Shortens `s` to at most `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
