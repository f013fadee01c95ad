//! Display surfaces.
//!
//! The controller never formats output itself. It hands projections from
//! [`crate::view`] to a [`Surface`], which decides how to show them.

use std::io::Write;

use crate::view::{CartPanel, CategoryBar, DetailOverlay, Grid, NO_RESULTS};

pub trait Surface {
    /// Shows or hides the loading indicator.
    fn busy(&mut self, on: bool);
    fn categories(&mut self, bar: &CategoryBar);
    fn grid(&mut self, grid: &Grid);
    fn cart(&mut self, panel: &CartPanel);
    fn detail(&mut self, overlay: &DetailOverlay);
}

/// Renders projections as plain text.
///
/// Write failures are logged and dropped so a closed pipe cannot take the
/// storefront down.
pub struct TerminalSurface<W> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(%error, "failed to write to terminal");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn busy(&mut self, on: bool) {
        if on {
            self.emit("Loading…\n");
        }
    }

    fn categories(&mut self, bar: &CategoryBar) {
        let mut text = String::from("Categories:");
        for button in &bar.buttons {
            if button.active {
                text.push_str(&format!(" [{}: {}]", button.id, button.name));
            } else {
                text.push_str(&format!("  {}: {} ", button.id, button.name));
            }
        }
        text.push('\n');
        self.emit(&text);
    }

    fn grid(&mut self, grid: &Grid) {
        let text = match grid {
            Grid::Empty => format!("{NO_RESULTS}\n"),
            Grid::Cards(cards) => {
                let mut text = String::new();
                for (i, card) in cards.iter().enumerate() {
                    text.push_str(&format!(
                        "{:>3}. {}  ({})  {}\n",
                        i + 1,
                        card.title,
                        card.category,
                        card.price_label
                    ));
                    if !card.excerpt.is_empty() {
                        text.push_str(&format!("     {}\n", card.excerpt));
                    }
                }
                text
            }
        };
        self.emit(&text);
    }

    fn cart(&mut self, panel: &CartPanel) {
        let mut text = String::from("Cart:\n");
        for line in &panel.lines {
            text.push_str(&format!(
                "  {} [{}]  {}  = {}\n",
                line.name, line.id, line.unit_label, line.amount_label
            ));
        }
        text.push_str(&format!("  Total: {}\n", panel.total_label));
        self.emit(&text);
    }

    fn detail(&mut self, overlay: &DetailOverlay) {
        if !overlay.open {
            return;
        }
        let text = format!(
            "== {} ==\nCategory: {}\nPrice: {}\nImage: {}\n{}\n",
            overlay.title, overlay.category, overlay.price_label, overlay.image, overlay.description
        );
        self.emit(&text);
    }
}

/// Keeps every projection it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub busy: Vec<bool>,
    pub categories: Vec<CategoryBar>,
    pub grids: Vec<Grid>,
    pub carts: Vec<CartPanel>,
    pub details: Vec<DetailOverlay>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_grid(&self) -> Option<&Grid> {
        self.grids.last()
    }

    #[must_use]
    pub fn last_cart(&self) -> Option<&CartPanel> {
        self.carts.last()
    }

    #[must_use]
    pub fn last_detail(&self) -> Option<&DetailOverlay> {
        self.details.last()
    }
}

impl Surface for RecordingSurface {
    fn busy(&mut self, on: bool) {
        self.busy.push(on);
    }

    fn categories(&mut self, bar: &CategoryBar) {
        self.categories.push(bar.clone());
    }

    fn grid(&mut self, grid: &Grid) {
        self.grids.push(grid.clone());
    }

    fn cart(&mut self, panel: &CartPanel) {
        self.carts.push(panel.clone());
    }

    fn detail(&mut self, overlay: &DetailOverlay) {
        self.details.push(overlay.clone());
    }
}

#[cfg(test)]
mod tests {
    use greenearth_core::Category;

    use super::*;
    use crate::view::{render_categories, CartPanelLine};

    fn rendered(f: impl FnOnce(&mut TerminalSurface<Vec<u8>>)) -> String {
        let mut surface = TerminalSurface::new(Vec::new());
        f(&mut surface);
        String::from_utf8(surface.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn empty_grid_prints_placeholder() {
        let out = rendered(|s| s.grid(&Grid::Empty));
        assert_eq!(out, "No trees found.\n");
    }

    #[test]
    fn active_category_is_bracketed() {
        let bar = render_categories(
            &[
                Category::all(),
                Category {
                    id: "1".to_owned(),
                    name: "Fruit Trees".to_owned(),
                },
            ],
            "1",
        );
        let out = rendered(|s| s.categories(&bar));
        assert!(out.contains("[1: Fruit Trees]"));
        assert!(!out.contains("[all"));
    }

    #[test]
    fn cart_panel_lists_lines_and_total() {
        let panel = CartPanel {
            lines: vec![CartPanelLine {
                id: "101".to_owned(),
                name: "Mango Tree".to_owned(),
                unit_label: "৳500 × 2".to_owned(),
                qty: 2,
                amount_label: "৳1,000".to_owned(),
            }],
            total_label: "৳1,000".to_owned(),
        };
        let out = rendered(|s| s.cart(&panel));
        assert!(out.contains("Mango Tree [101]  ৳500 × 2"));
        assert!(out.ends_with("Total: ৳1,000\n"));
    }

    #[test]
    fn closed_overlay_prints_nothing() {
        let out = rendered(|s| s.detail(&DetailOverlay::closed()));
        assert!(out.is_empty());
    }

    #[test]
    fn recording_surface_keeps_history() {
        let mut surface = RecordingSurface::new();
        surface.busy(true);
        surface.grid(&Grid::Empty);
        surface.busy(false);
        assert_eq!(surface.busy, vec![true, false]);
        assert_eq!(surface.last_grid(), Some(&Grid::Empty));
    }
}
