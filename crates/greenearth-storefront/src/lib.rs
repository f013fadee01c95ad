pub mod controller;
pub mod detail;
pub mod error;
pub mod surface;
pub mod view;

pub use controller::Storefront;
pub use detail::{DetailFill, PlantDetail};
pub use error::StorefrontError;
pub use surface::{RecordingSurface, Surface, TerminalSurface};
pub use view::{
    AddTrigger, Card, CartPanel, CategoryBar, DetailOverlay, DetailsTrigger, Grid,
};
