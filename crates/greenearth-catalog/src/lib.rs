pub mod client;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod normalize;
mod retry;

pub use client::{CatalogClient, Fetched, Origin};
pub use envelope::Endpoint;
pub use error::CatalogError;
pub use normalize::{normalize_category, normalize_plant, with_all_category, PlantFields};
