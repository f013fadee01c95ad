pub mod cart;
pub mod engine;
pub mod error;
pub mod persist;
pub mod store;

pub use cart::Cart;
pub use engine::{CartEngine, CartLine, CartView};
pub use error::StoreError;
pub use persist::{CartStore, CART_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
