mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::{InventoryRepository, ProductRepository, ReviewRepository};
pub use types::{ContinuationToken, Page, PriceCeiling};
