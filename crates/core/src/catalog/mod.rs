mod enrichment;
mod error;
mod listing;
mod requests;
mod types;

pub use enrichment::enrich_products;
pub use error::CatalogError;
pub use listing::{collect_products, scan_all_products, ListingCriteria, DEFAULT_NUM_PRODUCTS};
pub use requests::{ListProductsQuery, ProductUpdate, UpdateProductRequest};
pub use types::{Attributes, EnrichedProduct, Enrichment, InventoryRecord, Product, Review};

#[cfg(test)]
mod testing;
