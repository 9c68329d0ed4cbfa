use async_trait::async_trait;

use crate::catalog::{InventoryRecord, Product, ProductUpdate, Review};

use super::{ContinuationToken, Page, PriceCeiling, Result};

/// Repository for the products collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>>;

    /// Gets the products of one category, optionally price-filtered and capped.
    ///
    /// The cap is enforced by the store in a single request.
    async fn query_products_by_category(
        &self,
        category: &str,
        max_price: Option<PriceCeiling>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>>;

    /// Reads one page of the products collection.
    ///
    /// The filter is applied per page, so a page may be empty while more
    /// pages follow.
    async fn scan_products(
        &self,
        max_price: Option<PriceCeiling>,
        start: Option<ContinuationToken>,
    ) -> Result<Page<Product>>;

    /// Replaces the name and price of an existing product.
    ///
    /// Returns the updated product, or `None` if no product has this ID.
    async fn update_product(
        &self,
        product_id: &str,
        update: &ProductUpdate,
    ) -> Result<Option<Product>>;
}

/// Repository for the reviews collection (partitioned by product ID).
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Gets all reviews for a product.
    async fn query_reviews(&self, product_id: &str) -> Result<Vec<Review>>;
}

/// Repository for the inventory collection (keyed by product ID).
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Gets the inventory record of a product.
    async fn get_inventory(&self, product_id: &str) -> Result<Option<InventoryRecord>>;

    /// Gets every inventory record stored under a product ID.
    async fn query_inventory(&self, product_id: &str) -> Result<Vec<InventoryRecord>>;
}
