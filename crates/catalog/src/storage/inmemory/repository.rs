//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::catalog::{InventoryRecord, Product, ProductUpdate, Review};
use catalog_core::storage::{
    ContinuationToken, InventoryRepository, Page, PriceCeiling, ProductRepository, Result,
    ReviewRepository,
};

/// Number of products examined per scan page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// In-memory storage backend.
///
/// Products are kept ordered by ID, so scans walk them in key order and the
/// continuation token is simply the last key examined. Like the real store,
/// a scan page is cut first and filtered afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    products: Arc<RwLock<BTreeMap<String, Product>>>,
    reviews: Arc<RwLock<HashMap<String, Vec<Review>>>>,
    inventory: Arc<RwLock<HashMap<String, InventoryRecord>>>,
    page_size: usize,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            reviews: Arc::new(RwLock::new(HashMap::new())),
            inventory: Arc::new(RwLock::new(HashMap::new())),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets how many products a single scan page examines.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Stores a product, replacing any product with the same ID.
    pub async fn insert_product(&self, product: Product) {
        self.products
            .write()
            .await
            .insert(product.product_id.clone(), product);
    }

    /// Appends a review to its product's partition.
    pub async fn insert_review(&self, review: Review) {
        self.reviews
            .write()
            .await
            .entry(review.product_id.clone())
            .or_default()
            .push(review);
    }

    /// Stores an inventory record, replacing any record for the same product.
    pub async fn insert_inventory(&self, record: InventoryRecord) {
        self.inventory
            .write()
            .await
            .insert(record.product_id.clone(), record);
    }
}

fn passes(max_price: Option<PriceCeiling>, product: &Product) -> bool {
    max_price.is_none_or(|ceiling| ceiling.admits(product.price))
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(product_id).cloned())
    }

    async fn query_products_by_category(
        &self,
        category: &str,
        max_price: Option<PriceCeiling>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.category.as_deref() == Some(category))
            .filter(|p| passes(max_price, p))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn scan_products(
        &self,
        max_price: Option<PriceCeiling>,
        start: Option<ContinuationToken>,
    ) -> Result<Page<Product>> {
        let products = self.products.read().await;

        let lower = match &start {
            Some(token) => Bound::Excluded(token.as_str()),
            None => Bound::Unbounded,
        };
        let mut remaining = products.range::<str, _>((lower, Bound::Unbounded));

        let mut items = Vec::new();
        let mut last_key = None;
        for (key, product) in remaining.by_ref().take(self.page_size) {
            last_key = Some(key);
            if passes(max_price, product) {
                items.push(product.clone());
            }
        }

        let next = match (last_key, remaining.next()) {
            (Some(key), Some(_)) => Some(ContinuationToken::new(key.as_str())),
            _ => None,
        };

        Ok(Page::new(items, next))
    }

    async fn update_product(
        &self,
        product_id: &str,
        update: &ProductUpdate,
    ) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(product_id).map(|product| {
            product.name = Some(update.name.clone());
            product.price = Some(update.price);
            product.clone()
        }))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn query_reviews(&self, product_id: &str) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(product_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryRepository {
    async fn get_inventory(&self, product_id: &str) -> Result<Option<InventoryRecord>> {
        let inventory = self.inventory.read().await;
        Ok(inventory.get(product_id).cloned())
    }

    async fn query_inventory(&self, product_id: &str) -> Result<Vec<InventoryRecord>> {
        Ok(self.get_inventory(product_id).await?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, price: i64) -> Product {
        Product::new(id)
            .with_name(format!("Product {id}"))
            .with_price(Decimal::new(price, 0))
    }

    async fn repo_with(page_size: usize, products: Vec<Product>) -> InMemoryRepository {
        let repo = InMemoryRepository::new().with_page_size(page_size);
        for p in products {
            repo.insert_product(p).await;
        }
        repo
    }

    // ==================== Product Tests ====================

    #[tokio::test]
    async fn test_product_get() {
        let repo = repo_with(10, vec![product("p-1", 5)]).await;

        let retrieved = repo.get_product("p-1").await.unwrap();
        assert_eq!(retrieved, Some(product("p-1", 5)));
    }

    #[tokio::test]
    async fn test_product_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_product("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_scan_pages_follow_key_order() {
        let repo = repo_with(
            2,
            vec![
                product("c", 1),
                product("a", 1),
                product("e", 1),
                product("b", 1),
                product("d", 1),
            ],
        )
        .await;

        let first = repo.scan_products(None, None).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].product_id, "a");
        assert_eq!(first.next, Some(ContinuationToken::new("b")));

        let second = repo.scan_products(None, first.next).await.unwrap();
        assert_eq!(second.items[0].product_id, "c");
        assert_eq!(second.next, Some(ContinuationToken::new("d")));

        let third = repo.scan_products(None, second.next).await.unwrap();
        assert_eq!(third.items.len(), 1);
        assert_eq!(third.items[0].product_id, "e");
        assert!(third.is_last());
    }

    #[tokio::test]
    async fn test_scan_exact_page_boundary_has_no_token() {
        let repo = repo_with(2, vec![product("a", 1), product("b", 1)]).await;

        let page = repo.scan_products(None, None).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn test_scan_filters_after_paging() {
        let repo = repo_with(
            2,
            vec![product("a", 50), product("b", 60), product("c", 5)],
        )
        .await;
        let ceiling = Some(PriceCeiling::new(Decimal::new(10, 0)));

        let first = repo.scan_products(ceiling, None).await.unwrap();
        assert!(first.items.is_empty());
        assert!(!first.is_last());

        let second = repo.scan_products(ceiling, first.next).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].product_id, "c");
        assert!(second.is_last());
    }

    #[tokio::test]
    async fn test_query_by_category() {
        let repo = repo_with(
            10,
            vec![
                product("a", 5).with_category("books"),
                product("b", 50).with_category("books"),
                product("c", 5).with_category("games"),
                product("d", 7).with_category("books"),
            ],
        )
        .await;

        let books = repo
            .query_products_by_category("books", None, None)
            .await
            .unwrap();
        assert_eq!(books.len(), 3);

        let ceiling = Some(PriceCeiling::new(Decimal::new(10, 0)));
        let cheap = repo
            .query_products_by_category("books", ceiling, Some(1))
            .await
            .unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].product_id, "a");
    }

    #[tokio::test]
    async fn test_update_product() {
        let repo = repo_with(10, vec![product("p-1", 5).with_category("books")]).await;
        let update = ProductUpdate {
            name: "Renamed".to_string(),
            price: Decimal::new(1250, 2),
        };

        let updated = repo.update_product("p-1", &update).await.unwrap().unwrap();

        assert_eq!(updated.name.as_deref(), Some("Renamed"));
        assert_eq!(updated.price, Some(Decimal::new(1250, 2)));
        assert_eq!(updated.category.as_deref(), Some("books"));
        assert_eq!(repo.get_product("p-1").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_nonexistent_product() {
        let repo = InMemoryRepository::new();
        let update = ProductUpdate {
            name: "Ghost".to_string(),
            price: Decimal::ONE,
        };

        let result = repo.update_product("missing", &update).await.unwrap();
        assert!(result.is_none());
    }

    // ==================== Review / Inventory Tests ====================

    #[tokio::test]
    async fn test_reviews_by_product() {
        let repo = InMemoryRepository::new();
        repo.insert_review(Review::new("p-1").with_attribute("rating", 5))
            .await;
        repo.insert_review(Review::new("p-1").with_attribute("rating", 3))
            .await;
        repo.insert_review(Review::new("p-2").with_attribute("rating", 1))
            .await;

        let reviews = repo.query_reviews("p-1").await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r.product_id == "p-1"));

        assert!(repo.query_reviews("p-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inventory_lookup() {
        let repo = InMemoryRepository::new();
        repo.insert_inventory(InventoryRecord::new("p-1").with_attribute("quantity", 12))
            .await;

        let record = repo.get_inventory("p-1").await.unwrap().unwrap();
        assert_eq!(record.attributes["quantity"], 12);

        assert!(repo.get_inventory("p-2").await.unwrap().is_none());
        assert_eq!(repo.query_inventory("p-1").await.unwrap().len(), 1);
        assert!(repo.query_inventory("p-2").await.unwrap().is_empty());
    }
}
