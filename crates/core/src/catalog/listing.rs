//! Pagination accumulator for product listings.

use crate::storage::{PriceCeiling, ProductRepository, Result};

use super::Product;

/// Number of products listed when the request does not say.
pub const DEFAULT_NUM_PRODUCTS: usize = 30;

/// What a bounded product listing asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCriteria {
    /// Maximum number of products to return.
    pub limit: usize,
    /// Uses the category index instead of a full scan.
    pub category: Option<String>,
    pub max_price: Option<PriceCeiling>,
}

/// Collects at most `criteria.limit` products matching the criteria.
///
/// With a category, a single capped partition query is issued. Without one,
/// the products collection is scanned page by page until enough products
/// were gathered or the scan is exhausted; the result is then truncated.
/// Results come back in store order.
pub async fn collect_products(
    repo: &dyn ProductRepository,
    criteria: &ListingCriteria,
) -> Result<Vec<Product>> {
    let mut products = match &criteria.category {
        Some(category) => {
            repo.query_products_by_category(category, criteria.max_price, Some(criteria.limit))
                .await?
        }
        None => scan_products(repo, criteria.max_price, Some(criteria.limit)).await?,
    };

    products.truncate(criteria.limit);
    Ok(products)
}

/// Scans the whole products collection, without filter or limit.
///
/// Cost grows with the size of the collection.
pub async fn scan_all_products(repo: &dyn ProductRepository) -> Result<Vec<Product>> {
    scan_products(repo, None, None).await
}

/// Follows continuation tokens until `target` items were read or the
/// collection is exhausted. Pages are requested strictly one after another.
async fn scan_products(
    repo: &dyn ProductRepository,
    max_price: Option<PriceCeiling>,
    target: Option<usize>,
) -> Result<Vec<Product>> {
    let mut products = Vec::new();
    let mut start = None;
    let mut pages = 0usize;

    loop {
        let page = repo.scan_products(max_price, start.take()).await?;
        pages += 1;
        products.extend(page.items);

        let satisfied = target.is_some_and(|target| products.len() >= target);
        match page.next {
            Some(next) if !satisfied => start = Some(next),
            _ => break,
        }
    }

    tracing::debug!(pages, items = products.len(), "Product scan finished");

    Ok(products)
}
