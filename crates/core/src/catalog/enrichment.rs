//! Enrichment fan-out: joins products with their inventory and reviews.

use futures_util::future::{join, join_all};

use crate::storage::{InventoryRepository, Result, ReviewRepository};

use super::{EnrichedProduct, Enrichment, InventoryRecord, Product, Review};

const INVENTORY_FIELD: &str = "inventory";
const REVIEWS_FIELD: &str = "reviews";

/// Attaches inventory and reviews to every product.
///
/// Two lookups are dispatched per product and all of them are polled
/// concurrently on the calling task; the call returns once every lookup has
/// settled. Output position `i` always belongs to input product `i`.
///
/// A failed lookup only degrades its own field to an error marker. Stored
/// attributes named `inventory` or `reviews` are replaced by the lookups.
/// Products without an ID are passed through unenriched.
pub async fn enrich_products(
    inventory: &dyn InventoryRepository,
    reviews: &dyn ReviewRepository,
    products: Vec<Product>,
) -> Vec<EnrichedProduct> {
    let lookups = products.into_iter().map(|mut product| async move {
        if !product.has_id() {
            tracing::debug!("Skipping enrichment of product without an ID");
            return EnrichedProduct::unenriched(product);
        }

        let (stock, product_reviews) = join(
            inventory.get_inventory(&product.product_id),
            reviews.query_reviews(&product.product_id),
        )
        .await;

        let inventory_marker = inventory_field(&product.product_id, stock);
        let reviews_marker = reviews_field(&product.product_id, product_reviews);

        product.attributes.remove(INVENTORY_FIELD);
        product.attributes.remove(REVIEWS_FIELD);

        EnrichedProduct {
            product,
            inventory: Some(inventory_marker),
            reviews: Some(reviews_marker),
        }
    });

    join_all(lookups).await
}

fn inventory_field(
    product_id: &str,
    result: Result<Option<InventoryRecord>>,
) -> Enrichment<InventoryRecord> {
    match result {
        Ok(Some(record)) => Enrichment::Loaded(record),
        Ok(None) => Enrichment::Empty,
        Err(e) => {
            tracing::warn!(product_id, error = %e, "Inventory lookup failed");
            Enrichment::Failed(e.to_string())
        }
    }
}

fn reviews_field(product_id: &str, result: Result<Vec<Review>>) -> Enrichment<Vec<Review>> {
    match result {
        Ok(reviews) => Enrichment::Loaded(reviews),
        Err(e) => {
            tracing::warn!(product_id, error = %e, "Reviews lookup failed");
            Enrichment::Failed(e.to_string())
        }
    }
}
