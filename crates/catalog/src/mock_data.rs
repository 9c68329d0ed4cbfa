use catalog_core::catalog::{InventoryRecord, Product, Review};
use rust_decimal::Decimal;

use crate::storage::InMemoryRepository;

/// A small fixed catalog for demonstration purposes.
pub struct DemoCatalog {
    pub products: Vec<Product>,
    pub reviews: Vec<Review>,
    pub inventory: Vec<InventoryRecord>,
}

/// Builds the demo catalog. The output is the same on every call.
pub fn demo_catalog() -> DemoCatalog {
    // (id, category, name, price in cents)
    let rows: [(&str, &str, &str, i64); 8] = [
        ("prod-001", "kitchen", "Stovetop Kettle", 2999),
        ("prod-002", "kitchen", "Cast Iron Skillet", 4450),
        ("prod-003", "kitchen", "Chef's Knife", 8900),
        ("prod-004", "books", "The Art of Fermentation", 1899),
        ("prod-005", "books", "Salt Fat Acid Heat", 2250),
        ("prod-006", "outdoors", "Camping Stove", 6475),
        ("prod-007", "outdoors", "Enamel Mug", 950),
        ("prod-008", "outdoors", "Trail Lantern", 3120),
    ];

    let products = rows
        .iter()
        .map(|(id, category, name, cents)| {
            Product::new(*id)
                .with_category(*category)
                .with_name(*name)
                .with_price(Decimal::new(*cents, 2))
                .with_attribute("currency", "GBP")
        })
        .collect();

    // Products without a record are reported with an empty inventory marker.
    let inventory = rows
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 3)
        .map(|(i, (id, ..))| {
            InventoryRecord::new(*id)
                .with_attribute("quantity", (i as u64 + 1) * 7)
                .with_attribute("warehouse", if i % 2 == 0 { "LHR" } else { "MAN" })
        })
        .collect();

    let reviews = vec![
        review("prod-001", "rev-001", 5, "Boils fast and whistles loud."),
        review("prod-001", "rev-002", 4, "Handle gets warm."),
        review("prod-002", "rev-003", 5, "Will outlive me."),
        review("prod-004", "rev-004", 3, "Dense but rewarding."),
        review("prod-006", "rev-005", 4, "Light enough for backpacking."),
        review("prod-007", "rev-006", 2, "Chipped on the first trip."),
        review("prod-007", "rev-007", 4, "Keeps coffee warm."),
    ];

    DemoCatalog {
        products,
        reviews,
        inventory,
    }
}

fn review(product_id: &str, review_id: &str, rating: u8, comment: &str) -> Review {
    Review::new(product_id)
        .with_attribute("review_id", review_id)
        .with_attribute("rating", rating)
        .with_attribute("comment", comment)
}

/// Loads the demo catalog into an in-memory repository.
pub async fn seed(repo: &InMemoryRepository) {
    let catalog = demo_catalog();

    for product in catalog.products {
        repo.insert_product(product).await;
    }
    for review in catalog.reviews {
        repo.insert_review(review).await;
    }
    for record in catalog.inventory {
        repo.insert_inventory(record).await;
    }
}
