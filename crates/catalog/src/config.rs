use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Products table name (default: "products")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub products_table: String,
    /// Reviews table name (default: "reviews")
    #[allow(dead_code)]
    pub reviews_table: String,
    /// Inventory table name (default: "inventory")
    #[allow(dead_code)]
    pub inventory_table: String,
    /// Products index partitioned by category (default: "category-index")
    #[allow(dead_code)]
    pub category_index: String,
    /// AWS region of the tables (default: "eu-west-2")
    #[allow(dead_code)]
    pub aws_region: String,
    /// Maximum items read per scan page (default: unset, store decides)
    pub scan_page_size: Option<usize>,
    /// Load demo products into the in-memory store (default: true)
    /// Note: Only used when the `inmemory` feature is enabled.
    #[allow(dead_code)]
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCTS_TABLE` - Products table name (default: "products")
    /// - `REVIEWS_TABLE` - Reviews table name (default: "reviews")
    /// - `INVENTORY_TABLE` - Inventory table name (default: "inventory")
    /// - `CATEGORY_INDEX` - Category index name (default: "category-index")
    /// - `AWS_REGION` - AWS region (default: "eu-west-2")
    /// - `SCAN_PAGE_SIZE` - Items per scan page (default: unset)
    /// - `SEED_DEMO_DATA` - Seed the in-memory store (default: true)
    pub fn from_env() -> Self {
        Self {
            products_table: env::var("PRODUCTS_TABLE").unwrap_or_else(|_| "products".to_string()),
            reviews_table: env::var("REVIEWS_TABLE").unwrap_or_else(|_| "reviews".to_string()),
            inventory_table: env::var("INVENTORY_TABLE")
                .unwrap_or_else(|_| "inventory".to_string()),
            category_index: env::var("CATEGORY_INDEX")
                .unwrap_or_else(|_| "category-index".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-2".to_string()),
            scan_page_size: env::var("SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

/// Parses a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
