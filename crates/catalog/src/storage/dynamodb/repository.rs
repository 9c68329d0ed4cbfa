//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `catalog_core::storage` over three
//! tables keyed by `product_id`, plus a products index partitioned by
//! `category`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use catalog_core::catalog::{InventoryRecord, Product, ProductUpdate, Review};
use catalog_core::storage::{
    ContinuationToken, InventoryRepository, Page, PriceCeiling, ProductRepository, Result,
    ReviewRepository,
};

use super::conversions::{
    item_to_inventory, item_to_product, item_to_review, key_to_token, product_key, token_to_key,
    Item,
};
use super::error::{is_conditional_check_failed, map_sdk_error};
use super::expressions::{
    name_and_price_update, partition_condition, price_filter, product_exists,
    ExpressionAttributes, CATEGORY, PRODUCT_ID,
};
use crate::config::Config;

/// Names of the tables and index backing the catalog.
#[derive(Debug, Clone)]
pub struct TableNames {
    pub products: String,
    pub reviews: String,
    pub inventory: String,
    /// Index on the products table partitioned by `category`.
    pub category_index: String,
}

impl From<&Config> for TableNames {
    fn from(config: &Config) -> Self {
        Self {
            products: config.products_table.clone(),
            reviews: config.reviews_table.clone(),
            inventory: config.inventory_table.clone(),
            category_index: config.category_index.clone(),
        }
    }
}

/// DynamoDB-based repository implementation.
///
/// One instance serves all three collections.
pub struct DynamoDbRepository {
    client: Client,
    tables: TableNames,
    scan_page_size: Option<i32>,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and tables.
    pub fn new(client: Client, tables: TableNames) -> Self {
        Self {
            client,
            tables,
            scan_page_size: None,
        }
    }

    /// Caps the number of items each scan request reads.
    pub fn with_scan_page_size(mut self, page_size: Option<usize>) -> Self {
        self.scan_page_size = page_size.map(clamp_limit);
        self
    }

    /// Creates a repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain in the configured region.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;

        Self::new(Client::new(&sdk_config), TableNames::from(config))
            .with_scan_page_size(config.scan_page_size)
    }

    /// Reads a whole partition of `table`, following `LastEvaluatedKey`.
    async fn query_partition<T>(
        &self,
        table: &str,
        product_id: &str,
        convert: fn(&Item) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut attributes = ExpressionAttributes::new();
        let key_condition = partition_condition(&mut attributes, PRODUCT_ID, product_id);

        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(table)
                .key_condition_expression(&key_condition)
                .set_expression_attribute_names(attributes.names())
                .set_expression_attribute_values(attributes.values())
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_sdk_error)?;

            for item in output.items() {
                records.push(convert(item)?);
            }

            start_key = output.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }
}

fn clamp_limit(limit: usize) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}

// ============================================================================
// ProductRepository implementation
// ============================================================================

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.tables.products)
            .set_key(Some(product_key(product_id)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        output.item.as_ref().map(item_to_product).transpose()
    }

    async fn query_products_by_category(
        &self,
        category: &str,
        max_price: Option<PriceCeiling>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>> {
        let mut attributes = ExpressionAttributes::new();
        let key_condition = partition_condition(&mut attributes, CATEGORY, category);
        let filter = max_price.map(|ceiling| price_filter(&mut attributes, ceiling));

        // Limit caps the items read before the filter runs, as DynamoDB does.
        let output = self
            .client
            .query()
            .table_name(&self.tables.products)
            .index_name(&self.tables.category_index)
            .key_condition_expression(key_condition)
            .set_filter_expression(filter)
            .set_expression_attribute_names(attributes.names())
            .set_expression_attribute_values(attributes.values())
            .set_limit(limit.map(clamp_limit))
            .send()
            .await
            .map_err(map_sdk_error)?;

        output.items().iter().map(item_to_product).collect()
    }

    async fn scan_products(
        &self,
        max_price: Option<PriceCeiling>,
        start: Option<ContinuationToken>,
    ) -> Result<Page<Product>> {
        let mut attributes = ExpressionAttributes::new();
        let filter = max_price.map(|ceiling| price_filter(&mut attributes, ceiling));

        let output = self
            .client
            .scan()
            .table_name(&self.tables.products)
            .set_filter_expression(filter)
            .set_expression_attribute_names(attributes.names())
            .set_expression_attribute_values(attributes.values())
            .set_exclusive_start_key(start.as_ref().map(token_to_key))
            .set_limit(self.scan_page_size)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let items = output
            .items()
            .iter()
            .map(item_to_product)
            .collect::<Result<Vec<_>>>()?;
        let next = output
            .last_evaluated_key
            .as_ref()
            .map(key_to_token)
            .transpose()?;

        Ok(Page::new(items, next))
    }

    async fn update_product(
        &self,
        product_id: &str,
        update: &ProductUpdate,
    ) -> Result<Option<Product>> {
        let mut attributes = ExpressionAttributes::new();
        let update_expression = name_and_price_update(&mut attributes, update);
        let condition = product_exists(&mut attributes);

        let result = self
            .client
            .update_item()
            .table_name(&self.tables.products)
            .set_key(Some(product_key(product_id)))
            .update_expression(update_expression)
            .condition_expression(condition)
            .set_expression_attribute_names(attributes.names())
            .set_expression_attribute_values(attributes.values())
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes.as_ref().map(item_to_product).transpose(),
            Err(err) if is_conditional_check_failed(&err) => Ok(None),
            Err(err) => Err(map_sdk_error(err)),
        }
    }
}

// ============================================================================
// ReviewRepository implementation
// ============================================================================

#[async_trait]
impl ReviewRepository for DynamoDbRepository {
    async fn query_reviews(&self, product_id: &str) -> Result<Vec<Review>> {
        self.query_partition(&self.tables.reviews, product_id, item_to_review)
            .await
    }
}

// ============================================================================
// InventoryRepository implementation
// ============================================================================

#[async_trait]
impl InventoryRepository for DynamoDbRepository {
    async fn get_inventory(&self, product_id: &str) -> Result<Option<InventoryRecord>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.tables.inventory)
            .set_key(Some(product_key(product_id)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        output.item.as_ref().map(item_to_inventory).transpose()
    }

    async fn query_inventory(&self, product_id: &str) -> Result<Vec<InventoryRecord>> {
        self.query_partition(&self.tables.inventory, product_id, item_to_inventory)
            .await
    }
}
