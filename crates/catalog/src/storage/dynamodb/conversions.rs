//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::catalog::{Attributes, InventoryRecord, Product, Review};
use catalog_core::storage::{ContinuationToken, StoreError};
use rust_decimal::Decimal;
use serde_json::Value;

use super::expressions::{CATEGORY, NAME, PRICE, PRODUCT_ID};

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a DynamoDB item to Product.
///
/// A missing `product_id` yields a product with an empty ID rather than an
/// error, so a single malformed item does not fail a whole listing.
pub fn item_to_product(item: &Item) -> Result<Product, StoreError> {
    let mut product = Product::new(get_optional_string(item, PRODUCT_ID)?.unwrap_or_default());
    product.category = get_optional_string(item, CATEGORY)?;
    product.name = get_optional_string(item, NAME)?;
    product.price = get_optional_decimal(item, PRICE)?;
    product.attributes = extra_attributes(item, &[PRODUCT_ID, CATEGORY, NAME, PRICE])?;
    Ok(product)
}

/// Convert a DynamoDB item to Review.
pub fn item_to_review(item: &Item) -> Result<Review, StoreError> {
    Ok(Review {
        product_id: get_string(item, PRODUCT_ID)?,
        attributes: extra_attributes(item, &[PRODUCT_ID])?,
    })
}

/// Convert a DynamoDB item to InventoryRecord.
pub fn item_to_inventory(item: &Item) -> Result<InventoryRecord, StoreError> {
    Ok(InventoryRecord {
        product_id: get_string(item, PRODUCT_ID)?,
        attributes: extra_attributes(item, &[PRODUCT_ID])?,
    })
}

// ============================================================================
// Keys and continuation tokens
// ============================================================================

/// Primary key of an item in a table keyed by `product_id`.
pub fn product_key(product_id: &str) -> Item {
    HashMap::from([(
        PRODUCT_ID.to_string(),
        AttributeValue::S(product_id.to_string()),
    )])
}

/// Turns the `LastEvaluatedKey` of a products scan into a token.
///
/// The products table is keyed by `product_id` alone, so that value is the
/// whole cursor.
pub fn key_to_token(key: &Item) -> Result<ContinuationToken, StoreError> {
    let product_id = get_string(key, PRODUCT_ID)?;
    Ok(ContinuationToken::new(product_id))
}

/// Rebuilds the `ExclusiveStartKey` of a products scan from a token.
pub fn token_to_key(token: &ContinuationToken) -> Item {
    product_key(token.as_str())
}

// ============================================================================
// Attribute helpers
// ============================================================================

fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    get_optional_string(item, key)?
        .ok_or_else(|| StoreError::Serialization(format!("missing attribute: {key}")))
}

fn get_optional_string(item: &Item, key: &str) -> Result<Option<String>, StoreError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(StoreError::InvalidData(format!(
            "attribute {key} is not a string"
        ))),
    }
}

fn get_optional_decimal(item: &Item, key: &str) -> Result<Option<Decimal>, StoreError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::N(n)) => parse_decimal(n).map(Some),
        Some(_) => Err(StoreError::InvalidData(format!(
            "attribute {key} is not a number"
        ))),
    }
}

/// Parses a DynamoDB number exactly.
pub fn parse_decimal(n: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(n)
        .or_else(|_| Decimal::from_scientific(n))
        .map_err(|e| StoreError::Serialization(format!("invalid number {n}: {e}")))
}

/// Collects every attribute not in `known` as JSON.
fn extra_attributes(item: &Item, known: &[&str]) -> Result<Attributes, StoreError> {
    item.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
        .collect()
}

/// Convert an arbitrary attribute value to JSON.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, StoreError> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n)?,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(
            list.iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
                .collect::<Result<_, StoreError>>()?,
        ),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(
            set.iter()
                .map(|n| number_to_json(n))
                .collect::<Result<_, _>>()?,
        ),
        other => {
            return Err(StoreError::Serialization(format!(
                "unsupported attribute type: {other:?}"
            )))
        }
    };
    Ok(json)
}

fn number_to_json(n: &str) -> Result<Value, StoreError> {
    if let Ok(int) = n.parse::<i64>() {
        return Ok(Value::from(int));
    }
    n.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| StoreError::Serialization(format!("invalid number {n}")))
}
