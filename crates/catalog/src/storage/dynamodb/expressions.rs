//! Attribute names and expression fragments.
//!
//! Pure functions building the key-condition, filter and update expressions
//! sent to DynamoDB. Attribute names always go through placeholders since
//! `name` is a reserved word.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::catalog::ProductUpdate;
use catalog_core::storage::PriceCeiling;

// ============================================================================
// Attribute names
// ============================================================================

pub const PRODUCT_ID: &str = "product_id";
pub const CATEGORY: &str = "category";
pub const NAME: &str = "name";
pub const PRICE: &str = "price";

/// Placeholder maps accumulated while building an expression.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpressionAttributes {
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl ExpressionAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `#attribute` for `attribute` and returns the placeholder.
    pub fn name(&mut self, attribute: &str) -> String {
        let placeholder = format!("#{attribute}");
        self.names
            .insert(placeholder.clone(), attribute.to_string());
        placeholder
    }

    /// Registers `:placeholder` for `value` and returns the placeholder.
    pub fn value(&mut self, placeholder: &str, value: AttributeValue) -> String {
        let placeholder = format!(":{placeholder}");
        self.values.insert(placeholder.clone(), value);
        placeholder
    }

    /// Names map, or `None` when empty (DynamoDB rejects empty maps).
    pub fn names(&self) -> Option<HashMap<String, String>> {
        (!self.names.is_empty()).then(|| self.names.clone())
    }

    /// Values map, or `None` when empty (DynamoDB rejects empty maps).
    pub fn values(&self) -> Option<HashMap<String, AttributeValue>> {
        (!self.values.is_empty()).then(|| self.values.clone())
    }
}

/// Key condition selecting one partition: `#attr = :attr`.
pub fn partition_condition(
    attributes: &mut ExpressionAttributes,
    attribute: &str,
    value: &str,
) -> String {
    let name = attributes.name(attribute);
    let value = attributes.value(attribute, AttributeValue::S(value.to_string()));
    format!("{name} = {value}")
}

/// Filter keeping items priced strictly below the ceiling.
pub fn price_filter(attributes: &mut ExpressionAttributes, ceiling: PriceCeiling) -> String {
    let name = attributes.name(PRICE);
    let value = attributes.value("max_price", AttributeValue::N(ceiling.value().to_string()));
    format!("{name} < {value}")
}

/// Update expression replacing a product's name and price.
pub fn name_and_price_update(
    attributes: &mut ExpressionAttributes,
    update: &ProductUpdate,
) -> String {
    let name = attributes.name(NAME);
    let price = attributes.name(PRICE);
    let new_name = attributes.value(NAME, AttributeValue::S(update.name.clone()));
    let new_price = attributes.value(PRICE, AttributeValue::N(update.price.to_string()));
    format!("SET {name} = {new_name}, {price} = {new_price}")
}

/// Condition that only holds for an existing product.
pub fn product_exists(attributes: &mut ExpressionAttributes) -> String {
    let product_id = attributes.name(PRODUCT_ID);
    format!("attribute_exists({product_id})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_partition_condition() {
        let mut attributes = ExpressionAttributes::new();

        let condition = partition_condition(&mut attributes, CATEGORY, "books");

        assert_eq!(condition, "#category = :category");
        assert_eq!(attributes.names["#category"], "category");
        assert_eq!(
            attributes.values[":category"],
            AttributeValue::S("books".to_string())
        );
    }

    #[test]
    fn test_price_filter_keeps_exact_decimal() {
        let mut attributes = ExpressionAttributes::new();

        let filter = price_filter(&mut attributes, PriceCeiling::new(Decimal::new(1999, 2)));

        assert_eq!(filter, "#price < :max_price");
        assert_eq!(
            attributes.values[":max_price"],
            AttributeValue::N("19.99".to_string())
        );
    }

    #[test]
    fn test_update_expression_uses_placeholders() {
        let mut attributes = ExpressionAttributes::new();
        let product_update = ProductUpdate {
            name: "Kettle".to_string(),
            price: Decimal::new(2500, 2),
        };

        let update = name_and_price_update(&mut attributes, &product_update);
        let condition = product_exists(&mut attributes);

        assert_eq!(update, "SET #name = :name, #price = :price");
        assert_eq!(condition, "attribute_exists(#product_id)");
        assert_eq!(attributes.names.len(), 3);
        assert_eq!(
            attributes.values[":price"],
            AttributeValue::N("25.00".to_string())
        );
    }

    #[test]
    fn test_empty_maps_are_omitted() {
        let attributes = ExpressionAttributes::new();

        assert!(attributes.names().is_none());
        assert!(attributes.values().is_none());
    }
}
