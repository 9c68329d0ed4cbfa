use rust_decimal::Decimal;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::serde::deserialize_optional_json_decimal;

/// Attributes a record carries beyond its typed fields.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Empty when the stored item has no ID.
    #[serde(default)]
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_json_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Product {
    /// Creates a product with the given ID and no other attributes.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            category: None,
            name: None,
            price: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets an untyped attribute.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns true if the product carries a usable ID.
    pub fn has_id(&self) -> bool {
        !self.product_id.is_empty()
    }
}

/// A review of a product. Reviews are partitioned by `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub product_id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Review {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Stock information for a product, at most one per `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl InventoryRecord {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Outcome of one enrichment lookup.
///
/// Serializes as the loaded value itself, `{}` when there was nothing to
/// load, or `{"error": "..."}` when the lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment<T> {
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Enrichment<T> {
    /// Returns the loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Enrichment::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Enrichment::Failed(_))
    }
}

impl<T: Serialize> Serialize for Enrichment<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Enrichment::Loaded(value) => value.serialize(serializer),
            Enrichment::Empty => serializer.serialize_map(Some(0))?.end(),
            Enrichment::Failed(error) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// A product together with its inventory and reviews.
///
/// Only ever built for responses. Both fields stay `None` (and are left out
/// of the JSON) for products that were not enriched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Enrichment<InventoryRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Enrichment<Vec<Review>>>,
}

impl EnrichedProduct {
    /// Wraps a product without enriching it.
    pub fn unenriched(product: Product) -> Self {
        Self {
            product,
            inventory: None,
            reviews: None,
        }
    }
}
