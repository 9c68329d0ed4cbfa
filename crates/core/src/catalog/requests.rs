//! Request payloads and their validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_optional_decimal, deserialize_optional_json_decimal, deserialize_optional_string,
};
use crate::storage::PriceCeiling;

use super::{CatalogError, ListingCriteria, DEFAULT_NUM_PRODUCTS};

/// Query parameters of the product listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Exclusive price ceiling.
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub max_price: Option<Decimal>,
    /// Number of products to return (default: 30).
    #[serde(default)]
    pub num_products: Option<i64>,
    /// Restricts the listing to one category.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
}

impl ListProductsQuery {
    /// Validates the query and turns it into listing criteria.
    pub fn into_criteria(self) -> Result<ListingCriteria, CatalogError> {
        let limit = match self.num_products {
            None => DEFAULT_NUM_PRODUCTS,
            Some(n) if n > 0 => usize::try_from(n).map_err(|_| CatalogError::InvalidField {
                field: "num_products",
                reason: format!("{n} is too large"),
            })?,
            Some(_) => {
                return Err(CatalogError::InvalidField {
                    field: "num_products",
                    reason: "must be greater than zero".to_string(),
                })
            }
        };

        Ok(ListingCriteria {
            limit,
            category: self.category,
            max_price: self.max_price.map(PriceCeiling::new),
        })
    }
}

/// Body of `PUT /product/{product_id}`.
///
/// Both fields are optional at the type level so a missing field is
/// reported as a validation error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_json_decimal")]
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    /// Checks that both `name` and `price` are present.
    pub fn validate(self) -> Result<ProductUpdate, CatalogError> {
        let name = self.name.ok_or(CatalogError::MissingField("name"))?;
        let price = self.price.ok_or(CatalogError::MissingField("price"))?;

        Ok(ProductUpdate { name, price })
    }
}

/// A validated product update; also the response body of a successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
}
