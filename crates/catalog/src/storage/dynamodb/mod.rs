//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! traits using `aws-sdk-dynamodb`, over three tables: products (key
//! `product_id`, with a `category` index), reviews (partition `product_id`)
//! and inventory (key `product_id`).

mod conversions;
mod error;
mod expressions;
mod repository;

pub use repository::{DynamoDbRepository, TableNames};
