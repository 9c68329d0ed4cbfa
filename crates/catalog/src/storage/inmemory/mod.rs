//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in maps wrapped in `Arc<RwLock<_>>`. This is useful
//! for development and testing scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_page_size(10);
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
