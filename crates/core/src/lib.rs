//! Functional core of the catalog service.
//!
//! Domain types, repository traits and the listing pipeline (pagination
//! accumulator and enrichment fan-out). Nothing in here performs I/O on its
//! own; storage is reached only through the traits in [`storage`].

pub mod catalog;
pub mod http_mapping;
pub mod serde;
pub mod storage;
