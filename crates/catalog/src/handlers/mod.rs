pub mod error;
pub mod health;
pub mod inventory;
pub mod listing;
pub mod products;
pub mod reviews;

pub use error::AppError;
