// src/models/mod.rs

//! Data structures representing store entities and request/response bodies.

pub mod category;
pub mod checkout;
pub mod product;
pub mod report;
pub mod transaction;

// Re-export the model structs for convenient access
pub use category::{Category, CategoryInput};
pub use checkout::{CheckoutItem, CheckoutRequest};
pub use product::{Product, ProductInput, ProductUpdate};
pub use report::{BestSellingProduct, SalesReport};
pub use transaction::{Transaction, TransactionDetail};
