// src/services/mod.rs

//! Business operations, one component per concern. Each service owns the
//! connection pool and the SQL for its tables; handlers stay free of queries.

pub mod catalog;
pub mod checkout;
pub mod report;

pub use catalog::{CategoryService, ProductService};
pub use checkout::CheckoutService;
pub use report::ReportService;
