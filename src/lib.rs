// src/lib.rs

//! kasir-pos: a small point-of-sale backend over PostgreSQL.
//!
//! The crate exposes an HTTP/JSON API for:
//! - catalog maintenance (categories and products, plain CRUD),
//! - checkout, which turns a list of line items into one atomically
//!   committed sale with stock decrements,
//! - sales reports (revenue, transaction count, best-selling product)
//!   for a single day or an inclusive date range.
//!
//! Modules mirror the request path: `web` (routes and handlers) calls
//! `services` (business operations and SQL), which works the `models`
//! against the pool built in `db`. `config`, `state` and `errors` carry
//! the ambient wiring.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
