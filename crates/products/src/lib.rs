//! Products domain module.
//!
//! This crate contains the catalogue side of the ledger: products priced in
//! one or more currencies, their category and the tax rate derived from it.
//! Pure domain logic only (no IO, no storage).

pub mod price_list;
pub mod product;

pub use price_list::PriceList;
pub use product::{Product, ProductType};
