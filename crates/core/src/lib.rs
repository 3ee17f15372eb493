//! `walletbook-core` — shared building blocks for the ledger crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, the currency set, exact monetary amounts and typed ids.

pub mod amount;
pub mod currency;
pub mod entity;
pub mod error;
pub mod id;

pub use amount::{Amount, ensure_amount};
pub use currency::Currency;
pub use entity::Entity;
pub use error::{ErrorKind, LedgerError, LedgerResult};
pub use id::{PersonId, ProductId};
