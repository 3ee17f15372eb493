//! Parties domain module.
//!
//! A person owns exactly one wallet and is the entry point for every operation
//! that touches more than one balance: transfers, even splits and purchases.
//! Pure domain logic only (no IO, no storage).

pub mod person;

pub use person::Person;
