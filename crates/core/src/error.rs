//! Ledger error model.

use thiserror::Error;

use crate::amount::Amount;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a deterministic business failure. A failing operation never
/// leaves a partial effect behind, so callers can retry or report without
/// having to inspect entity state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A currency code outside the supported set, or a price lookup for a
    /// currency the product is not listed in.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// A negative amount was passed to a balance mutation, or a result would
    /// not fit the decimal range.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),

    /// A debit larger than the available balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },

    /// Two wallets, or a wallet and a product, do not share a currency.
    #[error("{0}")]
    CurrencyMismatch(String),

    /// A product type outside the supported set.
    #[error("Invalid product type: {0}")]
    InvalidProductType(String),

    /// A division over an empty set of recipients.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Fieldless discriminant of [`LedgerError`], for callers that only branch on
/// the kind of failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCurrency,
    InvalidAmount,
    InsufficientFunds,
    CurrencyMismatch,
    InvalidProductType,
    DivisionByZero,
}

impl LedgerError {
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency(code.into())
    }

    pub fn invalid_amount(amount: Amount) -> Self {
        Self::InvalidAmount(amount)
    }

    pub fn insufficient_funds(requested: Amount, available: Amount) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn currency_mismatch(msg: impl Into<String>) -> Self {
        Self::CurrencyMismatch(msg.into())
    }

    pub fn invalid_product_type(name: impl Into<String>) -> Self {
        Self::InvalidProductType(name.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCurrency(_) => ErrorKind::InvalidCurrency,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::CurrencyMismatch(_) => ErrorKind::CurrencyMismatch,
            Self::InvalidProductType(_) => ErrorKind::InvalidProductType,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
