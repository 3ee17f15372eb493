//! Wallets module.
//!
//! A wallet is a single currency-denominated balance. It owns every
//! single-wallet invariant (non-negative balance, non-negative amounts);
//! operations spanning several wallets live in `walletbook-parties`.

pub mod wallet;

pub use wallet::Wallet;
