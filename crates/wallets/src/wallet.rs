use serde::{Deserialize, Serialize};

use walletbook_core::{Amount, Currency, LedgerError, LedgerResult, ensure_amount};

/// A non-negative balance in one currency.
///
/// Every mutation validates before it touches state, so a failing call leaves
/// the wallet exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WalletRecord")]
pub struct Wallet {
    balance: Amount,
    currency: Currency,
}

/// Unvalidated wire shape; deserialization goes through the same balance rule
/// as `set_balance`.
#[derive(Deserialize)]
struct WalletRecord {
    balance: Amount,
    currency: Currency,
}

impl TryFrom<WalletRecord> for Wallet {
    type Error = LedgerError;

    fn try_from(record: WalletRecord) -> Result<Self, Self::Error> {
        let mut wallet = Wallet::new(record.currency);
        wallet.set_balance(record.balance)?;
        Ok(wallet)
    }
}

impl Wallet {
    /// Empty wallet in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            balance: Amount::ZERO,
            currency,
        }
    }

    /// Empty wallet from an ISO currency code.
    pub fn from_code(code: &str) -> LedgerResult<Self> {
        Ok(Self::new(code.parse()?))
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Strictly positive balance.
    pub fn has_fund(&self) -> bool {
        self.balance > Amount::ZERO
    }

    /// Replace the currency. The balance is kept as-is, no conversion happens.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn set_currency_code(&mut self, code: &str) -> LedgerResult<()> {
        self.currency = code.parse()?;
        Ok(())
    }

    /// Replace the balance (no addition).
    pub fn set_balance(&mut self, amount: Amount) -> LedgerResult<()> {
        self.balance = ensure_amount(amount)?;
        Ok(())
    }

    /// Validation half of [`Wallet::add_fund`]; returns the balance the credit
    /// would produce.
    pub fn ensure_can_add(&self, amount: Amount) -> LedgerResult<Amount> {
        let amount = ensure_amount(amount)?;
        self.balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::invalid_amount(amount))
    }

    pub fn add_fund(&mut self, amount: Amount) -> LedgerResult<()> {
        self.balance = self.ensure_can_add(amount)?;
        tracing::debug!(
            currency = %self.currency,
            amount = %amount,
            balance = %self.balance,
            "funds added"
        );
        Ok(())
    }

    /// Validation half of [`Wallet::remove_fund`].
    pub fn ensure_can_remove(&self, amount: Amount) -> LedgerResult<Amount> {
        let amount = ensure_amount(amount)?;
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(amount, self.balance));
        }
        Ok(amount)
    }

    pub fn remove_fund(&mut self, amount: Amount) -> LedgerResult<()> {
        let amount = self.ensure_can_remove(amount)?;
        self.balance -= amount;
        tracing::debug!(
            currency = %self.currency,
            amount = %amount,
            balance = %self.balance,
            "funds removed"
        );
        Ok(())
    }
}
