use serde::{Deserialize, Serialize};

use walletbook_core::{Amount, Currency, Entity, ErrorKind, LedgerError, LedgerResult, PersonId};
use walletbook_products::Product;
use walletbook_wallets::Wallet;

const TRANSFER_MISMATCH: &str = "Can't give money with different currencies";
const DIVIDE_MISMATCH: &str = "Can't divide money with different currencies";
const PURCHASE_MISMATCH: &str = "Can't buy product with this wallet currency";

/// A wallet owner.
///
/// The wallet is owned by value. Operations that touch another person's wallet
/// take it by `&mut`, so a person can never be both sides of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    wallet: Wallet,
}

impl Person {
    /// New person with an empty wallet in `currency`.
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self::with_id(PersonId::new(), name, currency)
    }

    pub fn with_id(id: PersonId, name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id,
            name: name.into(),
            wallet: Wallet::new(currency),
        }
    }

    pub fn from_code(name: impl Into<String>, currency_code: &str) -> LedgerResult<Self> {
        Ok(Self::new(name, currency_code.parse()?))
    }

    pub fn id_typed(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Replace the wallet. The previous wallet and its balance are dropped.
    pub fn set_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }

    pub fn has_fund(&self) -> bool {
        self.wallet.has_fund()
    }

    /// Move `amount` from this wallet to `recipient`'s.
    ///
    /// Both wallets must share a currency, this wallet must cover the amount
    /// and the recipient must be able to take it. Nothing changes unless every
    /// check passes.
    #[tracing::instrument(
        skip(self, recipient),
        fields(person_id = %self.id, recipient_id = %recipient.id)
    )]
    pub fn transfer_fund(&mut self, amount: Amount, recipient: &mut Person) -> LedgerResult<()> {
        if recipient.wallet.currency() != self.wallet.currency() {
            return Err(rejected(LedgerError::currency_mismatch(TRANSFER_MISMATCH)));
        }
        self.wallet.ensure_can_remove(amount).map_err(rejected)?;
        recipient.wallet.ensure_can_add(amount).map_err(rejected)?;

        self.wallet.remove_fund(amount)?;
        recipient.wallet.add_fund(amount)?;
        tracing::info!(currency = %self.wallet.currency(), "funds transferred");
        Ok(())
    }

    /// Split the whole balance evenly across `recipients`, leaving this wallet
    /// at zero.
    ///
    /// Fails with `DivisionByZero` on an empty list, with `CurrencyMismatch`
    /// if any recipient holds another currency and with `InvalidAmount` if a
    /// share does not fit a recipient's balance. Every recipient is checked
    /// before any balance moves.
    ///
    /// Shares are rounded to the decimal precision, so a balance that does not
    /// divide exactly leaves a sub-precision remainder undistributed.
    #[tracing::instrument(
        skip(self, recipients),
        fields(person_id = %self.id, recipients = recipients.len())
    )]
    pub fn divide_wallet(&mut self, recipients: &mut [&mut Person]) -> LedgerResult<()> {
        if recipients.is_empty() {
            return Err(rejected(LedgerError::DivisionByZero));
        }
        let currency = self.wallet.currency();
        if recipients.iter().any(|r| r.wallet.currency() != currency) {
            return Err(rejected(LedgerError::currency_mismatch(DIVIDE_MISMATCH)));
        }

        let total = self.wallet.balance();
        let share = total
            .checked_div(Amount::from(recipients.len()))
            .ok_or_else(|| rejected(LedgerError::DivisionByZero))?;
        for recipient in recipients.iter() {
            recipient.wallet.ensure_can_add(share).map_err(rejected)?;
        }

        for recipient in recipients.iter_mut() {
            recipient.wallet.add_fund(share)?;
        }
        self.wallet.remove_fund(total)?;
        tracing::info!(%currency, %total, %share, "wallet divided");
        Ok(())
    }

    /// Pay the product's listed price in this wallet's currency. Tax is not
    /// added; see [`Person::buy_product_with_tax`].
    #[tracing::instrument(
        skip(self, product),
        fields(person_id = %self.id, product_id = %product.id_typed())
    )]
    pub fn buy_product(&mut self, product: &Product) -> LedgerResult<()> {
        let price = self.listed_price(product)?;
        self.charge(price)
    }

    /// Pay the product's price including its tax rate.
    #[tracing::instrument(
        skip(self, product),
        fields(person_id = %self.id, product_id = %product.id_typed())
    )]
    pub fn buy_product_with_tax(&mut self, product: &Product) -> LedgerResult<()> {
        let price = product
            .gross_price(self.wallet.currency())
            .map_err(purchase_error)?;
        self.charge(price)
    }

    fn listed_price(&self, product: &Product) -> LedgerResult<Amount> {
        product.price(self.wallet.currency()).map_err(purchase_error)
    }

    fn charge(&mut self, amount: Amount) -> LedgerResult<()> {
        self.wallet.remove_fund(amount).map_err(rejected)?;
        tracing::info!(currency = %self.wallet.currency(), %amount, "product bought");
        Ok(())
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product not listed in the wallet's currency is a purchase mismatch.
fn purchase_error(err: LedgerError) -> LedgerError {
    match err.kind() {
        ErrorKind::InvalidCurrency => rejected(LedgerError::currency_mismatch(PURCHASE_MISMATCH)),
        _ => rejected(err),
    }
}

fn rejected(err: LedgerError) -> LedgerError {
    tracing::warn!(kind = ?err.kind(), error = %err, "operation rejected");
    err
}
