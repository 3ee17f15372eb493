use serde::{Deserialize, Serialize};

use walletbook_core::{Amount, Currency, LedgerError, LedgerResult, ensure_amount};

/// Per-currency prices, kept in insertion order.
///
/// Each currency appears at most once. Re-inserting a currency replaces its
/// price without moving it. Prices are non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Currency, Amount)>", into = "Vec<(Currency, Amount)>")]
pub struct PriceList {
    entries: Vec<(Currency, Amount)>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the price for `currency`.
    pub fn insert(&mut self, currency: Currency, price: Amount) -> LedgerResult<()> {
        let price = ensure_amount(price)?;
        match self.entries.iter_mut().find(|(c, _)| *c == currency) {
            Some(entry) => entry.1 = price,
            None => self.entries.push((currency, price)),
        }
        Ok(())
    }

    /// Builder-style [`PriceList::insert`].
    pub fn with(mut self, currency: Currency, price: Amount) -> LedgerResult<Self> {
        self.insert(currency, price)?;
        Ok(self)
    }

    pub fn get(&self, currency: Currency) -> Option<Amount> {
        self.entries
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, price)| *price)
    }

    pub fn currencies(&self) -> Vec<Currency> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(Currency, Amount)>> for PriceList {
    type Error = LedgerError;

    fn try_from(entries: Vec<(Currency, Amount)>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .try_fold(PriceList::new(), |list, (currency, price)| list.with(currency, price))
    }
}

impl<const N: usize> TryFrom<[(Currency, Amount); N]> for PriceList {
    type Error = LedgerError;

    fn try_from(entries: [(Currency, Amount); N]) -> Result<Self, Self::Error> {
        Self::try_from(Vec::from(entries))
    }
}

/// Parse `(code, price)` pairs, e.g. from a catalogue feed.
impl TryFrom<&[(&str, Amount)]> for PriceList {
    type Error = LedgerError;

    fn try_from(entries: &[(&str, Amount)]) -> Result<Self, Self::Error> {
        entries.iter().try_fold(PriceList::new(), |list, (code, price)| {
            list.with(code.parse()?, *price)
        })
    }
}

impl From<PriceList> for Vec<(Currency, Amount)> {
    fn from(list: PriceList) -> Self {
        list.entries
    }
}
