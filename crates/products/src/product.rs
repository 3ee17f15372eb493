use core::str::FromStr;
use serde::{Deserialize, Serialize};

use walletbook_core::{Amount, Currency, Entity, LedgerError, LedgerResult, ProductId};

use crate::price_list::PriceList;

/// Product category. Drives the tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Food,
    Tech,
    Alcohol,
    Other,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Food,
        ProductType::Tech,
        ProductType::Alcohol,
        ProductType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Food => "food",
            ProductType::Tech => "tech",
            ProductType::Alcohol => "alcohol",
            ProductType::Other => "other",
        }
    }

    /// Tax rate (TVA) applied to this category.
    pub fn tax_rate(self) -> Amount {
        match self {
            ProductType::Alcohol => Amount::new(20, 2),
            ProductType::Food | ProductType::Tech | ProductType::Other => Amount::new(10, 2),
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LedgerError::invalid_product_type(s))
    }
}

/// A catalogue item priced in one or more currencies.
///
/// The tax rate is not stored; it is derived from `product_type` on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    prices: PriceList,
    #[serde(rename = "type")]
    product_type: ProductType,
}

impl Product {
    pub fn new(name: impl Into<String>, prices: PriceList, product_type: ProductType) -> Self {
        Self::with_id(ProductId::new(), name, prices, product_type)
    }

    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        prices: PriceList,
        product_type: ProductType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            prices,
            product_type,
        }
    }

    /// Build from a textual type name; unknown types are rejected.
    pub fn from_codes(
        name: impl Into<String>,
        prices: PriceList,
        type_name: &str,
    ) -> LedgerResult<Self> {
        Ok(Self::new(name, prices, type_name.parse()?))
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    pub fn set_prices(&mut self, prices: PriceList) {
        self.prices = prices;
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn set_type(&mut self, product_type: ProductType) {
        self.product_type = product_type;
    }

    pub fn set_type_name(&mut self, type_name: &str) -> LedgerResult<()> {
        self.product_type = type_name.parse()?;
        Ok(())
    }

    pub fn tax_rate(&self) -> Amount {
        self.product_type.tax_rate()
    }

    /// Alias of [`Product::tax_rate`] under the name billing code uses.
    pub fn tva(&self) -> Amount {
        self.tax_rate()
    }

    /// Currencies this product is priced in, in insertion order.
    pub fn list_currencies(&self) -> Vec<Currency> {
        self.prices.currencies()
    }

    pub fn price(&self, currency: Currency) -> LedgerResult<Amount> {
        self.prices
            .get(currency)
            .ok_or_else(|| LedgerError::invalid_currency(currency.code()))
    }

    /// Like [`Product::price`] but from an ISO code.
    pub fn price_for_code(&self, code: &str) -> LedgerResult<Amount> {
        self.price(code.parse()?)
    }

    /// Price including tax, `price * (1 + tax_rate)`.
    pub fn gross_price(&self, currency: Currency) -> LedgerResult<Amount> {
        let price = self.price(currency)?;
        price
            .checked_mul(Amount::ONE + self.tax_rate())
            .ok_or_else(|| LedgerError::invalid_amount(price))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
