//! Monetary amounts.
//!
//! Amounts are exact decimals in the major unit of their currency, so sums and
//! differences never drift. The only rule shared by every balance mutation and
//! price is that an amount is not negative.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// Money in the major unit of a currency (e.g. `4.50` dollars).
pub type Amount = Decimal;

/// Reject negative amounts.
pub fn ensure_amount(amount: Amount) -> LedgerResult<Amount> {
    if amount < Amount::ZERO {
        Err(LedgerError::invalid_amount(amount))
    } else {
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_is_a_valid_amount() {
        assert_eq!(ensure_amount(Amount::ZERO), Ok(Amount::ZERO));
        assert_eq!(ensure_amount(-Amount::ZERO), Ok(Amount::ZERO));
    }

    #[test]
    fn smallest_negative_amount_is_rejected() {
        assert_eq!(
            ensure_amount(dec!(-0.01)),
            Err(LedgerError::InvalidAmount(dec!(-0.01)))
        );
    }

    proptest! {
        #[test]
        fn negative_amounts_are_rejected(cents in i64::MIN / 2..-1) {
            let amount = Amount::new(cents, 2);
            prop_assert_eq!(ensure_amount(amount), Err(LedgerError::InvalidAmount(amount)));
        }

        #[test]
        fn non_negative_amounts_pass_through(cents in 0i64..i64::MAX / 2) {
            let amount = Amount::new(cents, 2);
            prop_assert_eq!(ensure_amount(amount), Ok(amount));
        }
    }
}
