//! Money value object: a non-negative decimal amount in a currency.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Supported ISO currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
        }
    }

    /// Symbol used by the pt-BR number format.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "US$",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "USD" => Ok(Currency::Usd),
            other => Err(DomainError::validation(format!(
                "unsupported currency '{other}' (expected BRL or USD)"
            ))),
        }
    }
}

/// Immutable amount + currency.
///
/// Every operation returns a new `Money`; the amount is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.amount, raw.currency)
    }
}

impl ValueObject for Money {}

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(Self { amount, currency })
    }

    /// Shorthand for an amount in reais.
    pub fn brl(amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, Currency::Brl)
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of two amounts in the same currency.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(
                self.currency,
                other.currency,
            ));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(overflow)?;
        Money::new(amount, self.currency)
    }

    /// Scale by a non-negative factor.
    pub fn multiply(&self, factor: Decimal) -> DomainResult<Money> {
        if factor < Decimal::ZERO {
            return Err(DomainError::validation("factor cannot be negative"));
        }
        let amount = self.amount.checked_mul(factor).ok_or_else(overflow)?;
        Money::new(amount, self.currency)
    }

    /// Split evenly into `parts` (per-unit and installment values).
    pub fn divide(&self, parts: u32) -> DomainResult<Money> {
        if parts == 0 {
            return Err(DomainError::validation("cannot divide into zero parts"));
        }
        let amount = self
            .amount
            .checked_div(Decimal::from(parts))
            .ok_or_else(overflow)?;
        Money::new(amount, self.currency)
    }

    /// Reduce by `percentage` percent, `percentage` in `[0, 100]`.
    pub fn apply_discount(&self, percentage: Decimal) -> DomainResult<Money> {
        ensure_percentage(percentage)?;
        let discount = self.percentage_of(percentage)?;
        Money::new(self.amount - discount.amount, self.currency)
    }

    /// `percentage` percent of this amount, `percentage` in `[0, 100]`.
    pub fn percentage_of(&self, percentage: Decimal) -> DomainResult<Money> {
        ensure_percentage(percentage)?;
        let amount = self
            .amount
            .checked_mul(percentage / HUNDRED)
            .ok_or_else(overflow)?;
        Money::new(amount, self.currency)
    }

    /// pt-BR rendering, e.g. `R$ 1.234,56`.
    pub fn format(&self) -> String {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let digits = rounded.to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (idx, ch) in int_part.chars().enumerate() {
            if idx > 0 && (int_part.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("{} {grouped},{frac_part}", self.currency.symbol())
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

/// Validate a discount percentage.
pub fn ensure_percentage(percentage: Decimal) -> DomainResult<()> {
    if percentage < Decimal::ZERO || percentage > HUNDRED {
        return Err(DomainError::validation(
            "discount percentage must be between 0 and 100",
        ));
    }
    Ok(())
}

fn overflow() -> DomainError {
    DomainError::validation("amount out of range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = Money::brl(dec(-1, 2)).unwrap_err();
        assert_eq!(err, DomainError::validation("amount cannot be negative"));
        assert!(Money::brl(Decimal::ZERO).is_ok());
    }

    #[test]
    fn apply_discount_reduces_amount() {
        let price = Money::brl(dec(297, 0)).unwrap();
        let discounted = price.apply_discount(dec(34, 0)).unwrap();
        assert_eq!(discounted.amount(), dec(19602, 2));
        assert_eq!(discounted.currency(), Currency::Brl);
        // Original is untouched.
        assert_eq!(price.amount(), dec(297, 0));
    }

    #[test]
    fn apply_discount_rejects_out_of_range_percentages() {
        let price = Money::brl(dec(100, 0)).unwrap();
        let negative = price.apply_discount(dec(-1, 0)).unwrap_err();
        assert!(negative.is_validation());
        let over = price.apply_discount(dec(1001, 1)).unwrap_err();
        assert!(over.is_validation());
        let free = price.apply_discount(HUNDRED).unwrap();
        assert_eq!(free.amount(), Decimal::ZERO);
    }

    #[test]
    fn add_requires_matching_currency() {
        let reais = Money::brl(dec(10, 0)).unwrap();
        let dollars = Money::new(dec(10, 0), Currency::Usd).unwrap();

        assert_eq!(reais.add(&reais).unwrap().amount(), dec(20, 0));
        assert_eq!(
            reais.add(&dollars).unwrap_err(),
            DomainError::CurrencyMismatch {
                left: Currency::Brl,
                right: Currency::Usd,
            }
        );
    }

    #[test]
    fn multiply_rejects_negative_factor() {
        let price = Money::brl(dec(50, 0)).unwrap();
        assert_eq!(price.multiply(dec(15, 1)).unwrap().amount(), dec(75, 0));
        assert!(price.multiply(dec(-1, 0)).is_err());
    }

    #[test]
    fn divide_rejects_zero_parts() {
        let price = Money::brl(dec(120, 0)).unwrap();
        assert_eq!(price.divide(12).unwrap().amount(), dec(10, 0));
        assert!(price.divide(0).is_err());
    }

    #[test]
    fn equality_is_by_value() {
        let a = Money::brl(dec(297, 0)).unwrap();
        let b = Money::brl(dec(29700, 2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Money::new(dec(297, 0), Currency::Usd).unwrap());
    }

    #[test]
    fn formats_in_pt_br() {
        assert_eq!(Money::brl(dec(297, 0)).unwrap().format(), "R$ 297,00");
        assert_eq!(Money::brl(dec(123456, 2)).unwrap().format(), "R$ 1.234,56");
        let million = Money::brl(dec(1234567, 0)).unwrap();
        assert_eq!(million.format(), "R$ 1.234.567,00");
        assert_eq!(Money::brl(dec(2005, 3)).unwrap().format(), "R$ 2,01");
        assert_eq!(
            Money::new(dec(10, 0), Currency::Usd).unwrap().to_string(),
            "US$ 10,00"
        );
    }

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::Brl);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn deserialization_validates_amount() {
        let ok: Money = serde_json::from_str(r#"{"amount":"19.90","currency":"BRL"}"#).unwrap();
        assert_eq!(ok.amount(), dec(1990, 2));

        let err = serde_json::from_str::<Money>(r#"{"amount":"-1","currency":"BRL"}"#);
        assert!(err.is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: discounting follows `a * (1 - p/100)` and never goes negative.
            #[test]
            fn discount_matches_formula(
                cents in 0i64..100_000_000,
                basis_points in 0i64..=10_000
            ) {
                let amount = Decimal::new(cents, 2);
                let pct = Decimal::new(basis_points, 2);
                let money = Money::brl(amount).unwrap();

                let discounted = money.apply_discount(pct).unwrap();
                prop_assert_eq!(discounted.amount(), amount * (Decimal::ONE - pct / HUNDRED));
                prop_assert!(discounted.amount() >= Decimal::ZERO);
                prop_assert!(discounted.amount() <= amount);
            }
        }
    }
}
