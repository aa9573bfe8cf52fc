//! Money: a signed amount in minor currency units (cents).
//!
//! Prices are not validated; negative amounts are representable and flow
//! through arithmetic unchanged.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Amount in smallest currency unit (e.g., cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `from_major(99)` is `99.00`.
    pub const fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `self + rhs`, or `None` if the result leaves the `i64` range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `self × count`, saturating at the `i64` bounds.
    pub fn times(self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(count))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Accepts `99`, `99.5`, `99.00` and a leading `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_amount(s.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if digits.ends_with('.') {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_cents(19_800).to_string(), "198.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-125).to_string(), "-1.25");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn parses_common_forms() {
        assert_eq!("99".parse::<Money>().unwrap(), Money::from_major(99));
        assert_eq!("99.00".parse::<Money>().unwrap(), Money::from_cents(9_900));
        assert_eq!("99.5".parse::<Money>().unwrap(), Money::from_cents(9_950));
        assert_eq!("-1.25".parse::<Money>().unwrap(), Money::from_cents(-125));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", "-", "abc", "1.234", "1.", ".5", "1.x", "+3", "99999999999999999999"] {
            match input.parse::<Money>() {
                Err(DomainError::InvalidAmount(_)) => {}
                other => panic!("Expected InvalidAmount for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn times_multiplies_by_count() {
        assert_eq!(Money::from_cents(9_900).times(2), Money::from_cents(19_800));
        assert_eq!(Money::from_cents(9_900).times(0), Money::zero());
        assert_eq!(Money::from_cents(i64::MAX).times(2), Money::from_cents(i64::MAX));
    }

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(
            Money::from_cents(150).checked_add(Money::from_cents(-50)),
            Some(Money::from_cents(100))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_add(Money::from_cents(-1)), None);
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let empty: Vec<Money> = Vec::new();
        assert_eq!(empty.iter().sum::<Money>(), Money::zero());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: Display output parses back to the same amount.
            #[test]
            fn display_parses_back(cents in -10_000_000_000i64..10_000_000_000i64) {
                let money = Money::from_cents(cents);
                prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
            }

            /// Property: `times` agrees with repeated addition.
            #[test]
            fn times_matches_repeated_add(cents in -1_000_000i64..1_000_000i64, count in 0usize..50) {
                let money = Money::from_cents(cents);
                let added: Money = core::iter::repeat(money).take(count).sum();
                prop_assert_eq!(money.times(count), added);
            }
        }
    }
}
