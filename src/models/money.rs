use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Amount of money held as whole cents so that cart totals stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("Amount must be a finite number, got {0}")]
    NotFinite(f64),

    #[error("Amount cannot be negative, got {0}")]
    Negative(f64),

    #[error("Amount {0} is too large")]
    TooLarge(f64),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Converts a dollar amount, rounding to the nearest cent.
    pub fn from_dollars(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NotFinite(amount));
        }
        if amount < 0.0 {
            return Err(MoneyError::Negative(amount));
        }

        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(MoneyError::TooLarge(amount));
        }

        Ok(Money(cents as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Scales by `percent` / 100, rounding half up to the nearest cent.
    pub fn scale_percent(self, percent: u64) -> Self {
        Money(self.0.saturating_mul(percent).saturating_add(50) / 100)
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
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}$", self.0 / 100, self.0 % 100)
    }
}

// Receipts expose dollars, not cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}
