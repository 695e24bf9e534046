//! Salary amount model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A non-negative amount in whole currency units.
///
/// Zero means "no input yet". The value never exceeds
/// [`SalaryAmount::MAX_DIGITS`] decimal digits; the ceiling is checked when
/// an amount is constructed, never inside the arithmetic.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryAmount;
///
/// let amount = SalaryAmount::new(100_000).unwrap();
/// assert_eq!(amount.value(), 100_000);
/// assert!(SalaryAmount::new(1_000_000_000_000_000).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct SalaryAmount(u64);

impl SalaryAmount {
    /// The maximum number of decimal digits an amount may have.
    pub const MAX_DIGITS: usize = 14;

    /// The empty amount.
    pub const ZERO: SalaryAmount = SalaryAmount(0);

    /// The largest representable amount (fourteen nines).
    pub const MAX: SalaryAmount = SalaryAmount(99_999_999_999_999);

    /// Creates an amount, rejecting values above [`SalaryAmount::MAX`].
    pub fn new(value: u64) -> EngineResult<Self> {
        if value > Self::MAX.0 {
            return Err(EngineError::rejected(
                value.to_string(),
                format!("amount exceeds {} digits", Self::MAX_DIGITS),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw integer value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns true when no amount has been entered.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the amount as a [`Decimal`] for monetary arithmetic.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl TryFrom<u64> for SalaryAmount {
    type Error = EngineError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SalaryAmount> for u64 {
    fn from(amount: SalaryAmount) -> Self {
        amount.0
    }
}
