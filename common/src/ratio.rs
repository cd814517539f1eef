//! [`Ratio`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fraction in the `[0.0, 1.0]` range.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Ratio(Decimal);

impl Ratio {
    /// [`Ratio`] of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Ratio`] by checking the provided value is not less
    /// than `0` and not greater than `1`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Decimal::ONE).then_some(Self(val))
    }

    /// Returns the value of this [`Ratio`].
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns the complement of this [`Ratio`]: `1 - value`.
    #[must_use]
    pub fn complement(self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl FromStr for Ratio {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid ratio value")
    }
}

impl TryFrom<Decimal> for Ratio {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("invalid ratio value")
    }
}

impl From<Ratio> for Decimal {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Ratio;

    #[test]
    fn accepts_zero_to_one_only() {
        assert!(Ratio::new(Decimal::ZERO).is_some());
        assert!(Ratio::new(Decimal::ONE).is_some());
        assert!(Ratio::new(Decimal::new(5, 1)).is_some());
        assert!(Ratio::new(Decimal::new(11, 1)).is_none());
        assert!(Ratio::new(Decimal::new(-1, 1)).is_none());
    }

    #[test]
    fn complement() {
        let quarter = Ratio::from_str("0.25").unwrap();
        assert_eq!(quarter.complement(), Decimal::new(75, 2));
        assert_eq!(Ratio::ZERO.complement(), Decimal::ONE);
    }
}
