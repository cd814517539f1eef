//! Whole-month Gregorian calendar definitions.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::Date;

/// Month of a calendar year: `1` (January) to `12` (December).
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub struct Month(u8);

impl Month {
    /// January.
    pub const JANUARY: Self = Self(1);

    /// December.
    pub const DECEMBER: Self = Self(12);

    /// Creates a new [`Month`] if the given `number` is in the `1..=12`
    /// range.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Returns the `1`-based number of this [`Month`].
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the [`Month`] preceding this one, wrapping January to
    /// December.
    #[must_use]
    pub fn preceding(self) -> Self {
        if self.0 == 1 {
            Self(12)
        } else {
            Self(self.0 - 1)
        }
    }

    /// Returns the [`Month`] following this one, wrapping December to
    /// January.
    #[must_use]
    pub fn following(self) -> Self {
        if self.0 == 12 {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl FromStr for Month {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid `Month`")
    }
}

impl TryFrom<u8> for Month {
    type Error = &'static str;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or("invalid `Month`")
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

/// Positive calendar year.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(into = "i32", try_from = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new [`Year`] if the given `number` is positive.
    #[must_use]
    pub fn new(number: i32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Returns the number of this [`Year`].
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns the [`Year`] following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl FromStr for Year {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid `Year`")
    }
}

impl TryFrom<i32> for Year {
    type Error = &'static str;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or("invalid `Year`")
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// Returns the first calendar day of the given [`Month`] in the given
/// [`Year`].
#[expect(clippy::missing_panics_doc, reason = "infallible")]
#[must_use]
pub fn first_day(month: Month, year: Year) -> Date {
    let month = time::Month::try_from(month.number()).expect("1..=12 range");
    Date::from_calendar_date(year.get(), month, 1)
        .expect("day 1 exists in every month")
}

/// Returns the last calendar day of the given [`Month`] in the given
/// [`Year`], leap years included.
#[expect(clippy::missing_panics_doc, reason = "infallible")]
#[must_use]
pub fn last_day(month: Month, year: Year) -> Date {
    let next_year = if month == Month::DECEMBER {
        year.next()
    } else {
        year
    };
    first_day(month.following(), next_year)
        .previous_day()
        .expect("not the minimum representable date")
}

#[cfg(test)]
mod spec {
    use super::{first_day, last_day, Month, Year};

    fn month(n: u8) -> Month {
        Month::new(n).unwrap()
    }

    fn year(n: i32) -> Year {
        Year::new(n).unwrap()
    }

    #[test]
    fn month_accepts_1_through_12_only() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        for n in 1..=12 {
            assert_eq!(Month::new(n).unwrap().number(), n);
        }
    }

    #[test]
    fn month_preceding_wraps_january() {
        assert_eq!(month(1).preceding(), month(12));
        assert_eq!(month(7).preceding(), month(6));
    }

    #[test]
    fn month_following_wraps_december() {
        assert_eq!(month(12).following(), month(1));
        assert_eq!(month(3).following(), month(4));
    }

    #[test]
    fn year_must_be_positive() {
        assert!(Year::new(0).is_none());
        assert!(Year::new(-5).is_none());
        assert_eq!(Year::new(2025).unwrap().get(), 2025);
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(first_day(month(2), year(2025)).to_string(), "2025-02-01");
        assert_eq!(last_day(month(2), year(2025)).to_string(), "2025-02-28");
        assert_eq!(last_day(month(2), year(2024)).to_string(), "2024-02-29");
        assert_eq!(last_day(month(12), year(2025)).to_string(), "2025-12-31");
    }

    #[test]
    fn from_str() {
        assert_eq!("7".parse::<Month>().unwrap(), month(7));
        assert!("13".parse::<Month>().is_err());
        assert_eq!("2025".parse::<Year>().unwrap(), year(2025));
        assert!("-1".parse::<Year>().is_err());
    }
}
