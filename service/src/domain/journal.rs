//! [`Journal`] definitions.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use common::Money;
use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

/// Printed journal subscribers may subscribe to.
///
/// Immutable once registered. Identity and equality are by [`Issn`] alone.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Journal {
    /// [`Name`] of this [`Journal`].
    pub name: Name,

    /// Unique [`Issn`] of this [`Journal`].
    pub issn: Issn,

    /// Publication [`Frequency`] of this [`Journal`].
    pub frequency: Frequency,

    /// Price of a single issue of this [`Journal`], non-negative.
    pub issue_price: Money,
}

impl Journal {
    /// Creates a new [`Journal`] if the provided `issue_price` is
    /// non-negative.
    #[must_use]
    pub fn new(
        name: Name,
        issn: Issn,
        frequency: Frequency,
        issue_price: Money,
    ) -> Option<Self> {
        (!issue_price.is_negative()).then_some(Self {
            name,
            issn,
            frequency,
            issue_price,
        })
    }
}

impl Eq for Journal {}
impl PartialEq for Journal {
    fn eq(&self, other: &Self) -> bool {
        self.issn == other.issn
    }
}

impl Hash for Journal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.issn.hash(state);
    }
}

/// Name of a [`Journal`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty()
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// International Standard Serial Number: the unique key of a [`Journal`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct Issn(String);

impl Issn {
    /// Creates a new [`Issn`] if the given `issn` is valid.
    #[must_use]
    pub fn new(issn: impl Into<String>) -> Option<Self> {
        let issn = issn.into();
        Self::check(&issn).then_some(Self(issn))
    }

    /// Checks whether the given `issn` is a valid [`Issn`].
    fn check(issn: impl AsRef<str>) -> bool {
        let issn = issn.as_ref();
        issn.trim() == issn && !issn.is_empty()
    }
}

impl FromStr for Issn {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Issn`")
    }
}

impl TryFrom<String> for Issn {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Issn`")
    }
}

impl From<Issn> for String {
    fn from(issn: Issn) -> Self {
        issn.0
    }
}

/// Number of issues a [`Journal`] publishes per year, always positive.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct Frequency(u16);

impl Frequency {
    /// Creates a new [`Frequency`] if the given `issues_per_year` is
    /// positive.
    #[must_use]
    pub fn new(issues_per_year: u16) -> Option<Self> {
        (issues_per_year > 0).then_some(Self(issues_per_year))
    }

    /// Returns the issues-per-year count of this [`Frequency`].
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for Frequency {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Frequency`")
    }
}

impl TryFrom<u16> for Frequency {
    type Error = &'static str;

    fn try_from(issues_per_year: u16) -> Result<Self, Self::Error> {
        Self::new(issues_per_year).ok_or("invalid `Frequency`")
    }
}

impl From<Frequency> for u16 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use super::{Frequency, Issn, Journal, Name};

    fn journal(issn: &str, price: &str) -> Journal {
        Journal::new(
            Name::new("ACM Computing").unwrap(),
            Issn::new(issn).unwrap(),
            Frequency::new(12).unwrap(),
            Money::from_str(price).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn equality_is_by_issn_alone() {
        let a = journal("1234-5678", "10.00");
        let mut b = journal("1234-5678", "99.00");
        b.name = Name::new("Different").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, journal("8765-4321", "10.00"));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(Name::new("").is_none());
        assert!(Name::new("  padded  ").is_none());
        assert!(Issn::new("").is_none());
        assert!(Frequency::new(0).is_none());
    }

    #[test]
    fn rejects_negative_issue_price() {
        assert!(Journal::new(
            Name::new("J").unwrap(),
            Issn::new("0000-0000").unwrap(),
            Frequency::new(4).unwrap(),
            Money::from_str("-1").unwrap(),
        )
        .is_none());
    }
}
