//! [`Subscriber`] definitions.

use std::str::FromStr;

use common::{define_kind, Month};
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Party receiving journal issues.
///
/// A closed set of variants, each carrying its own billing details behind
/// the single [`billing_information()`] capability. Immutable after
/// creation; the registry treats the (name, address) [`Key`] as identity.
///
/// [`billing_information()`]: Subscriber::billing_information
#[derive(Clone, Debug, Deserialize, From, Serialize)]
pub enum Subscriber {
    #[doc(hidden)]
    Individual(Individual),
    #[doc(hidden)]
    Corporation(Corporation),
}

impl Subscriber {
    /// Returns [`Kind`] of this [`Subscriber`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Individual(_) => Kind::Individual,
            Self::Corporation(_) => Kind::Corporation,
        }
    }

    /// Returns [`Name`] of this [`Subscriber`].
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Self::Individual(s) => &s.name,
            Self::Corporation(s) => &s.name,
        }
    }

    /// Returns [`Address`] of this [`Subscriber`].
    #[must_use]
    pub fn address(&self) -> &Address {
        match self {
            Self::Individual(s) => &s.address,
            Self::Corporation(s) => &s.address,
        }
    }

    /// Returns the identity [`Key`] of this [`Subscriber`].
    #[must_use]
    pub fn key(&self) -> Key {
        Key {
            name: self.name().clone(),
            address: self.address().clone(),
        }
    }

    /// Renders the billing details of this [`Subscriber`] as a
    /// human-readable line.
    #[must_use]
    pub fn billing_information(&self) -> String {
        match self {
            Self::Individual(s) => format!(
                "Credit Card: {}, Expires: {}/{}",
                s.card_number, s.expire_month, s.expire_year,
            ),
            Self::Corporation(s) => format!(
                "Bank: {} (Code: {}), Account: {}, \
                 Last Payment Reference Date: {}/{}/{}",
                s.bank_name,
                s.bank_code,
                s.account_number,
                s.issue_day,
                s.issue_month,
                s.issue_year,
            ),
        }
    }
}

define_kind! {
    #[doc = "Kind of a [`Subscriber`]."]
    enum Kind {
        #[doc = "[`Individual`] [`Subscriber`] paying by credit card."]
        Individual = 1,

        #[doc = "[`Corporation`] [`Subscriber`] paying by bank transfer."]
        Corporation = 2,
    }
}

/// De-facto identity of a [`Subscriber`]: its (name, address) pair.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[display("{name} at {address}")]
pub struct Key {
    /// [`Name`] of the [`Subscriber`].
    pub name: Name,

    /// [`Address`] of the [`Subscriber`].
    pub address: Address,
}

/// Private person subscribing to journals, billed by credit card.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Individual {
    /// [`Name`] of this [`Individual`].
    pub name: Name,

    /// [`Address`] of this [`Individual`].
    pub address: Address,

    /// [`CardNumber`] of the credit card payments are charged to.
    pub card_number: CardNumber,

    /// [`Month`] the credit card expires in.
    pub expire_month: Month,

    /// [`FourDigitYear`] the credit card expires in.
    pub expire_year: FourDigitYear,

    /// [`Ccv`] of the credit card.
    pub ccv: Ccv,
}

/// Company subscribing to journals, billed by bank transfer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Corporation {
    /// [`Name`] of this [`Corporation`].
    pub name: Name,

    /// [`Address`] of this [`Corporation`].
    pub address: Address,

    /// [`BankCode`] of the bank the account is held at.
    pub bank_code: BankCode,

    /// [`BankName`] of the bank the account is held at.
    pub bank_name: BankName,

    /// Day of the last payment reference date, `1..=31`.
    pub issue_day: IssueDay,

    /// [`Month`] of the last payment reference date.
    pub issue_month: Month,

    /// [`FourDigitYear`] of the last payment reference date.
    pub issue_year: FourDigitYear,

    /// [`AccountNumber`] of the bank account.
    pub account_number: AccountNumber,
}

/// Name of a [`Subscriber`].
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

/// Postal address of a [`Subscriber`].
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
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty()
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl TryFrom<String> for Address {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// Credit card number of an [`Individual`].
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
pub struct CardNumber(String);

impl CardNumber {
    /// Creates a new [`CardNumber`] if the given `number` is not empty.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        let valid = number.trim() == number && !number.is_empty();
        valid.then_some(Self(number))
    }
}

impl FromStr for CardNumber {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `CardNumber`")
    }
}

impl TryFrom<String> for CardNumber {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `CardNumber`")
    }
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

/// Four-digit calendar year (`1000..=9999`) used in billing details.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct FourDigitYear(u16);

impl FourDigitYear {
    /// Creates a new [`FourDigitYear`] if the given `year` has four digits.
    #[must_use]
    pub fn new(year: u16) -> Option<Self> {
        (1000..=9999).contains(&year).then_some(Self(year))
    }

    /// Returns the number of this [`FourDigitYear`].
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for FourDigitYear {
    type Error = &'static str;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::new(year).ok_or("invalid `FourDigitYear`")
    }
}

impl From<FourDigitYear> for u16 {
    fn from(year: FourDigitYear) -> Self {
        year.0
    }
}

/// Card verification value of an [`Individual`]'s credit card, 3 or 4
/// digits (`100..=9999`).
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u16", try_from = "u16")]
pub struct Ccv(u16);

impl Ccv {
    /// Creates a new [`Ccv`] if the given `ccv` is in the valid range.
    #[must_use]
    pub fn new(ccv: u16) -> Option<Self> {
        (100..=9999).contains(&ccv).then_some(Self(ccv))
    }

    /// Returns the number of this [`Ccv`].
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Ccv {
    type Error = &'static str;

    fn try_from(ccv: u16) -> Result<Self, Self::Error> {
        Self::new(ccv).ok_or("invalid `Ccv`")
    }
}

impl From<Ccv> for u16 {
    fn from(ccv: Ccv) -> Self {
        ccv.0
    }
}

/// Positive bank code of a [`Corporation`]'s bank.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub struct BankCode(u32);

impl BankCode {
    /// Creates a new [`BankCode`] if the given `code` is positive.
    #[must_use]
    pub fn new(code: u32) -> Option<Self> {
        (code > 0).then_some(Self(code))
    }
}

impl TryFrom<u32> for BankCode {
    type Error = &'static str;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::new(code).ok_or("invalid `BankCode`")
    }
}

impl From<BankCode> for u32 {
    fn from(code: BankCode) -> Self {
        code.0
    }
}

/// Name of a [`Corporation`]'s bank.
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
pub struct BankName(String);

impl BankName {
    /// Creates a new [`BankName`] if the given `name` is not empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let valid = name.trim() == name && !name.is_empty();
        valid.then_some(Self(name))
    }
}

impl FromStr for BankName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `BankName`")
    }
}

impl TryFrom<String> for BankName {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `BankName`")
    }
}

impl From<BankName> for String {
    fn from(name: BankName) -> Self {
        name.0
    }
}

/// Day of month (`1..=31`) of a [`Corporation`]'s payment reference date.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub struct IssueDay(u8);

impl IssueDay {
    /// Creates a new [`IssueDay`] if the given `day` is in the `1..=31`
    /// range.
    #[must_use]
    pub fn new(day: u8) -> Option<Self> {
        (1..=31).contains(&day).then_some(Self(day))
    }
}

impl TryFrom<u8> for IssueDay {
    type Error = &'static str;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::new(day).ok_or("invalid `IssueDay`")
    }
}

impl From<IssueDay> for u8 {
    fn from(day: IssueDay) -> Self {
        day.0
    }
}

/// Positive bank account number of a [`Corporation`].
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Creates a new [`AccountNumber`] if the given `number` is positive.
    #[must_use]
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }
}

impl TryFrom<u32> for AccountNumber {
    type Error = &'static str;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or("invalid `AccountNumber`")
    }
}

impl From<AccountNumber> for u32 {
    fn from(number: AccountNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod spec {
    use common::Month;

    use super::{
        AccountNumber, Address, BankCode, BankName, CardNumber, Ccv,
        Corporation, FourDigitYear, Individual, IssueDay, Kind, Name,
        Subscriber,
    };

    fn individual() -> Subscriber {
        Individual {
            name: Name::new("Ada Lovelace").unwrap(),
            address: Address::new("12 Analytical St").unwrap(),
            card_number: CardNumber::new("4111111111111111").unwrap(),
            expire_month: Month::new(7).unwrap(),
            expire_year: FourDigitYear::new(2027).unwrap(),
            ccv: Ccv::new(123).unwrap(),
        }
        .into()
    }

    fn corporation() -> Subscriber {
        Corporation {
            name: Name::new("Acme Corp").unwrap(),
            address: Address::new("1 Industrial Way").unwrap(),
            bank_code: BankCode::new(42).unwrap(),
            bank_name: BankName::new("First National").unwrap(),
            issue_day: IssueDay::new(15).unwrap(),
            issue_month: Month::new(3).unwrap(),
            issue_year: FourDigitYear::new(2024).unwrap(),
            account_number: AccountNumber::new(987_654).unwrap(),
        }
        .into()
    }

    #[test]
    fn billing_information_renders_per_variant() {
        assert_eq!(
            individual().billing_information(),
            "Credit Card: 4111111111111111, Expires: 7/2027",
        );
        assert_eq!(
            corporation().billing_information(),
            "Bank: First National (Code: 42), Account: 987654, \
             Last Payment Reference Date: 15/3/2024",
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(individual().kind(), Kind::Individual);
        assert_eq!(corporation().kind(), Kind::Corporation);
    }

    #[test]
    fn key_is_name_and_address() {
        let key = individual().key();
        assert_eq!(key.name.to_string(), "Ada Lovelace");
        assert_eq!(key.address.to_string(), "12 Analytical St");
        assert_eq!(key.to_string(), "Ada Lovelace at 12 Analytical St");
        assert_ne!(key, corporation().key());
    }

    #[test]
    fn field_validation_ranges() {
        assert!(Ccv::new(99).is_none());
        assert!(Ccv::new(100).is_some());
        assert!(Ccv::new(9999).is_some());
        assert!(Ccv::new(10_000).is_none());

        assert!(FourDigitYear::new(999).is_none());
        assert!(FourDigitYear::new(1000).is_some());
        assert!(FourDigitYear::new(9999).is_some());
        assert!(FourDigitYear::new(10_000).is_none());

        assert!(IssueDay::new(0).is_none());
        assert!(IssueDay::new(32).is_none());
        assert!(BankCode::new(0).is_none());
        assert!(AccountNumber::new(0).is_none());
        assert!(Name::new("").is_none());
        assert!(Address::new(" ").is_none());
    }
}
