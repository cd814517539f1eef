//! [`Subscription`] definitions.

use std::str::FromStr;

use common::{calendar, DateTime, Money, Month, Ratio, Year};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{journal, payment::Ledger, subscriber, Journal, Period};

/// Binding of a [`Journal`] to a subscriber over a [`Period`], with the
/// payment [`Ledger`] backing it.
///
/// The journal and the subscriber are held as registry handles (ISSN and
/// name/address key) rather than embedded copies, so persisting and
/// reloading preserves shared identity.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Subscription {
    /// Coverage [`Period`] of this [`Subscription`].
    pub period: Period,

    /// Number of [`Copies`] of each issue to send, non-decreasing.
    copies: Copies,

    /// ISSN of the subscribed [`Journal`].
    pub journal: journal::Issn,

    /// Identity of the subscribing [`Subscriber`].
    ///
    /// [`Subscriber`]: super::Subscriber
    pub subscriber: subscriber::Key,

    /// Payment [`Ledger`] of this [`Subscription`].
    ledger: Ledger,
}

impl Subscription {
    /// Creates a new [`Subscription`] with an empty payment [`Ledger`]
    /// carrying the provided `discount`.
    #[must_use]
    pub fn new(
        period: Period,
        copies: Copies,
        journal: journal::Issn,
        subscriber: subscriber::Key,
        discount: Ratio,
    ) -> Self {
        Self {
            period,
            copies,
            journal,
            subscriber,
            ledger: Ledger::new(discount),
        }
    }

    /// Returns the number of [`Copies`] of this [`Subscription`].
    #[must_use]
    pub fn copies(&self) -> Copies {
        self.copies
    }

    /// Increments the number of copies by one.
    ///
    /// Called when a duplicate registration for the same journal and
    /// subscriber arrives instead of creating a second [`Subscription`].
    pub fn increase_copies(&mut self) {
        self.copies = self.copies.increased();
    }

    /// Returns the payment [`Ledger`] of this [`Subscription`].
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Records a payment of the provided `amount` as of now.
    ///
    /// Non-positive amounts are ignored with a warning (see
    /// [`Ledger::record`]).
    pub fn accept_payment(&mut self, amount: Money) {
        self.ledger.record(amount, DateTime::now().coerce());
    }

    /// Returns the cost of a full subscription year: issue price times
    /// publication frequency times copies, discounted.
    #[must_use]
    pub fn expected_annual_cost(&self, journal: &Journal) -> Money {
        debug_assert_eq!(journal.issn, self.journal, "mismatched journal");
        Money::new(
            journal.issue_price.amount()
                * Decimal::from(journal.frequency.get())
                * Decimal::from(self.copies.get())
                * self.ledger.discount().complement(),
        )
    }

    /// Indicates whether enough has been paid to cover everything owed up
    /// to the end of the given issue month.
    ///
    /// Linear proration over whole days: the fraction of the annual cost
    /// owed equals elapsed days over period duration, with the issue month
    /// counted through its last calendar day. Day-based on purpose, so
    /// months of different lengths weigh differently.
    #[must_use]
    pub fn can_send(
        &self,
        journal: &Journal,
        issue_month: Month,
        issue_year: Year,
    ) -> bool {
        let start = self.period.start_date();
        let end = self.period.end_date();
        let issue_end = calendar::last_day(issue_month, issue_year);

        if issue_end < start || issue_end > end {
            return false;
        }

        let elapsed_days = (issue_end - start).whole_days();
        let duration_days = self.period.duration_days();
        if duration_days <= 0 {
            return false;
        }

        let fraction =
            Decimal::from(elapsed_days) / Decimal::from(duration_days);
        let expected_so_far =
            self.expected_annual_cost(journal).amount() * fraction;

        self.ledger.total_received().amount()
            >= expected_so_far - payment_tolerance()
    }

    /// Indicates whether the received total covers the whole expected
    /// annual cost.
    #[must_use]
    pub fn is_fully_paid(&self, journal: &Journal) -> bool {
        self.ledger.total_received().amount()
            >= self.expected_annual_cost(journal).amount()
                - payment_tolerance()
    }
}

/// Tolerance applied when comparing received payments against expected
/// ones.
pub(crate) fn payment_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Number of copies of each issue a [`Subscription`] sends, always at
/// least one.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub struct Copies(u32);

impl Copies {
    /// A single copy.
    pub const ONE: Self = Self(1);

    /// Creates a new [`Copies`] if the given `count` is positive.
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }

    /// Returns the count of this [`Copies`].
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns this [`Copies`] incremented by one.
    #[must_use]
    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl FromStr for Copies {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid `Copies`")
    }
}

impl TryFrom<u32> for Copies {
    type Error = &'static str;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count).ok_or("invalid `Copies`")
    }
}

impl From<Copies> for u32 {
    fn from(copies: Copies) -> Self {
        copies.0
    }
}
