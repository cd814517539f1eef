//! Payment [`Ledger`] definitions.

use common::{datetime::DateTimeOf, Money, Ratio};
use serde::{Deserialize, Serialize};
use tracing as log;

/// Moment a [`Transaction`] was recorded at.
pub type RecordedAt = DateTimeOf<Transaction>;

/// Single recorded payment toward a subscription.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Transaction {
    /// Paid amount, always positive.
    pub amount: Money,

    /// When the payment was recorded.
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    pub at: RecordedAt,
}

/// Append-only record of payments toward a subscription, along with its
/// discount ratio.
///
/// Grows only by [`record()`]ing; entries are never rewritten or removed.
///
/// [`record()`]: Ledger::record
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Ledger {
    /// Discount [`Ratio`] applied to the subscription's annual cost.
    discount: Ratio,

    /// Recorded [`Transaction`]s, oldest first.
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates a new empty [`Ledger`] with the provided discount [`Ratio`].
    #[must_use]
    pub fn new(discount: Ratio) -> Self {
        Self {
            discount,
            transactions: Vec::new(),
        }
    }

    /// Records a payment of the provided `amount` at the provided moment.
    ///
    /// A non-positive `amount` is ignored with a warning rather than
    /// rejected: existing callers rely on the call never failing.
    pub fn record(&mut self, amount: Money, at: RecordedAt) {
        if !amount.is_positive() {
            log::warn!("ignoring non-positive payment of {amount}");
            return;
        }
        self.transactions.push(Transaction { amount, at });
    }

    /// Returns the total amount received so far.
    #[must_use]
    pub fn total_received(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Returns the discount [`Ratio`] of this [`Ledger`].
    #[must_use]
    pub fn discount(&self) -> Ratio {
        self.discount
    }

    /// Returns the recorded [`Transaction`]s, oldest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
