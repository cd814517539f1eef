//! [`Query`] definitions.

pub mod list_incomplete_payments;
pub mod list_sending_orders;
pub mod list_subscriptions;
pub mod search_journal;
pub mod search_subscriber;

/// [`Query`] to the [`Registry`].
///
/// [`Registry`]: crate::Registry
pub use common::Handler as Query;

pub use self::{
    list_incomplete_payments::ListIncompletePayments,
    list_sending_orders::{ListAllSendingOrders, ListSendingOrdersByJournal},
    list_subscriptions::{
        ListSubscriptionsByJournal, ListSubscriptionsBySubscriber,
    },
    search_journal::SearchJournal,
    search_subscriber::SearchSubscriber,
};
