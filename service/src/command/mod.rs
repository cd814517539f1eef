//! [`Command`] definitions.

pub mod accept_payment;
pub mod add_journal;
pub mod add_subscriber;
pub mod add_subscription;
pub mod load_state;
pub mod save_state;

/// [`Command`] of the [`Registry`].
///
/// [`Registry`]: crate::Registry
pub use common::Handler as Command;

pub use self::{
    accept_payment::AcceptPayment, add_journal::AddJournal,
    add_subscriber::AddSubscriber, add_subscription::AddSubscription,
    load_state::LoadState, save_state::SaveState,
};
