//! [`Command`] for registering a new [`Subscription`].

use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{journal, subscriber, subscription::Copies, Subscription},
    Registry,
};

use super::Command;

/// [`Command`] for registering a new [`Subscription`] of the [`Subscriber`]
/// to the [`Journal`].
///
/// If a [`Subscription`] linking the same [`Journal`] and [`Subscriber`]
/// exists already, it's merged into the existing one by increasing its
/// copies instead of being registered separately.
///
/// [`Journal`]: crate::domain::Journal
/// [`Subscriber`]: crate::domain::Subscriber
#[derive(Clone, Debug)]
pub struct AddSubscription {
    /// ISSN of the [`Journal`] being subscribed to.
    ///
    /// [`Journal`]: crate::domain::Journal
    pub issn: journal::Issn,

    /// Identity of the subscribing [`Subscriber`].
    ///
    /// [`Subscriber`]: crate::domain::Subscriber
    pub subscriber: subscriber::Key,

    /// [`Subscription`] to register.
    pub subscription: Subscription,
}

/// Effect of a successful [`AddSubscription`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// [`Subscription`] was registered as a new one.
    Inserted,

    /// [`Subscription`] was merged into an existing one, now carrying this
    /// many copies.
    CopiesIncreased(Copies),
}

impl Command<AddSubscription> for Registry {
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddSubscription,
    ) -> Result<Self::Ok, Self::Err> {
        let AddSubscription {
            issn,
            subscriber,
            subscription,
        } = cmd;

        let mut state = self.state().write().await;

        let err = if !state.journals.contains_key(&issn) {
            Some(ExecutionError::UnknownJournal(issn.clone()))
        } else if !state.has_subscriber(&subscriber) {
            Some(ExecutionError::UnknownSubscriber(subscriber.clone()))
        } else if subscription.journal != issn
            || subscription.subscriber != subscriber
        {
            Some(ExecutionError::Inconsistent)
        } else {
            None
        };
        if let Some(e) = err {
            drop(state);
            log::warn!("cannot register subscription: {e}");
            self.output().append(
                "Failed to add subscription: Journal or Subscriber not \
                 found, or Subscription object inconsistent.\n",
            );
            return Err(tracerr::new!(e));
        }

        let journal_name = state.journals[&issn].name.clone();

        if let Some(existing) = state.subscription_mut(&issn, &subscriber) {
            existing.increase_copies();
            let copies = existing.copies();
            drop(state);

            self.output().append(format!(
                "Existing subscription found. Copies increased for \
                 Journal: {journal_name} and Subscriber: {} to {copies}.\n",
                subscriber.name,
            ));
            return Ok(Outcome::CopiesIncreased(copies));
        }

        state.subscriptions.push(subscription);
        drop(state);

        self.output().append(format!(
            "New subscription added for Journal: {journal_name} and \
             Subscriber: {}.\n",
            subscriber.name,
        ));
        Ok(Outcome::Inserted)
    }
}

/// Error of [`AddSubscription`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`Journal`] with the given ISSN is registered.
    ///
    /// [`Journal`]: crate::domain::Journal
    #[display("no journal with ISSN `{_0}` is registered")]
    UnknownJournal(#[error(not(source))] journal::Issn),

    /// No [`Subscriber`] with the given [`subscriber::Key`] is registered.
    ///
    /// [`Subscriber`]: crate::domain::Subscriber
    #[display("no subscriber `{_0}` is registered")]
    UnknownSubscriber(#[error(not(source))] subscriber::Key),

    /// Provided [`Subscription`] refers to a different [`Journal`] or
    /// [`Subscriber`] than the ones named by the [`Command`].
    ///
    /// [`Journal`]: crate::domain::Journal
    /// [`Subscriber`]: crate::domain::Subscriber
    #[display("subscription handles don't match the named journal and \
               subscriber")]
    Inconsistent,
}
