//! [`Command`] for recording a payment toward a [`Subscription`].
//!
//! [`Subscription`]: crate::domain::Subscription

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{journal, subscriber},
    Registry,
};

use super::Command;

/// [`Command`] for recording a payment toward the [`Subscription`] linking
/// the given [`Journal`] and [`Subscriber`].
///
/// [`Journal`]: crate::domain::Journal
/// [`Subscriber`]: crate::domain::Subscriber
/// [`Subscription`]: crate::domain::Subscription
#[derive(Clone, Debug)]
pub struct AcceptPayment {
    /// ISSN of the [`Journal`] the payment is for.
    ///
    /// [`Journal`]: crate::domain::Journal
    pub issn: journal::Issn,

    /// Identity of the paying [`Subscriber`].
    ///
    /// [`Subscriber`]: crate::domain::Subscriber
    pub subscriber: subscriber::Key,

    /// Paid amount.
    pub amount: Money,
}

impl Command<AcceptPayment> for Registry {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AcceptPayment,
    ) -> Result<Self::Ok, Self::Err> {
        let AcceptPayment {
            issn,
            subscriber,
            amount,
        } = cmd;

        let mut state = self.state().write().await;
        let Some(sub) = state.subscription_mut(&issn, &subscriber) else {
            drop(state);
            log::warn!(
                "no subscription of `{subscriber}` to journal with ISSN \
                 `{issn}`",
            );
            return Err(tracerr::new!(ExecutionError::SubscriptionNotFound));
        };
        sub.accept_payment(amount);
        // A subscription cannot outlive its journal, so the name resolves
        // whenever the subscription does.
        let journal_name = state
            .journals
            .get(&issn)
            .map_or_else(|| issn.to_string(), |j| j.name.to_string());
        drop(state);

        self.output().append(format!(
            "Payment of {amount} accepted for subscription to \
             {journal_name} by {}.\n",
            subscriber.name,
        ));
        Ok(())
    }
}

/// Error of [`AcceptPayment`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`Subscription`] links the given [`Journal`] and [`Subscriber`].
    ///
    /// [`Journal`]: crate::domain::Journal
    /// [`Subscriber`]: crate::domain::Subscriber
    /// [`Subscription`]: crate::domain::Subscription
    #[display("no subscription links the given journal and subscriber")]
    SubscriptionNotFound,
}
