//! [`Query`] rendering subscriptions whose payments fall short of the
//! annual cost.

use std::{convert::Infallible, fmt::Write as _};

use crate::Registry;

use super::Query;

/// [`Query`] rendering every [`Subscription`] whose received payments don't
/// cover its whole expected annual cost yet.
///
/// [`Subscription`]: crate::domain::Subscription
#[derive(Clone, Copy, Debug)]
pub struct ListIncompletePayments;

impl Query<ListIncompletePayments> for Registry {
    type Ok = String;
    type Err = Infallible;

    async fn execute(
        &self,
        _: ListIncompletePayments,
    ) -> Result<Self::Ok, Self::Err> {
        let mut out =
            "--- Subscriptions with Incomplete Payments ---\n".to_owned();
        let mut found = false;

        let state = self.state().read().await;
        for sub in &state.subscriptions {
            let Some(journal) = state.journals.get(&sub.journal) else {
                continue;
            };
            if !sub.is_fully_paid(journal) {
                found = true;
                _ = writeln!(
                    out,
                    "- Subscriber: {}, Journal: {}, Received: {}, \
                     Expected: {}",
                    sub.subscriber.name,
                    journal.name,
                    sub.ledger().total_received(),
                    sub.expected_annual_cost(journal),
                );
            }
        }
        drop(state);

        if !found {
            out.push_str("No subscriptions with incomplete payments.\n");
        }
        out.push_str("--------------------------------------------\n");
        Ok(out)
    }
}
