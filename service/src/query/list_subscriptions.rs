//! [`Query`]s rendering registered subscriptions.

use std::{convert::Infallible, fmt::Write as _};

use crate::{
    domain::{journal, subscriber, Subscription},
    Registry,
};

use super::Query;

/// [`Query`] rendering every [`Subscription`] of the [`Subscriber`]s with
/// the given name.
///
/// [`Subscriber`]: crate::domain::Subscriber
#[derive(Clone, Debug)]
pub struct ListSubscriptionsBySubscriber {
    /// Name of the [`Subscriber`]s to render [`Subscription`]s of.
    ///
    /// [`Subscriber`]: crate::domain::Subscriber
    pub name: subscriber::Name,
}

impl Query<ListSubscriptionsBySubscriber> for Registry {
    type Ok = String;
    type Err = Infallible;

    async fn execute(
        &self,
        qry: ListSubscriptionsBySubscriber,
    ) -> Result<Self::Ok, Self::Err> {
        let mut out = format!(
            "--- Subscriptions for Subscriber: {} ---\n",
            qry.name,
        );
        let mut found = false;

        let state = self.state().read().await;
        for sub in &state.subscriptions {
            if sub.subscriber.name != qry.name {
                continue;
            }
            let Some(journal) = state.journals.get(&sub.journal) else {
                continue;
            };
            found = true;
            _ = writeln!(
                out,
                "- Journal: {} (ISSN: {}), Copies: {}, Period: {}",
                journal.name,
                journal.issn,
                sub.copies(),
                render_period(sub),
            );
        }
        drop(state);

        if !found {
            out.push_str(
                "No subscriptions found for this subscriber name.\n",
            );
        }
        out.push_str("------------------------------------------\n");
        Ok(out)
    }
}

/// [`Query`] rendering every [`Subscription`] to the [`Journal`] with the
/// given ISSN.
///
/// [`Journal`]: crate::domain::Journal
#[derive(Clone, Debug)]
pub struct ListSubscriptionsByJournal {
    /// ISSN of the [`Journal`] to render [`Subscription`]s to.
    ///
    /// [`Journal`]: crate::domain::Journal
    pub issn: journal::Issn,
}

impl Query<ListSubscriptionsByJournal> for Registry {
    type Ok = String;
    type Err = Infallible;

    async fn execute(
        &self,
        qry: ListSubscriptionsByJournal,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state().read().await;
        if !state.journals.contains_key(&qry.issn) {
            drop(state);
            return Ok(format!(
                "Journal with ISSN {} not found.\n",
                qry.issn,
            ));
        }

        let mut out = format!(
            "--- Subscriptions for Journal (ISSN: {}) ---\n",
            qry.issn,
        );
        let mut found = false;

        for sub in &state.subscriptions {
            if sub.journal != qry.issn {
                continue;
            }
            found = true;
            _ = writeln!(
                out,
                "- Subscriber: {}, Copies: {}, Period: {}",
                sub.subscriber.name,
                sub.copies(),
                render_period(sub),
            );
        }
        drop(state);

        if !found {
            out.push_str("No subscriptions found for this journal.\n");
        }
        out.push_str("-----------------------------------------\n");
        Ok(out)
    }
}

/// Renders the coverage window of the provided [`Subscription`] as
/// `start month/year to end month/year`.
fn render_period(sub: &Subscription) -> String {
    format!(
        "{}/{} to {}/{}",
        sub.period.start_month.number(),
        sub.period.start_year.get(),
        sub.period.end_month().number(),
        sub.period.end_year().get(),
    )
}
