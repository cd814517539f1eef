//! [`Query`]s rendering sending orders for an issue month.
//!
//! A sending order exists for every [`Subscription`] whose coverage window
//! includes the issue month and whose received payments prorate far enough
//! to cover it.

use std::{convert::Infallible, fmt::Write as _};

use common::{Month, Year};

use crate::{domain::journal, Registry};

use super::Query;

/// [`Query`] rendering sending orders of every [`Journal`] for the given
/// issue month.
///
/// [`Journal`]: crate::domain::Journal
#[derive(Clone, Copy, Debug)]
pub struct ListAllSendingOrders {
    /// Issue [`Month`] to render sending orders for.
    pub month: Month,

    /// Issue [`Year`] to render sending orders for.
    pub year: Year,
}

impl Query<ListAllSendingOrders> for Registry {
    type Ok = String;
    type Err = Infallible;

    async fn execute(
        &self,
        qry: ListAllSendingOrders,
    ) -> Result<Self::Ok, Self::Err> {
        let ListAllSendingOrders { month, year } = qry;

        let mut out = format!(
            "--- Sending Orders for Month: {}, Year: {} ---\n",
            month.number(),
            year.get(),
        );
        let mut found = false;

        let state = self.state().read().await;
        for sub in &state.subscriptions {
            let Some(journal) = state.journals.get(&sub.journal) else {
                continue;
            };
            if sub.can_send(journal, month, year) {
                found = true;
                _ = writeln!(
                    out,
                    "- Journal: {} (ISSN: {}) to Subscriber: {} \
                     (Copies: {})",
                    journal.name,
                    journal.issn,
                    sub.subscriber.name,
                    sub.copies(),
                );
            }
        }
        drop(state);

        if !found {
            out.push_str("No sending orders for this month and year.\n");
        }
        out.push_str("----------------------------------------\n");
        Ok(out)
    }
}

/// [`Query`] rendering sending orders of a single [`Journal`] for the given
/// issue month.
///
/// [`Journal`]: crate::domain::Journal
#[derive(Clone, Debug)]
pub struct ListSendingOrdersByJournal {
    /// ISSN of the [`Journal`] to render sending orders of.
    ///
    /// [`Journal`]: crate::domain::Journal
    pub issn: journal::Issn,

    /// Issue [`Month`] to render sending orders for.
    pub month: Month,

    /// Issue [`Year`] to render sending orders for.
    pub year: Year,
}

impl Query<ListSendingOrdersByJournal> for Registry {
    type Ok = String;
    type Err = Infallible;

    async fn execute(
        &self,
        qry: ListSendingOrdersByJournal,
    ) -> Result<Self::Ok, Self::Err> {
        let ListSendingOrdersByJournal { issn, month, year } = qry;

        let state = self.state().read().await;
        let Some(journal) = state.journals.get(&issn) else {
            drop(state);
            return Ok(format!("Journal with ISSN {issn} not found.\n"));
        };

        let mut out = format!(
            "--- Sending Orders for Journal: {}, Month: {}, Year: {} ---\n",
            issn,
            month.number(),
            year.get(),
        );
        let mut found = false;

        for sub in &state.subscriptions {
            if sub.journal == issn && sub.can_send(journal, month, year) {
                found = true;
                _ = writeln!(
                    out,
                    "- to Subscriber: {} (Copies: {})",
                    sub.subscriber.name,
                    sub.copies(),
                );
            }
        }
        drop(state);

        if !found {
            out.push_str(
                "No sending orders for this journal in this month and \
                 year.\n",
            );
        }
        out.push_str("--------------------------------------------------\n");
        Ok(out)
    }
}
