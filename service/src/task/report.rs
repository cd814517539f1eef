//! [`Task`] generating a distributor report.

use std::{collections::BTreeMap, convert::Infallible, fmt::Write as _};

use common::{DateTime, Money, Year};
use time::{macros::format_description, Date};

use crate::Registry;

use super::Task;

/// [`Task`] generating a report of expiring subscriptions and received
/// annual payments, emitted to the [`Output`] sink.
///
/// Usually run in background via [`Registry::spawn_report`], which
/// serializes it against persistence operations.
///
/// [`Output`]: crate::Output
#[derive(Clone, Copy, Debug)]
pub struct Generate {
    /// Subscriptions ending on or after this date are reported as expiring.
    pub expiry_threshold: Date,

    /// First [`Year`] of the received payments range, inclusive.
    pub first_year: Year,

    /// Last [`Year`] of the received payments range, inclusive.
    pub last_year: Year,
}

impl Task<Generate> for Registry {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, args: Generate) -> Result<Self::Ok, Self::Err> {
        let Generate {
            expiry_threshold,
            first_year,
            last_year,
        } = args;

        self.output().append("Report generation started...\n");

        let mut report = "--- Distributor Report ---\n".to_owned();
        _ = writeln!(
            report,
            "Generated on: {}",
            render_date(DateTime::now().date()),
        );
        report.push_str("------------------------------------\n");

        let state = self.state().read().await;

        _ = writeln!(
            report,
            "\n--- Subscriptions Expiring After {} ---",
            render_date(expiry_threshold),
        );
        let mut expiring_found = false;
        for sub in &state.subscriptions {
            if sub.period.end_date() >= expiry_threshold {
                let Some(journal) = state.journals.get(&sub.journal) else {
                    continue;
                };
                expiring_found = true;
                _ = writeln!(
                    report,
                    "- Journal: {}, Subscriber: {}, Expires: {}",
                    journal.name,
                    sub.subscriber.name,
                    render_date(sub.period.end_date()),
                );
            }
        }
        if !expiring_found {
            report.push_str(
                "No subscriptions expiring after the given date.\n",
            );
        }
        report.push_str(
            "----------------------------------------------------\n",
        );

        _ = writeln!(
            report,
            "\n--- Received Annual Payments in Year Range: {} - {} ---",
            first_year.get(),
            last_year.get(),
        );
        let mut totals = (first_year.get()..=last_year.get())
            .map(|y| (y, Money::ZERO))
            .collect::<BTreeMap<_, _>>();
        let mut payments_found = false;
        for sub in &state.subscriptions {
            for tx in sub.ledger().transactions() {
                if let Some(total) = totals.get_mut(&tx.at.year()) {
                    payments_found = true;
                    *total += tx.amount;
                }
            }
        }
        drop(state);
        if payments_found {
            for (year, total) in &totals {
                _ = writeln!(report, "Year {year}: {total}");
            }
        } else {
            report.push_str(
                "No payments received within the specified year range.\n",
            );
        }
        report.push_str(
            "----------------------------------------------------------\n",
        );

        report.push_str("\n--- End of Report ---");

        self.output().append(format!("{report}\n"));
        self.output().append("Report generation finished.\n");
        Ok(())
    }
}

/// Renders the provided [`Date`] as `month/day/year`.
fn render_date(date: Date) -> String {
    date.format(&format_description!("[month]/[day]/[year]"))
        .unwrap_or_else(|e| unreachable!("`Date` formatting failed: {e}"))
}
