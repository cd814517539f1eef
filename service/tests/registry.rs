//! End-to-end behavior of the [`Registry`] public surface.

use std::sync::{Arc, Mutex};

use common::{Money, Month, Ratio, Year};
use service::{
    command::{
        add_subscription::Outcome, AcceptPayment, AddJournal, AddSubscriber,
        AddSubscription, LoadState, SaveState,
    },
    domain::{
        journal, subscriber, subscription::Copies, Journal, Period,
        Subscriber, Subscription,
    },
    query::{
        ListAllSendingOrders, ListIncompletePayments,
        ListSendingOrdersByJournal, ListSubscriptionsByJournal,
        ListSubscriptionsBySubscriber, SearchJournal, SearchSubscriber,
    },
    task, Command as _, Output, Registry,
};
use time::macros::date;

fn captured() -> (Registry, Arc<Mutex<String>>) {
    let buf = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&buf);
    let registry = Registry::new(Output::new(move |text| {
        sink.lock().unwrap().push_str(text);
    }));
    (registry, buf)
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn issn() -> journal::Issn {
    journal::Issn::new("1234-5678").unwrap()
}

fn journal() -> Journal {
    Journal::new(
        journal::Name::new("Tech Today").unwrap(),
        issn(),
        journal::Frequency::new(12).unwrap(),
        money("10.00"),
    )
    .unwrap()
}

fn subscriber() -> Subscriber {
    subscriber::Individual {
        name: subscriber::Name::new("Ada Lovelace").unwrap(),
        address: subscriber::Address::new("12 Analytical St").unwrap(),
        card_number: subscriber::CardNumber::new("4111111111111111")
            .unwrap(),
        expire_month: Month::new(7).unwrap(),
        expire_year: subscriber::FourDigitYear::new(2027).unwrap(),
        ccv: subscriber::Ccv::new(123).unwrap(),
    }
    .into()
}

fn key() -> subscriber::Key {
    subscriber().key()
}

fn subscription() -> Subscription {
    Subscription::new(
        Period::new(Month::new(1).unwrap(), Year::new(2025).unwrap()),
        Copies::ONE,
        issn(),
        key(),
        Ratio::ZERO,
    )
}

/// Registers the journal, the subscriber and a subscription linking them.
async fn seed(registry: &Registry) {
    registry
        .execute(AddJournal { journal: journal() })
        .await
        .unwrap();
    registry
        .execute(AddSubscriber {
            subscriber: subscriber(),
        })
        .await
        .unwrap();
    let outcome = registry
        .execute(AddSubscription {
            issn: issn(),
            subscriber: key(),
            subscription: subscription(),
        })
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Inserted);
}

#[tokio::test]
async fn duplicate_journal_is_rejected() {
    let (registry, out) = captured();

    registry
        .execute(AddJournal { journal: journal() })
        .await
        .unwrap();
    assert!(registry
        .execute(AddJournal { journal: journal() })
        .await
        .is_err());

    let out = out.lock().unwrap().clone();
    assert!(out.contains("Journal 'Tech Today' added.\n"));
    assert!(out.contains("Failed to add journal (ISSN already exists).\n"));

    let found = registry
        .execute(SearchJournal { issn: issn() })
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_subscriber_is_rejected() {
    let (registry, out) = captured();

    registry
        .execute(AddSubscriber {
            subscriber: subscriber(),
        })
        .await
        .unwrap();
    assert!(registry
        .execute(AddSubscriber {
            subscriber: subscriber(),
        })
        .await
        .is_err());

    let out = out.lock().unwrap().clone();
    assert!(out.contains("Subscriber 'Ada Lovelace' added.\n"));
    assert!(out.contains(
        "Subscriber 'Ada Lovelace' at '12 Analytical St' already exists.\n",
    ));

    let found = registry
        .execute(SearchSubscriber {
            name: subscriber::Name::new("Ada Lovelace").unwrap(),
        })
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_subscription_increases_copies() {
    let (registry, out) = captured();
    seed(&registry).await;

    let outcome = registry
        .execute(AddSubscription {
            issn: issn(),
            subscriber: key(),
            subscription: subscription(),
        })
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::CopiesIncreased(Copies::new(2).unwrap()));

    let out = out.lock().unwrap().clone();
    assert!(out.contains(
        "Existing subscription found. Copies increased for Journal: \
         Tech Today and Subscriber: Ada Lovelace to 2.\n",
    ));

    let listed = registry
        .execute(ListSubscriptionsByJournal { issn: issn() })
        .await
        .unwrap();
    assert!(listed.contains(
        "- Subscriber: Ada Lovelace, Copies: 2, Period: 1/2025 to 12/2026\n",
    ));
    assert_eq!(listed.matches("- Subscriber:").count(), 1);
}

#[tokio::test]
async fn subscription_requires_known_journal_and_subscriber() {
    let (registry, out) = captured();

    assert!(registry
        .execute(AddSubscription {
            issn: issn(),
            subscriber: key(),
            subscription: subscription(),
        })
        .await
        .is_err());

    let out = out.lock().unwrap().clone();
    assert!(out.contains(
        "Failed to add subscription: Journal or Subscriber not found, \
         or Subscription object inconsistent.\n",
    ));
}

#[tokio::test]
async fn incomplete_payments_track_received_totals() {
    let (registry, _) = captured();
    seed(&registry).await;

    registry
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("50.00"),
        })
        .await
        .unwrap();

    let listed = registry
        .execute(ListIncompletePayments)
        .await
        .unwrap();
    assert!(listed.contains(
        "- Subscriber: Ada Lovelace, Journal: Tech Today, \
         Received: 50.00, Expected: 120.00\n",
    ));

    registry
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("70.00"),
        })
        .await
        .unwrap();

    let listed = registry
        .execute(ListIncompletePayments)
        .await
        .unwrap();
    assert!(listed.contains("No subscriptions with incomplete payments.\n"));
}

#[tokio::test]
async fn sending_orders_require_sufficient_payment() {
    let (registry, _) = captured();
    seed(&registry).await;

    let month = Month::new(6).unwrap();
    let year = Year::new(2025).unwrap();

    let listed = registry
        .execute(ListAllSendingOrders { month, year })
        .await
        .unwrap();
    assert!(listed.contains("No sending orders for this month and year.\n"));

    registry
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("120.00"),
        })
        .await
        .unwrap();

    let listed = registry
        .execute(ListAllSendingOrders { month, year })
        .await
        .unwrap();
    assert!(listed.contains(
        "- Journal: Tech Today (ISSN: 1234-5678) to Subscriber: \
         Ada Lovelace (Copies: 1)\n",
    ));

    let listed = registry
        .execute(ListSendingOrdersByJournal {
            issn: issn(),
            month,
            year,
        })
        .await
        .unwrap();
    assert!(listed.contains("- to Subscriber: Ada Lovelace (Copies: 1)\n"));

    let listed = registry
        .execute(ListSendingOrdersByJournal {
            issn: journal::Issn::new("9999-9999").unwrap(),
            month,
            year,
        })
        .await
        .unwrap();
    assert_eq!(listed, "Journal with ISSN 9999-9999 not found.\n");
}

#[tokio::test]
async fn state_round_trips_through_a_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let (saved, _) = captured();
    seed(&saved).await;
    saved
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("50.00"),
        })
        .await
        .unwrap();
    saved
        .execute(SaveState {
            destination: path.clone(),
        })
        .await
        .unwrap();

    let (loaded, out) = captured();
    loaded.execute(LoadState { source: path }).await.unwrap();

    assert!(out
        .lock()
        .unwrap()
        .contains("Distributor state successfully loaded from"));
    for registry in [&saved, &loaded] {
        let listed = registry
            .execute(ListSubscriptionsBySubscriber {
                name: subscriber::Name::new("Ada Lovelace").unwrap(),
            })
            .await
            .unwrap();
        assert!(listed.contains(
            "- Journal: Tech Today (ISSN: 1234-5678), Copies: 1, \
             Period: 1/2025 to 12/2026\n",
        ));

        let listed = registry
            .execute(ListIncompletePayments)
            .await
            .unwrap();
        assert!(listed.contains(
            "- Subscriber: Ada Lovelace, Journal: Tech Today, \
             Received: 50.00, Expected: 120.00\n",
        ));
    }
}

#[tokio::test]
async fn loading_a_missing_file_resets_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    let (registry, out) = captured();
    seed(&registry).await;

    assert!(registry
        .execute(LoadState {
            source: dir.path().join("missing.json"),
        })
        .await
        .is_err());

    let out = out.lock().unwrap().clone();
    assert!(
        out.contains("State file not found. Starting with empty state.\n"),
    );
    assert!(out.contains(
        "Initialized empty collections due to loading error.\n",
    ));

    let found = registry
        .execute(SearchJournal { issn: issn() })
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn loading_a_corrupt_file_resets_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, b"not a snapshot").unwrap();

    let (registry, out) = captured();
    seed(&registry).await;

    assert!(registry
        .execute(LoadState { source: path })
        .await
        .is_err());

    let out = out.lock().unwrap().clone();
    assert!(!out.contains("State file not found."));
    assert!(out.contains(
        "Initialized empty collections due to loading error.\n",
    ));

    let found = registry
        .execute(SearchJournal { issn: issn() })
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn report_prints_every_year_in_range_ascending() {
    let (registry, out) = captured();
    seed(&registry).await;
    registry
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("120.00"),
        })
        .await
        .unwrap();

    // Payments are recorded as of now, so anchor the range to this year to
    // get exactly one non-zero row surrounded by zero ones.
    let this_year = time::OffsetDateTime::now_utc().year();
    registry
        .spawn_report(task::Generate {
            expiry_threshold: date!(2025 - 01 - 01),
            first_year: Year::new(this_year - 2).unwrap(),
            last_year: Year::new(this_year + 1).unwrap(),
        })
        .await
        .unwrap();

    let out = out.lock().unwrap().clone();
    let rows = [
        format!("Year {}: 0.00\n", this_year - 2),
        format!("Year {}: 0.00\n", this_year - 1),
        format!("Year {this_year}: 120.00\n"),
        format!("Year {}: 0.00\n", this_year + 1),
    ];
    let positions = rows
        .iter()
        .map(|row| out.find(row.as_str()).expect("missing year row"))
        .collect::<Vec<_>>();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "year rows must be printed in ascending order",
    );
}

#[tokio::test]
async fn saving_waits_for_a_running_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let (registry, out) = captured();
    seed(&registry).await;
    registry
        .execute(AcceptPayment {
            issn: issn(),
            subscriber: key(),
            amount: money("120.00"),
        })
        .await
        .unwrap();

    let report = registry.spawn_report(task::Generate {
        expiry_threshold: date!(2025 - 01 - 01),
        first_year: Year::new(2024).unwrap(),
        last_year: Year::new(2026).unwrap(),
    });
    registry
        .execute(SaveState { destination: path })
        .await
        .unwrap();
    report.await.unwrap();

    let out = out.lock().unwrap().clone();
    let finished = out
        .find("Report generation finished.")
        .expect("report must have run");
    let saved = out
        .find("Distributor state successfully saved to")
        .expect("state must have been saved");
    assert!(finished < saved, "report must finish before the state saves");
    assert!(out.contains("Save state waiting for report to finish...\n"));
    assert!(out.contains("- Journal: Tech Today, Subscriber: Ada Lovelace"));
    assert!(!out.contains(
        "No payments received within the specified year range.\n",
    ));
}
