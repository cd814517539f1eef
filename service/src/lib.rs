//! Core of the journal subscription distributor: the subscription ledger,
//! its derived computations, and the reporting/persistence coordination.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod output;
pub mod query;
pub mod task;

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
// Used in integration tests.
#[cfg(test)]
use tempfile as _;

use crate::{
    domain::{journal, subscriber, Journal, Subscriber, Subscription},
    infra::gate::Gate,
};

pub use self::{
    command::Command, output::Output, query::Query, task::Task,
};

/// Owner of all [`Journal`]s, [`Subscriber`]s and [`Subscription`]s: the
/// single source of truth of the distributor.
///
/// Cheaply clonable; all clones share the same state. Listing and add
/// operations run on the caller, while [`Registry::spawn_report`] runs on a
/// background task serialized against persistence by the [`Gate`].
#[derive(Clone, Debug)]
pub struct Registry {
    /// Shared inner state of this [`Registry`].
    inner: Arc<Inner>,
}

/// Inner state of a [`Registry`].
#[derive(Debug)]
struct Inner {
    /// Ledger [`State`] of the [`Registry`].
    state: RwLock<State>,

    /// [`Gate`] serializing persistence against report generation.
    gate: Gate,

    /// [`Output`] sink for human-readable status lines.
    output: Output,
}

/// Whole ledger state of a [`Registry`].
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Registered [`Journal`]s, keyed by their unique ISSN.
    pub(crate) journals: HashMap<journal::Issn, Journal>,

    /// Registered [`Subscriber`]s, in insertion order.
    pub(crate) subscribers: Vec<Subscriber>,

    /// Registered [`Subscription`]s, in insertion order.
    pub(crate) subscriptions: Vec<Subscription>,
}

impl State {
    /// Looks up the [`Subscription`] linking the given [`Journal`] and
    /// [`Subscriber`], if any.
    pub(crate) fn subscription_mut(
        &mut self,
        issn: &journal::Issn,
        subscriber: &subscriber::Key,
    ) -> Option<&mut Subscription> {
        self.subscriptions
            .iter_mut()
            .find(|s| &s.journal == issn && &s.subscriber == subscriber)
    }

    /// Indicates whether a [`Subscriber`] with the given [`subscriber::Key`]
    /// is registered.
    pub(crate) fn has_subscriber(&self, key: &subscriber::Key) -> bool {
        self.subscribers.iter().any(|s| &s.key() == key)
    }
}

impl Registry {
    /// Creates a new empty [`Registry`] reporting its progress to the
    /// provided [`Output`] sink.
    #[must_use]
    pub fn new(output: Output) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State::default()),
                gate: Gate::default(),
                output,
            }),
        }
    }

    /// Spawns generation of a report on a background task.
    ///
    /// The [`Gate`] is marked busy before the task is spawned and cleared
    /// once the report has been emitted, so a persistence operation issued
    /// after this call always waits for the report to finish. The gate
    /// tracks a single boolean slot: overlapping `spawn_report` calls are
    /// unsupported and race on it.
    pub fn spawn_report(
        &self,
        args: task::report::Generate,
    ) -> tokio::task::JoinHandle<()> {
        self.inner.gate.begin();
        let this = self.clone();
        tokio::spawn(async move {
            _ = Task::execute(&this, args).await;
            this.inner.gate.end();
        })
    }

    /// Returns the ledger [`State`] of this [`Registry`].
    pub(crate) fn state(&self) -> &RwLock<State> {
        &self.inner.state
    }

    /// Returns the report [`Gate`] of this [`Registry`].
    pub(crate) fn gate(&self) -> &Gate {
        &self.inner.gate
    }

    /// Returns the [`Output`] sink of this [`Registry`].
    pub(crate) fn output(&self) -> &Output {
        &self.inner.output
    }
}
