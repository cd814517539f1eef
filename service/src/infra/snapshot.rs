//! On-disk snapshot of the whole ledger [`State`].

use std::{io, path::Path};

use derive_more::{Display, Error as StdError, From};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{journal, subscriber, Journal, Subscriber, Subscription},
    State,
};

/// Serialized form of a [`State`]: plain collections, with [`Subscription`]s
/// referring to their [`Journal`] and [`Subscriber`] by handle.
#[derive(Debug, Deserialize, Serialize)]
struct Snapshot {
    /// Registered [`Journal`]s.
    journals: Vec<Journal>,

    /// Registered [`Subscriber`]s.
    subscribers: Vec<Subscriber>,

    /// Registered [`Subscription`]s.
    subscriptions: Vec<Subscription>,
}

/// Writes the provided [`State`] to the file at the provided `path`,
/// creating or truncating it.
pub(crate) async fn write(path: &Path, state: &State) -> Result<(), Error> {
    let snapshot = Snapshot {
        journals: state.journals.values().cloned().collect(),
        subscribers: state.subscribers.clone(),
        subscriptions: state.subscriptions.clone(),
    };
    let json = serde_json::to_vec_pretty(&snapshot)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Reads a [`State`] back from the file at the provided `path`.
///
/// Every [`Subscription`] handle must resolve to a snapshotted [`Journal`]
/// and [`Subscriber`], otherwise the whole snapshot is rejected.
pub(crate) async fn read(path: &Path) -> Result<State, Error> {
    let json = tokio::fs::read(path).await?;
    let Snapshot {
        journals,
        subscribers,
        subscriptions,
    } = serde_json::from_slice(&json)?;

    let journals = journals
        .into_iter()
        .map(|j| (j.issn.clone(), j))
        .collect::<std::collections::HashMap<_, _>>();
    for sub in &subscriptions {
        if !journals.contains_key(&sub.journal) {
            return Err(Error::DanglingJournal(sub.journal.clone()));
        }
        if !subscribers.iter().any(|s| s.key() == sub.subscriber) {
            return Err(Error::DanglingSubscriber(sub.subscriber.clone()));
        }
    }

    Ok(State {
        journals,
        subscribers,
        subscriptions,
    })
}

/// Error of reading or writing a [`Snapshot`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to access the snapshot file.
    #[display("failed to access snapshot file: {_0}")]
    Io(io::Error),

    /// Snapshot file contents are not a valid [`Snapshot`].
    #[display("malformed snapshot: {_0}")]
    Codec(serde_json::Error),

    /// A [`Subscription`] refers to a [`Journal`] missing from the
    /// [`Snapshot`].
    #[display("subscription refers to unknown journal with ISSN `{_0}`")]
    #[from(ignore)]
    DanglingJournal(#[error(not(source))] journal::Issn),

    /// A [`Subscription`] refers to a [`Subscriber`] missing from the
    /// [`Snapshot`].
    #[display("subscription refers to unknown subscriber `{_0}`")]
    #[from(ignore)]
    DanglingSubscriber(#[error(not(source))] subscriber::Key),
}

impl Error {
    /// Indicates whether this [`Error`] is a missing snapshot file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::Codec(_)
            | Self::DanglingJournal(_)
            | Self::DanglingSubscriber(_) => false,
        }
    }
}
