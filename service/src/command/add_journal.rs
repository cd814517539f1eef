//! [`Command`] for registering a new [`Journal`].

use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{journal, Journal},
    Registry,
};

use super::Command;

/// [`Command`] for registering a new [`Journal`].
#[derive(Clone, Debug)]
pub struct AddJournal {
    /// [`Journal`] to register.
    pub journal: Journal,
}

impl Command<AddJournal> for Registry {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddJournal) -> Result<Self::Ok, Self::Err> {
        let AddJournal { journal } = cmd;

        let mut state = self.state().write().await;
        if state.journals.contains_key(&journal.issn) {
            drop(state);
            log::warn!(
                "journal with ISSN `{}` is registered already",
                journal.issn,
            );
            self.output()
                .append("Failed to add journal (ISSN already exists).\n");
            return Err(tracerr::new!(ExecutionError::DuplicateIssn(
                journal.issn,
            )));
        }

        let name = journal.name.clone();
        _ = state.journals.insert(journal.issn.clone(), journal);
        drop(state);

        self.output().append(format!("Journal '{name}' added.\n"));
        Ok(())
    }
}

/// Error of [`AddJournal`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Journal`] with the same ISSN is registered already.
    ///
    /// [`Journal`]: crate::domain::Journal
    #[display("journal with ISSN `{_0}` is registered already")]
    DuplicateIssn(#[error(not(source))] journal::Issn),
}
