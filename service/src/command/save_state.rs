//! [`Command`] for persisting the whole [`Registry`] state to disk.

use std::path::PathBuf;

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{infra::snapshot, Registry};

use super::Command;

/// [`Command`] for persisting the whole [`Registry`] state to a file.
///
/// Waits for any in-flight report generation to finish first.
#[derive(Clone, Debug)]
pub struct SaveState {
    /// Path of the file to write the state to.
    pub destination: PathBuf,
}

impl Command<SaveState> for Registry {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SaveState) -> Result<Self::Ok, Self::Err> {
        let SaveState { destination } = cmd;

        if self.gate().is_busy() {
            self.output()
                .append("Save state waiting for report to finish...\n");
        }
        self.gate()
            .wait_idle()
            .await
            .map_err(|e| tracerr::new!(ExecutionError::from(e)))?;

        let state = self.state().read().await;
        let result = snapshot::write(&destination, &state).await;
        drop(state);
        if let Err(e) = result {
            log::error!("failed to save state: {e}");
            return Err(tracerr::new!(ExecutionError::Snapshot(e)));
        }

        self.output().append(format!(
            "Distributor state successfully saved to {}\n",
            destination.display(),
        ));
        Ok(())
    }
}

/// Error of [`SaveState`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Waiting for report generation was interrupted.
    #[display("interrupted while waiting for report generation: {_0}")]
    Interrupted(crate::infra::gate::Interrupted),

    /// Failed to write the snapshot file.
    #[display("failed to write snapshot: {_0}")]
    #[from(ignore)]
    Snapshot(snapshot::Error),
}
