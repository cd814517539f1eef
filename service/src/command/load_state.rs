//! [`Command`] for loading the whole [`Registry`] state from disk.

use std::path::PathBuf;

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{infra::snapshot, Registry, State};

use super::Command;

/// [`Command`] for replacing the whole [`Registry`] state with the contents
/// of a file.
///
/// Waits for any in-flight report generation to finish first. On any
/// loading failure the state is reset to empty collections rather than left
/// as it was.
#[derive(Clone, Debug)]
pub struct LoadState {
    /// Path of the file to read the state from.
    pub source: PathBuf,
}

impl Command<LoadState> for Registry {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: LoadState) -> Result<Self::Ok, Self::Err> {
        let LoadState { source } = cmd;

        if self.gate().is_busy() {
            self.output()
                .append("Load state waiting for report to finish...\n");
        }
        self.gate()
            .wait_idle()
            .await
            .map_err(|e| tracerr::new!(ExecutionError::from(e)))?;

        match snapshot::read(&source).await {
            Ok(new_state) => {
                *self.state().write().await = new_state;
                self.output().append(format!(
                    "Distributor state successfully loaded from {}\n",
                    source.display(),
                ));
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load state: {e}");
                *self.state().write().await = State::default();
                if e.is_not_found() {
                    self.output().append(
                        "State file not found. Starting with empty \
                         state.\n",
                    );
                }
                self.output().append(
                    "Initialized empty collections due to loading error.\n",
                );
                Err(tracerr::new!(ExecutionError::Snapshot(e)))
            }
        }
    }
}

/// Error of [`LoadState`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Waiting for report generation was interrupted.
    #[display("interrupted while waiting for report generation: {_0}")]
    Interrupted(crate::infra::gate::Interrupted),

    /// Failed to read the snapshot file.
    #[display("failed to read snapshot: {_0}")]
    #[from(ignore)]
    Snapshot(snapshot::Error),
}
