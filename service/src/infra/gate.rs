//! Report [`Gate`] definitions.

use derive_more::{Display, Error};
use tokio::sync::watch;

/// Single-slot flag marking "a report is currently running".
///
/// The gate is asymmetric: persistence operations wait until it goes idle,
/// while report generation never waits for persistence. It tracks a plain
/// boolean, not a count, so overlapping reports are unsupported and race on
/// the flag.
#[derive(Debug)]
pub struct Gate {
    /// Flag of a report being in flight, with waiter wakeup.
    running: watch::Sender<bool>,
}

impl Default for Gate {
    fn default() -> Self {
        let (running, _) = watch::channel(false);
        Self { running }
    }
}

impl Gate {
    /// Marks a report as running.
    pub fn begin(&self) {
        _ = self.running.send_replace(true);
    }

    /// Marks the running report as finished and wakes all waiters.
    pub fn end(&self) {
        _ = self.running.send_replace(false);
    }

    /// Indicates whether a report is running right now.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.running.borrow()
    }

    /// Waits until no report is running.
    ///
    /// The flag is re-checked on every wakeup. If the waiting future is
    /// dropped before the gate goes idle, the awaited operation is simply
    /// abandoned: nothing has been executed yet.
    ///
    /// # Errors
    ///
    /// Never errors in practice: the [`Gate`] outliving its waiters is the
    /// only way the wait can be interrupted.
    pub async fn wait_idle(&self) -> Result<(), Interrupted> {
        let mut rx = self.running.subscribe();
        rx.wait_for(|running| !*running)
            .await
            .map(drop)
            .map_err(|_| Interrupted)
    }
}

/// Error of a [`Gate`] waiter being interrupted before the gate went idle.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("interrupted while waiting for a running report to finish")]
pub struct Interrupted;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::Gate;

    #[tokio::test]
    async fn idle_gate_does_not_block() {
        let gate = Gate::default();
        assert!(!gate.is_busy());
        gate.wait_idle().await.unwrap();
    }

    #[tokio::test]
    async fn waiter_blocks_until_report_ends() {
        let gate = Gate::default();
        gate.begin();
        assert!(gate.is_busy());

        let blocked =
            tokio::time::timeout(Duration::from_millis(50), gate.wait_idle())
                .await;
        assert!(blocked.is_err(), "waiter must block while gate is busy");

        gate.end();
        tokio::time::timeout(Duration::from_millis(50), gate.wait_idle())
            .await
            .expect("waiter must be released once gate is idle")
            .unwrap();
    }

    #[tokio::test]
    async fn end_wakes_all_waiters() {
        let gate = std::sync::Arc::new(Gate::default());
        gate.begin();

        let waiters = (0..3)
            .map(|_| {
                let gate = std::sync::Arc::clone(&gate);
                tokio::spawn(async move { gate.wait_idle().await })
            })
            .collect::<Vec<_>>();

        gate.end();
        for waiter in waiters {
            waiter.await.unwrap().unwrap();
        }
    }
}
