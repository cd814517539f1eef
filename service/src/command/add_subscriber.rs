//! [`Command`] for registering a new [`Subscriber`].

use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{subscriber, Subscriber},
    Registry,
};

use super::Command;

/// [`Command`] for registering a new [`Subscriber`].
#[derive(Clone, Debug)]
pub struct AddSubscriber {
    /// [`Subscriber`] to register.
    pub subscriber: Subscriber,
}

impl Command<AddSubscriber> for Registry {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddSubscriber,
    ) -> Result<Self::Ok, Self::Err> {
        let AddSubscriber { subscriber } = cmd;
        let key = subscriber.key();

        let mut state = self.state().write().await;
        if state.has_subscriber(&key) {
            drop(state);
            log::warn!("subscriber `{key}` is registered already");
            self.output().append(format!(
                "Subscriber '{}' at '{}' already exists.\n",
                key.name, key.address,
            ));
            return Err(tracerr::new!(ExecutionError::Duplicate(key)));
        }

        state.subscribers.push(subscriber);
        drop(state);

        self.output()
            .append(format!("Subscriber '{}' added.\n", key.name));
        Ok(())
    }
}

/// Error of [`AddSubscriber`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Subscriber`] with the same name and address is registered already.
    ///
    /// [`Subscriber`]: crate::domain::Subscriber
    #[display("subscriber `{_0}` is registered already")]
    Duplicate(#[error(not(source))] subscriber::Key),
}
