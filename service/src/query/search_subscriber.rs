//! [`Query`] for looking up a [`Subscriber`] by name.

use std::convert::Infallible;

use crate::{
    domain::{subscriber, Subscriber},
    Registry,
};

use super::Query;

/// [`Query`] for looking up a [`Subscriber`] by name.
///
/// Names are not unique; the earliest registered match wins.
#[derive(Clone, Debug)]
pub struct SearchSubscriber {
    /// Name of the [`Subscriber`] to look up.
    pub name: subscriber::Name,
}

impl Query<SearchSubscriber> for Registry {
    type Ok = Option<Subscriber>;
    type Err = Infallible;

    async fn execute(
        &self,
        qry: SearchSubscriber,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state().read().await;
        Ok(state
            .subscribers
            .iter()
            .find(|s| s.name() == &qry.name)
            .cloned())
    }
}
