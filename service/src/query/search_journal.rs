//! [`Query`] for looking up a [`Journal`] by its ISSN.

use std::convert::Infallible;

use crate::{
    domain::{journal, Journal},
    Registry,
};

use super::Query;

/// [`Query`] for looking up a [`Journal`] by its ISSN.
#[derive(Clone, Debug)]
pub struct SearchJournal {
    /// ISSN of the [`Journal`] to look up.
    pub issn: journal::Issn,
}

impl Query<SearchJournal> for Registry {
    type Ok = Option<Journal>;
    type Err = Infallible;

    async fn execute(&self, qry: SearchJournal) -> Result<Self::Ok, Self::Err> {
        let state = self.state().read().await;
        Ok(state.journals.get(&qry.issn).cloned())
    }
}
