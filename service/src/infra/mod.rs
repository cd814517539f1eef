//! Infrastructure behind the [`Registry`]: the report [`Gate`] and snapshot
//! persistence.
//!
//! [`Gate`]: gate::Gate
//! [`Registry`]: crate::Registry

pub mod gate;
pub mod snapshot;
