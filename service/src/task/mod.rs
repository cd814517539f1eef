//! [`Task`] definitions.

pub mod report;

/// Background [`Task`] of the [`Registry`].
///
/// [`Registry`]: crate::Registry
pub use common::Handler as Task;

pub use self::report::Generate;
