//! Domain definitions.

pub mod journal;
pub mod payment;
pub mod period;
pub mod subscriber;
pub mod subscription;

pub use self::{
    journal::Journal, payment::Ledger, period::Period,
    subscriber::Subscriber, subscription::Subscription,
};
