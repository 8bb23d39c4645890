//! Paced replay of single-value insert/delete actions against an external UI.
//!
//! A [`Sequencer`] writes each value into the kind's input field, paces, and
//! activates the kind's control, one value at a time and strictly in order.
//! The document being driven is reached through [`ports::TargetPort`]; pacing
//! is supplied by [`ports::SettlePort`].

pub mod api;
pub mod errors;
pub mod model;
pub mod policy;
pub mod ports;
pub mod settle;

mod runner;

pub use api::{Sequencer, SequencerBuilder};
pub use errors::SequencerError;
pub use model::{
    ActionKind, ActionRequest, Order, RunId, SequenceReport, TargetElement, Values,
};
pub use policy::SequencerPolicy;
pub use settle::{FixedDelay, NullSettle};
