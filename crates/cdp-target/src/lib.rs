//! Chromium DevTools Protocol target environment for the vizdriver sequencer.
//!
//! [`CdpSession`] owns the browser connection, [`CdpTarget`] implements the
//! sequencer's target port against an open page, and [`ExpressionSettle`]
//! paces steps on a page-provided completion signal.

pub mod config;
pub mod script;

mod session;
mod settle;
mod target;

pub use config::{CdpConfig, TargetLayout};
pub use session::CdpSession;
pub use settle::ExpressionSettle;
pub use target::CdpTarget;
