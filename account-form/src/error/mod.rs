//! Error types

mod config;
mod form;
mod snapshot;
mod widget;

pub use config::*;
pub use form::*;
pub use snapshot::*;
pub use widget::*;
