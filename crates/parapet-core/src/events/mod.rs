//! Scan event system.
//!
//! Callers observe a scan through a `ScanEventHandler` registered on the
//! engine at construction time. There is no ambient verbosity flag: all
//! diagnostics flow through handlers or `tracing`.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ScanEventHandler;
pub use types::*;
