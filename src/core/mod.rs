//! Core module - client configuration and process-wide infrastructure
//!
//! # Contents
//!
//! - [`ClientSettings`] - server address, request timeout, board layout and
//!   asset root, persisted as JSON in the platform config directory
//! - [`init_logging`] - installs the `tracing` subscriber
//! - [`CoreError`] - failures of the above

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{ClientSettings, LayoutSettings};
