//! Dynamic binding to `MRMediaRemoteSendCommand`.
//!
//! The entry point is resolved through the platform loader rather than linked:
//! open the framework image with lazy binding, look up the exported symbol,
//! wrap the address in the typed [`SendCommand`] adapter. Every failure path
//! collapses to `None`; nothing in this module panics.

mod capability;
mod resolver;

pub use capability::SendCommand;
pub use resolver::{resolve_send_command, send_command};
