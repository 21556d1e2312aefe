//! Runtime binding to the private MediaRemote framework.
//!
//! Apple ships no link-time stubs for private frameworks, so
//! `MRMediaRemoteSendCommand` cannot be a build-time import. This crate obtains
//! it the only way available: open the framework image through the platform
//! loader at runtime and look the symbol up by name.
//!
//! Both outcomes are first-class. [`send_command`] hands back
//! `Some(SendCommand)` when the capability exists and `None` when it does not
//! (image missing, symbol missing, or a platform without the framework).
//! Callers match on the `Option` before invoking; a null address is never
//! reachable through [`SendCommand`].
//!
//! ```no_run
//! if let Some(media) = media_remote_bind::send_command() {
//!     // 2 = kMRTogglePlayPause, no user info needed
//!     media.send(2, std::ptr::null_mut());
//! }
//! ```

mod bridge;

pub use bridge::{resolve_send_command, send_command, SendCommand};

#[cfg(test)]
mod tests;
