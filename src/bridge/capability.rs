use std::ffi::c_void;
use std::fmt;

/// Signature of `MRMediaRemoteSendCommand`: an unsigned command code plus an
/// opaque user-info pointer, returning nothing.
pub(crate) type RawSendCommand = unsafe extern "C" fn(command: u32, user_info: *mut c_void);

/// Typed handle to the resolved `MRMediaRemoteSendCommand` entry point.
///
/// A value of this type always wraps a non-null address found under the
/// expected symbol name. Nothing verifies that the address really has the
/// assumed signature; that platform contract is trusted by convention, and
/// [`SendCommand::send`] is the one audited place where the trust is exercised.
#[derive(Clone, Copy)]
pub struct SendCommand(RawSendCommand);

impl SendCommand {
    pub(crate) fn new(raw: RawSendCommand) -> Self {
        Self(raw)
    }

    /// Invoke the command entry point.
    ///
    /// `command` is a raw MediaRemote command code and `user_info` an opaque
    /// context pointer, null when the command needs none. This crate does not
    /// interpret either value; what the framework does with them is up to the
    /// framework.
    pub fn send(&self, command: u32, user_info: *mut c_void) {
        unsafe { (self.0)(command, user_info) }
    }
}

impl fmt::Debug for SendCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendCommand")
            .field(&(self.0 as *const ()))
            .finish()
    }
}
