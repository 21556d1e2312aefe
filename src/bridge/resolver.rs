use once_cell::sync::Lazy;

use super::capability::SendCommand;
#[cfg(unix)]
use super::capability::RawSendCommand;

/// Filesystem path of the private framework image. Only exists on Apple
/// platforms; everywhere else opening it fails and the capability is absent.
pub(crate) const MEDIA_REMOTE_IMAGE: &str =
    "/System/Library/PrivateFrameworks/MediaRemote.framework/MediaRemote";

/// Exported symbol name of the send-command entry point.
pub(crate) const SEND_COMMAND_SYMBOL: &[u8] = b"MRMediaRemoteSendCommand";

/// Why a resolution attempt came up empty. Logged for diagnosis; the public
/// surface does not distinguish the two causes, both are just "unavailable".
#[cfg(unix)]
#[derive(Debug, thiserror::Error)]
pub(crate) enum BindError {
    #[error("could not open code image: {0}")]
    ImageUnavailable(#[source] libloading::Error),
    #[error("symbol not exported by image: {0}")]
    SymbolMissing(#[source] libloading::Error),
}

/// Open `image` with lazy binding and pull `symbol` out of it as a function
/// pointer. The address is reinterpreted, not verified; callers must only hand
/// this a symbol whose true signature matches [`RawSendCommand`] before calling
/// through the result.
#[cfg(unix)]
fn resolve_in_image(image: &str, symbol: &[u8]) -> Result<RawSendCommand, BindError> {
    use libloading::os::unix::{Library, Symbol, RTLD_LAZY, RTLD_LOCAL};

    let library = unsafe { Library::open(Some(image), RTLD_LAZY | RTLD_LOCAL) }
        .map_err(BindError::ImageUnavailable)?;
    let raw = {
        let entry: Symbol<RawSendCommand> =
            unsafe { library.get(symbol) }.map_err(BindError::SymbolMissing)?;
        *entry
    };
    // The capability lives as long as the process, so the image stays mapped.
    // Dropping the handle would dlclose it out from under the resolved pointer.
    std::mem::forget(library);
    Ok(raw)
}

/// Load-and-resolve the `MRMediaRemoteSendCommand` capability from scratch.
///
/// Every call goes back to the platform loader; already-mapped images are
/// de-duplicated by the loader itself, not by this function. All failures
/// (image missing, symbol missing, unsupported platform) collapse to `None`.
/// Most callers want the cached [`send_command`] instead.
pub fn resolve_send_command() -> Option<SendCommand> {
    #[cfg(unix)]
    {
        match resolve_in_image(MEDIA_REMOTE_IMAGE, SEND_COMMAND_SYMBOL) {
            Ok(raw) => {
                log::debug!("resolved MRMediaRemoteSendCommand in {}", MEDIA_REMOTE_IMAGE);
                Some(SendCommand::new(raw))
            }
            Err(e) => {
                log::debug!("MediaRemote send-command capability unavailable: {}", e);
                None
            }
        }
    }
    #[cfg(not(unix))]
    {
        log::debug!("MediaRemote is not provided on this platform");
        None
    }
}

static RESOLVED: Lazy<Option<SendCommand>> = Lazy::new(resolve_send_command);

/// The `MRMediaRemoteSendCommand` capability, resolved once per process.
///
/// First use performs the load-and-resolve; the outcome, present or absent, is
/// cached for the process lifetime. The underlying image is process-stable, so
/// a second resolution could never answer differently.
pub fn send_command() -> Option<SendCommand> {
    *RESOLVED
}
