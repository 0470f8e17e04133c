//! Attached picture handling
//!
//! Sniffs the media type of user-selected bytes and encodes accepted
//! pictures as `data:` URIs, the form they are persisted and displayed in.
//! Anything that does not sniff as an image is rejected; callers treat the
//! rejection as a silent no-op.

use base64::Engine;

use crate::error::{CardError, CardResult};

/// Sniff the media type of picture bytes.
///
/// Uses magic-byte detection, not file extensions; returns the MIME type
/// (`image/png`, `image/jpeg`, ...) or [`CardError::UnsupportedMedia`].
pub fn sniff_mime(bytes: &[u8]) -> CardResult<&'static str> {
    let format = image::guess_format(bytes)
        .map_err(|_| CardError::UnsupportedMedia("not a recognized image format".to_string()))?;
    Ok(format.to_mime_type())
}

/// Encode picture bytes as a data URI, validating them first.
///
/// The result round-trips through storage unchanged and is handed straight
/// to an `img` element's `src`.
pub fn to_data_uri(bytes: &[u8]) -> CardResult<String> {
    let mime = sniff_mime(bytes)?;
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, payload))
}
