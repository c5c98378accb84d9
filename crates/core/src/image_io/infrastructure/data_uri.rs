use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

const DATA_URI_SCHEME: &str = "data:image/";

lazy_static! {
    static ref DATA_URI_PREFIX_RE: Regex = Regex::new(r"(?m)data:image/(png|jpe?g);base64,").unwrap();
}

/// Removes every `data:image/<png|jpeg|jpg>;base64,` header from `text`.
///
/// Text that does not start with a data URI is returned as is.
pub fn strip_prefix(text: &str) -> Cow<'_, str> {
    if text.starts_with(DATA_URI_SCHEME) {
        DATA_URI_PREFIX_RE.replace_all(text, "")
    } else {
        Cow::Borrowed(text)
    }
}

/// Decodes a base64 payload, with or without a data URI header.
pub fn decode(text: &str) -> Result<Vec<u8>, RoundError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RoundError::EmptyInput);
    }
    let payload = strip_prefix(text);
    Ok(STANDARD.decode(payload.trim())?)
}

/// Frames encoded image bytes as a data URI. No trailing newline.
pub fn encode(format: ImageFormat, bytes: &[u8]) -> String {
    let mut out = format.data_uri_prefix();
    STANDARD.encode_string(bytes, &mut out);
    out
}
