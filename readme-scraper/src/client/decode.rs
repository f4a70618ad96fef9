//! Text decoding for raw file contents.

use bstr::ByteSlice;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A text encoding tried when decoding raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Plain UTF-8. A leading byte order mark is kept as `U+FEFF`.
    Utf8,
    /// UTF-8 with the byte order mark stripped.
    Utf8Sig,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    Latin1,
}

/// Encodings tried by [`decode_text`], in order.
pub const FALLBACK_ORDER: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Utf8Sig,
    TextEncoding::Latin1,
];

impl TextEncoding {
    /// Decodes `bytes`, returning `None` if they are not valid in this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => bytes.to_str().ok().map(str::to_owned),
            TextEncoding::Utf8Sig => bytes
                .strip_prefix(UTF8_BOM)
                .unwrap_or(bytes)
                .to_str()
                .ok()
                .map(str::to_owned),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Decodes raw content using [`FALLBACK_ORDER`].
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    decode_with(bytes, &FALLBACK_ORDER)
}

/// Decodes `bytes` with the first encoding in `order` that accepts them.
///
/// If none does, falls back to a lossy UTF-8 decode where invalid sequences
/// become `U+FFFD`. Never fails.
#[must_use]
pub fn decode_with(bytes: &[u8], order: &[TextEncoding]) -> String {
    order
        .iter()
        .find_map(|encoding| encoding.decode(bytes))
        .unwrap_or_else(|| bytes.to_str_lossy().into_owned())
}
