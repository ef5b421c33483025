//! Base64 text encoding
//!
//! Standard alphabet with padding (RFC 4648 §4), the form accepted by
//! browsers in `data:` URLs and by `atob`.

use crate::error::DecodeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode bytes as padded standard base64
#[inline]
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 text
///
/// # Errors
/// Returns error if the text is not valid base64
#[inline]
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_wasm_header() {
        assert_eq!(encode(b"\x00asm\x01\x00\x00\x00"), "AGFzbQEAAAA=");
    }

    #[test]
    fn empty_input_encodes_to_empty_text() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_text() {
        assert!(matches!(decode("not base64!"), Err(DecodeError::Base64(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let text = encode(&bytes);
            prop_assert_eq!(decode(&text).unwrap(), bytes);
        }
    }
}
