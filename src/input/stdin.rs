use crate::engine::Result;
use std::io::Read;
use tracing::debug;

/// Read the whole stream and return its decoded, trimmed text.
///
/// Invalid UTF-8 never fails the read: offending bytes are dropped and
/// decoding resumes with the next byte. Only I/O errors are returned.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    debug!(bytes = buffer.len(), "read input");

    let decoded = decode_lossy(&buffer);
    Ok(decoded.trim().to_string())
}

/// Decode UTF-8, dropping every byte sequence that cannot be decoded.
///
/// Unlike `String::from_utf8_lossy` nothing is substituted, so a stray byte
/// between two words simply disappears.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut dropped = 0usize;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // valid_up_to guarantees this prefix decodes
                if let Ok(valid) = std::str::from_utf8(valid) {
                    text.push_str(valid);
                }
                match err.error_len() {
                    Some(len) => {
                        dropped += len;
                        rest = &after[len..];
                    }
                    // Truncated sequence at end of input
                    None => {
                        dropped += after.len();
                        break;
                    }
                }
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped undecodable bytes");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode_lossy("ฉันกินข้าว".as_bytes()), "ฉันกินข้าว");
    }

    #[test]
    fn test_decode_drops_stray_byte() {
        let mut bytes = "แมว".as_bytes().to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("กิน".as_bytes());
        assert_eq!(decode_lossy(&bytes), "แมวกิน");
    }

    #[test]
    fn test_decode_drops_truncated_tail() {
        let mut bytes = "ข้าว".as_bytes().to_vec();
        // First two bytes of a three-byte Thai character
        bytes.extend_from_slice(&[0xE0, 0xB8]);
        assert_eq!(decode_lossy(&bytes), "ข้าว");
    }

    #[test]
    fn test_decode_keeps_literal_replacement_char() {
        assert_eq!(decode_lossy("a\u{FFFD}b".as_bytes()), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_only_invalid_bytes() {
        assert_eq!(decode_lossy(&[0xC0, 0xFE, 0xFF]), "");
    }

    #[test]
    fn test_read_text_trims_whitespace() {
        let text = read_text(Cursor::new("  \n\tสวัสดี ครับ \r\n".as_bytes())).unwrap();
        assert_eq!(text, "สวัสดี ครับ");
    }

    #[test]
    fn test_read_text_empty_stream() {
        let text = read_text(io::empty()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_read_text_propagates_io_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }

        assert!(read_text(Broken).is_err());
    }
}
