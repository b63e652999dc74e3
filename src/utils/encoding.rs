//! Text decoding for template sources.
//!
//! Templates are read as raw bytes and decoded as:
//! - BOM-marked UTF-8, UTF-16 LE or UTF-16 BE (BOM stripped)
//! - strict UTF-8 when no BOM is present
//! - lossy UTF-8 with replacement characters as a last resort

use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Read a text file, decoding it per [`decode_text`].
pub fn read_text_file(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes, path))
}

/// Decode `bytes` into a string. `origin` is only used for diagnostics.
pub fn decode_text(bytes: &[u8], origin: &Path) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            tracing::warn!(
                "Replaced invalid {} sequences in {}",
                encoding.name(),
                origin.display()
            );
        }
        return decoded.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::warn!("{} is not valid UTF-8; decoding lossily", origin.display());
            let (decoded, _, _) = UTF_8.decode(bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn origin() -> &'static Path {
        Path::new("test.mustache")
    }

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_text("Hello, {{name}} 🚀".as_bytes(), origin()), "Hello, {{name}} 🚀");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"Hi");
        assert_eq!(decode_text(&bytes, origin()), "Hi");
    }

    #[test]
    fn test_utf16_le_with_bom() {
        let mut bytes = vec![0xff, 0xfe];
        for unit in "Hi {{x}}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_text(&bytes, origin()), "Hi {{x}}");
    }

    #[test]
    fn test_utf16_be_with_bom() {
        let mut bytes = vec![0xfe, 0xff];
        for unit in "Hé".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_text(&bytes, origin()), "Hé");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(decode_text(&[b'a', 0xff, b'b'], origin()), "a\u{fffd}b");
    }

    #[test]
    fn test_read_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xef, 0xbb, 0xbf]).unwrap();
        file.write_all("Test content".as_bytes()).unwrap();
        file.flush().unwrap();

        assert_eq!(read_text_file(file.path()).unwrap(), "Test content");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_text_file(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
