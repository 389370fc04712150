//! Loading the text to compress.

use std::fs;
use std::io;
use std::path::Path;

/// Splits `raw` on `\n` and rejoins every segment with one `\n` between
/// neighbours. A final terminator yields a trailing empty line, so it is kept.
/// Carriage returns are kept as data.
pub fn normalize_lines(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, line) in raw.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(line);
    }
    out
}

pub fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let raw = fs::read(path)?;
    Ok(normalize_lines(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HuffmanCodec;

    #[test]
    fn test_keeps_final_terminator() {
        assert_eq!(normalize_lines(b"one\ntwo\n"), b"one\ntwo\n");
        assert_eq!(normalize_lines(b"one\ntwo"), b"one\ntwo");
        assert_eq!(normalize_lines(b"one\n\n"), b"one\n\n");
    }

    #[test]
    fn test_terminated_and_unterminated_lines_differ() {
        let terminated = HuffmanCodec::compress(&normalize_lines(b"a\n")).unwrap();
        let bare = HuffmanCodec::compress(&normalize_lines(b"a")).unwrap();
        assert_ne!(terminated.serialize().unwrap(), bare.serialize().unwrap());
        assert_eq!(HuffmanCodec::decode(&terminated).unwrap(), b"a\n");
    }

    #[test]
    fn test_keeps_carriage_returns() {
        assert_eq!(normalize_lines(b"a\r\nb\r\n"), b"a\r\nb\r\n");
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(normalize_lines(b"").is_empty());
        assert_eq!(normalize_lines(b"\n"), b"\n");
    }
}
