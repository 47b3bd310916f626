// Width of a UTF-8 sequence by its leading byte, 0 for bytes that cannot start one.
#[inline]
pub(crate) fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Returns the number of bytes taken by the first character of `bytes`.
///
/// A malformed sequence counts as a single byte.
/// Returns 0 only if `bytes` is empty.
#[inline]
pub(crate) fn first_char_len(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else {
        return 0;
    };

    let width = utf8_char_width(lead);
    if width > 1 && bytes.len() >= width && std::str::from_utf8(&bytes[..width]).is_ok() {
        width
    } else {
        1
    }
}

/// Returns the number of bytes taken by the last character of `bytes`.
///
/// A malformed sequence counts as a single byte.
/// Returns 0 only if `bytes` is empty.
#[inline]
pub(crate) fn last_char_len(bytes: &[u8]) -> usize {
    let n = bytes.len();
    for width in 1..=n.min(4) {
        let b = bytes[n - width];
        if !is_continuation(b) {
            if width > 1 && utf8_char_width(b) == width && std::str::from_utf8(&bytes[n - width..]).is_ok() {
                return width;
            }
            return 1;
        }
    }

    n.min(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_char_len() {
        assert_eq!(first_char_len(b""), 0);
        assert_eq!(first_char_len(b"abc"), 1);
        assert_eq!(first_char_len("é!".as_bytes()), 2);
        assert_eq!(first_char_len("中文".as_bytes()), 3);
        assert_eq!(first_char_len("🦀".as_bytes()), 4);
    }

    #[test]
    fn test_first_char_len_malformed() {
        assert_eq!(first_char_len(&[0xFF, b'a']), 1);
        assert_eq!(first_char_len(&[0x80, 0x80]), 1);
        // truncated 3-byte sequence
        assert_eq!(first_char_len(&[0xE4, 0xB8]), 1);
        // overlong encoding
        assert_eq!(first_char_len(&[0xC0, 0xAF]), 1);
    }

    #[test]
    fn test_last_char_len() {
        assert_eq!(last_char_len(b""), 0);
        assert_eq!(last_char_len(b"abc"), 1);
        assert_eq!(last_char_len("!é".as_bytes()), 2);
        assert_eq!(last_char_len("中文".as_bytes()), 3);
        assert_eq!(last_char_len("a🦀".as_bytes()), 4);
    }

    #[test]
    fn test_last_char_len_malformed() {
        assert_eq!(last_char_len(&[b'a', 0x80]), 1);
        assert_eq!(last_char_len(&[0x80, 0x80, 0x80, 0x80, 0x80]), 1);
        // lead byte promises 3 bytes but only 2 are present
        assert_eq!(last_char_len(&[b'a', 0xE4, 0xB8]), 1);
        assert_eq!(last_char_len(&[0xFF]), 1);
    }
}
