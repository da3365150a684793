//! UTF-8 decoding and character classes.
//!
//! Decoding works on raw bytes and never fails: a malformed or truncated
//! sequence is returned as a single byte whose value is the codepoint.

/// First codepoint of the Thai block
pub const THAI_START: u32 = 0x0E00;
/// Last codepoint of the Thai block
pub const THAI_END: u32 = 0x0E7F;

/// A decoded codepoint and the number of bytes it occupies in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint {
    /// Unicode scalar value (or the raw byte for malformed input)
    pub value: u32,
    /// Encoded length in bytes (1..=4)
    pub len: usize,
}

impl Codepoint {
    /// Check if this codepoint lies in the Thai block (U+0E00..U+0E7F)
    pub fn is_thai(&self) -> bool {
        is_thai(self.value)
    }
}

/// Sequence length announced by a UTF-8 leading byte
fn sequence_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Decode the codepoint at the start of `bytes`.
///
/// Returns `None` only for an empty slice.
pub fn decode(bytes: &[u8]) -> Option<Codepoint> {
    let lead = *bytes.first()?;
    let len = sequence_len(lead);

    let raw = Codepoint {
        value: lead as u32,
        len: 1,
    };

    if len == 1 {
        return Some(raw);
    }
    if bytes.len() < len || bytes[1..len].iter().any(|b| b & 0xC0 != 0x80) {
        return Some(raw);
    }

    let head = match len {
        2 => (lead & 0x1F) as u32,
        3 => (lead & 0x0F) as u32,
        _ => (lead & 0x07) as u32,
    };
    let value = bytes[1..len]
        .iter()
        .fold(head, |acc, b| (acc << 6) | (b & 0x3F) as u32);

    Some(Codepoint { value, len })
}

/// Decode the codepoint at byte offset `pos` of `text`
pub fn decode_at(text: &[u8], pos: usize) -> Option<Codepoint> {
    text.get(pos..).and_then(decode)
}

/// Iterator over `(byte offset, codepoint)` pairs of a byte slice
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for Codepoints<'_> {
    type Item = (usize, Codepoint);

    fn next(&mut self) -> Option<Self::Item> {
        let cp = decode_at(self.bytes, self.pos)?;
        let at = self.pos;
        self.pos += cp.len;
        Some((at, cp))
    }
}

/// Walk the codepoints of `bytes` from the start
pub fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints { bytes, pos: 0 }
}

/// Check if a codepoint lies in the Thai block
pub fn is_thai(cp: u32) -> bool {
    (THAI_START..=THAI_END).contains(&cp)
}

/// ASCII letter (a-z, A-Z)
pub fn is_ascii_letter(cp: u32) -> bool {
    matches!(cp, 0x41..=0x5A | 0x61..=0x7A)
}

/// ASCII digit (0-9)
pub fn is_ascii_digit(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39)
}

/// Horizontal whitespace grouped into a single run (space, tab)
pub fn is_blank(cp: u32) -> bool {
    cp == ' ' as u32 || cp == '\t' as u32
}

/// Anything outside the Thai block, including ASCII letters, digits and whitespace
pub fn is_non_thai(cp: u32) -> bool {
    !is_thai(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let cp = decode(b"abc").unwrap();
        assert_eq!(cp, Codepoint { value: 'a' as u32, len: 1 });
    }

    #[test]
    fn test_decode_thai() {
        let cp = decode("ก".as_bytes()).unwrap();
        assert_eq!(cp.value, 0x0E01);
        assert_eq!(cp.len, 3);
        assert!(cp.is_thai());
    }

    #[test]
    fn test_decode_multibyte_forms() {
        assert_eq!(decode("é".as_bytes()).unwrap(), Codepoint { value: 0xE9, len: 2 });
        assert_eq!(
            decode("😀".as_bytes()).unwrap(),
            Codepoint { value: 0x1F600, len: 4 }
        );
    }

    #[test]
    fn test_decode_malformed_lead() {
        // Stray continuation byte
        assert_eq!(decode(&[0x80, b'a']).unwrap(), Codepoint { value: 0x80, len: 1 });
        // 0xFF never starts a sequence
        assert_eq!(decode(&[0xFF]).unwrap(), Codepoint { value: 0xFF, len: 1 });
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = "ก".as_bytes();
        assert_eq!(decode(&bytes[..2]).unwrap(), Codepoint { value: 0xE0, len: 1 });
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(b"").is_none());
        assert!(decode_at(b"a", 1).is_none());
        assert!(decode_at(b"a", 5).is_none());
    }

    #[test]
    fn test_codepoints_offsets() {
        let offsets: Vec<usize> = codepoints("aกb".as_bytes()).map(|(at, _)| at).collect();
        assert_eq!(offsets, vec![0, 1, 4]);

        let malformed: Vec<u32> = codepoints(&[b'x', 0xC3]).map(|(_, cp)| cp.value).collect();
        assert_eq!(malformed, vec!['x' as u32, 0xC3]);
    }

    #[test]
    fn test_classes() {
        assert!(is_ascii_letter('Q' as u32));
        assert!(!is_ascii_letter('1' as u32));
        assert!(is_ascii_digit('7' as u32));
        assert!(is_blank('\t' as u32));
        assert!(!is_blank('\n' as u32));
        assert!(is_non_thai('\n' as u32));
        assert!(is_non_thai('(' as u32));
        assert!(!is_non_thai(0x0E40));
    }
}
