//! Thai Character Cluster (TCC) boundaries.
//!
//! A TCC is the smallest run of Thai text that must never be split by a
//! tokenizer (rules after Theeramunkong et al. 2000). This module computes
//! the byte offsets at which a cluster ends. Those offsets are legal token
//! edges; they are not word boundaries.

use crate::codepoint::decode_at;

/// Classes of Thai codepoints relevant to cluster building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThaiCharClass {
    /// Vowel written before its consonant (เ แ โ ใ ไ)
    LeadingVowel,
    /// Consonant (ก..ฮ)
    Consonant,
    /// Vowel following the consonant (ะ ั า ำ)
    FollowVowel,
    /// Vowel written above the consonant (ิ ี ึ ื)
    AboveVowel,
    /// Vowel written below the consonant (ุ ู)
    BelowVowel,
    /// Tone mark (่ ้ ๊ ๋)
    ToneMark,
    /// Combining sign (์ ํ ๎)
    Sign,
    /// Any other codepoint of the Thai block (digits, ฯ, ๆ, ็, ...)
    OtherThai,
    /// Outside the Thai block
    NonThai,
}

impl ThaiCharClass {
    /// Classify a codepoint
    pub fn of(cp: u32) -> Self {
        match cp {
            0x0E40..=0x0E44 => ThaiCharClass::LeadingVowel,
            0x0E01..=0x0E2E => ThaiCharClass::Consonant,
            0x0E30..=0x0E33 => ThaiCharClass::FollowVowel,
            0x0E34..=0x0E37 => ThaiCharClass::AboveVowel,
            0x0E38..=0x0E39 => ThaiCharClass::BelowVowel,
            0x0E48..=0x0E4B => ThaiCharClass::ToneMark,
            0x0E4C..=0x0E4E => ThaiCharClass::Sign,
            0x0E00..=0x0E7F => ThaiCharClass::OtherThai,
            _ => ThaiCharClass::NonThai,
        }
    }

    /// Marks that attach to the end of a leading-vowel cluster
    fn trails_leading_vowel(self) -> bool {
        matches!(
            self,
            ThaiCharClass::ToneMark
                | ThaiCharClass::Sign
                | ThaiCharClass::AboveVowel
                | ThaiCharClass::BelowVowel
        )
    }

    /// Marks that attach to the end of a consonant cluster
    fn trails_consonant(self) -> bool {
        self.trails_leading_vowel() || self == ThaiCharClass::FollowVowel
    }
}

/// Offset just past the codepoint at `pos` when `accept` admits its class
fn take(text: &[u8], pos: usize, accept: impl Fn(ThaiCharClass) -> bool) -> Option<usize> {
    decode_at(text, pos)
        .filter(|cp| accept(ThaiCharClass::of(cp.value)))
        .map(|cp| pos + cp.len)
}

/// Length in bytes of the cluster starting at `start`
pub fn cluster_len(text: &[u8], start: usize) -> usize {
    let Some(first) = decode_at(text, start) else {
        return 0;
    };
    let mut pos = start + first.len;

    let trailing: fn(ThaiCharClass) -> bool = match ThaiCharClass::of(first.value) {
        ThaiCharClass::LeadingVowel => {
            match take(text, pos, |c| c == ThaiCharClass::Consonant) {
                Some(next) => pos = next,
                // A leading vowel without its consonant stands alone
                None => return pos - start,
            }
            ThaiCharClass::trails_leading_vowel
        }
        ThaiCharClass::Consonant => ThaiCharClass::trails_consonant,
        _ => return first.len,
    };

    if let Some(next) = take(text, pos, |c| c == ThaiCharClass::Consonant) {
        pos = next;
    }
    while let Some(next) = take(text, pos, trailing) {
        pos = next;
    }

    pos - start
}

/// Ascending byte offsets at which each cluster of `text` ends.
///
/// The last offset always equals `text.len()` for non-empty input.
pub fn boundaries(text: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        pos += cluster_len(text, pos);
        positions.push(pos);
    }

    positions
}

/// Split `text` into its Thai Character Clusters
pub fn segment(text: &str) -> Vec<&str> {
    let mut start = 0;
    boundaries(text.as_bytes())
        .into_iter()
        .map(|end| {
            let cluster = &text[start..end];
            start = end;
            cluster
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ThaiCharClass::of('เ' as u32), ThaiCharClass::LeadingVowel);
        assert_eq!(ThaiCharClass::of('ก' as u32), ThaiCharClass::Consonant);
        assert_eq!(ThaiCharClass::of('ฮ' as u32), ThaiCharClass::Consonant);
        assert_eq!(ThaiCharClass::of('ั' as u32), ThaiCharClass::FollowVowel);
        assert_eq!(ThaiCharClass::of('ี' as u32), ThaiCharClass::AboveVowel);
        assert_eq!(ThaiCharClass::of('ุ' as u32), ThaiCharClass::BelowVowel);
        assert_eq!(ThaiCharClass::of('่' as u32), ThaiCharClass::ToneMark);
        assert_eq!(ThaiCharClass::of('์' as u32), ThaiCharClass::Sign);
        assert_eq!(ThaiCharClass::of('๑' as u32), ThaiCharClass::OtherThai);
        assert_eq!(ThaiCharClass::of('a' as u32), ThaiCharClass::NonThai);
    }

    #[test]
    fn test_consonant_clusters() {
        assert_eq!(segment("ฉัน"), vec!["ฉั", "น"]);
        assert_eq!(segment("ยน"), vec!["ยน"]);
        assert_eq!(segment("ที่"), vec!["ที่"]);
        assert_eq!(segment("กำ"), vec!["กำ"]);
    }

    #[test]
    fn test_leading_vowel_clusters() {
        assert_eq!(segment("โรงเรียน"), vec!["โรง", "เรี", "ยน"]);
        assert_eq!(segment("ไป"), vec!["ไป"]);
        // Follow vowels do not attach to leading-vowel clusters
        assert_eq!(segment("เกา"), vec!["เก", "า"]);
    }

    #[test]
    fn test_leading_vowel_alone() {
        assert_eq!(segment("เ"), vec!["เ"]);
        assert_eq!(segment("เa"), vec!["เ", "a"]);
        assert_eq!(segment("เเก"), vec!["เ", "เก"]);
    }

    #[test]
    fn test_non_thai_single_codepoints() {
        assert_eq!(segment("ab 1"), vec!["a", "b", " ", "1"]);
        assert_eq!(segment("ๆ"), vec!["ๆ"]);
    }

    #[test]
    fn test_boundaries() {
        let text = "ฉันไป".as_bytes();
        let positions = boundaries(text);
        assert_eq!(positions, vec![6, 9, 15]);
        assert_eq!(*positions.last().unwrap(), text.len());
        assert!(boundaries(b"").is_empty());
    }

    #[test]
    fn test_boundaries_malformed() {
        let positions = boundaries(&[0xE0, 0xB8, b'a']);
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
