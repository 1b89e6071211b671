//! Binary content detection and the bit-string display fallback.
//!
//! The detector is a ratio check, not a content-type sniff: short or
//! mixed-encoding payloads can land on either side of the threshold.

/// Classifies byte strings as binary or printable by counting bytes that
/// would not display cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryHeuristic {
    /// Fraction of invisible bytes at or above which input counts as binary
    pub threshold: f64,
    /// Control bytes tolerated on top of printable ASCII, `\n` and `\t`
    pub allowed_controls: &'static [u8],
}

impl BinaryHeuristic {
    pub const DEFAULT_THRESHOLD: f64 = 0.30;

    /// Carriage return, form feed, backspace
    pub const DEFAULT_ALLOWED_CONTROLS: &'static [u8] = b"\r\x0c\x08";

    pub const fn new(threshold: f64, allowed_controls: &'static [u8]) -> Self {
        Self {
            threshold,
            allowed_controls,
        }
    }

    pub fn is_visible(&self, byte: u8) -> bool {
        (0x20..0x7f).contains(&byte)
            || byte == b'\n'
            || byte == b'\t'
            || self.allowed_controls.contains(&byte)
    }

    pub fn is_binary(&self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }

        let invisible = bytes.iter().filter(|&&b| !self.is_visible(b)).count();
        invisible as f64 / bytes.len() as f64 >= self.threshold
    }
}

impl Default for BinaryHeuristic {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_ALLOWED_CONTROLS)
    }
}

/// [`BinaryHeuristic::is_binary`] with the default settings
pub fn is_binary(bytes: &[u8]) -> bool {
    BinaryHeuristic::default().is_binary(bytes)
}

/// Spell out every byte as eight `0`/`1` characters, most significant bit
/// first.
pub fn bitset(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for bit in (0..8).rev() {
            out.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bits: &str) -> Vec<u8> {
        bits.as_bytes()
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &c| (acc << 1) | (c - b'0')))
            .collect()
    }

    #[test]
    fn test_empty_is_not_binary() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn test_printable_ascii_is_not_binary() {
        assert!(!is_binary(b"hello world"));
        assert!(!is_binary(b"line one\nline two\ttabbed"));
        assert!(!is_binary(b"windows\r\nline\x0cfeed\x08"));
    }

    #[test]
    fn test_control_heavy_input_is_binary() {
        assert!(is_binary(&[0x00]));
        assert!(is_binary(&[0xff]));
        assert!(is_binary(b"\x00\x01\x02abcdefg"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 3 of 10 bytes invisible: exactly 30%
        assert!(is_binary(b"\x00\x01\x02abcdefg"));
        // 2 of 10: below
        assert!(!is_binary(b"\x00\x01abcdefgh"));
    }

    #[test]
    fn test_default_constants_are_pinned() {
        let heuristic = BinaryHeuristic::default();
        assert_eq!(heuristic.threshold, 0.30);
        assert_eq!(heuristic.allowed_controls, &[0x0du8, 0x0c, 0x08]);
    }

    #[test]
    fn test_custom_heuristic() {
        let strict = BinaryHeuristic::new(0.01, b"");
        assert!(strict.is_binary(b"abc\rdef"));
        assert!(!BinaryHeuristic::default().is_binary(b"abc\rdef"));
    }

    #[test]
    fn test_non_ascii_utf8_counts_as_invisible() {
        // every byte of "é" is above 0x7e
        assert!(is_binary("é".as_bytes()));
    }

    #[test]
    fn test_bitset_msb_first() {
        assert_eq!(bitset(&[0xff]), "11111111");
        assert_eq!(bitset(&[0x01]), "00000001");
        assert_eq!(bitset(&[0x80, 0x0a]), "1000000000001010");
        assert_eq!(bitset(b""), "");
    }

    #[test]
    fn test_bitset_length_and_decoding() {
        let input: Vec<u8> = (0..=255).collect();
        let bits = bitset(&input);
        assert_eq!(bits.len(), input.len() * 8);
        assert_eq!(decode(&bits), input);
    }
}
