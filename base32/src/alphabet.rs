//! The fixed RFC 4648 alphabet and the byte classification used on decode.
//!
//! Every possible input byte is classified up front into a [`Symbol`], so a
//! symbol whose value is zero (`A`) can never be mistaken for an invalid one.

/// RFC 4648 Base32 alphabet. Index is the 5-bit value.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Characters that are easy to misread, and the symbol they stand for.
pub const CONFUSABLES: [(u8, u8); 3] = [(b'0', b'O'), (b'1', b'L'), (b'8', b'B')];

/// Formatting characters a human may insert. They carry no data.
pub const SEPARATORS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', b'-'];

/// What a single input byte means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An alphabet symbol with its 5-bit value.
    Value(u8),
    /// Whitespace or hyphen, skipped.
    Separator,
    /// NUL or `=`, terminates the input.
    End,
    Invalid,
}

/// Classification of all 256 byte values.
pub(crate) const SYMBOLS: [Symbol; 256] = build_symbol_table();

const fn build_symbol_table() -> [Symbol; 256] {
    let mut table = [Symbol::Invalid; 256];

    let mut i = 0;
    while i < ALPHABET.len() {
        let upper = ALPHABET[i];
        table[upper as usize] = Symbol::Value(i as u8);
        table[upper.to_ascii_lowercase() as usize] = Symbol::Value(i as u8);
        i += 1;
    }

    let mut i = 0;
    while i < CONFUSABLES.len() {
        let (from, to) = CONFUSABLES[i];
        table[from as usize] = table[to as usize];
        i += 1;
    }

    let mut i = 0;
    while i < SEPARATORS.len() {
        table[SEPARATORS[i] as usize] = Symbol::Separator;
        i += 1;
    }

    table[0] = Symbol::End;
    table[b'=' as usize] = Symbol::End;

    table
}

/// Classifies one input byte.
#[inline]
pub fn classify(byte: u8) -> Symbol {
    SYMBOLS[byte as usize]
}

/// Returns the alphabet symbol for a 5-bit value.
#[inline]
pub(crate) fn symbol(index: u32) -> u8 {
    ALPHABET[(index & 0x1f) as usize]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_alphabet_is_32_distinct_symbols() {
        let distinct: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 32);
    }

    #[test]
    fn test_alphabet_round_trips_through_classify() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(classify(c), Symbol::Value(i as u8));
            assert_eq!(symbol(i as u32), c);
        }
    }

    #[rstest(
        input,
        expected,
        case(b'A', Symbol::Value(0)),
        case(b'a', Symbol::Value(0)),
        case(b'Z', Symbol::Value(25)),
        case(b'z', Symbol::Value(25)),
        case(b'2', Symbol::Value(26)),
        case(b'7', Symbol::Value(31)),
        case(b'0', Symbol::Value(14)),
        case(b'1', Symbol::Value(11)),
        case(b'8', Symbol::Value(1)),
        case(b' ', Symbol::Separator),
        case(b'\t', Symbol::Separator),
        case(b'\r', Symbol::Separator),
        case(b'\n', Symbol::Separator),
        case(b'-', Symbol::Separator),
        case(b'=', Symbol::End),
        case(0x00, Symbol::End),
        case(b'9', Symbol::Invalid),
        case(b'!', Symbol::Invalid),
        case(b'_', Symbol::Invalid),
        case(0x80, Symbol::Invalid),
        case(0xff, Symbol::Invalid)
    )]
    fn test_classify(input: u8, expected: Symbol) {
        assert_eq!(expected, classify(input));
    }

    #[test]
    fn test_confusables_match_their_targets() {
        for (from, to) in CONFUSABLES {
            assert_eq!(classify(from), classify(to));
            assert_eq!(classify(from), classify(to.to_ascii_lowercase()));
        }
    }
}
