use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use b32_codec::decoder::{DecodableFrom, Decoder};
use b32_codec::encoder::{EncodableTo, Encoder};

use crate::alphabet::{ALPHABET, Symbol, classify};
use crate::error::Error;

/// Canonical Base32 text: uppercase alphabet symbols, no separators, no
/// padding.
///
/// Parsing accepts the same lenient input as [`crate::decode`] and keeps
/// only the symbols, so two spellings of the same code compare equal.
///
/// ```
/// use base32::Encoded;
///
/// let typed: Encoded = "mzxw-60".parse().unwrap();
/// assert_eq!(typed.as_str(), "MZXW6O");
/// assert_eq!(typed, "MZXW6O".parse::<Encoded>().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoded {
    text: String,
}

impl Encoded {
    /// Normalizes human-entered text into canonical form.
    ///
    /// Stops at NUL or the first `=`.
    pub fn normalize(input: &[u8]) -> Result<Self, Error> {
        let mut text = String::with_capacity(input.len());
        for (position, &byte) in input.iter().enumerate() {
            match classify(byte) {
                Symbol::Value(value) => text.push(char::from(ALPHABET[value as usize])),
                Symbol::Separator => {}
                Symbol::End => break,
                Symbol::Invalid => {
                    return Err(Error::DecodeError {
                        symbol: byte,
                        position,
                    });
                }
            }
        }
        Ok(Encoded { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Splits the text into `-`-separated groups of `size` symbols.
    ///
    /// Hyphens are separators, so the grouped form decodes to the same
    /// bytes. A `size` of zero returns the text unchanged.
    ///
    /// ```
    /// let code = base32::Encoded::from_bytes(b"foobar").unwrap();
    /// assert_eq!(code.grouped(4), "MZXW-6YTB-OI");
    /// ```
    pub fn grouped(&self, size: usize) -> String {
        if size == 0 {
            return self.text.clone();
        }
        let mut grouped = String::with_capacity(self.text.len() + self.text.len() / size);
        for (i, c) in self.text.chars().enumerate() {
            if i > 0 && i % size == 0 {
                grouped.push('-');
            }
            grouped.push(c);
        }
        grouped
    }

    /// Encodes raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        crate::encode::encode(data).map(|text| Encoded { text })
    }
}

impl Display for Encoded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Encoded {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoded::normalize(s.as_bytes())
    }
}

impl DecodableFrom<Encoded> for Vec<u8> {}

impl Decoder<Encoded, Vec<u8>> for Encoded {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        crate::decode::decode(self.text.as_bytes())
    }
}

impl DecodableFrom<String> for Encoded {}

impl Decoder<String, Encoded> for String {
    type Error = Error;

    fn decode(&self) -> Result<Encoded, Self::Error> {
        Encoded::from_str(self)
    }
}

impl DecodableFrom<&str> for Encoded {}

impl Decoder<&str, Encoded> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Encoded, Self::Error> {
        Encoded::from_str(self)
    }
}

impl EncodableTo<Vec<u8>> for Encoded {}

impl Encoder<Vec<u8>, Encoded> for Vec<u8> {
    type Error = Error;

    fn encode(&self) -> Result<Encoded, Self::Error> {
        Encoded::from_bytes(self)
    }
}

impl EncodableTo<&[u8]> for Encoded {}

impl Encoder<&[u8], Encoded> for &[u8] {
    type Error = Error;

    fn encode(&self) -> Result<Encoded, Self::Error> {
        Encoded::from_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use b32_codec::decoder::Decoder;
    use b32_codec::encoder::Encoder;
    use rstest::rstest;

    use crate::Encoded;
    use crate::error::Error;

    #[rstest(
        input,
        expected,
        case("MZXW6", "MZXW6"),
        case("mzxw6", "MZXW6"),
        case("MZ-XW 6\n", "MZXW6"),
        case("MZXW6===", "MZXW6"),
        case("01-8", "OLB"),
        case("", ""),
        case("===", "")
    )]
    fn test_normalize(input: &str, expected: &str) {
        let encoded = Encoded::from_str(input).unwrap();
        assert_eq!(expected, encoded.as_str());
        assert_eq!(expected.len(), encoded.len());
    }

    #[rstest(
        input,
        expected,
        case("MZ!", Error::DecodeError { symbol: b'!', position: 2 }),
        case("AB9", Error::DecodeError { symbol: b'9', position: 2 })
    )]
    fn test_normalize_with_error(input: &str, expected: Error) {
        assert_eq!(Err(expected), Encoded::from_str(input));
    }

    #[rstest(
        input,
        size,
        expected,
        case(b"foobar", 4, "MZXW-6YTB-OI"),
        case(b"foobar", 5, "MZXW6-YTBOI"),
        case(b"foobar", 0, "MZXW6YTBOI"),
        case(b"foobar", 100, "MZXW6YTBOI"),
        case(b"", 4, "")
    )]
    fn test_grouped(input: &[u8], size: usize, expected: &str) {
        let encoded = Encoded::from_bytes(input).unwrap();
        let grouped = encoded.grouped(size);
        assert_eq!(expected, grouped);
        assert_eq!(Encoded::from_str(&grouped).unwrap(), encoded);
    }

    #[test]
    fn test_decoder_chain() {
        let typed = "mzxw-6ytb-oi";
        let encoded: Encoded = typed.decode().unwrap();
        let bytes: Vec<u8> = encoded.decode().unwrap();
        assert_eq!(bytes, b"foobar");

        let owned = String::from("MZXW6 YTBOI");
        let encoded: Encoded = owned.decode().unwrap();
        assert_eq!(encoded.to_string(), "MZXW6YTBOI");
    }

    #[test]
    fn test_encoder_chain() {
        let bytes = b"foobar".to_vec();
        let encoded: Encoded = bytes.encode().unwrap();
        assert_eq!(encoded.as_str(), "MZXW6YTBOI");

        let slice: &[u8] = b"fo";
        let encoded: Encoded = slice.encode().unwrap();
        assert_eq!(encoded.into_string(), "MZXQ");
    }

    #[test]
    fn test_empty() {
        let encoded = Encoded::from_bytes(b"").unwrap();
        assert!(encoded.is_empty());
        let bytes: Vec<u8> = encoded.decode().unwrap();
        assert!(bytes.is_empty());
    }
}
