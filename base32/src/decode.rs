use crate::accumulator::BitAccumulator;
use crate::alphabet::{Symbol, classify};
use crate::capacity::decoded_capacity;
use crate::error::Error;

/// Decodes lenient Base32 text from `input` into `output` and returns the
/// number of bytes written.
///
/// The input ends at the end of the slice, at a NUL byte, or at the first
/// `=`. Along the way:
///
/// - spaces, tabs, CR, LF and `-` are skipped
/// - `0`, `1` and `8` are read as `O`, `L` and `B`
/// - letters are case-insensitive
///
/// Bits left over after the last full byte are dropped. Once `output` is
/// full no more bytes are written, but the remaining input is still checked
/// for invalid symbols. When `output` has room for one more byte, a NUL is
/// written after the last decoded byte.
///
/// # Errors
///
/// [`Error::DecodeError`] on the first byte that is not a symbol, a
/// confusable, a separator or an end marker. Anything already written to
/// `output` must be discarded.
///
/// # Example
///
/// ```
/// use base32::decode_into;
///
/// let mut output = [0u8; 3];
/// let written = decode_into(b"mzxw-6===", &mut output).unwrap();
/// assert_eq!(&output[..written], b"foo");
/// ```
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    let mut acc = BitAccumulator::default();
    let mut written = 0;

    for (position, &byte) in input.iter().enumerate() {
        let value = match classify(byte) {
            Symbol::Value(value) => value,
            Symbol::Separator => continue,
            Symbol::End => break,
            Symbol::Invalid => {
                return Err(Error::DecodeError {
                    symbol: byte,
                    position,
                });
            }
        };
        if written == output.len() {
            continue;
        }

        acc.push(u32::from(value), 5);
        if acc.bits() >= 8 {
            output[written] = acc.take(8) as u8;
            written += 1;
        }
    }

    if let Some(terminator) = output.get_mut(written) {
        *terminator = 0;
    }
    Ok(written)
}

/// Decodes lenient Base32 text into a newly allocated buffer.
///
/// Accepts anything byte-like: `&str`, `String`, `&[u8]`, `Vec<u8>`.
///
/// # Errors
///
/// [`Error::DecodeError`] on the first invalid symbol.
///
/// # Example
///
/// ```
/// assert_eq!(base32::decode("M Y\n").unwrap(), b"f");
/// assert_eq!(base32::decode("MZXW6===").unwrap(), b"foo");
/// assert!(base32::decode("M!").is_err());
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = vec![0u8; decoded_capacity(input.len())];
    let written = decode_into(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(
        input,
        expected,
        case("", b""),
        case("MY", b"f"),
        case("MZXQ", b"fo"),
        case("MZXW6", b"foo"),
        case("MZXW6YQ", b"foob"),
        case("MZXW6YTB", b"fooba"),
        case("MZXW6YTBOI", b"foobar"),
        case("MYAA", b"f\x00"),
        case("MYAAA", b"f\x00\x00"),
        case("MYAAAAA", b"f\x00\x00\x00"),
        case("AA", b"\x00"),
        case("77777777", b"\xff\xff\xff\xff\xff")
    )]
    fn test_decode(input: &str, expected: &[u8]) {
        assert_eq!(expected, decode(input).unwrap());
    }

    #[rstest(
        input,
        expected,
        case("M Y\n", b"f"),
        case("MZ-XW6", b"foo"),
        case(" mzxw\t6\r\n", b"foo"),
        case("MZXW-6YTB-OI", b"foobar"),
        case("MY===", b"f"),
        case("MZXW6===", b"foo"),
        case("MZXW6YTBOI======", b"foobar"),
        case("=MZXW6", b""),
        case("MY=ZXW6", b"f"),
        case("MY\0MZXW6", b"f"),
        case("MY=!", b"f"),
        case("mzxw6ytboi", b"foobar"),
        case("MzXw6YtBoI", b"foobar"),
        case("MZXW6YT8OI", b"foobar"),
        case("MZXW6YTB0I", b"foobar"),
        case("1I", &[0x5a])
    )]
    fn test_decode_lenient(input: &str, expected: &[u8]) {
        assert_eq!(expected, decode(input).unwrap());
    }

    #[rstest(
        input,
        symbol,
        position,
        case("M!", b'!', 1),
        case("MZXW9", b'9', 4),
        case("MZ_XW6", b'_', 2),
        case("MZ XW6+", b'+', 6),
        case("\u{e9}", 0xc3, 0)
    )]
    fn test_decode_invalid_symbol(input: &str, symbol: u8, position: usize) {
        assert_eq!(
            Err(Error::DecodeError { symbol, position }),
            decode(input)
        );
    }

    #[test]
    fn test_decode_zero_valued_symbol_is_not_an_error() {
        assert_eq!(decode("AAAAAAAA").unwrap(), vec![0u8; 5]);
    }

    #[test]
    fn test_decode_checks_input_past_full_output() {
        // "MY" fills the single byte of capacity; '!' still has to be reported.
        assert_eq!(
            decode("MY!"),
            Err(Error::DecodeError {
                symbol: b'!',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_into_truncates_at_capacity() {
        let mut output = [0u8; 2];
        let written = decode_into(b"MZXW6YTBOI", &mut output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(&output, b"fo");
    }

    #[test]
    fn test_decode_into_writes_nul_terminator() {
        let mut output = [0xaa; 4];
        let written = decode_into(b"MZXQ", &mut output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(output, [b'f', b'o', 0, 0xaa]);
    }

    #[test]
    fn test_decode_accepts_raw_bytes() {
        assert_eq!(decode(b"MZXW6".as_slice()).unwrap(), b"foo");
        assert_eq!(decode(b"MZXW6".to_vec()).unwrap(), b"foo");
    }
}
