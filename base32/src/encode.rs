use crate::MAX_INPUT_LEN;
use crate::accumulator::BitAccumulator;
use crate::alphabet::symbol;
use crate::capacity::encoded_capacity;
use crate::error::Error;

/// Encodes `input` into `output` and returns the number of symbols written.
///
/// Writing stops when `output` is full, so a region smaller than
/// [`encoded_capacity`] yields a truncated encoding. When `output` has room
/// for one more byte, a NUL is written after the last symbol.
///
/// No `=` padding is ever produced. The final symbol is filled with zero
/// bits.
///
/// # Errors
///
/// [`Error::InputTooLarge`] when `input` is longer than [`MAX_INPUT_LEN`].
/// Nothing is written in that case.
///
/// # Example
///
/// ```
/// use base32::{encode_into, encoded_capacity};
///
/// let mut output = [0u8; 5];
/// assert_eq!(encoded_capacity(3), 5);
/// let written = encode_into(b"foo", &mut output).unwrap();
/// assert_eq!(&output[..written], b"MZXW6");
/// ```
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    if input.len() > MAX_INPUT_LEN {
        return Err(Error::InputTooLarge(input.len()));
    }

    let mut written = 0;
    if let Some((&first, rest)) = input.split_first() {
        let mut acc = BitAccumulator::default();
        acc.push(u32::from(first), 8);
        let mut rest = rest.iter();

        while written < output.len() {
            if acc.bits() < 5 {
                match rest.next() {
                    Some(&byte) => acc.push(u32::from(byte), 8),
                    None if acc.bits() == 0 => break,
                    None => acc.push(0, 5 - acc.bits()),
                }
            }
            output[written] = symbol(acc.take(5));
            written += 1;
        }
    }

    if let Some(terminator) = output.get_mut(written) {
        *terminator = 0;
    }
    Ok(written)
}

/// Encodes `input` into a newly allocated string.
///
/// # Errors
///
/// [`Error::InputTooLarge`] when `input` is longer than [`MAX_INPUT_LEN`].
///
/// # Example
///
/// ```
/// assert_eq!(base32::encode(b"foobar").unwrap(), "MZXW6YTBOI");
/// ```
pub fn encode(input: &[u8]) -> Result<String, Error> {
    if input.len() > MAX_INPUT_LEN {
        return Err(Error::InputTooLarge(input.len()));
    }
    let mut output = vec![0u8; encoded_capacity(input.len())];
    let written = encode_into(input, &mut output)?;
    output.truncate(written);
    Ok(output.into_iter().map(char::from).collect())
}
