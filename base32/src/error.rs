use thiserror::Error;

use crate::MAX_INPUT_LEN;

/// Errors that can occur when transcoding Base32.
///
/// Both kinds are terminal for the call that produced them. Output written
/// before the failure must be discarded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input to encode is longer than [`MAX_INPUT_LEN`] bytes.
    #[error("input of {0} bytes exceeds the maximum of {max} bytes", max = MAX_INPUT_LEN)]
    InputTooLarge(usize),

    /// A character that is neither an alphabet symbol, a confusable, a
    /// separator nor an end marker.
    #[error("invalid base32 symbol {symbol:#04x} at offset {position}")]
    DecodeError { symbol: u8, position: usize },
}
