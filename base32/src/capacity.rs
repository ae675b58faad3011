//! Output size helpers.
//!
//! Both functions return upper bounds. The transcoders may write fewer
//! bytes, for example when the decoder skips separators.

/// Number of symbols needed to encode `len` bytes, `⌈8 * len / 5⌉`.
///
/// # Example
///
/// ```
/// use base32::encoded_capacity;
///
/// assert_eq!(encoded_capacity(0), 0);
/// assert_eq!(encoded_capacity(1), 2);
/// assert_eq!(encoded_capacity(5), 8);
/// ```
#[inline]
pub const fn encoded_capacity(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (len.saturating_mul(8) - 1) / 5 + 1
}

/// Number of bytes that `len` input characters can decode to, `⌊5 * len / 8⌋`.
///
/// # Example
///
/// ```
/// use base32::decoded_capacity;
///
/// assert_eq!(decoded_capacity(2), 1);
/// assert_eq!(decoded_capacity(8), 5);
/// ```
#[inline]
pub const fn decoded_capacity(len: usize) -> usize {
    len.saturating_mul(5) / 8
}
