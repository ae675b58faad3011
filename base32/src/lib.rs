//! # base32
//!
//! RFC 4648 Base32 transcoding with a decoder built for text typed or read
//! by people.
//!
//! Encoding uses the alphabet `A`-`Z`, `2`-`7` and never emits `=` padding.
//! Decoding is lenient:
//!
//! - case-insensitive
//! - spaces, tabs, line breaks and `-` are ignored
//! - `0`, `1` and `8` are read as `O`, `L` and `B`
//! - input ends at NUL or at the first `=`
//!
//! ## Buffers
//!
//! [`encode_into`] and [`decode_into`] work on caller-owned slices sized with
//! [`encoded_capacity`] and [`decoded_capacity`]; they never allocate.
//! [`encode`] and [`decode`] allocate for you.
//!
//! ```
//! use base32::{decode, decoded_capacity, encode_into, encoded_capacity};
//!
//! let data = b"fooba";
//! let mut text = vec![0u8; encoded_capacity(data.len())];
//! let written = encode_into(data, &mut text).unwrap();
//! assert_eq!(&text[..written], b"MZXW6YTB");
//!
//! assert_eq!(decoded_capacity("mzxw-6ytb".len()), 5);
//! assert_eq!(decode("mzxw-6ytb").unwrap(), data);
//! ```
//!
//! ## Typed conversions
//!
//! [`Encoded`] holds canonical text and plugs into the [`b32_codec`] conversion
//! traits.

#![forbid(unsafe_code)]

mod accumulator;
pub mod alphabet;
mod capacity;
mod decode;
mod encode;
mod encoded;
pub mod error;

pub use alphabet::ALPHABET;
pub use capacity::{decoded_capacity, encoded_capacity};
pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into};
pub use encoded::Encoded;
pub use error::Error;

/// Largest input accepted by the encoder, `2^28 - 1` bytes.
pub const MAX_INPUT_LEN: usize = (1 << 28) - 1;
