//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. In this workspace it moves data from a textual form towards raw
//! bytes: `&str` into canonical `Encoded` text, and `Encoded` into
//! `Vec<u8>`.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use b32_codec::decoder::{Decoder, DecodableFrom};
//!
//! struct Text(String);
//! struct Bytes(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Text> for Bytes {}
//!
//! impl Decoder<Text, Bytes> for Text {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Bytes, Self::Error> {
//!         Ok(Bytes(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
///
/// # Examples
///
/// ```no_run
/// use b32_codec::decoder::{Decoder, DecodableFrom};
///
/// struct Symbols(Vec<u8>);
///
/// #[derive(Debug)]
/// struct Empty;
///
/// impl DecodableFrom<&str> for Symbols {}
///
/// impl Decoder<&str, Symbols> for &str {
///     type Error = Empty;
///
///     fn decode(&self) -> Result<Symbols, Self::Error> {
///         if self.is_empty() {
///             return Err(Empty);
///         }
///         Ok(Symbols(self.bytes().collect()))
///     }
/// }
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods. Implement it for every destination type that a source
/// type is allowed to decode into:
///
/// ```no_run
/// use b32_codec::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}
