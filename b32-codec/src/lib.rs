//! # b32-codec
//!
//! Conversion traits for the b32 transcoding workspace.
//!
//! This crate defines the `Decoder` and `Encoder` traits that give every
//! representation in the workspace a type-checked path to its neighbours.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! human-entered &str → Encoded → Vec<u8>
//! ```
//!
//! Each step uses the `Decoder` trait to move towards raw bytes, and the
//! `Encoder` trait to move back towards text.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only conversions a crate explicitly allows will compile.
//!
//! ## Example
//!
//! The `base32` crate provides the implementations:
//!
//! ```ignore
//! use b32_codec::decoder::Decoder;
//! use b32_codec::encoder::Encoder;
//! use base32::Encoded;
//!
//! let text: Encoded = "mzxw-6".decode().unwrap();
//! let bytes: Vec<u8> = text.decode().unwrap();
//! assert_eq!(bytes, b"foo");
//!
//! let again: Encoded = bytes.encode().unwrap();
//! assert_eq!(again.as_str(), "MZXW6");
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
