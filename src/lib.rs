//! Closed sets of string-valued constants.
//!
//! A string enum behaves like a conventional enumeration — iterable,
//! parseable, hashable, equatable — while its wire representation is a
//! human-readable string token rather than an integer. The intended use
//! is exchanging enumerated values with external JSON APIs without giving
//! up type-safe, discoverable values inside the program.
//!
//! Declare a set with [`string_enum!`] and you get the whole surface:
//!
//! ```
//! use string_enum::{StringEnum, string_enum};
//!
//! string_enum! {
//!     /// Compression codecs accepted by the ingest endpoint.
//!     pub enum Compression {
//!         Gzip => "gzip",
//!         Zstd => "zstd",
//!     }
//! }
//!
//! assert_eq!(Compression::Zstd.as_str(), "zstd");
//! assert_eq!(Compression::parse("gzip")?, Compression::Gzip);
//! assert!(Compression::try_parse("brotli").is_none());
//! assert_eq!(serde_json::to_string(&Compression::Gzip).unwrap(), "\"gzip\"");
//! # Ok::<(), string_enum::UnknownValueError>(())
//! ```
//!
//! Matching is exact: case-sensitive, untrimmed, whole-token. An
//! unrecognized token fails with [`UnknownValueError`], whose message is
//! a fixed wire contract. When members live in a table instead of an
//! enum, implement [`StringEnum`] by hand; the [`token`] module plugs
//! such types into serde fields via `#[serde(with = ...)]`.
//!
//! This crate contains pure domain machinery: no IO, no async, no
//! interior mutability. Every declared set is immutable `'static` data,
//! so all operations are safe to call from any thread.

mod error;
mod set;

pub mod token;

#[doc(hidden)]
pub mod declare;

pub use error::UnknownValueError;
pub use set::StringEnum;

// Used by the code `string_enum!` emits; not a public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}
