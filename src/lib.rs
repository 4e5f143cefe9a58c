//! godocmd — turn `go doc -all` listings into documents.
//!
//! The listing is parsed into a [`model::Package`] by [`parser::parse`] and
//! rendered by one of the [`render`] backends. [`godoc::fetch`] runs the Go
//! toolchain to produce the listing.

pub mod error;
pub mod godoc;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use error::{GoDocError, ParseError};
pub use model::Package;
pub use parser::parse;
