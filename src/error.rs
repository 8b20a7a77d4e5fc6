extern crate thiserror;

use thiserror::Error;

use crate::inflate::InflateError;
use crate::object::{ParseHeaderError, ParseTreeError};

/// Describes the fatal error conditions that can abort decoding a loose
/// object. Each variant names the pipeline stage that failed.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer is not a valid zlib stream.
    #[error("unable to decompress object: {0}")]
    Inflate(#[from] InflateError),

    /// The decompressed bytes do not carry a `<type> <size>\0` header.
    #[error("malformed object header: {0}")]
    Header(#[from] ParseHeaderError),

    /// A tree payload's entry records are structurally inconsistent.
    #[error("malformed tree content: {0}")]
    Tree(#[from] ParseTreeError),
}

/// A specialized `Result` type for objview operations.
pub type Result<T> = std::result::Result<T, Error>;
