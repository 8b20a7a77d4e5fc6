use std::io::Read;

use flate2::read::ZlibDecoder;
use thiserror::Error;

/// An error which can be returned when inflating a loose object file.
///
/// Loose objects are zlib streams; a truncated file, a bad stream header,
/// or a failed checksum all surface here. There is no partial-result path:
/// either the whole buffer inflates or the pipeline stops.
#[derive(Debug, Error)]
pub enum InflateError {
    /// The buffer is not a valid zlib stream.
    #[error("not a valid zlib stream: {0}")]
    BadStream(#[from] std::io::Error),
}

/// Inflate a zlib-compressed buffer into the raw object bytes.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>, InflateError> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw)?;
    Ok(raw)
}
