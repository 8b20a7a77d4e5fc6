//! Turns an object's payload into the body of the report, dispatching on
//! the object kind.

use crate::diagnostic::Diagnostic;
use crate::object::{self, Kind, ParseTreeError};

pub mod hex;

/// Render an object payload according to its kind.
///
/// Commits and tags hold structured ASCII metadata and pass through
/// byte-for-byte. Trees are decoded into one line per entry. Blobs can be
/// arbitrary binary and get a hex dump, as does any kind we don't
/// recognize (which also pushes a [`Diagnostic::UnknownKind`]).
///
/// The only failure mode is a structurally broken tree payload; every
/// other path is total.
pub fn render(
    kind: &Kind,
    payload: &[u8],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<u8>, ParseTreeError> {
    match kind {
        Kind::Commit | Kind::Tag => Ok(payload.to_vec()),
        Kind::Tree => Ok(object::render_entries(payload)?.into_bytes()),
        Kind::Blob => Ok(hex::dump(payload).into_bytes()),
        Kind::Other(name) => {
            diagnostics.push(Diagnostic::UnknownKind(name.clone()));
            Ok(hex::dump(payload).into_bytes())
        }
    }
}
