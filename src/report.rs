use std::io::{self, Write};

use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::inflate::inflate;
use crate::object::{Id, Kind, Object};
use crate::render::render;

/// The fully decoded form of one loose object, ready to be written out.
///
/// `body` holds raw rendered bytes rather than a `String` so the verbatim
/// commit/tag rendering stays byte-identical even when the payload is not
/// valid UTF-8.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    id: Id,
    kind: Kind,
    declared_size: u64,
    body: Vec<u8>,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Return the object's ID (SHA-1 of its raw decompressed bytes).
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the object's kind.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return the payload size the object's header claims.
    pub fn declared_size(&self) -> u64 {
        self.declared_size
    }

    /// Return the rendered body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Return the diagnostics collected while decoding.
    ///
    /// These never appear in [`write_to`](Report::write_to) output; the
    /// caller decides where to surface them.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Write the report in its fixed format:
    ///
    /// ```text
    /// signature: <40 hex digits>
    /// type: <object type>
    /// size: <declared size>
    /// ----------------------------------------
    /// <rendered body>
    /// ```
    ///
    /// The `size` line repeats the header's own claim even when it
    /// disagrees with the actual payload length. Diagnostics are not
    /// written here.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "signature: {}", self.id)?;
        writeln!(out, "type: {}", self.kind)?;
        writeln!(out, "size: {}", self.declared_size)?;
        writeln!(out, "{}", "-".repeat(40))?;
        out.write_all(&self.body)?;
        writeln!(out)?;

        Ok(())
    }
}

/// Run the whole pipeline over one compressed loose-object buffer.
///
/// Fatal problems (bad zlib stream, malformed header, broken tree
/// structure) abort with an [`Error`](crate::Error) naming the stage;
/// non-fatal observations end up in the report's diagnostics.
pub fn describe(compressed: &[u8]) -> Result<Report> {
    let raw = inflate(compressed)?;

    let mut diagnostics = Vec::new();
    let object = Object::from_loose_bytes(&raw, &mut diagnostics)?;
    let body = render(object.kind(), object.content(), &mut diagnostics)?;

    Ok(Report {
        id: object.id().clone(),
        kind: object.kind().clone(),
        declared_size: object.declared_size(),
        body,
        diagnostics,
    })
}
