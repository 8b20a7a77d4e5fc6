//! Represents a git "loose object": a tuple of object type and binary
//! content identified by the SHA-1 of its raw on-disk form.

use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::diagnostic::Diagnostic;

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

mod tree;
pub(crate) use tree::render_entries;
pub use tree::{parse_entries, Entry, ParseTreeError};

/// An error which can be returned when parsing a loose object header.
///
/// The raw bytes must match the pattern `<type> <size>\0<payload>`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseHeaderError {
    /// No space separates the type field from the size field.
    #[error("no space after the object type")]
    MissingTypeDelimiter,

    /// No NUL byte terminates the size field.
    #[error("no NUL after the declared size")]
    MissingSizeTerminator,

    /// The size field is not an ASCII decimal number.
    #[error("declared size `{0}` is not a decimal number")]
    BadSize(String),
}

/// A single decoded loose object.
///
/// All fields are derived from the raw decompressed bytes in one pass;
/// nothing here refers back to the on-disk file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    id: Id,
    kind: Kind,
    declared_size: u64,
    content: Vec<u8>,
}

impl Object {
    /// Parse the raw decompressed bytes of a loose object.
    ///
    /// The object's ID is the SHA-1 of the *entire* buffer, header
    /// included; it is computed before any splitting so the signature
    /// always reflects exactly what was read. This matches how git
    /// addresses objects: hashing only the payload would produce a
    /// different, incompatible ID.
    ///
    /// A size field that disagrees with the actual payload length is not a
    /// parse failure; it pushes a [`Diagnostic::SizeMismatch`] and the
    /// actual payload is kept in full, never truncated or padded to the
    /// declared size.
    pub fn from_loose_bytes(
        raw: &[u8],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Object, ParseHeaderError> {
        let id = id_for_raw_bytes(raw);

        let (kind_field, rest) = parse_utils::split_once(raw, b' ')
            .ok_or(ParseHeaderError::MissingTypeDelimiter)?;
        let (size_field, content) =
            parse_utils::split_once(rest, 0).ok_or(ParseHeaderError::MissingSizeTerminator)?;

        let declared_size = parse_declared_size(size_field)?;

        if declared_size != content.len() as u64 {
            diagnostics.push(Diagnostic::SizeMismatch {
                declared: declared_size,
                actual: content.len() as u64,
            });
        }

        Ok(Object {
            id,
            kind: Kind::from_header_field(kind_field),
            declared_size,
            content: content.to_vec(),
        })
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return the size the header claims the payload has.
    ///
    /// This is the header's own statement, which may disagree with
    /// [`content`](Object::content)`.len()`.
    pub fn declared_size(&self) -> u64 {
        self.declared_size
    }

    /// Return the object's payload.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

fn id_for_raw_bytes(raw: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(raw);

    let final_hash = hasher.finalize();

    // We use unwrap here because the hasher is guaranteed
    // to return a 20-byte slice.
    Id::new(final_hash.as_slice()).unwrap()
}

fn parse_declared_size(field: &[u8]) -> Result<u64, ParseHeaderError> {
    let bad_size = || ParseHeaderError::BadSize(String::from_utf8_lossy(field).into_owned());

    std::str::from_utf8(field)
        .map_err(|_| bad_size())?
        .parse::<u64>()
        .map_err(|_| bad_size())
}
