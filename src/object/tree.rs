use thiserror::Error;

use super::parse_utils;
use super::Id;

/// An error which can be returned when decoding a tree payload.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseTreeError {
    /// A NUL was found but fewer than 20 bytes follow it.
    #[error("entry at byte {offset} is truncated: {remaining} of 20 object ID bytes present")]
    TruncatedId { offset: usize, remaining: usize },

    /// An entry's text segment has no space between mode and name.
    #[error("entry at byte {offset} has no space between mode and name")]
    MissingName { offset: usize },

    /// Trailing bytes after the last complete entry carry no NUL.
    #[error("entry at byte {offset} is not NUL-terminated")]
    MissingEntryTerminator { offset: usize },
}

/// One record of a tree (directory listing) object: a file mode, a path
/// segment, and the ID of the object the entry points at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    mode: String,
    name: String,
    id: Id,
}

impl Entry {
    /// Return the entry's file mode token (e.g. `100644` or `40000`).
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Return the entry's path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the ID of the object the entry points at.
    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// Decode a tree payload into its entries, in payload order.
///
/// Each record is `<mode> <name>\0<20 raw object ID bytes>` and records
/// abut directly: nothing separates one record's ID from the next record's
/// mode text. The single NUL per record is the only anchor, and the 20 ID
/// bytes may themselves contain NUL or space values. So this is a plain
/// cursor-advance scan over byte offsets: find the next NUL, take exactly
/// 20 bytes after it as the ID, split the text before it on the first
/// space, advance, repeat. A split or tokenize pass over the whole payload
/// would misfire on ID bytes.
pub fn parse_entries(payload: &[u8]) -> Result<Vec<Entry>, ParseTreeError> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while pos < payload.len() {
        let (text, rest) = parse_utils::split_once(&payload[pos..], 0)
            .ok_or(ParseTreeError::MissingEntryTerminator { offset: pos })?;

        if rest.len() < 20 {
            return Err(ParseTreeError::TruncatedId {
                offset: pos,
                remaining: rest.len(),
            });
        }

        let (mode, name) = parse_utils::split_once(text, b' ')
            .ok_or(ParseTreeError::MissingName { offset: pos })?;

        // The ID slice is exactly 20 bytes, so Id::new cannot fail.
        let id = Id::new(&rest[..20]).unwrap();

        entries.push(Entry {
            mode: String::from_utf8_lossy(mode).into_owned(),
            name: String::from_utf8_lossy(name).into_owned(),
            id,
        });

        // Skip the text, its NUL terminator, and the fixed-length ID.
        // The final record's ID may end flush with the payload.
        pos += text.len() + 1 + 20;
    }

    Ok(entries)
}

/// Render decoded entries as report lines, one entry per line:
/// `<mode> <40-hex-id>\t<name>`, in payload order.
pub(crate) fn render_entries(payload: &[u8]) -> Result<String, ParseTreeError> {
    let entries = parse_entries(payload)?;

    let lines: Vec<String> = entries
        .iter()
        .map(|e| format!("{} {}\t{}", e.mode(), e.id(), e.name()))
        .collect();

    Ok(lines.join("\n"))
}
