use std::fmt::{self, Display, Formatter};

/// Describes the fundamental git object type (blob, tree, commit, or tag).
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
///
/// A loose object header can carry any type string, so the enumeration has
/// an explicit `Other` arm rather than rejecting what it doesn't know.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
    Tag,
    Other(String),
}

impl Kind {
    /// Interpret the type field of a loose object header.
    ///
    /// Unknown type strings are preserved verbatim (lossily decoded if they
    /// contain non-UTF-8 bytes) so diagnostics can name them.
    pub fn from_header_field(field: &[u8]) -> Kind {
        match field {
            b"blob" => Kind::Blob,
            b"tree" => Kind::Tree,
            b"commit" => Kind::Commit,
            b"tag" => Kind::Tag,
            other => Kind::Other(String::from_utf8_lossy(other).into_owned()),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Tree => write!(f, "tree"),
            Kind::Commit => write!(f, "commit"),
            Kind::Tag => write!(f, "tag"),
            Kind::Other(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_field() {
        assert_eq!(Kind::from_header_field(b"blob"), Kind::Blob);
        assert_eq!(Kind::from_header_field(b"tree"), Kind::Tree);
        assert_eq!(Kind::from_header_field(b"commit"), Kind::Commit);
        assert_eq!(Kind::from_header_field(b"tag"), Kind::Tag);
        assert_eq!(
            Kind::from_header_field(b"wotsit"),
            Kind::Other("wotsit".to_string())
        );
    }

    #[test]
    fn to_string() {
        let k = Kind::Blob;
        assert_eq!(k.to_string(), "blob");

        let k = Kind::Commit;
        assert_eq!(k.to_string(), "commit");

        let k = Kind::Tree;
        assert_eq!(k.to_string(), "tree");

        let k = Kind::Tag;
        assert_eq!(k.to_string(), "tag");

        let k = Kind::Other("wotsit".to_string());
        assert_eq!(k.to_string(), "wotsit");
    }
}
