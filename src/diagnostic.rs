use std::fmt::{self, Display, Formatter};

/// A non-fatal observation made while decoding an object.
///
/// Diagnostics never stop the pipeline and never appear in the report text;
/// callers surface them on a separate channel (the CLI prints them to
/// stderr).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// The header's size field disagrees with the actual payload length.
    /// The payload is used as-is; the header's claim is informational.
    SizeMismatch { declared: u64, actual: u64 },

    /// The header names an object type we have no dedicated rendering for.
    /// The payload is rendered as a hex dump instead.
    UnknownKind(String),
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Diagnostic::SizeMismatch { declared, actual } => write!(
                f,
                "size mismatch: header claims {} bytes but payload has {}",
                declared, actual
            ),
            Diagnostic::UnknownKind(name) => {
                write!(f, "unrecognized object type `{}`; rendering as hex dump", name)
            }
        }
    }
}
