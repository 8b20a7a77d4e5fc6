//! objview decodes a single zlib-compressed git "loose object" and renders
//! it as a human-readable report.
//!
//! The pipeline is a straight line with no shared state:
//!
//! 1. [`inflate()`] the compressed buffer into the raw object bytes.
//! 2. [`Object::from_loose_bytes`](object::Object::from_loose_bytes) splits
//!    the `<type> <size>\0<payload>` header and computes the object's SHA-1
//!    signature over the *entire* raw buffer (header included).
//! 3. [`render::render`] picks a body rendering based on the object kind:
//!    commits and tags pass through verbatim, trees are decoded entry by
//!    entry, everything else becomes a hex dump.
//! 4. [`describe`] ties the stages together and produces a [`Report`].
//!
//! Non-fatal observations (a size field that disagrees with the payload,
//! an object type we don't recognize) are collected as [`Diagnostic`]
//! values and kept out of the report text.

#![deny(warnings)]

mod diagnostic;
pub use diagnostic::Diagnostic;

mod error;
pub use error::{Error, Result};

mod inflate;
pub use inflate::{inflate, InflateError};

pub mod object;

pub mod render;

mod report;
pub use report::{describe, Report};
