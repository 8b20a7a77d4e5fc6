use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// An error which can be returned when parsing a git object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains a character that is not a lowercase hex digit.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID is longer than the 160-bit wire form.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// ID is shorter than the 160-bit wire form.
    #[error("value is less than 40 digits long")]
    Underflow,
}

/// An object ID identifies an object within a repository: the SHA-1 of the
/// object's raw bytes. It is stored as a 20-byte signature, but can also be
/// represented as 40 hex digits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Id {
    id: [u8; 20],
}

impl Id {
    /// Create an ID from a 20-byte binary slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            20 => {
                let mut bytes = [0u8; 20];
                bytes.copy_from_slice(id);
                Ok(Id { id: bytes })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 20 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Convert a 40-character hex string to an object ID.
    ///
    /// It is an error if the string contains anything other than 40
    /// lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Id, ParseIdError> {
        let hex = hex.as_ref();

        match hex.len() {
            40 => {
                let mut bytes = [0u8; 20];
                for (i, pair) in hex.chunks(2).enumerate() {
                    bytes[i] = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }
                Ok(Id { id: bytes })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}
