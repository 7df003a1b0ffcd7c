//! Base64 transport codec.
//!
//! Standard RFC 4648 alphabet with padding. Decoding is canonical: padding
//! must be present and correct, and unused trailing bits must be zero, so
//! `encode(decode(t)) == t` holds for every accepted `t`.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::{CodecError, Result};

const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Input field being decoded, carried in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PublicKey,
    Content,
    EncryptedValue,
}

impl Field {
    /// Attribute name as it appears in configuration and state files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PublicKey => "public_key_base64",
            Self::Content => "content_base64",
            Self::EncryptedValue => "encrypted_value_base64",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What was wrong with rejected base64 text.
///
/// Carries positions only. The offending symbol may be a byte of a key or
/// of the secret itself, so it is never part of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeIssue {
    InvalidCharacter { offset: usize },
    InvalidLength { length: usize },
    NonCanonicalTrailingBits { offset: usize },
    InvalidPadding,
}

impl From<&base64::DecodeError> for DecodeIssue {
    fn from(err: &base64::DecodeError) -> Self {
        match *err {
            base64::DecodeError::InvalidByte(offset, _) => Self::InvalidCharacter { offset },
            base64::DecodeError::InvalidLength(length) => Self::InvalidLength { length },
            base64::DecodeError::InvalidLastSymbol(offset, _) => {
                Self::NonCanonicalTrailingBits { offset }
            }
            base64::DecodeError::InvalidPadding => Self::InvalidPadding,
        }
    }
}

impl std::fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { offset } => {
                write!(f, "invalid character at offset {}", offset)
            }
            Self::InvalidLength { length } => write!(f, "invalid length {}", length),
            Self::NonCanonicalTrailingBits { offset } => {
                write!(f, "non-canonical trailing bits at offset {}", offset)
            }
            Self::InvalidPadding => f.write_str("invalid padding"),
        }
    }
}

/// Decode base64 text into bytes.
///
/// # Errors
///
/// Returns `CodecError::Decode` tagged with `field` for characters outside
/// the alphabet, bad length, or non-canonical padding.
pub fn decode(field: Field, text: &str) -> Result<Vec<u8>> {
    ENGINE.decode(text).map_err(|source| {
        CodecError::Decode {
            field,
            issue: DecodeIssue::from(&source),
            source,
        }
        .into()
    })
}

/// Encode bytes as padded base64 text.
pub fn encode(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}
