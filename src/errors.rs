use crate::Scheme;
use thiserror::Error;

/// Errors raised while converting between the text and binary content hash forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentHashError {
    /// Text form did not split into exactly three `/` segments
    #[error("invalid content hash")]
    Format,

    #[error("unknown codec {0}")]
    UnsupportedScheme(String),

    /// Codec name or numeric tag missing from the registry
    #[error("codec {0} not found in registry")]
    CodecLookup(String),

    #[error("failed to decode {scheme} content hash: {reason}")]
    PayloadDecode { scheme: Scheme, reason: String },

    #[error("{0}")]
    MalformedInput(String),
}

impl ContentHashError {
    pub(crate) fn payload(scheme: Scheme, reason: impl ToString) -> Self {
        ContentHashError::PayloadDecode {
            scheme,
            reason: reason.to_string(),
        }
    }
}

/// Errors raised by the domain name helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty domain")]
    EmptyDomain,

    #[error("invalid part")]
    InvalidPart,

    #[error("not enough parts in {domain} for part {part}")]
    NotEnoughParts { domain: String, part: i32 },

    /// UTS-46 processing rejected the domain
    #[error("idna: {0}")]
    Idna(String),

    #[error("{domain} not a direct child of {root}")]
    NotDirectChild { domain: String, root: String },
}
