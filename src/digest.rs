//! Multihash helpers for content hash payloads.
use crate::consts::{KECCAK_256, MAX_DIGEST_SIZE};
use alloy::hex;
use multihash::Multihash;

pub type ContentMultihash = Multihash<MAX_DIGEST_SIZE>;

/// Parses `bytes` as exactly one multihash, trailing bytes included in the failure cases.
pub fn parse(bytes: &[u8]) -> Result<ContentMultihash, String> {
    ContentMultihash::from_bytes(bytes).map_err(|err| format!("invalid multihash: {err}"))
}

/// Tags `digest` as a Keccak-256 multihash without hashing it.
pub fn wrap_keccak(digest: &[u8]) -> Result<ContentMultihash, String> {
    ContentMultihash::wrap(KECCAK_256, digest).map_err(|err| format!("invalid digest: {err}"))
}

/// Decodes plain hex digits; a `0x` prefix is not part of the text form and is rejected.
pub fn from_hex(text: &str) -> Result<Vec<u8>, String> {
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex: unexpected character {bad:?}"));
    }
    hex::decode(text).map_err(|err| format!("invalid hex: {err}"))
}

pub fn from_base58(text: &str) -> Result<ContentMultihash, String> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|err| format!("invalid base58: {err}"))?;
    parse(&bytes)
}

pub fn to_base58(hash: &ContentMultihash) -> String {
    bs58::encode(hash.to_bytes()).into_string()
}
