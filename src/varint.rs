//! Unsigned LEB128 varints as used by multicodec and multihash.
use unsigned_varint::{decode, encode};

/// Appends the minimal LEB128 encoding of `value` to `out`.
pub fn write(value: u64, out: &mut Vec<u8>) {
    let mut buf = encode::u64_buffer();
    let bytes = encode::u64(value, &mut buf);
    tracing::trace!(value, len = bytes.len(), "write varint");
    out.extend_from_slice(bytes);
}

/// Reads a varint from the front of `bytes`, returning the value and the remainder.
///
/// Fails on truncated input, values wider than 64 bits and non-minimal encodings.
pub fn read(bytes: &[u8]) -> Result<(u64, &[u8]), String> {
    decode::u64(bytes).map_err(|err| format!("invalid varint: {err}"))
}
