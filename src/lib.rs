//! # Alloy PNS
//!
//! Naming-service helpers for [alloy](https://docs.rs/alloy): the
//! [EIP-1577](https://eips.ethereum.org/EIPS/eip-1577) content hash codec, domain
//! name normalisation and token id derivation.

pub use contenthash::{
    decode_contenthash, encode_contenthash, ContentHashCodec, ContentHashCodecBuilder,
};
pub use errors::*;
pub use registry::{CodecRegistry, MulticodecTable};
pub use token_id::{derive_node_id, derive_token_id, labelhash, namehash};
pub use types::*;

pub mod consts;
mod contenthash;
pub mod digest;
mod errors;
mod registry;
mod token_id;
mod types;
pub mod utils;
pub mod varint;
