/// This module derives the identifiers a name registry keys names by.
/// Registrar NFTs use the labelhash of the registered label as their token id,
/// while resolvers and the registry itself are keyed by the namehash of the full name.
use crate::{utils, DomainError};
use alloy::primitives::{keccak256, B256, U256};
use std::borrow::Cow;

/// Returns the keccak-256 hash of a single label.
pub fn labelhash(label: &str) -> B256 {
    keccak256(label.as_bytes())
}

/// Returns the namehash of `name` as specified in [EIP-137](https://eips.ethereum.org/EIPS/eip-137).
///
/// The name is hashed as given; use [`derive_node_id`] for user input.
pub fn namehash(name: &str) -> B256 {
    const VARIATION_SELECTOR: char = '\u{fe0f}';

    if name.is_empty() {
        return B256::ZERO;
    }

    let name = if name.contains(VARIATION_SELECTOR) {
        Cow::Owned(name.replace(VARIATION_SELECTOR, ""))
    } else {
        Cow::Borrowed(name)
    };

    let mut node = B256::ZERO;
    for label in name.rsplit('.') {
        node = keccak256([node.as_slice(), labelhash(label).as_slice()].concat());
    }
    node
}

/// Derives the registry node of a name: the namehash of its normal form.
pub fn derive_node_id(name: &str) -> Result<B256, DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyDomain);
    }
    let name = utils::normalise_domain(name)?;
    Ok(namehash(&name))
}

/// Derives the registrar token id of a name: the labelhash of its lowest-level
/// label, read as a big-endian integer.
///
/// Only the local derivation is performed; whether the name is registered is
/// not checked.
pub fn derive_token_id(name: &str) -> Result<U256, DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyDomain);
    }
    let label = utils::domain_part(name, 1)?;
    let token_id = U256::from_be_bytes(labelhash(&label).0);
    tracing::debug!(name, %token_id, "derived token id");
    Ok(token_id)
}
