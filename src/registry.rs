/// This module provides the multicodec lookups the content hash codec relies on.
/// The codec never owns the table, it asks a registry for names and numbers,
/// so alternative or reduced tables can be plugged in.
use crate::{varint, ContentHashError};

pub trait CodecRegistry: Clone + Send + Sync {
    /// Numeric code registered for `name`.
    fn by_name(&self, name: &str) -> Option<u64>;

    /// Name registered for `code`.
    fn by_code(&self, code: u64) -> Option<&str>;

    /// Removes the varint codec tag at the front of `bytes`, returning the
    /// registered codec name and the remaining bytes.
    fn strip_tag<'a>(&self, bytes: &'a [u8]) -> Result<(&str, &'a [u8]), ContentHashError> {
        let (code, rest) = varint::read(bytes).map_err(ContentHashError::MalformedInput)?;
        let name = self
            .by_code(code)
            .ok_or_else(|| ContentHashError::CodecLookup(format!("0x{code:x}")))?;
        tracing::trace!(code, name, "stripped codec tag");
        Ok((name, rest))
    }

    /// Like [`CodecRegistry::by_name`] but failing with [`ContentHashError::CodecLookup`].
    fn code_of(&self, name: &str) -> Result<u64, ContentHashError> {
        self.by_name(name)
            .ok_or_else(|| ContentHashError::CodecLookup(name.to_string()))
    }
}

/// Static subset of the multiformats multicodec table.
#[derive(Default, Debug, Clone, Copy)]
pub struct MulticodecTable;

impl CodecRegistry for MulticodecTable {
    fn by_name(&self, name: &str) -> Option<u64> {
        MULTICODECS
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, code)| *code)
    }

    fn by_code(&self, code: u64) -> Option<&str> {
        MULTICODECS
            .iter()
            .find(|(_, entry)| *entry == code)
            .map(|(name, _)| *name)
    }
}

static MULTICODECS: &[(&str, u64)] = &[
    ("identity", 0x00),
    ("cidv1", 0x01),
    ("cidv2", 0x02),
    ("cidv3", 0x03),
    ("ip4", 0x04),
    ("tcp", 0x06),
    ("sha1", 0x11),
    ("sha2-256", 0x12),
    ("sha2-512", 0x13),
    ("sha3-512", 0x14),
    ("sha3-384", 0x15),
    ("sha3-256", 0x16),
    ("sha3-224", 0x17),
    ("shake-128", 0x18),
    ("shake-256", 0x19),
    ("keccak-224", 0x1a),
    ("keccak-256", 0x1b),
    ("keccak-384", 0x1c),
    ("keccak-512", 0x1d),
    ("blake3", 0x1e),
    ("dccp", 0x21),
    ("murmur3-128", 0x22),
    ("ip6", 0x29),
    ("ip6zone", 0x2a),
    ("path", 0x2f),
    ("multicodec", 0x30),
    ("multihash", 0x31),
    ("multiaddr", 0x32),
    ("multibase", 0x33),
    ("dns", 0x35),
    ("dns4", 0x36),
    ("dns6", 0x37),
    ("dnsaddr", 0x38),
    ("protobuf", 0x50),
    ("cbor", 0x51),
    ("raw", 0x55),
    ("dbl-sha2-256", 0x56),
    ("rlp", 0x60),
    ("bencode", 0x63),
    ("dag-pb", 0x70),
    ("dag-cbor", 0x71),
    ("libp2p-key", 0x72),
    ("git-raw", 0x78),
    ("torrent-info", 0x7b),
    ("torrent-file", 0x7c),
    ("leofcoin-block", 0x81),
    ("leofcoin-tx", 0x82),
    ("leofcoin-pr", 0x83),
    ("sctp", 0x84),
    ("eth-block", 0x90),
    ("eth-block-list", 0x91),
    ("eth-tx-trie", 0x92),
    ("eth-tx", 0x93),
    ("eth-tx-receipt-trie", 0x94),
    ("eth-tx-receipt", 0x95),
    ("eth-state-trie", 0x96),
    ("eth-account-snapshot", 0x97),
    ("eth-storage-trie", 0x98),
    ("bitcoin-block", 0xb0),
    ("bitcoin-tx", 0xb1),
    ("zcash-block", 0xc0),
    ("zcash-tx", 0xc1),
    ("stellar-block", 0xd0),
    ("stellar-tx", 0xd1),
    ("md4", 0xd4),
    ("md5", 0xd5),
    ("bmt", 0xd6),
    ("decred-block", 0xe0),
    ("decred-tx", 0xe1),
    ("ipld-ns", 0xe2),
    ("ipfs-ns", 0xe3),
    ("swarm-ns", 0xe4),
    ("ipns-ns", 0xe5),
    ("zeronet", 0xe6),
    ("ed25519-pub", 0xed),
    ("dash-block", 0xf0),
    ("dash-tx", 0xf1),
    ("swarm-manifest", 0xfa),
    ("swarm-feed", 0xfb),
    ("udp", 0x0111),
    ("p2p-webrtc-star", 0x0113),
    ("p2p-webrtc-direct", 0x0114),
    ("p2p-stardust", 0x0115),
    ("p2p-circuit", 0x0122),
    ("dag-json", 0x0129),
    ("udt", 0x012d),
    ("utp", 0x012e),
    ("unix", 0x0190),
    ("p2p", 0x01a5),
    ("https", 0x01bb),
    ("onion", 0x01bc),
    ("onion3", 0x01bd),
    ("garlic64", 0x01be),
    ("garlic32", 0x01bf),
    ("quic", 0x01cc),
    ("ws", 0x01dd),
    ("wss", 0x01de),
    ("p2p-websocket-star", 0x01df),
    ("http", 0x01e0),
    ("json", 0x0200),
    ("messagepack", 0x0201),
    ("x11", 0x1100),
    ("sm3-256", 0x534d),
    ("blake2b-256", 0xb220),
    ("blake2b-512", 0xb240),
    ("blake2s-256", 0xb260),
    ("skein256-256", 0xb320),
    ("skein512-512", 0xb360),
    ("holochain-adr-v0", 0x807124),
    ("holochain-adr-v1", 0x817124),
    ("holochain-key-v0", 0x947124),
    ("holochain-key-v1", 0x957124),
    ("holochain-sig-v0", 0xa27124),
    ("holochain-sig-v1", 0xa37124),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("ipfs-ns", 0xe3)]
    #[case("swarm-ns", 0xe4)]
    #[case("dag-pb", 0x70)]
    #[case("swarm-manifest", 0xfa)]
    #[case("keccak-256", 0x1b)]
    fn lookups_are_symmetric(#[case] name: &str, #[case] code: u64) {
        assert_eq!(MulticodecTable.by_name(name), Some(code));
        assert_eq!(MulticodecTable.by_code(code), Some(name));
    }

    #[test]
    fn table_has_no_duplicates() {
        let names: HashSet<_> = MULTICODECS.iter().map(|(name, _)| name).collect();
        let codes: HashSet<_> = MULTICODECS.iter().map(|(_, code)| code).collect();
        assert_eq!(names.len(), MULTICODECS.len());
        assert_eq!(codes.len(), MULTICODECS.len());
    }

    #[test]
    fn strip_tag_returns_name_and_rest() {
        let (name, rest) = MulticodecTable.strip_tag(&[0xe4, 0x01, 0x01]).unwrap();
        assert_eq!(name, "swarm-ns");
        assert_eq!(rest, &[0x01]);
    }

    #[test]
    fn strip_tag_unknown_code() {
        assert_eq!(
            MulticodecTable.strip_tag(&[0xf7, 0xee, 0x01]),
            Err(ContentHashError::CodecLookup("0x7777".to_string()))
        );
    }

    #[test]
    fn strip_tag_truncated() {
        assert!(matches!(
            MulticodecTable.strip_tag(&[]),
            Err(ContentHashError::MalformedInput(_))
        ));
    }

    #[test]
    fn code_of_unknown_name() {
        assert_eq!(
            MulticodecTable.code_of("not-a-codec"),
            Err(ContentHashError::CodecLookup("not-a-codec".to_string()))
        );
    }
}
