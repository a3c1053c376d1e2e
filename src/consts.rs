// https://github.com/multiformats/multicodec/blob/master/table.csv
pub const IPFS_NAMESPACE: &str = "ipfs-ns";
pub const SWARM_NAMESPACE: &str = "swarm-ns";
pub const DAG_PB: &str = "dag-pb";
pub const SWARM_MANIFEST: &str = "swarm-manifest";

/// CID version written after the namespace codec.
pub const CID_VERSION: u64 = 1;

/// Multihash function tag for Keccak-256, used to wrap swarm digests.
pub const KECCAK_256: u64 = 0x1b;

/// Largest digest a content hash multihash may carry.
pub const MAX_DIGEST_SIZE: usize = 64;
