use crate::consts;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Storage network a content hash points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Ipfs,
    Swarm,
}

impl Scheme {
    /// Name used as the middle segment of the text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ipfs => "ipfs",
            Scheme::Swarm => "swarm",
        }
    }

    /// Multicodec name of the namespace tag leading the binary form.
    pub fn namespace(&self) -> &'static str {
        match self {
            Scheme::Ipfs => consts::IPFS_NAMESPACE,
            Scheme::Swarm => consts::SWARM_NAMESPACE,
        }
    }

    /// Multicodec name of the sub-codec following the CID version.
    pub fn subcodec(&self) -> &'static str {
        match self {
            Scheme::Ipfs => consts::DAG_PB,
            Scheme::Swarm => consts::SWARM_MANIFEST,
        }
    }

    pub fn from_namespace(name: &str) -> Option<Self> {
        match name {
            consts::IPFS_NAMESPACE => Some(Scheme::Ipfs),
            consts::SWARM_NAMESPACE => Some(Scheme::Swarm),
            _ => None,
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipfs" => Ok(Scheme::Ipfs),
            "swarm" => Ok(Scheme::Swarm),
            other => Err(other.to_string()),
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
