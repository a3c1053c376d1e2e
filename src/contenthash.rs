use crate::{
    consts, digest,
    registry::{CodecRegistry, MulticodecTable},
    varint, ContentHashError, Scheme,
};
use alloy::{hex, primitives::Bytes};

/// Converts between the EIP-1577 text and binary content hash forms.
#[derive(Debug, Clone)]
pub struct ContentHashCodec<R> {
    registry: R,
    strict_subcodec: bool,
}

pub struct ContentHashCodecBuilder<R> {
    registry: R,
    strict_subcodec: Option<bool>,
}

impl Default for ContentHashCodecBuilder<MulticodecTable> {
    fn default() -> Self {
        ContentHashCodecBuilder {
            registry: MulticodecTable,
            strict_subcodec: None,
        }
    }
}

impl<R> ContentHashCodecBuilder<R>
where
    R: CodecRegistry,
{
    pub fn with_registry<R2>(self, registry: R2) -> ContentHashCodecBuilder<R2> {
        ContentHashCodecBuilder {
            registry,
            strict_subcodec: self.strict_subcodec,
        }
    }

    /// Reject binary content hashes whose sub-codec does not belong to their namespace.
    pub fn with_strict_subcodec(mut self, strict: bool) -> Self {
        self.strict_subcodec = Some(strict);
        self
    }

    pub fn build(self) -> ContentHashCodec<R> {
        ContentHashCodec {
            registry: self.registry,
            strict_subcodec: self.strict_subcodec.unwrap_or(false),
        }
    }
}

impl ContentHashCodec<MulticodecTable> {
    pub fn builder() -> ContentHashCodecBuilder<MulticodecTable> {
        ContentHashCodecBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl Default for ContentHashCodec<MulticodecTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ContentHashCodec<R> {
    pub fn strict_subcodec(&self) -> bool {
        self.strict_subcodec
    }
}

impl<R> ContentHashCodec<R>
where
    R: CodecRegistry,
{
    /// Turns the EIP-1577 text format (`/ipfs/<base58>` or `/swarm/<hex>`) into the binary format.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn encode(&self, text: &str) -> Result<Bytes, ContentHashError> {
        let bits: Vec<&str> = text.split('/').collect();
        let [_, scheme, payload] = bits.as_slice() else {
            return Err(ContentHashError::Format);
        };
        let scheme: Scheme = scheme
            .parse()
            .map_err(ContentHashError::UnsupportedScheme)?;

        let mut data = Vec::new();
        varint::write(self.registry.code_of(scheme.namespace())?, &mut data);
        varint::write(consts::CID_VERSION, &mut data);
        varint::write(self.registry.code_of(scheme.subcodec())?, &mut data);

        let hash = match scheme {
            Scheme::Ipfs => {
                digest::from_base58(payload).map_err(|e| ContentHashError::payload(scheme, e))?
            }
            Scheme::Swarm => {
                let raw =
                    digest::from_hex(payload).map_err(|e| ContentHashError::payload(scheme, e))?;
                digest::wrap_keccak(&raw).map_err(|e| ContentHashError::payload(scheme, e))?
            }
        };
        data.extend_from_slice(&hash.to_bytes());

        tracing::debug!(%scheme, len = data.len(), "encoded content hash");
        Ok(data.into())
    }

    /// Turns the EIP-1577 binary format into the text format.
    #[tracing::instrument(skip_all, fields(len = bytes.len()), level = "debug")]
    pub fn decode(&self, bytes: &[u8]) -> Result<String, ContentHashError> {
        let (codec, data) = self.registry.strip_tag(bytes)?;

        let data = match varint::read(data) {
            Ok((id, rest)) if id != 0 => rest,
            _ => return Err(ContentHashError::MalformedInput("unknown CID".to_string())),
        };

        let (subcodec, data) = self.registry.strip_tag(data)?;
        tracing::debug!(codec, subcodec, "stripped content hash header");

        let scheme = Scheme::from_namespace(codec)
            .ok_or_else(|| ContentHashError::UnsupportedScheme(codec.to_string()))?;
        if self.strict_subcodec && subcodec != scheme.subcodec() {
            return Err(ContentHashError::MalformedInput(format!(
                "sub-codec {subcodec} does not belong to {codec}"
            )));
        }

        let hash = digest::parse(data).map_err(|e| ContentHashError::payload(scheme, e))?;
        Ok(match scheme {
            Scheme::Ipfs => format!("/ipfs/{}", digest::to_base58(&hash)),
            Scheme::Swarm => format!("/swarm/{}", hex::encode(hash.digest())),
        })
    }
}

/// Encodes `text` with the default multicodec table.
pub fn encode_contenthash(text: &str) -> Result<Bytes, ContentHashError> {
    ContentHashCodec::new().encode(text)
}

/// Decodes `bytes` with the default multicodec table.
pub fn decode_contenthash(bytes: &[u8]) -> Result<String, ContentHashError> {
    ContentHashCodec::new().decode(bytes)
}
