use alloy::hex;
use alloy_pns::{utils, ContentHashCodec};
use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let codec = ContentHashCodec::builder()
        .with_strict_subcodec(true)
        .build();

    for text in [
        "/ipfs/QmRAQB6YaCyidP37UdDnjFY5vQuiBrcqdyoW1CuDgwxkD4",
        "/swarm/d1de9994b4d039f6548d191eb26786769f580809256b4685ef316805265ea162",
    ] {
        println!("\nencoding: {}", text);

        let bytes = codec.encode(text)?;
        println!("contenthash: 0x{}", hex::encode(&bytes));

        let decoded = codec.decode(&bytes)?;
        println!("decoded: {}", decoded);
    }

    for name in ["Vitalik.PLS", "*.wealdtech.pls", "_dmarc.wealdtech.pls"] {
        println!("\nname: {}", name);
        println!("normalised: {:?}", utils::normalise_domain(name));
        println!("strict: {:?}", utils::normalise_domain_strict(name));
        println!("tld: {}", utils::tld(name));
        println!("node id: {:?}", alloy_pns::derive_node_id(name));
        println!("token id: {:?}", alloy_pns::derive_token_id(name));
    }

    Ok(())
}
