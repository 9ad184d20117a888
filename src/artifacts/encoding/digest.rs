use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::ValueEnum;
use sha1::Sha1;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Representation {
    #[default]
    Hex,
    Base64,
}

fn hash<D: Digest>(input: &str) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(input.as_bytes());
    hasher.finalize().to_vec()
}

pub fn digest(input: &str, algorithm: DigestAlgorithm, representation: Representation) -> String {
    let bytes = match algorithm {
        DigestAlgorithm::Sha256 => hash::<Sha256>(input),
        DigestAlgorithm::Sha1 => hash::<Sha1>(input),
    };

    match representation {
        Representation::Hex => bytes.iter().map(|byte| format!("{byte:02x}")).collect(),
        Representation::Base64 => STANDARD.encode(bytes),
    }
}
