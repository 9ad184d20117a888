use crate::areas::toolbox::Toolbox;
use crate::artifacts::encoding::digest::{self, DigestAlgorithm, Representation};
use crate::artifacts::encoding::{base64, base91};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Codec {
    #[default]
    Base64,
    Base91,
}

impl Toolbox {
    pub fn encode(&self, codec: Codec, text: &str) -> anyhow::Result<()> {
        let encoded = match codec {
            Codec::Base64 => base64::encode(text),
            Codec::Base91 => base91::encode(text),
        };

        self.report(Ok(encoded))
    }

    pub fn decode(&self, codec: Codec, text: &str) -> anyhow::Result<()> {
        let decoded = match codec {
            Codec::Base64 => base64::decode(text),
            Codec::Base91 => base91::decode(text),
        };

        self.report(decoded)
    }

    pub fn digest(
        &self,
        text: &str,
        algorithm: DigestAlgorithm,
        representation: Representation,
    ) -> anyhow::Result<()> {
        self.report(Ok(digest::digest(text, algorithm, representation)))
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;
    use crate::areas::toolbox::tests::toolbox;
    use crate::artifacts::encoding::digest::{DigestAlgorithm, Representation};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Codec::Base64)]
    #[case(Codec::Base91)]
    fn decode_reverses_encode(#[case] codec: Codec) {
        let (encoder, encoded) = toolbox();
        encoder.encode(codec, "Olá, mundo!").unwrap();

        let (decoder, decoded) = toolbox();
        decoder.decode(codec, encoded.contents().trim_end()).unwrap();

        assert_eq!(decoded.contents(), "Olá, mundo!\n");
        assert!(!decoder.failed());
    }

    #[test]
    fn bad_base64_is_reported() {
        let (toolbox, output) = toolbox();

        toolbox.decode(Codec::Base64, "not base64!").unwrap();

        assert!(toolbox.failed());
        assert!(output.contents().starts_with("error: base64-decode failed"));
    }

    #[test]
    fn writes_digest() {
        let (toolbox, output) = toolbox();

        toolbox
            .digest("", DigestAlgorithm::Sha1, Representation::Hex)
            .unwrap();

        assert_eq!(
            output.contents(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709\n"
        );
    }
}
