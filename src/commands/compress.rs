use crate::areas::toolbox::Toolbox;
use crate::artifacts::compression::{gzip, zstd};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CompressionCodec {
    #[default]
    Gzip,
    Zstd,
}

impl Toolbox {
    pub fn compress(&self, codec: CompressionCodec, text: &str) -> anyhow::Result<()> {
        let compressed = match codec {
            CompressionCodec::Gzip => gzip::compress(text),
            CompressionCodec::Zstd => zstd::compress(text),
        };

        self.report(compressed)
    }

    pub fn decompress(&self, codec: CompressionCodec, text: &str) -> anyhow::Result<()> {
        let decompressed = match codec {
            CompressionCodec::Gzip => gzip::decompress(text),
            CompressionCodec::Zstd => zstd::decompress(text),
        };

        self.report(decompressed)
    }
}
