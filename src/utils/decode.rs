// src/utils/decode.rs

//! Decoding of legacy-encoded page bytes into canonical text.
//!
//! The lottery site serves EUC-KR. Decoding is strict: a malformed byte
//! sequence fails with [`ExtractError::Decode`] instead of being replaced
//! with U+FFFD, so a corrupted page never reaches the digit parsers.

use std::io::Read;

use encoding_rs::{Decoder, DecoderResult, EUC_KR, Encoding, UTF_8};

use crate::error::{ExtractError, ExtractResult, Result};

const CHUNK_SIZE: usize = 8 * 1024;

/// Declared encoding of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceEncoding {
    /// EUC-KR (decoded as its Windows-949 superset)
    #[default]
    #[cfg_attr(feature = "cli", value(name = "euc-kr"))]
    EucKr,
    #[cfg_attr(feature = "cli", value(name = "utf-8"))]
    Utf8,
}

impl SourceEncoding {
    fn encoding(self) -> &'static Encoding {
        match self {
            SourceEncoding::EucKr => EUC_KR,
            SourceEncoding::Utf8 => UTF_8,
        }
    }

    pub fn name(self) -> &'static str {
        self.encoding().name()
    }
}

/// Incremental decoder that tracks how many source bytes it has consumed.
pub struct StreamDecoder {
    decoder: Decoder,
    encoding: SourceEncoding,
    consumed: usize,
    output: String,
}

impl StreamDecoder {
    pub fn new(encoding: SourceEncoding) -> Self {
        Self {
            decoder: encoding.encoding().new_decoder_without_bom_handling(),
            encoding,
            consumed: 0,
            output: String::new(),
        }
    }

    /// Decode the next chunk. `last` must be set on the final call so a
    /// truncated trailing sequence is reported.
    pub fn feed(&mut self, mut src: &[u8], last: bool) -> ExtractResult<()> {
        loop {
            if let Some(needed) = self
                .decoder
                .max_utf8_buffer_length_without_replacement(src.len())
            {
                self.output.reserve(needed);
            }

            let (result, read) =
                self.decoder
                    .decode_to_string_without_replacement(src, &mut self.output, last);

            match result {
                DecoderResult::InputEmpty => {
                    self.consumed += read;
                    return Ok(());
                }
                DecoderResult::OutputFull => {
                    self.consumed += read;
                    src = &src[read..];
                }
                DecoderResult::Malformed(bad, extra) => {
                    let offset =
                        (self.consumed + read).saturating_sub(usize::from(bad) + usize::from(extra));
                    return Err(ExtractError::Decode {
                        encoding: self.encoding.name(),
                        offset,
                    });
                }
            }
        }
    }

    /// Finish decoding and return the text.
    pub fn finish(mut self) -> ExtractResult<String> {
        self.feed(&[], true)?;
        Ok(self.output)
    }
}

/// Decode a fully buffered page.
pub fn decode(bytes: &[u8], encoding: SourceEncoding) -> ExtractResult<String> {
    let mut decoder = StreamDecoder::new(encoding);
    decoder.feed(bytes, false)?;
    decoder.finish()
}

/// Decode a page from a reader in fixed-size chunks without buffering the
/// raw bytes.
pub fn decode_reader<R: Read>(mut reader: R, encoding: SourceEncoding) -> Result<String> {
    let mut decoder = StreamDecoder::new(encoding);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        decoder.feed(&chunk[..n], false)?;
    }

    Ok(decoder.finish()?)
}
