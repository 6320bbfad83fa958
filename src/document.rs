// src/document.rs

//! Raw page bytes and the parsed, read-only view the extractors query.

use std::io::Read;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractResult, Result};
pub use crate::utils::decode::SourceEncoding;
use crate::utils::decode::{decode, decode_reader};

/// Page bytes as received, with their declared encoding.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    encoding: SourceEncoding,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, encoding: SourceEncoding) -> Self {
        Self {
            bytes: bytes.into(),
            encoding,
        }
    }

    /// Decode into canonical text.
    pub fn decode(&self) -> ExtractResult<String> {
        decode(&self.bytes, self.encoding)
    }

    /// Decode and parse, consuming the raw bytes.
    pub fn into_structured(self) -> ExtractResult<StructuredDocument> {
        Ok(StructuredDocument::parse(self.decode()?))
    }
}

/// Parsed HTML tree together with the canonical text it came from.
pub struct StructuredDocument {
    source: String,
    html: Html,
}

impl StructuredDocument {
    /// Parse canonical (already decoded) text.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let html = Html::parse_document(&source);
        Self { source, html }
    }

    /// Stream-decode a page from a reader and parse it.
    pub fn from_reader<R: Read>(reader: R, encoding: SourceEncoding) -> Result<Self> {
        Ok(Self::parse(decode_reader(reader, encoding)?))
    }

    /// The canonical text, for pattern-based extraction.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }

    /// First element matching `selector`.
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Whether any element matches `selector`.
    pub fn contains(&self, selector: &Selector) -> bool {
        self.first(selector).is_some()
    }
}
