//! Data document loading from stdin or a file

use serde::Deserialize;
use std::io::Read;

use crate::domain::{document_kind, DataSource, Document};
use crate::error::{PipelineError, Result};

/// Read and parse a complete data document from `source`.
pub fn load(source: &DataSource) -> Result<Document> {
    let document = match source {
        DataSource::Stdin => load_from(std::io::stdin().lock(), source)?,
        DataSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|e| io_error(source, e))?;
            parse(&bytes, source)?
        }
    };
    tracing::debug!("Loaded {} document from {}", document_kind(&document), source);
    Ok(document)
}

/// Read `reader` to the end and parse it. `origin` only labels errors.
pub fn load_from<R: Read>(mut reader: R, origin: &DataSource) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| io_error(origin, e))?;
    parse(&bytes, origin)
}

fn parse(bytes: &[u8], origin: &DataSource) -> Result<Document> {
    // An empty stream is a valid, empty document.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::Null);
    }

    // Only the first document of a stream is used; later ones are ignored.
    let Some(first) = serde_yaml::Deserializer::from_slice(bytes).next() else {
        return Ok(Document::Null);
    };
    let mut document = Document::deserialize(first).map_err(|e| parse_error(origin, e))?;
    document.apply_merge().map_err(|e| parse_error(origin, e))?;
    Ok(document)
}

fn parse_error(origin: &DataSource, source: serde_yaml::Error) -> PipelineError {
    PipelineError::Parse { source_name: origin.to_string(), source }
}

fn io_error(origin: &DataSource, source: std::io::Error) -> PipelineError {
    PipelineError::Io { source_name: origin.to_string(), source }
}
