//! Shallow override merging

use crate::domain::{document_kind, Document};
use crate::error::{PipelineError, Result};

/// Merge the top-level keys of `override_doc` over `primary`.
///
/// Override values replace primary values wholesale, nested mappings
/// included. Keys only present in `primary` are kept as they are. Both
/// documents must be mappings at the top level.
pub fn merge(primary: Document, override_doc: &Document) -> Result<Document> {
    let (mut merged, overrides) = match (primary, override_doc) {
        (Document::Mapping(merged), Document::Mapping(overrides)) => (merged, overrides),
        (primary, other) => {
            return Err(PipelineError::TypeMismatch {
                primary: document_kind(&primary),
                override_kind: document_kind(other),
            })
        }
    };

    for (key, value) in overrides {
        if merged.insert(key.clone(), value.clone()).is_some() {
            tracing::debug!("Override replaced key {:?}", key);
        }
    }

    Ok(Document::Mapping(merged))
}
