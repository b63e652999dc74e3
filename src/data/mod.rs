//! Data document loading and override merging

pub mod loader;
pub mod merge;

pub use loader::{load, load_from};
pub use merge::merge;

use crate::domain::{DataSource, Document, Invocation};
use crate::error::Result;

/// Load the primary document and, when configured, merge the override over it.
///
/// Without an override the primary document is returned untouched.
pub fn resolve(invocation: &Invocation) -> Result<Document> {
    let primary = load(&invocation.data)?;
    let Some(override_path) = &invocation.override_data else {
        return Ok(primary);
    };

    let override_doc = load(&DataSource::File(override_path.clone()))?;
    let merged = merge(primary, &override_doc)?;
    tracing::debug!("Applied override {}", override_path.display());
    Ok(merged)
}
