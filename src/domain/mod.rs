//! Core domain types shared by the loader, merger and dispatcher.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// A dynamically shaped data tree: mapping, sequence, scalar or null.
pub type Document = serde_yaml::Value;

/// Where a data document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Stdin => f.write_str("stdin"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved inputs for one run. Built once from the command line and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub data: DataSource,
    pub template: PathBuf,
    pub layout: Option<PathBuf>,
    pub override_data: Option<PathBuf>,
}

impl Invocation {
    /// Resolve positional arguments and flags.
    ///
    /// Returns `Ok(None)` when no positionals were given, in which case the
    /// caller shows usage and reads nothing. Empty flag values count as absent.
    pub fn from_args(
        positionals: Vec<PathBuf>,
        layout: Option<PathBuf>,
        override_data: Option<PathBuf>,
    ) -> Result<Option<Self>> {
        let mut positionals = positionals.into_iter();
        let (data, template) = match (positionals.next(), positionals.next(), positionals.len()) {
            (None, _, _) => return Ok(None),
            (Some(template), None, _) => (DataSource::Stdin, template),
            (Some(data), Some(template), 0) => (DataSource::File(data), template),
            (Some(_), Some(_), extra) => return Err(PipelineError::ArgumentCount(2 + extra)),
        };

        Ok(Some(Self {
            data,
            template,
            layout: layout.filter(|p| !is_blank(p)),
            override_data: override_data.filter(|p| !is_blank(p)),
        }))
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Human-readable name of a document's top-level node kind.
pub fn document_kind(document: &Document) -> &'static str {
    match document {
        Document::Null => "null",
        Document::Bool(_) => "boolean",
        Document::Number(_) => "number",
        Document::String(_) => "string",
        Document::Sequence(_) => "sequence",
        Document::Mapping(_) => "mapping",
        Document::Tagged(_) => "tagged value",
    }
}
