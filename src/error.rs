//! Pipeline error kinds
//!
//! Every failure is terminal for the invocation; nothing in the pipeline
//! retries or recovers, so these variants only describe what went wrong.

use std::path::PathBuf;
use thiserror::Error;

use crate::engine::EngineError;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// More positional arguments than `[data] <template>`.
    #[error("accepts between 0 and 2 arg(s), received {0}")]
    ArgumentCount(usize),

    #[error("failed to read data from {source_name}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to unmarshal data from {source_name}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "override merge requires two top-level mappings (primary is {primary}, override is {override_kind})"
    )]
    TypeMismatch { primary: &'static str, override_kind: &'static str },

    #[error("failed to compile template {}", .path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("failed to render template {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}
