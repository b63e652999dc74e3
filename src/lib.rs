//! stache: render mustache-style templates against YAML data
//!
//! Loads a data document from stdin or a file, optionally merges an override
//! document over it, and renders a template (optionally wrapped in a layout)
//! through a pluggable template engine.

pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use domain::{DataSource, Document, Invocation};
pub use engine::{MustacheEngine, TemplateEngine};
pub use error::{PipelineError, Result};
