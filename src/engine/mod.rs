//! Template engine boundary
//!
//! The dispatcher only ever talks to a [`TemplateEngine`]; the production
//! implementation is backed by the `mustache` crate.

use std::path::Path;

use crate::domain::Document;

pub mod context;
pub mod mustache_engine;

pub use mustache_engine::{CompiledTemplate, MustacheEngine};

/// Opaque engine failure.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Keys under which a layout sees the rendered body of the inner template.
pub const LAYOUT_BODY_KEYS: [&str; 2] = ["content", "yield"];

/// Compile-and-render capability of a template engine.
pub trait TemplateEngine {
    /// Engine-owned compiled artifact.
    type Compiled;

    fn compile(&self, path: &Path) -> Result<Self::Compiled, EngineError>;

    fn render(&self, template: &Self::Compiled, data: &Document) -> Result<String, EngineError>;

    /// Render `template`, then render `layout` with the result bound to the
    /// [`LAYOUT_BODY_KEYS`].
    fn render_in_layout(
        &self,
        template: &Self::Compiled,
        layout: &Self::Compiled,
        data: &Document,
    ) -> Result<String, EngineError>;
}
