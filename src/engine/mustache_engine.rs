//! Mustache-backed template engine

use mustache::{Context, Template};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::context::to_context;
use super::{EngineError, TemplateEngine, LAYOUT_BODY_KEYS};
use crate::domain::Document;
use crate::utils::read_text_file;

/// Partials are looked up with this extension when the template has none.
const DEFAULT_PARTIAL_EXTENSION: &str = "mustache";

/// A parsed template with its partials already inlined.
pub struct CompiledTemplate {
    name: String,
    template: Template,
}

impl CompiledTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render_value(&self, context: &Value) -> Result<String, EngineError> {
        Ok(self.template.render_to_string(context)?)
    }
}

impl std::fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTemplate").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Stateless engine; every compile reads the template and its partials afresh.
#[derive(Debug, Default, Clone, Copy)]
pub struct MustacheEngine;

impl MustacheEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for MustacheEngine {
    type Compiled = CompiledTemplate;

    fn compile(&self, path: &Path) -> Result<CompiledTemplate, EngineError> {
        let source = read_text_file(path)?;
        let template = partial_context(path).compile(source.chars())?;
        Ok(CompiledTemplate { name: path.display().to_string(), template })
    }

    fn render(&self, template: &CompiledTemplate, data: &Document) -> Result<String, EngineError> {
        template.render_value(&to_context(data))
    }

    fn render_in_layout(
        &self,
        template: &CompiledTemplate,
        layout: &CompiledTemplate,
        data: &Document,
    ) -> Result<String, EngineError> {
        let context = to_context(data);
        let body = template.render_value(&context)?;

        let mut scope = match context {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for key in LAYOUT_BODY_KEYS {
            scope.insert(key.to_string(), Value::String(body.clone()));
        }

        layout.render_value(&Value::Object(scope))
    }
}

/// `{{> name}}` resolves to `name.<ext>` in the template's own directory,
/// `<ext>` being the template's extension.
fn partial_context(template_path: &Path) -> Context {
    let dir = match template_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let extension = template_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(DEFAULT_PARTIAL_EXTENSION);
    tracing::debug!("Resolving partials as {}/*.{}", dir.display(), extension);

    let mut context = Context::new(dir);
    context.template_extension = extension.to_string();
    context
}
