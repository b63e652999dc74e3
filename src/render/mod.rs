//! Rendering dispatch: plain or layout-wrapped
//!
//! The dispatcher adds nothing of its own to the output; it only decides which
//! engine operation to call and labels engine failures with the path involved.

use std::path::Path;

use crate::domain::Document;
use crate::engine::TemplateEngine;
use crate::error::{PipelineError, Result};

/// How a template is rendered for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode<'a> {
    Plain,
    Layout(&'a Path),
}

impl<'a> RenderMode<'a> {
    /// An absent or empty layout path means plain rendering.
    pub fn from_layout(layout: Option<&'a Path>) -> Self {
        match layout {
            Some(path) if !path.as_os_str().is_empty() => RenderMode::Layout(path),
            _ => RenderMode::Plain,
        }
    }
}

/// Compile `template_path` (and the layout, if any) and render it against `data`.
///
/// The primary template is always compiled first. Compiled artifacts are
/// dropped when this returns.
pub fn render<E: TemplateEngine>(
    engine: &E,
    template_path: &Path,
    layout_path: Option<&Path>,
    data: &Document,
) -> Result<String> {
    let template = compile(engine, template_path)?;

    let output = match RenderMode::from_layout(layout_path) {
        RenderMode::Plain => {
            tracing::debug!("Rendering {}", template_path.display());
            engine.render(&template, data)
        }
        RenderMode::Layout(layout_path) => {
            let layout = compile(engine, layout_path)?;
            tracing::debug!(
                "Rendering {} in layout {}",
                template_path.display(),
                layout_path.display()
            );
            engine.render_in_layout(&template, &layout, data)
        }
    };

    output.map_err(|source| PipelineError::Render { path: template_path.to_path_buf(), source })
}

fn compile<E: TemplateEngine>(engine: &E, path: &Path) -> Result<E::Compiled> {
    let compiled = engine
        .compile(path)
        .map_err(|source| PipelineError::Compile { path: path.to_path_buf(), source })?;
    tracing::debug!("Compiled {}", path.display());
    Ok(compiled)
}
