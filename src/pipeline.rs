//! End-to-end render pipeline for one invocation.

use crate::data;
use crate::domain::Invocation;
use crate::engine::TemplateEngine;
use crate::error::Result;
use crate::render::render;

/// Resolve the data documents, then compile and render.
///
/// Data loading and merging finish before any template is touched, so a bad
/// data source never leads to a compile.
pub fn run_pipeline<E: TemplateEngine>(invocation: &Invocation, engine: &E) -> Result<String> {
    let document = data::resolve(invocation)?;
    render(engine, &invocation.template, invocation.layout.as_deref(), &document)
}
