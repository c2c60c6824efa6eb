use std::path::Path;

use crate::domain::{AppError, ModuleDescriptor, Revision, render_stream};

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Json,
    Text,
}

/// Render the descriptor for one revision.
pub fn execute(
    revision: Revision,
    engine_root: Option<&Path>,
    format: ShowFormat,
) -> Result<String, AppError> {
    let descriptor = render_stream(revision)?;
    match format {
        ShowFormat::Json => Ok(serde_json::to_string_pretty(&descriptor)?),
        ShowFormat::Text => Ok(render_text(&descriptor, revision, engine_root)),
    }
}

fn render_text(
    descriptor: &ModuleDescriptor,
    revision: Revision,
    engine_root: Option<&Path>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("module: {}\n", descriptor.name));
    out.push_str(&format!("revision: {} ({})\n", revision, revision.description()));
    out.push_str(&format!("pch mode: {}\n", descriptor.pch_mode));

    out.push_str("include paths:\n");
    for path in descriptor.resolved_include_paths(engine_root) {
        out.push_str(&format!("  {}\n", path.display()));
    }

    let public = descriptor.public_dependencies.names().join(", ");
    let private = descriptor.private_dependencies.names().join(", ");
    out.push_str(&format!("public dependencies: {public}\n"));
    out.push_str(&format!("private dependencies: {private}\n"));
    if descriptor.dynamic_dependencies.is_empty() {
        out.push_str("dynamic dependencies: (none)\n");
    } else {
        let dynamic = descriptor.dynamic_dependencies.names().join(", ");
        out.push_str(&format!("dynamic dependencies: {dynamic}\n"));
    }
    out
}
