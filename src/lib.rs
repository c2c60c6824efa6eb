//! modrules: Model the RenderStream plugin's build-module rules and export
//! them for build orchestration.
//!
//! The core is one declarative record, [`ModuleDescriptor`]: PCH strategy,
//! ordered public include paths, and the public/private/dynamic dependency
//! classes an external build orchestrator consumes to compute compile and
//! link command lines. Two revisions of the rules are modeled; the second
//! adds the D3D12 rendering backend wiring.

pub mod app;
pub mod domain;

use std::path::Path;

use app::commands::{check, deps, flags, show};

pub use app::commands::check::CheckOutcome;
pub use app::commands::deps::DepScope;
pub use app::commands::show::ShowFormat;
pub use app::{TargetConfig, TargetSelection};
pub use domain::{
    AppError, DependencySet, IncludePath, ModuleDescriptor, ModuleName, PchMode, Revision,
    render_stream,
};

/// Construct the RenderStream descriptor for one revision.
///
/// Pure and repeatable: identical input yields a field-for-field identical
/// descriptor.
pub fn describe(revision: Revision) -> Result<ModuleDescriptor, AppError> {
    render_stream(revision)
}

/// Render the descriptor for a revision in the requested format.
pub fn describe_rendered(
    revision: Revision,
    engine_root: Option<&Path>,
    format: ShowFormat,
) -> Result<String, AppError> {
    show::execute(revision, engine_root, format)
}

/// Compiler include flags (`-I<path>`) for a revision, in declared order.
///
/// Engine-relative entries are omitted when no engine root is supplied.
pub fn include_flags(
    revision: Revision,
    engine_root: Option<&Path>,
) -> Result<Vec<String>, AppError> {
    flags::execute(revision, engine_root)
}

/// Dependency module names for a revision and dependency class.
pub fn dependency_names(revision: Revision, scope: DepScope) -> Result<Vec<String>, AppError> {
    deps::execute(revision, scope)
}

/// Validate the invariants of every known revision's rules table.
pub fn check() -> Result<CheckOutcome, AppError> {
    check::execute()
}
