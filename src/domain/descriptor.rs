use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{DependencySet, IncludePath, ModuleName, PchMode};

/// Everything the external build orchestrator needs to compile and link one
/// module: PCH strategy, include search paths, and the three dependency
/// classes.
///
/// A descriptor is constructed once per build invocation and never mutated
/// afterwards. It performs no I/O and does not check whether the named
/// dependency modules exist; resolving them is the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Identifier of the module these rules describe.
    pub name: ModuleName,
    /// Precompiled-header strategy for the module's translation units.
    pub pch_mode: PchMode,
    /// Include search paths in declared (compiler search) order.
    pub public_include_paths: Vec<IncludePath>,
    /// Modules re-exposed to this module's consumers.
    pub public_dependencies: DependencySet,
    /// Modules used internally only; not propagated to consumers.
    pub private_dependencies: DependencySet,
    /// Modules loaded at runtime instead of link time.
    pub dynamic_dependencies: DependencySet,
}

impl ModuleDescriptor {
    /// Resolve the include-path list against an optional engine root.
    ///
    /// Entries keep their declared order. Engine-relative entries with no
    /// root to join under are omitted from the result.
    pub fn resolved_include_paths(&self, engine_root: Option<&Path>) -> Vec<PathBuf> {
        self.public_include_paths.iter().filter_map(|path| path.resolve(engine_root)).collect()
    }
}
