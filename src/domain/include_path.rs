use std::path::{Path, PathBuf};

use serde::Serialize;

/// One entry in a module's public include-path list.
///
/// Declaration order is compiler search order, so these are carried in a
/// `Vec`, never a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum IncludePath {
    /// Fixed fragment relative to the module's own source root.
    ModuleRelative(String),
    /// Fixed suffix joined under the host-supplied engine root directory.
    EngineRelative(String),
}

impl IncludePath {
    /// Resolve this entry against an optional engine root.
    ///
    /// Module-relative entries always resolve. Engine-relative entries
    /// resolve only when a root is supplied; otherwise they are omitted
    /// rather than produced with a malformed value.
    pub fn resolve(&self, engine_root: Option<&Path>) -> Option<PathBuf> {
        match self {
            IncludePath::ModuleRelative(fragment) => Some(PathBuf::from(fragment)),
            IncludePath::EngineRelative(suffix) => engine_root.map(|root| root.join(suffix)),
        }
    }

    /// The fixed path fragment as declared, before any resolution.
    pub fn fragment(&self) -> &str {
        match self {
            IncludePath::ModuleRelative(fragment) | IncludePath::EngineRelative(fragment) => {
                fragment
            }
        }
    }
}
