use std::fmt;

use serde::Serialize;

use super::AppError;

/// The observed revisions of the RenderStream build rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    /// First revision: D3D11-only rendering backend wiring.
    Initial,
    /// Second revision: adds the D3D12 backend dependency and its headers.
    D3d12,
}

impl Revision {
    /// All known revisions in order.
    pub const ALL: [Revision; 2] = [Revision::Initial, Revision::D3d12];

    /// Stable key used in config files and CLI arguments.
    pub fn key_name(&self) -> &'static str {
        match self {
            Revision::Initial => "initial",
            Revision::D3d12 => "d3d12",
        }
    }

    /// Parse a revision from its stable key.
    pub fn from_key_name(name: &str) -> Result<Revision, AppError> {
        match name.to_lowercase().as_str() {
            "initial" => Ok(Revision::Initial),
            "d3d12" => Ok(Revision::D3d12),
            _ => Err(AppError::UnknownRevision { name: name.to_string() }),
        }
    }

    /// Human-readable summary of what changed in this revision.
    pub fn description(&self) -> &'static str {
        match self {
            Revision::Initial => "D3D11 rendering backend only.",
            Revision::D3d12 => {
                "Adds the D3D12RHI private dependency and three engine-relative include paths."
            }
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())
    }
}
