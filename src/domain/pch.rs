use std::fmt;

use serde::Serialize;

use super::AppError;

/// Precompiled-header strategy the build orchestrator applies to a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PchMode {
    /// No precompiled headers at all.
    NoPchs,
    /// Module-private PCHs only, never a shared one.
    NoSharedPchs,
    /// Always use an engine-shared PCH.
    UseSharedPchs,
    /// Use the module's explicit PCH when declared, otherwise a shared one.
    UseExplicitOrSharedPchs,
}

impl PchMode {
    /// All available modes in order.
    pub const ALL: [PchMode; 4] = [
        PchMode::NoPchs,
        PchMode::NoSharedPchs,
        PchMode::UseSharedPchs,
        PchMode::UseExplicitOrSharedPchs,
    ];

    /// Stable key used in config files and serialized output.
    pub fn key_name(&self) -> &'static str {
        match self {
            PchMode::NoPchs => "no_pchs",
            PchMode::NoSharedPchs => "no_shared_pchs",
            PchMode::UseSharedPchs => "use_shared_pchs",
            PchMode::UseExplicitOrSharedPchs => "use_explicit_or_shared_pchs",
        }
    }

    /// Parse a mode from its stable key.
    pub fn from_key_name(name: &str) -> Result<PchMode, AppError> {
        match name.to_lowercase().as_str() {
            "no_pchs" => Ok(PchMode::NoPchs),
            "no_shared_pchs" => Ok(PchMode::NoSharedPchs),
            "use_shared_pchs" => Ok(PchMode::UseSharedPchs),
            "use_explicit_or_shared_pchs" => Ok(PchMode::UseExplicitOrSharedPchs),
            _ => Err(AppError::UnknownPchMode(name.to_string())),
        }
    }

    /// Human-readable summary of the strategy.
    pub fn description(&self) -> &'static str {
        match self {
            PchMode::NoPchs => "Compile every translation unit without precompiled headers.",
            PchMode::NoSharedPchs => "Use only this module's own precompiled header.",
            PchMode::UseSharedPchs => "Always compile against an engine-shared precompiled header.",
            PchMode::UseExplicitOrSharedPchs => {
                "Prefer the module's explicit precompiled header, fall back to a shared one."
            }
        }
    }
}

impl fmt::Display for PchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_roundtrip() {
        for mode in PchMode::ALL {
            assert_eq!(PchMode::from_key_name(mode.key_name()).unwrap(), mode);
        }
    }

    #[test]
    fn key_names_are_lowercase() {
        for mode in PchMode::ALL {
            assert_eq!(mode.key_name(), mode.key_name().to_lowercase());
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            PchMode::from_key_name("always"),
            Err(AppError::UnknownPchMode(_))
        ));
    }

    #[test]
    fn all_modes_have_descriptions() {
        for mode in PchMode::ALL {
            assert!(!mode.description().is_empty());
        }
    }
}
