use serde::Serialize;

use super::AppError;
use super::validation::validate_module_name;

/// A validated engine module name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and create a new `ModuleName`.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_module_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidModuleName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
