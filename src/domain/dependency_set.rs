use std::collections::BTreeSet;

use serde::Serialize;

use super::{AppError, ModuleName};

/// A deduplicated set of module names one dependency class links against.
///
/// Ordering within a set carries no meaning for the orchestrator; storage is
/// a `BTreeSet` so iteration and serialization stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySet(BTreeSet<ModuleName>);

impl DependencySet {
    /// An empty set, for dependency classes with no members.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate each name and build the set, rejecting duplicates.
    pub fn from_names(names: &[&str]) -> Result<Self, AppError> {
        let mut set = BTreeSet::new();
        for name in names {
            let module = ModuleName::new(name)?;
            if !set.insert(module) {
                return Err(AppError::DuplicateDependency(name.to_string()));
            }
        }
        Ok(Self(set))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|module| module.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleName> {
        self.0.iter()
    }

    /// Member names in deterministic order, for export surfaces.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(ModuleName::as_str).collect()
    }
}
