use std::fmt;

use crate::domain::{AppError, Revision, render_stream};

/// Which dependency class to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepScope {
    Public,
    Private,
    Dynamic,
    All,
}

impl DepScope {
    pub const ALL: [DepScope; 4] =
        [DepScope::Public, DepScope::Private, DepScope::Dynamic, DepScope::All];

    pub fn key_name(&self) -> &'static str {
        match self {
            DepScope::Public => "public",
            DepScope::Private => "private",
            DepScope::Dynamic => "dynamic",
            DepScope::All => "all",
        }
    }
}

impl fmt::Display for DepScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())
    }
}

/// List dependency module names for one revision and scope.
///
/// Names come out in the set's deterministic order; `All` concatenates
/// public, private, then dynamic without deduplicating across classes.
pub fn execute(revision: Revision, scope: DepScope) -> Result<Vec<String>, AppError> {
    let descriptor = render_stream(revision)?;
    let names = |set: &crate::domain::DependencySet| {
        set.names().iter().map(|name| name.to_string()).collect::<Vec<_>>()
    };

    Ok(match scope {
        DepScope::Public => names(&descriptor.public_dependencies),
        DepScope::Private => names(&descriptor.private_dependencies),
        DepScope::Dynamic => names(&descriptor.dynamic_dependencies),
        DepScope::All => {
            let mut all = names(&descriptor.public_dependencies);
            all.extend(names(&descriptor.private_dependencies));
            all.extend(names(&descriptor.dynamic_dependencies));
            all
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_scope_lists_interface_modules() {
        let names = execute(Revision::Initial, DepScope::Public).unwrap();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"MediaIOCore".to_string()));
        assert!(!names.contains(&"Slate".to_string()));
    }

    #[test]
    fn private_scope_reflects_revision_delta() {
        let initial = execute(Revision::Initial, DepScope::Private).unwrap();
        let d3d12 = execute(Revision::D3d12, DepScope::Private).unwrap();
        assert!(!initial.contains(&"D3D12RHI".to_string()));
        assert!(d3d12.contains(&"D3D12RHI".to_string()));
        assert_eq!(d3d12.len(), initial.len() + 1);
    }

    #[test]
    fn dynamic_scope_is_empty_for_both_revisions() {
        for revision in Revision::ALL {
            assert!(execute(revision, DepScope::Dynamic).unwrap().is_empty());
        }
    }

    #[test]
    fn all_scope_covers_every_class() {
        let all = execute(Revision::Initial, DepScope::All).unwrap();
        let public = execute(Revision::Initial, DepScope::Public).unwrap();
        let private = execute(Revision::Initial, DepScope::Private).unwrap();
        assert_eq!(all.len(), public.len() + private.len());
    }
}
