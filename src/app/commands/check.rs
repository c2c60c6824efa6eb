use crate::domain::{
    AppError, D3D12_INCLUDE_SUFFIXES, IncludePath, PRIVATE_HEADERS, Revision, render_stream,
};

/// Result of validating the build-rules tables.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Human-readable problems found; empty means the tables are sound.
    pub findings: Vec<String>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validate the invariants of every known revision.
///
/// Duplicate and malformed names are already rejected during construction,
/// so a construction failure surfaces here as a finding rather than an
/// error return.
pub fn execute() -> Result<CheckOutcome, AppError> {
    let mut findings = Vec::new();

    for revision in Revision::ALL {
        let descriptor = match render_stream(revision) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                findings.push(format!("{revision}: rules table failed to build: {err}"));
                continue;
            }
        };

        if descriptor.public_dependencies.is_empty() {
            findings.push(format!("{revision}: public dependency set is empty"));
        }
        if descriptor.private_dependencies.is_empty() {
            findings.push(format!("{revision}: private dependency set is empty"));
        }
        if !descriptor.dynamic_dependencies.is_empty() {
            findings.push(format!("{revision}: dynamic dependency set must be empty"));
        }
        match descriptor.public_include_paths.first() {
            Some(IncludePath::ModuleRelative(fragment)) if fragment == PRIVATE_HEADERS => {}
            _ => findings.push(format!(
                "{revision}: first include path must be the module-relative '{PRIVATE_HEADERS}'"
            )),
        }
    }

    let initial = render_stream(Revision::Initial)?;
    let d3d12 = render_stream(Revision::D3d12)?;

    if initial.private_dependencies.contains("D3D12RHI") {
        findings.push("initial: must not link D3D12RHI".to_string());
    }
    if !d3d12.private_dependencies.contains("D3D12RHI") {
        findings.push("d3d12: must link D3D12RHI".to_string());
    }
    let expected = initial.public_include_paths.len() + D3D12_INCLUDE_SUFFIXES.len();
    if d3d12.public_include_paths.len() != expected {
        findings.push(format!(
            "d3d12: expected exactly {} extra include paths over initial",
            D3D12_INCLUDE_SUFFIXES.len()
        ));
    }

    Ok(CheckOutcome { findings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_pass_every_check() {
        let outcome = execute().unwrap();
        assert!(outcome.is_ok(), "unexpected findings: {:?}", outcome.findings);
    }
}
