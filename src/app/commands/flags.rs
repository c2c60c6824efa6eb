use std::path::Path;

use crate::domain::{AppError, Revision, render_stream};

/// Emit compiler include flags for one revision, in declared search order.
///
/// Engine-relative entries with no engine root to join under are omitted
/// rather than emitted malformed.
pub fn execute(revision: Revision, engine_root: Option<&Path>) -> Result<Vec<String>, AppError> {
    let descriptor = render_stream(revision)?;
    Ok(descriptor
        .resolved_include_paths(engine_root)
        .iter()
        .map(|path| format!("-I{}", path.display()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_revision_emits_single_flag() {
        let flags = execute(Revision::Initial, None).unwrap();
        assert_eq!(flags, vec!["-IRenderStream/Private"]);
    }

    #[test]
    fn d3d12_revision_emits_engine_flags_in_order() {
        let flags = execute(Revision::D3d12, Some(Path::new("/Engine"))).unwrap();
        assert_eq!(
            flags,
            vec![
                "-IRenderStream/Private",
                "-I/Engine/Source/Runtime/D3D12RHI/Private",
                "-I/Engine/Source/Runtime/D3D12RHI/Public",
                "-I/Engine/Source/ThirdParty/Windows/D3DX12/Include",
            ]
        );
    }

    #[test]
    fn engine_flags_are_skipped_without_root() {
        let flags = execute(Revision::D3d12, None).unwrap();
        assert_eq!(flags, vec!["-IRenderStream/Private"]);
    }
}
