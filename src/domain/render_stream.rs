//! The literal RenderStream build-rules tables, one per revision.

use super::{
    AppError, DependencySet, IncludePath, ModuleDescriptor, ModuleName, PchMode, Revision,
};

/// Directory of the module's private headers, always the first include entry.
pub const PRIVATE_HEADERS: &str = "RenderStream/Private";

/// Engine-relative include suffixes the D3D12 revision adds, in search order.
pub const D3D12_INCLUDE_SUFFIXES: [&str; 3] = [
    "Source/Runtime/D3D12RHI/Private",
    "Source/Runtime/D3D12RHI/Public",
    "Source/ThirdParty/Windows/D3DX12/Include",
];

const PUBLIC_DEPENDENCIES: [&str; 7] =
    ["Core", "Sockets", "Networking", "MediaIOCore", "MediaUtils", "InputCore", "UMG"];

const PRIVATE_DEPENDENCIES: [&str; 11] = [
    "CoreUObject",
    "Engine",
    "Slate",
    "SlateCore",
    "CinematicCamera",
    "RHI",
    "D3D11RHI",
    "RenderCore",
    "Projects",
    "Json",
    "JsonUtilities",
];

/// Construct the RenderStream module descriptor for one build-rules revision.
///
/// Pure and single-shot: same revision in, field-for-field identical
/// descriptor out. The dependency tables are fixed literals per revision;
/// nothing here is computed from the build target.
pub fn render_stream(revision: Revision) -> Result<ModuleDescriptor, AppError> {
    let mut public_include_paths = vec![IncludePath::ModuleRelative(PRIVATE_HEADERS.to_string())];
    let mut private_names = PRIVATE_DEPENDENCIES.to_vec();

    if revision == Revision::D3d12 {
        public_include_paths.extend(
            D3D12_INCLUDE_SUFFIXES
                .iter()
                .map(|suffix| IncludePath::EngineRelative(suffix.to_string())),
        );
        private_names.push("D3D12RHI");
    }

    Ok(ModuleDescriptor {
        name: ModuleName::new("RenderStream")?,
        pch_mode: PchMode::UseExplicitOrSharedPchs,
        public_include_paths,
        public_dependencies: DependencySet::from_names(&PUBLIC_DEPENDENCIES)?,
        private_dependencies: DependencySet::from_names(&private_names)?,
        dynamic_dependencies: DependencySet::empty(),
    })
}
