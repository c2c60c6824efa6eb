pub mod dependency_set;
pub mod descriptor;
pub mod error;
pub mod include_path;
pub mod module_name;
pub mod pch;
pub mod render_stream;
pub mod revision;

mod validation;

pub use dependency_set::DependencySet;
pub use descriptor::ModuleDescriptor;
pub use error::AppError;
pub use include_path::IncludePath;
pub use module_name::ModuleName;
pub use pch::PchMode;
pub use render_stream::{D3D12_INCLUDE_SUFFIXES, PRIVATE_HEADERS, render_stream};
pub use revision::Revision;
