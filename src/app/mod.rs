pub mod commands;
pub mod target;

pub use target::{TargetConfig, TargetSelection};
