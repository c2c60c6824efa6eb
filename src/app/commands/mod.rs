pub mod check;
pub mod deps;
pub mod flags;
pub mod show;
