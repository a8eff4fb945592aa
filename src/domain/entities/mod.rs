//! Domain Entities

mod project;
mod source_unit;

pub use project::Project;
pub use source_unit::SourceUnit;
