//! Build Use Case
//!
//! Compiles every `.c` file of a project with `emcc`, one process per file.
//!
//! This module handles:
//! - Resolving the toolchain before anything touches the filesystem
//! - Creating the flat output directory
//! - Running the compiler once per source unit, aborting on the first failure
//! - The no-op `clean` and always-true `needs_build` of the task interface

mod options;
mod result;
mod use_case;


pub use options::BuildConfig;
pub use result::{duration_ms, BuildOutcome, UnitPlan};
pub use use_case::{plan_units, run_build, BuildUseCase};
