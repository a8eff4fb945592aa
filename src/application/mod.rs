//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain naming rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - build / needs-build / clean / results for one project at a time

pub mod build;

pub use build::{duration_ms, plan_units, run_build, BuildConfig, BuildOutcome, BuildUseCase, UnitPlan};
