//! Business logic services.
//!
//! Services turn key rows into generated source and place it on disk.

mod generator;
mod output;

pub use generator::{GenerateRequest, GenerateResult, GeneratorService};
pub use output::OutputPlan;
