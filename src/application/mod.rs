//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with the classifier port to
//! implement the intake-to-prediction flow.

mod intake;
mod screening;

pub use intake::{IntakeSession, ReviewSnapshot};
pub use screening::{ScreeningService, Submission};
