//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: calibrated logistic model loaded from JSON artifacts

pub mod linear;

pub use linear::{default_model_dir, ExportedLinearModel, LinearClassifier};
