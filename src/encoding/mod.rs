//! Feature encoding: the schema contract between survey and classifier.
//!
//! The only correctness property that matters here is schema compatibility:
//! the builder's output must carry exactly the key set persisted alongside
//! the trained model, with each one-hot group obeying its collapse rule.

pub mod schema;
mod vector;

pub use vector::FeatureVector;
