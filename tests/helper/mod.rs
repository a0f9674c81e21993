//! Shared test utilities

pub mod registry;

pub use registry::{StubRegistry, advisory};
