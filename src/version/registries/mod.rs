//! Registry implementations for fetching package metadata

pub mod deps_dev;

pub use deps_dev::DepsDevRegistry;
