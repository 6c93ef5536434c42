//! Contracts implementing access control mechanisms.
pub mod registry;

pub use registry::{AccessRegistry, Error as AccessRegistryError, IAccessRegistry};
