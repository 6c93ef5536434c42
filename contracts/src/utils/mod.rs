//! Common Smart Contracts utilities.
pub mod initializable;
pub mod introspection;
pub(crate) mod math;

pub use initializable::{IInitializable, Initializable};
