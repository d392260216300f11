//! Application layer: registry, suggestions, and help rendering
//!
//! This layer orchestrates the domain model; it owns no terminal output.

pub mod help;
pub mod registry;
pub mod suggest;

pub use registry::{CommandRegistry, RegistryError};
pub use suggest::{is_similar, suggestions};
