/// Shared kernel - error types, result alias and security checks
///
/// Everything in here is used across the domain, application and adapter layers.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
