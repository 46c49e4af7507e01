/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and use cases propagate with `?` and attach context where useful.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
