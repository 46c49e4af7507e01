/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the application core
/// needs from infrastructure. The CLI in `main.rs` is the only driving side.
pub mod outbound;
