/// Network adapters for the scanner backend
mod scanner_client;

pub use scanner_client::ScannerClient;
