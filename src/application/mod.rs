pub mod dto;
pub mod factories;
pub mod read_models;
pub mod scan_result_store;
pub mod use_cases;

pub use scan_result_store::ScanResultStore;
