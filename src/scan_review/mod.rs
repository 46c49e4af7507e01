/// Scan review domain - pure logic over scan results
///
/// Holds the scan-result entity, the question session state machine, the
/// match highlighter and the remediation differencer. Nothing in here does I/O.
pub mod domain;
pub mod policies;
pub mod services;
