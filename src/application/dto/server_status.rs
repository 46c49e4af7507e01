use std::fmt;

/// Result of the backend liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Connected,
    NotConnected,
}

impl ServerStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ServerStatus::Connected)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Connected => write!(f, "Connected"),
            ServerStatus::NotConnected => write!(
                f,
                "Not connected - Please check if backend server is running"
            ),
        }
    }
}
