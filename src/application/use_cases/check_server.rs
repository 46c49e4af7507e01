use crate::application::dto::ServerStatus;
use crate::ports::outbound::ScanService;

/// CheckServerUseCase - probes the scanner backend
pub struct CheckServerUseCase<S: ScanService> {
    scan_service: S,
}

impl<S: ScanService> CheckServerUseCase<S> {
    pub fn new(scan_service: S) -> Self {
        Self { scan_service }
    }

    pub async fn execute(&self) -> ServerStatus {
        if self.scan_service.check_connection().await {
            ServerStatus::Connected
        } else {
            tracing::debug!("liveness probe failed");
            ServerStatus::NotConnected
        }
    }
}
