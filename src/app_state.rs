use std::sync::Arc;

use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::domain::log::service::log_ingest_service::LogService;

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
}

pub fn build_app_state(repo: LogRepositoryImpl) -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(repo)),
    }
}
