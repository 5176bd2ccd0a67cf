pub mod log_ingest_service;
