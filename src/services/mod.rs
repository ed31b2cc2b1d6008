/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Read-back of finished matches: history and aggregate statistics.
pub mod history_service;
/// Live match lifecycle: setup, scoring, undo and finish.
pub mod match_service;
/// Idle live match eviction.
pub mod session_reaper;
/// Storage connection supervisor toggling degraded mode.
pub mod storage_supervisor;
