use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Health check payload.
pub mod health;
/// Finished match history and statistics payloads.
pub mod history;
/// Live scoring payloads.
pub mod live;
/// Match setup payloads.
pub mod setup;
/// Validation helpers.
pub mod validation;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
