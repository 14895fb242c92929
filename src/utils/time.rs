use chrono::Utc;

/// Returns current timestamp in seconds (Unix epoch)
#[allow(dead_code)]
pub fn current_timestamp_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Returns current timestamp in milliseconds
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as an RFC3339 string, used in health checks and listings
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
