//! Timestamp formatting for the transport display

/// Format a second count as `m:ss`
///
/// Minutes are floor-divided, never rounded up; seconds are zero-padded
/// to two digits. Values of an hour or more keep accumulating minutes
/// (`3725` becomes `"62:05"`).
pub fn format_timestamp(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
