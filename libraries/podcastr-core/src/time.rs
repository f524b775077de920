//! Duration formatting

/// Format a duration in whole seconds as `HH:MM:SS`
///
/// Every component is zero-padded to two digits. Hours are not wrapped, so
/// a 100 hour duration renders as `100:00:00`.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
