/// Format a number of seconds as `MM:SS`.
///
/// Minutes are not wrapped at the hour, so a full 60 minute session reads
/// `60:00` rather than `00:00`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
