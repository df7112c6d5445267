/// Renders a payload for terminal output: trailing zero padding is dropped
/// and invalid UTF-8 is replaced.
pub fn display_payload(payload: &[u8]) -> String {
    let end = payload
        .iter()
        .rposition(|&byte| byte != 0)
        .map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&payload[..end]).into_owned()
}
