//! Cleanup of raw command output.

/// Normalize raw shell output for a command.
///
/// Line endings become `\n`, the echoed command is dropped from the start
/// and the trailing prompt line is dropped from the end.
pub fn normalize_output(raw: &str, command: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "");
    let body = unified.trim_start_matches('\n');

    let output = body
        .strip_prefix(command)
        .unwrap_or(body)
        .trim_start_matches('\n');

    match output.rfind('\n') {
        Some(pos) => output[..pos].to_string(),
        // only the prompt is left
        None => String::new(),
    }
}
