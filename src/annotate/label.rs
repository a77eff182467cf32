/// Marker appended when a description spanned more than one line.
const MORE_LINES_MARKER: &str = " [...]";

/// Derive a compact single-line label from an already-sanitized multi-line
/// description. The first line is the base; a trailing colon on it introduced
/// the removed continuation and is stripped.
pub fn format_label(description: &str) -> String {
    let mut lines = description.lines();
    let first = lines.next().unwrap_or("");
    let base = first.strip_suffix(':').unwrap_or(first);
    if lines.next().is_some() {
        format!("{}{}", base, MORE_LINES_MARKER)
    } else {
        base.to_string()
    }
}
