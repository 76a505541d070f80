//! Raw value formatting for the clipboard.

use metacopy_core::MetaEntry;

/// Format a selected entry's raw value for the clipboard.
///
/// A value holding more than one non-empty comma-separated piece is
/// re-expanded into a bulleted list, one `- piece` line per piece; anything
/// else is returned unchanged. Total function, never fails.
///
/// Never used for the synthetic "copy as link" entry; that path goes
/// through the link resolver instead, with the untouched value as input.
pub fn format_value(entry: &MetaEntry) -> String {
    let pieces: Vec<&str> = entry
        .value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if pieces.len() > 1 {
        pieces
            .iter()
            .map(|p| format!("- {p}"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        entry.value.clone()
    }
}
