//! Entry collection and the post-pick copy dispatch.
//!
//! The host's picker is a thin shell around these two functions: it shows
//! what [`collect_entries`] returns and hands the selected entry to
//! [`resolve_copy_text`], whose result goes on the clipboard.

use crate::format::format_value;
use crate::link::resolve_link;
use metacopy_core::{CopyConfig, Frontmatter, MetaEntry, NoteRef, Result};

/// Collect the candidate entries for the picker.
///
/// Front-matter entries appear in document order, filtered to
/// `config.copy_keys` when that list is non-empty, with values in display
/// form. When `config.enable_copy_link` is set, a final synthetic entry is
/// appended whose key is `link_label` — the host's localized "copy as link"
/// label — and whose value is empty (the resolver derives the link from the
/// note, not from the entry).
pub fn collect_entries(
    config: &CopyConfig,
    frontmatter: Option<&Frontmatter>,
    link_label: &str,
) -> Vec<MetaEntry> {
    let mut entries = Vec::new();

    if let Some(fm) = frontmatter {
        for (key, value) in fm.iter() {
            if config.copy_keys.is_empty() || config.copy_keys.iter().any(|k| k == key) {
                entries.push(MetaEntry::new(key, value.display()));
            }
        }
    }

    if config.enable_copy_link {
        entries.push(MetaEntry::new(link_label, ""));
    }

    entries
}

/// Resolve the text to copy for a picked entry.
///
/// An entry keyed by `link_label` is the synthetic "copy as link" entry and
/// goes through the link resolver; every other entry is formatted as a raw
/// value. Only the link path can fail, and only with a configuration error;
/// the host should report it and leave the clipboard untouched.
pub fn resolve_copy_text(
    entry: &MetaEntry,
    config: &CopyConfig,
    frontmatter: Option<&Frontmatter>,
    note: &NoteRef,
    link_label: &str,
) -> Result<String> {
    if entry.key == link_label {
        resolve_link(config, frontmatter, note)
    } else {
        Ok(format_value(entry))
    }
}
