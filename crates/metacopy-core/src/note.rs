//! Note identity: the vault-relative location the link resolver works from.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A document's identity within its vault.
///
/// `path` is the vault-relative file path (including the file name); `name`
/// is the note name without extension. Only the `ObsidianPath` strategy and
/// the fallback title consult this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRef {
    pub path: PathBuf,
    pub name: String,
}

impl NoteRef {
    /// Create a note reference from a vault-relative path, deriving the note
    /// name from the file stem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Create a note reference with an explicit display name.
    pub fn with_name(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// The vault-relative containing folder as a `/`-joined string.
    ///
    /// Empty for notes at the vault root.
    pub fn folder(&self) -> String {
        self.path.parent().map(join_components).unwrap_or_default()
    }

    /// The folder one level above the containing folder, `/`-joined.
    ///
    /// Empty when the containing folder sits at the vault root.
    pub fn parent_folder(&self) -> String {
        self.path
            .parent()
            .and_then(Path::parent)
            .map(join_components)
            .unwrap_or_default()
    }

    /// Whether this note is a folder note: its name equals the name of its
    /// containing folder (an "index" note representing the folder itself).
    pub fn is_folder_note(&self) -> bool {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|dir| dir.to_string_lossy() == self.name.as_str())
            .unwrap_or(false)
    }
}

fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_file_stem() {
        let note = NoteRef::new("projects/rust/My Note.md");
        assert_eq!(note.name, "My Note");
    }

    #[test]
    fn test_folder_paths() {
        let note = NoteRef::new("projects/rust/My Note.md");
        assert_eq!(note.folder(), "projects/rust");
        assert_eq!(note.parent_folder(), "projects");
    }

    #[test]
    fn test_root_note_has_empty_folder() {
        let note = NoteRef::new("Inbox.md");
        assert_eq!(note.folder(), "");
        assert_eq!(note.parent_folder(), "");
    }

    #[test]
    fn test_folder_note_detection() {
        assert!(NoteRef::new("projects/rust/rust.md").is_folder_note());
        assert!(!NoteRef::new("projects/rust/My Note.md").is_folder_note());
        assert!(!NoteRef::new("rust.md").is_folder_note());
    }
}
