//! Link resolution: turn a note plus configuration into the URL to copy.

use crate::title::resolve_title;
use metacopy_core::{CopyConfig, Frontmatter, LinkStrategy, NoteRef, Result};

/// Build the final link string for a note.
///
/// The path segment comes from the configured [`LinkStrategy`]; the title
/// segment from [`resolve_title`]. Base, segment, and title are joined with
/// single `/` separators (duplicate separators at the join points collapse,
/// the scheme's `//` in the base is left alone), then every
/// `remove_link_parts` entry is stripped as a literal substring, in list
/// order.
///
/// The result is never validated as a URL: a malformed `base_link` passes
/// through exactly as configured.
pub fn resolve_link(
    config: &CopyConfig,
    frontmatter: Option<&Frontmatter>,
    note: &NoteRef,
) -> Result<String> {
    let title = resolve_title(config, frontmatter, note)?;
    let segment = path_segment(config, frontmatter, note);

    let mut link = join_link(&config.base_link, &segment, &title);
    for part in &config.remove_link_parts {
        if !part.is_empty() {
            link = link.replace(part.as_str(), "");
        }
    }
    Ok(link)
}

fn path_segment(config: &CopyConfig, frontmatter: Option<&Frontmatter>, note: &NoteRef) -> String {
    match &config.link_strategy {
        LinkStrategy::FixedFolder { folder } => folder.clone(),
        LinkStrategy::CategoryKey {
            key,
            default_folder,
        } => {
            let category = frontmatter
                .and_then(|fm| fm.get(key))
                .map(|v| v.display())
                .filter(|s| !s.is_empty());
            match category {
                Some(category) => category,
                None => {
                    log::debug!(
                        "category key '{key}' missing or empty, using default folder '{default_folder}'"
                    );
                    default_folder.clone()
                }
            }
        }
        LinkStrategy::ObsidianPath { folder_note } => {
            if *folder_note && note.is_folder_note() {
                note.parent_folder()
            } else {
                note.folder()
            }
        }
    }
}

/// Join link pieces with single `/` separators, skipping empty pieces.
///
/// Only the edges of each piece are trimmed, so `https://` in the base and
/// slashes inside a folder path survive.
fn join_link(base: &str, segment: &str, title: &str) -> String {
    let mut link = base.trim_end_matches('/').to_string();
    for piece in [segment, title] {
        let piece = piece.trim_matches('/');
        if piece.is_empty() {
            continue;
        }
        if !link.is_empty() {
            link.push('/');
        }
        link.push_str(piece);
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacopy_core::Value;

    #[test]
    fn test_fixed_folder_link() {
        let config = CopyConfig::builder()
            .base_link("https://x/")
            .link_strategy(LinkStrategy::FixedFolder {
                folder: "posts".to_string(),
            })
            .build()
            .unwrap();
        let note = NoteRef::new("My Note.md");

        let link = resolve_link(&config, None, &note).unwrap();
        assert_eq!(link, "https://x/posts/My Note");
    }

    #[test]
    fn test_category_key_with_fallback() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::CategoryKey {
                key: "category".to_string(),
                default_folder: "misc".to_string(),
            })
            .build()
            .unwrap();
        let note = NoteRef::new("My Note.md");

        let mut fm = Frontmatter::new();
        fm.insert("category", Value::text("tech"));
        assert_eq!(
            resolve_link(&config, Some(&fm), &note).unwrap(),
            "https://x/tech/My Note"
        );

        assert_eq!(
            resolve_link(&config, Some(&Frontmatter::new()), &note).unwrap(),
            "https://x/misc/My Note"
        );
    }

    #[test]
    fn test_category_list_value_joins_like_display_form() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::CategoryKey {
                key: "category".to_string(),
                default_folder: "misc".to_string(),
            })
            .build()
            .unwrap();
        let mut fm = Frontmatter::new();
        fm.insert("category", Value::list(["a", "b"]));

        let link = resolve_link(&config, Some(&fm), &NoteRef::new("n.md")).unwrap();
        assert_eq!(link, "https://x/a,b/n");
    }

    #[test]
    fn test_obsidian_path_uses_note_folder() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::ObsidianPath { folder_note: false })
            .build()
            .unwrap();
        let note = NoteRef::new("projects/rust/My Note.md");

        let link = resolve_link(&config, Some(&Frontmatter::new()), &note).unwrap();
        assert_eq!(link, "https://x/projects/rust/My Note");
    }

    #[test]
    fn test_folder_note_uses_parent_folder_path() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::ObsidianPath { folder_note: true })
            .build()
            .unwrap();
        let note = NoteRef::new("projects/rust/rust.md");

        // Without the folder-note substitution the link would read .../rust/rust
        let link = resolve_link(&config, Some(&Frontmatter::new()), &note).unwrap();
        assert_eq!(link, "https://x/projects/rust");
    }

    #[test]
    fn test_root_note_skips_empty_path_segment() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::ObsidianPath { folder_note: false })
            .build()
            .unwrap();
        let note = NoteRef::new("Inbox.md");

        let link = resolve_link(&config, Some(&Frontmatter::new()), &note).unwrap();
        assert_eq!(link, "https://x/Inbox");
    }

    #[test]
    fn test_remove_link_parts_applied_in_order_after_join() {
        let config = CopyConfig::builder()
            .base_link("https://x/")
            .link_strategy(LinkStrategy::FixedFolder {
                folder: "posts".to_string(),
            })
            .remove_link_parts([" "])
            .build()
            .unwrap();
        let note = NoteRef::new("My Note.md");

        let link = resolve_link(&config, None, &note).unwrap();
        assert_eq!(link, "https://x/posts/MyNote");
    }

    #[test]
    fn test_remove_link_parts_are_literal_not_regex() {
        let config = CopyConfig::builder()
            .base_link("https://x")
            .link_strategy(LinkStrategy::FixedFolder {
                folder: "a.b".to_string(),
            })
            .remove_link_parts(["."])
            .build()
            .unwrap();

        let link = resolve_link(&config, None, &NoteRef::new("n.md")).unwrap();
        assert_eq!(link, "https://x/ab/n");
    }

    #[test]
    fn test_malformed_base_link_passes_through() {
        let config = CopyConfig::builder()
            .base_link("not a url")
            .link_strategy(LinkStrategy::FixedFolder {
                folder: "posts".to_string(),
            })
            .build()
            .unwrap();

        let link = resolve_link(&config, None, &NoteRef::new("n.md")).unwrap();
        assert_eq!(link, "not a url/posts/n");
    }

    #[test]
    fn test_empty_base_link_yields_relative_link() {
        let config = CopyConfig::builder()
            .link_strategy(LinkStrategy::FixedFolder {
                folder: "posts".to_string(),
            })
            .build()
            .unwrap();

        let link = resolve_link(&config, None, &NoteRef::new("n.md")).unwrap();
        assert_eq!(link, "posts/n");
    }
}
