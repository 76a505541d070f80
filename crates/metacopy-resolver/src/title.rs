//! Title derivation and rewriting for constructed links.

use metacopy_core::{CopyConfig, Error, Frontmatter, NoteRef, Result};
use regex::Regex;

/// Derive the human-readable title segment for a link.
///
/// The front-matter title key wins when enabled, present, and non-empty;
/// otherwise the note name is used. When `title_regex` is set, all matches
/// are replaced with `title_replace`; a rewrite that erases the entire title
/// falls back to the unrewritten one, so this never returns an empty string
/// for a named note.
///
/// Fails only with a configuration error when `title_regex` does not
/// compile.
pub fn resolve_title(
    config: &CopyConfig,
    frontmatter: Option<&Frontmatter>,
    note: &NoteRef,
) -> Result<String> {
    let title = working_title(config, frontmatter, note);

    if config.title_regex.is_empty() {
        return Ok(title);
    }

    let pattern = Regex::new(&config.title_regex).map_err(|e| {
        Error::config_error(format!("invalid title pattern `{}`: {e}", config.title_regex))
    })?;

    let rewritten = pattern
        .replace_all(&title, config.title_replace.as_str())
        .into_owned();

    if rewritten.is_empty() {
        log::debug!(
            "title rewrite of '{title}' produced an empty string, keeping the original"
        );
        Ok(title)
    } else {
        Ok(rewritten)
    }
}

fn working_title(
    config: &CopyConfig,
    frontmatter: Option<&Frontmatter>,
    note: &NoteRef,
) -> String {
    if config.use_frontmatter_title {
        if let Some(value) = frontmatter.and_then(|fm| fm.get(&config.title_key)) {
            let title = value.display();
            if !title.is_empty() {
                return title;
            }
        }
        log::debug!(
            "front-matter title key '{}' missing or empty, falling back to note name",
            config.title_key
        );
    }
    note.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacopy_core::Value;

    fn note() -> NoteRef {
        NoteRef::new("folder/My Great Note.md")
    }

    #[test]
    fn test_note_name_is_default_title() {
        let config = CopyConfig::default();
        let title = resolve_title(&config, None, &note()).unwrap();
        assert_eq!(title, "My Great Note");
    }

    #[test]
    fn test_frontmatter_title_preferred_when_enabled() {
        let config = CopyConfig::builder()
            .frontmatter_title("title")
            .build()
            .unwrap();
        let mut fm = Frontmatter::new();
        fm.insert("title", Value::text("Published Name"));

        let title = resolve_title(&config, Some(&fm), &note()).unwrap();
        assert_eq!(title, "Published Name");
    }

    #[test]
    fn test_missing_or_empty_title_key_falls_back_to_note_name() {
        let config = CopyConfig::builder()
            .frontmatter_title("title")
            .build()
            .unwrap();

        let title = resolve_title(&config, Some(&Frontmatter::new()), &note()).unwrap();
        assert_eq!(title, "My Great Note");

        let mut fm = Frontmatter::new();
        fm.insert("title", Value::text(""));
        let title = resolve_title(&config, Some(&fm), &note()).unwrap();
        assert_eq!(title, "My Great Note");
    }

    #[test]
    fn test_regex_rewrite() {
        let config = CopyConfig::builder()
            .title_rewrite(r"\s+", "-")
            .build()
            .unwrap();
        let title = resolve_title(&config, None, &note()).unwrap();
        assert_eq!(title, "My-Great-Note");
    }

    #[test]
    fn test_rewrite_to_empty_keeps_original_title() {
        let config = CopyConfig::builder()
            .title_rewrite(".*", "")
            .build()
            .unwrap();
        let title = resolve_title(&config, None, &note()).unwrap();
        assert_eq!(title, "My Great Note");
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let mut config = CopyConfig::default();
        config.title_regex = "([unclosed".to_string();

        let err = resolve_title(&config, None, &note()).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }
}
