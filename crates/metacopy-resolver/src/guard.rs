//! Per-document activation guard.
//!
//! Decides whether the copy command surface is exposed for a document at
//! all. Pure function of configuration and the document's front matter; the
//! host must re-evaluate it on every invocation because front matter may
//! have changed between reads.

use metacopy_core::{ActivationPolicy, CopyConfig, Frontmatter};

/// Whether the copy feature is active for a document.
///
/// A document without front matter can never build a vault-path link, so
/// the `ObsidianPath` strategy deactivates outright in that case, whatever
/// the activation policy says. Otherwise the marker key decides:
///
/// - [`ActivationPolicy::OptIn`]: active only when the marker key is truthy.
/// - [`ActivationPolicy::OptOut`]: active unless the marker key is truthy.
///
/// Both modes are inactive without front matter (no opt-in is possible, and
/// the permissive mode still requires a front-matter block to act on).
pub fn is_active(config: &CopyConfig, frontmatter: Option<&Frontmatter>) -> bool {
    if frontmatter.is_none() && config.link_strategy.is_obsidian_path() {
        return false;
    }

    let Some(fm) = frontmatter else {
        return false;
    };

    let marker_truthy = fm
        .get(&config.marker_key)
        .map(|v| v.is_truthy())
        .unwrap_or(false);

    match config.activation {
        ActivationPolicy::OptIn => marker_truthy,
        ActivationPolicy::OptOut => !marker_truthy,
    }
}
