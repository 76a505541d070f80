//! # MetaCopy Resolver
//!
//! The decision algorithms behind the copy feature: the per-document
//! activation guard, the link resolver with its title transformer, the raw
//! value formatter, and the entry collection the host's picker displays.
//!
//! Every operation here is a pure, synchronous function over immutable
//! inputs. The host owns all side effects: it reads the front-matter block,
//! runs the picker, and writes the resolved string to the clipboard. The
//! guard must be re-evaluated per invocation; nothing is cached.
//!
//! ## Flow
//!
//! 1. [`is_active`] — gate the command surface for the current document.
//! 2. [`collect_entries`] — build the pick list (front-matter entries plus
//!    the synthetic "copy as link" entry when enabled).
//! 3. [`resolve_copy_text`] — turn the picked entry into the clipboard
//!    string, via [`resolve_link`] for the synthetic entry or
//!    [`format_value`] for everything else.
//!
//! ## Example
//!
//! ```
//! use metacopy_core::prelude::*;
//! use metacopy_resolver::{collect_entries, is_active, resolve_copy_text};
//!
//! let config = CopyConfig::builder()
//!     .base_link("https://notes.example.org")
//!     .link_strategy(LinkStrategy::FixedFolder { folder: "posts".to_string() })
//!     .enable_copy_link(true)
//!     .build()?;
//!
//! let frontmatter = Frontmatter::from_yaml("title: Hello\ntags:\n  - rust\n")?;
//! let note = NoteRef::new("inbox/Hello.md");
//!
//! assert!(is_active(&config, Some(&frontmatter)));
//!
//! let entries = collect_entries(&config, Some(&frontmatter), "Copy link");
//! let picked = entries.last().unwrap(); // the synthetic link entry
//! let text = resolve_copy_text(picked, &config, Some(&frontmatter), &note, "Copy link")?;
//! assert_eq!(text, "https://notes.example.org/posts/Hello");
//! # Ok::<(), metacopy_core::Error>(())
//! ```

pub mod entries;
pub mod format;
pub mod guard;
pub mod link;
pub mod title;

pub use entries::{collect_entries, resolve_copy_text};
pub use format::format_value;
pub use guard::is_active;
pub use link::resolve_link;
pub use title::resolve_title;
