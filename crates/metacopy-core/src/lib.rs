//! # MetaCopy Core
//!
//! Canonical types for the MetaCopy decision core: configuration, error
//! types, the front-matter value model, and note identity. The resolver
//! crate builds on these; the host supplies every input and performs every
//! side effect (clipboard writes, storage reads, UI).
//!
//! ## Architecture Principles
//!
//! - **Pure data in, strings out**: the core never touches the file system,
//!   the clipboard, or the network.
//! - **Type-driven design**: the link strategy is a closed sum type; the
//!   activation polarity is an explicit enum instead of an overloaded flag.
//! - **Zero panic in libraries**: fallible operations return [`Result`].
//! - **Immutable per operation**: configuration and front matter are read,
//!   never mutated, during a resolution.
//!
//! ## Core Modules
//!
//! - [`config`] - Configuration record, link strategies, builder
//! - [`error`] - Error type and Result alias
//! - [`frontmatter`] - Scalar/list value model and ordered key/value map
//! - [`note`] - Vault-relative note identity
//! - [`models`] - Picker entry model shared with the host
//!
//! ## Example
//!
//! ```
//! use metacopy_core::prelude::*;
//!
//! let config = CopyConfig::builder()
//!     .base_link("https://notes.example.org")
//!     .link_strategy(LinkStrategy::FixedFolder { folder: "posts".to_string() })
//!     .enable_copy_link(true)
//!     .build()?;
//!
//! let frontmatter = Frontmatter::from_yaml("title: Hello\ntags:\n  - rust\n")?;
//! assert_eq!(frontmatter.get("tags").unwrap().display(), "rust");
//! # Ok::<(), metacopy_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod models;
pub mod note;

pub use config::{ActivationPolicy, CopyConfig, CopyConfigBuilder, LinkStrategy};
pub use error::{Error, Result};
pub use frontmatter::{Frontmatter, Scalar, Value};
pub use models::MetaEntry;
pub use note::NoteRef;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ActivationPolicy, CopyConfig, CopyConfigBuilder, LinkStrategy};
    pub use crate::error::{Error, Result};
    pub use crate::frontmatter::{Frontmatter, Scalar, Value};
    pub use crate::models::MetaEntry;
    pub use crate::note::NoteRef;
}
