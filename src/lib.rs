//! # cmdtree
//!
//! Hierarchical command dispatch with shortest-unambiguous-prefix matching.
//!
//! **Key features:**
//! - **Prefix matching** - Every level resolves a field by exact key or unique prefix
//! - **Nested trees** - Commands and subtrees nest to arbitrary depth
//! - **Shortcuts** - Aliases registered at any level jump to nodes at any depth
//! - **Autocompletion** - Candidate command paths for partial input
//! - **Help rendering** - Column-aligned listings and wrapped descriptions
//!
//! Resolution is a pure in-memory walk: nothing here executes commands or
//! parses flags. The caller attaches an opaque payload to each command and
//! dispatches on it after lookup.
//!
//! ```
//! use cmdtree::{CommandDescriptor, Tree, TreeDescriptor};
//!
//! let mut root = Tree::new(TreeDescriptor::new("root"));
//! root.add_command(CommandDescriptor::new("quit", 0))?;
//! let file = root.add_subtree(TreeDescriptor::new("file"))?;
//! file.add_command(CommandDescriptor::new("open", 1))?;
//! file.add_command(CommandDescriptor::new("close", 2))?;
//! root.add_shortcut("o", "file open")?;
//!
//! let sel = root.lookup("o report.txt")?;
//! assert_eq!(sel.command().map(|c| *c.data()), Some(1));
//! assert_eq!(sel.args, ["report.txt"]);
//! # Ok::<(), cmdtree::DispatchError>(())
//! ```
//!
//! ## Optional Features
//!
//! - `completion` - Autocompletion of partial lines (default)
//! - `manifest` - Build trees from TOML documents
//! - `cli` - The `cmdtree-query` binary
//!
//! This library is `no_std` compatible (requires `alloc`).

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod field;
pub mod help;
pub mod tree;

#[cfg(feature = "manifest")]
pub mod manifest;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{CompactConfig, DefaultConfig, HelpConfig};

// Error types
pub use error::DispatchError;

// Tree types
pub use tree::completion::common_prefix;
pub use tree::{Command, CommandDescriptor, Node, PrefixIndex, Selection, Tree, TreeDescriptor};

// Help rendering
pub use help::HelpWriter;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
