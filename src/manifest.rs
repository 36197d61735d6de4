//! TOML manifest loader.
//!
//! Builds a [`Tree`] from a declarative document. Children are registered
//! depth-first before the shortcuts of their level, so a shortcut may target
//! any node below the tree that declares it.
//!
//! ```toml
//! name = "root"
//!
//! [[commands]]
//! name = "quit"
//! brief = "Quit the program"
//! data = "quit"
//!
//! [[subtrees]]
//! name = "file"
//!
//! [[subtrees.commands]]
//! name = "open"
//! usage = "open <path>"
//! data = "file.open"
//!
//! [[shortcuts]]
//! key = "o"
//! target = "file open"
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::DispatchError;
use crate::tree::{CommandDescriptor, Tree, TreeDescriptor};

/// Manifest loading error.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Document is not valid TOML or does not match the manifest schema
    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// A node or shortcut could not be registered
    #[error("Failed to register into tree `{tree}`: {source}")]
    Dispatch {
        /// Name of the tree being populated
        tree: String,
        /// Registration error
        source: DispatchError,
    },
}

/// Declarative form of a tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct TreeManifest<T> {
    /// Tree name
    pub name: String,

    /// Brief description
    #[serde(default)]
    pub brief: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Usage hint text
    #[serde(default)]
    pub usage: String,

    /// Optional payload for dispatching on the tree itself
    #[serde(default)]
    pub data: Option<T>,

    /// Commands at this level
    #[serde(default)]
    pub commands: Vec<CommandManifest<T>>,

    /// Subtrees at this level
    #[serde(default)]
    pub subtrees: Vec<TreeManifest<T>>,

    /// Shortcuts registered at this level
    #[serde(default)]
    pub shortcuts: Vec<ShortcutManifest>,
}

/// Declarative form of a command.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct CommandManifest<T> {
    /// Command name
    pub name: String,

    /// Brief description
    #[serde(default)]
    pub brief: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Usage hint text
    #[serde(default)]
    pub usage: String,

    /// Payload, `T::default()` when omitted
    #[serde(default)]
    pub data: T,
}

/// Declarative form of a shortcut.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcutManifest {
    /// Shortcut key
    pub key: String,

    /// Space-separated path of the aliased node
    pub target: String,
}

impl<T> TreeManifest<T> {
    /// Build the tree this manifest describes.
    pub fn build(self) -> Result<Tree<T>, ManifestError> {
        let mut tree = Tree::new(TreeDescriptor {
            name: self.name,
            brief: self.brief,
            description: self.description,
            usage: self.usage,
        });
        if let Some(data) = self.data {
            tree.set_data(data);
        }
        populate(&mut tree, self.commands, self.subtrees, self.shortcuts)?;
        Ok(tree)
    }
}

impl<T> From<CommandManifest<T>> for CommandDescriptor<T> {
    fn from(m: CommandManifest<T>) -> Self {
        CommandDescriptor {
            name: m.name,
            brief: m.brief,
            description: m.description,
            usage: m.usage,
            data: m.data,
        }
    }
}

/// Parse a TOML manifest and build its tree.
///
/// # Returns
///
/// - `Ok(Tree)` - Fully registered tree
/// - `Err(ManifestError::Parse)` - Malformed document
/// - `Err(ManifestError::Dispatch)` - Duplicate key, invalid shortcut or
///   unresolvable shortcut target
pub fn from_toml<T>(text: &str) -> Result<Tree<T>, ManifestError>
where
    T: DeserializeOwned + Default,
{
    let manifest: TreeManifest<T> = toml::from_str(text)?;
    debug!("parsed manifest for tree `{}`", manifest.name);
    manifest.build()
}

fn populate<T>(
    tree: &mut Tree<T>,
    commands: Vec<CommandManifest<T>>,
    subtrees: Vec<TreeManifest<T>>,
    shortcuts: Vec<ShortcutManifest>,
) -> Result<(), ManifestError> {
    let name = String::from(tree.name());
    let wrap = |source: DispatchError| ManifestError::Dispatch {
        tree: name.clone(),
        source,
    };

    for command in commands {
        tree.add_command(command.into()).map_err(&wrap)?;
    }

    for sub in subtrees {
        let descriptor = TreeDescriptor {
            name: sub.name,
            brief: sub.brief,
            description: sub.description,
            usage: sub.usage,
        };
        let child = tree.add_subtree(descriptor).map_err(&wrap)?;
        if let Some(data) = sub.data {
            child.set_data(data);
        }
        populate(child, sub.commands, sub.subtrees, sub.shortcuts)?;
    }

    for shortcut in shortcuts {
        tree.add_shortcut(&shortcut.key, &shortcut.target)
            .map_err(&wrap)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const MANIFEST: &str = r#"
        name = "root"
        brief = "Root menu"

        [[commands]]
        name = "quit"
        brief = "Quit the program"
        data = "quit"

        [[subtrees]]
        name = "file"
        brief = "File commands"
        data = "file"

        [[subtrees.commands]]
        name = "open"
        usage = "open <path>"
        data = "file.open"

        [[subtrees.commands]]
        name = "close"

        [[subtrees.shortcuts]]
        key = "c"
        target = "close"

        [[shortcuts]]
        key = "o"
        target = "file open"
    "#;

    #[test]
    fn test_build_from_toml() {
        let root: Tree<String> = from_toml(MANIFEST).unwrap();
        assert_eq!(root.name(), "root");
        assert_eq!(root.brief(), "Root menu");
        assert_eq!(root.commands().len(), 1);

        let file = &root.subtrees()[0];
        assert_eq!(file.commands()[0].usage(), "open <path>");
        assert_eq!(file.commands()[0].data(), "file.open");
        // Omitted payload defaults
        assert_eq!(file.commands()[1].data(), "");

        assert_eq!(file.data().map(String::as_str), Some("file"));
        assert!(root.data().is_none());
    }

    #[test]
    fn test_shortcuts_registered() {
        let root: Tree<String> = from_toml(MANIFEST).unwrap();
        let sel = root.lookup("o x").unwrap();
        assert_eq!(sel.node.name(), "open");
        assert_eq!(sel.args, ["x"]);

        let sel = root.lookup("file c").unwrap();
        assert_eq!(sel.node.name(), "close");
        assert_eq!(sel.node.shortcuts(), ["c"]);
    }

    #[test]
    fn test_duplicate_reports_tree() {
        let text = r#"
            name = "root"
            [[subtrees]]
            name = "net"
            [[subtrees.commands]]
            name = "ping"
            [[subtrees.commands]]
            name = "ping"
        "#;
        let err = from_toml::<String>(text).unwrap_err();
        match err {
            ManifestError::Dispatch { tree, source } => {
                assert_eq!(tree, "net");
                assert_eq!(source, DispatchError::DuplicateKey("ping".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_shortcut_target() {
        let text = r#"
            name = "root"
            [[shortcuts]]
            key = "x"
            target = "missing"
        "#;
        let err = from_toml::<String>(text).unwrap_err();
        let ManifestError::Dispatch { source, .. } = err else {
            panic!("expected a dispatch error, got {:?}", err);
        };
        assert_eq!(source, DispatchError::NotFound);
    }

    #[test]
    fn test_parse_error() {
        let err = from_toml::<String>("name = ").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let err = from_toml::<String>("brief = \"no name\"").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
