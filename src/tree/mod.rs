//! Command tree data structures.
//!
//! A [`Tree`] owns its commands and subtrees by value and keeps one
//! [`PrefixIndex`] per level. Index values are routes (child slot indices from
//! the owning tree down to the target) rather than references, which stay
//! valid because children are never removed.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::error::DispatchError;

// Sub-modules
pub mod completion;
pub mod index;
pub mod lookup;

pub use index::PrefixIndex;
pub use lookup::Selection;

/// One step of a route: a child position within a tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Index into the tree's commands
    Command(usize),

    /// Index into the tree's subtrees
    Subtree(usize),
}

/// Path of slots from a tree down to one of its descendants.
///
/// Primary names map to a single slot; shortcuts may map to longer routes.
pub type Route = Vec<Slot>;

/// Descriptor used to register a command.
///
/// # Example
///
/// ```
/// use cmdtree::CommandDescriptor;
///
/// let open = CommandDescriptor::new("open", 1u8)
///     .with_brief("Open a file")
///     .with_usage("open <path>");
/// assert_eq!(open.name, "open");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor<T> {
    /// Command name (unique key within the owning tree)
    pub name: String,

    /// Brief description (shown in listings)
    pub brief: String,

    /// Long description (shown with command help)
    pub description: String,

    /// Usage hint text
    pub usage: String,

    /// Caller-defined payload
    pub data: T,
}

impl<T> CommandDescriptor<T> {
    /// Create descriptor with empty display text.
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            brief: String::new(),
            description: String::new(),
            usage: String::new(),
            data,
        }
    }

    /// Builder method to set the brief description.
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    /// Builder method to set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the usage hint.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// Descriptor used to create a tree or register a subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDescriptor {
    /// Tree name
    pub name: String,

    /// Brief description (shown in listings)
    pub brief: String,

    /// Long description
    pub description: String,

    /// Usage hint text
    pub usage: String,
}

impl TreeDescriptor {
    /// Create descriptor with empty display text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the brief description.
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    /// Builder method to set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the usage hint.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// Terminal dispatch target.
#[derive(Debug, Clone)]
pub struct Command<T> {
    name: String,
    brief: String,
    description: String,
    usage: String,
    data: T,
    shortcuts: Vec<String>,
}

impl<T> Command<T> {
    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brief description.
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Long description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Usage hint.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Caller-defined payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Shortcuts aliasing this command, sorted.
    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }
}

impl<T> From<CommandDescriptor<T>> for Command<T> {
    fn from(d: CommandDescriptor<T>) -> Self {
        Self {
            name: d.name,
            brief: d.brief,
            description: d.description,
            usage: d.usage,
            data: d.data,
            shortcuts: Vec::new(),
        }
    }
}

/// Container of commands and subtrees, looked up by shortest unambiguous
/// prefix.
///
/// # Example
///
/// ```
/// use cmdtree::{CommandDescriptor, Tree, TreeDescriptor};
///
/// let mut root = Tree::new(TreeDescriptor::new("root"));
/// root.add_command(CommandDescriptor::new("quit", "quit"))?;
/// let file = root.add_subtree(TreeDescriptor::new("file"))?;
/// file.add_command(CommandDescriptor::new("open", "open"))?;
/// root.add_shortcut("o", "file open")?;
///
/// let sel = root.lookup("fi op notes.txt")?;
/// assert_eq!(sel.node.name(), "open");
/// assert_eq!(sel.args, ["notes.txt"]);
///
/// let sel = root.lookup("o notes.txt")?;
/// assert_eq!(sel.node.name(), "open");
/// # Ok::<(), cmdtree::DispatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    name: String,
    brief: String,
    description: String,
    usage: String,
    data: Option<T>,
    shortcuts: Vec<String>,
    commands: Vec<Command<T>>,
    subtrees: Vec<Tree<T>>,
    index: PrefixIndex<Route>,
}

impl<T> Tree<T> {
    /// Create an empty tree.
    pub fn new(d: TreeDescriptor) -> Self {
        Self {
            name: d.name,
            brief: d.brief,
            description: d.description,
            usage: d.usage,
            data: None,
            shortcuts: Vec::new(),
            commands: Vec::new(),
            subtrees: Vec::new(),
            index: PrefixIndex::new(),
        }
    }

    /// Tree name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brief description.
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Long description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Usage hint.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Caller-defined payload, if one was attached.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Attach a payload, replacing any previous one.
    ///
    /// Lets a caller dispatch on a subtree selected by exhausted input.
    pub fn set_data(&mut self, data: T) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// Shortcuts aliasing this tree, sorted.
    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }

    /// Commands in registration order.
    pub fn commands(&self) -> &[Command<T>] {
        &self.commands
    }

    /// Subtrees in registration order.
    pub fn subtrees(&self) -> &[Tree<T>] {
        &self.subtrees
    }

    /// Direct children: commands first, then subtrees, each in registration
    /// order.
    pub fn children(&self) -> impl Iterator<Item = Node<'_, T>> {
        self.commands
            .iter()
            .map(Node::Command)
            .chain(self.subtrees.iter().map(Node::Tree))
    }

    /// This level's prefix index (names and shortcuts).
    pub fn index(&self) -> &PrefixIndex<Route> {
        &self.index
    }

    /// Register a command at this level.
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Command)` - The registered command
    /// - `Err(DispatchError::DuplicateKey)` - Name already used at this level
    pub fn add_command(
        &mut self,
        d: CommandDescriptor<T>,
    ) -> Result<&mut Command<T>, DispatchError> {
        let pos = self.commands.len();
        self.index.add(&d.name, vec![Slot::Command(pos)])?;
        debug!("registered command `{}` under `{}`", d.name, self.name);

        self.commands.push(Command::from(d));
        Ok(&mut self.commands[pos])
    }

    /// Register a child tree at this level.
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Tree)` - The new subtree, ready for registration
    /// - `Err(DispatchError::DuplicateKey)` - Name already used at this level
    pub fn add_subtree(&mut self, d: TreeDescriptor) -> Result<&mut Tree<T>, DispatchError> {
        let pos = self.subtrees.len();
        self.index.add(&d.name, vec![Slot::Subtree(pos)])?;
        debug!("registered subtree `{}` under `{}`", d.name, self.name);

        self.subtrees.push(Tree::new(d));
        Ok(&mut self.subtrees[pos])
    }

    /// Register `shortcut` at this level as an alias for the node that
    /// `target` resolves to from this tree.
    ///
    /// The target is looked up once, now. Argument tokens trailing the target
    /// path are ignored.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Shortcut registered and recorded on the target node
    /// - `Err(DispatchError::InvalidShortcut)` - Shortcut is not one plain field
    /// - `Err(DispatchError::DuplicateKey)` - Shortcut collides with a key
    /// - `Err(DispatchError::Ambiguous | NotFound)` - Target did not resolve
    pub fn add_shortcut(&mut self, shortcut: &str, target: &str) -> Result<(), DispatchError> {
        if shortcut.is_empty() || shortcut.contains([' ', '\t', '"']) {
            return Err(DispatchError::InvalidShortcut(shortcut.into()));
        }

        let (route, _, _) = self.resolve(target)?;
        self.index.add(shortcut, route.clone())?;
        debug!("shortcut `{}` -> `{}` in `{}`", shortcut, target, self.name);

        // Same string may alias the node from another level
        let shortcuts = self.shortcuts_mut(&route).ok_or(DispatchError::NotFound)?;
        if let Err(pos) = shortcuts.binary_search_by(|s| s.as_str().cmp(shortcut)) {
            shortcuts.insert(pos, shortcut.into());
        }
        Ok(())
    }

    /// Node reached by following `route` from this tree.
    ///
    /// Returns `None` for an empty route, or one that steps through a command
    /// or past the end of a child list.
    pub fn node_at(&self, route: &[Slot]) -> Option<Node<'_, T>> {
        let (last, path) = route.split_last()?;
        let tree = self.subtree_at(path)?;
        match *last {
            Slot::Command(i) => tree.commands.get(i).map(Node::Command),
            Slot::Subtree(i) => tree.subtrees.get(i).map(Node::Tree),
        }
    }

    fn subtree_at(&self, path: &[Slot]) -> Option<&Tree<T>> {
        let mut tree = self;
        for slot in path {
            match *slot {
                Slot::Subtree(i) => tree = tree.subtrees.get(i)?,
                Slot::Command(_) => return None,
            }
        }
        Some(tree)
    }

    fn shortcuts_mut(&mut self, route: &[Slot]) -> Option<&mut Vec<String>> {
        let (last, path) = route.split_last()?;
        let mut tree = self;
        for slot in path {
            match *slot {
                Slot::Subtree(i) => tree = tree.subtrees.get_mut(i)?,
                Slot::Command(_) => return None,
            }
        }
        match *last {
            Slot::Command(i) => tree.commands.get_mut(i).map(|c| &mut c.shortcuts),
            Slot::Subtree(i) => tree.subtrees.get_mut(i).map(|t| &mut t.shortcuts),
        }
    }
}

/// Tree node (command or subtree).
///
/// Closed variant: lookup, completion and help rendering all match on it
/// exhaustively.
pub enum Node<'t, T> {
    /// Terminal command
    Command(&'t Command<T>),

    /// Subtree (itself a valid dispatch target)
    Tree(&'t Tree<T>),
}

impl<'t, T> Node<'t, T> {
    /// Check if this node is a command.
    pub fn is_command(&self) -> bool {
        matches!(self, Node::Command(_))
    }

    /// Check if this node is a subtree.
    pub fn is_tree(&self) -> bool {
        matches!(self, Node::Tree(_))
    }

    /// Get node name.
    pub fn name(&self) -> &'t str {
        match *self {
            Node::Command(cmd) => cmd.name(),
            Node::Tree(tree) => tree.name(),
        }
    }

    /// Get brief description.
    pub fn brief(&self) -> &'t str {
        match *self {
            Node::Command(cmd) => cmd.brief(),
            Node::Tree(tree) => tree.brief(),
        }
    }

    /// Get long description.
    pub fn description(&self) -> &'t str {
        match *self {
            Node::Command(cmd) => cmd.description(),
            Node::Tree(tree) => tree.description(),
        }
    }

    /// Get usage hint.
    pub fn usage(&self) -> &'t str {
        match *self {
            Node::Command(cmd) => cmd.usage(),
            Node::Tree(tree) => tree.usage(),
        }
    }

    /// Get sorted shortcuts.
    pub fn shortcuts(&self) -> &'t [String] {
        match *self {
            Node::Command(cmd) => cmd.shortcuts(),
            Node::Tree(tree) => tree.shortcuts(),
        }
    }

    /// Get payload. Subtrees carry one only when it was attached.
    pub fn data(&self) -> Option<&'t T> {
        match *self {
            Node::Command(cmd) => Some(cmd.data()),
            Node::Tree(tree) => tree.data(),
        }
    }

    /// The command, if this node is one.
    pub fn as_command(&self) -> Option<&'t Command<T>> {
        match *self {
            Node::Command(cmd) => Some(cmd),
            Node::Tree(_) => None,
        }
    }

    /// The subtree, if this node is one.
    pub fn as_tree(&self) -> Option<&'t Tree<T>> {
        match *self {
            Node::Tree(tree) => Some(tree),
            Node::Command(_) => None,
        }
    }
}

// Manual impls: derives would require `T: Clone` / `T: Debug` on the payload
impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Command(cmd) => f.debug_tuple("Command").field(&cmd.name).finish(),
            Node::Tree(tree) => f.debug_tuple("Tree").field(&tree.name).finish(),
        }
    }
}

impl<T> PartialEq for Node<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Command(a), Node::Command(b)) => core::ptr::eq(*a, *b),
            (Node::Tree(a), Node::Tree(b)) => core::ptr::eq(*a, *b),
            _ => false,
        }
    }
}
