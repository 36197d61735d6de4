//! Line lookup over a command tree.
//!
//! Resolution consumes one field per level. A command ends the descent no
//! matter how much input remains; a subtree ends it only when input runs out.

use alloc::vec::Vec;
use core::fmt;
use log::trace;

use crate::error::DispatchError;
use crate::field::{fields, next_field};
use crate::tree::{Command, Node, Route, Tree};

/// Result of a successful lookup: matched node plus residual arguments.
///
/// Arguments borrow from the looked-up line, quotes stripped, in input order.
pub struct Selection<'t, 'l, T> {
    /// Matched command or subtree
    pub node: Node<'t, T>,

    /// Residual argument fields
    pub args: Vec<&'l str>,
}

impl<'t, T> Selection<'t, '_, T> {
    /// The matched command, if the selection is one.
    pub fn command(&self) -> Option<&'t Command<T>> {
        self.node.as_command()
    }

    /// The matched subtree, if the selection is one.
    pub fn tree(&self) -> Option<&'t Tree<T>> {
        self.node.as_tree()
    }
}

// Manual impls for the same reason as `Node`: no bounds on the payload
impl<T> Clone for Selection<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            args: self.args.clone(),
        }
    }
}

impl<T> fmt::Debug for Selection<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("node", &self.node)
            .field("args", &self.args)
            .finish()
    }
}

impl<T> PartialEq for Selection<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.args == other.args
    }
}

impl<T> Tree<T> {
    /// Resolve `line` to a command or subtree plus residual arguments.
    ///
    /// # Returns
    ///
    /// - `Ok(Selection)` - Matched node and arguments
    /// - `Err(DispatchError::Ambiguous)` - A field prefixed several keys
    /// - `Err(DispatchError::NotFound)` - Empty line or a field matched nothing
    ///
    /// # Example
    ///
    /// ```
    /// use cmdtree::{CommandDescriptor, Tree, TreeDescriptor};
    ///
    /// let mut root = Tree::new(TreeDescriptor::new("root"));
    /// let file = root.add_subtree(TreeDescriptor::new("file"))?;
    /// file.add_command(CommandDescriptor::new("open", ()))?;
    ///
    /// let sel = root.lookup("f o \"my notes.txt\" -r")?;
    /// assert_eq!(sel.node.name(), "open");
    /// assert_eq!(sel.args, ["my notes.txt", "-r"]);
    ///
    /// // Input exhausted on a subtree selects the subtree
    /// assert!(root.lookup("file")?.node.is_tree());
    /// # Ok::<(), cmdtree::DispatchError>(())
    /// ```
    pub fn lookup<'l>(&self, line: &'l str) -> Result<Selection<'_, 'l, T>, DispatchError> {
        let (_, node, remain) = self.resolve(line)?;
        Ok(Selection {
            node,
            args: fields(remain).collect(),
        })
    }

    /// Resolve `line` to a command.
    ///
    /// Fails with `NotFound` when the line resolves to a subtree instead.
    pub fn lookup_command<'l>(
        &self,
        line: &'l str,
    ) -> Result<(&Command<T>, Vec<&'l str>), DispatchError> {
        let selection = self.lookup(line)?;
        match selection.node {
            Node::Command(cmd) => Ok((cmd, selection.args)),
            Node::Tree(_) => Err(DispatchError::NotFound),
        }
    }

    /// Resolve `line` to a subtree.
    ///
    /// Fails with `NotFound` when the line resolves to a command instead.
    /// A subtree only matches once input is exhausted, so on success the
    /// argument list is always empty.
    pub fn lookup_subtree<'l>(
        &self,
        line: &'l str,
    ) -> Result<(&Tree<T>, Vec<&'l str>), DispatchError> {
        let selection = self.lookup(line)?;
        match selection.node {
            Node::Tree(tree) => Ok((tree, selection.args)),
            Node::Command(_) => Err(DispatchError::NotFound),
        }
    }

    /// Walk `line` down the tree.
    ///
    /// Returns the route to the matched node (relative to `self`), the node,
    /// and the unconsumed remainder of the line.
    pub(crate) fn resolve<'l>(
        &self,
        line: &'l str,
    ) -> Result<(Route, Node<'_, T>, &'l str), DispatchError> {
        let (mut field, mut remain) = next_field(line);
        if field.is_empty() {
            return Err(DispatchError::NotFound);
        }

        let mut tree = self;
        let mut route = Route::new();
        loop {
            let step = tree.index.find(field).inspect_err(|err| {
                trace!("lookup `{}` under `{}`: {}", field, tree.name, err);
            })?;
            let node = tree.node_at(step).ok_or(DispatchError::NotFound)?;
            trace!("lookup `{}`: matched `{}`", field, node.name());
            route.extend_from_slice(step);

            match node {
                Node::Command(_) => return Ok((route, node, remain)),
                Node::Tree(subtree) => {
                    if remain.is_empty() {
                        return Ok((route, node, remain));
                    }
                    (field, remain) = next_field(remain);
                    tree = subtree;
                }
            }
        }
    }
}
