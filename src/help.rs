//! Help and usage text rendering.
//!
//! `HelpWriter` formats tree listings and per-node help into any
//! `core::fmt::Write` sink. Layout constants come from a [`HelpConfig`].
//!
//! # Example
//!
//! ```
//! use cmdtree::{CommandDescriptor, HelpWriter, Tree, TreeDescriptor};
//!
//! let mut root = Tree::new(TreeDescriptor::new("root"));
//! root.add_command(CommandDescriptor::new("quit", ()).with_brief("Quit"))?;
//!
//! let mut out = String::new();
//! HelpWriter::new(&mut out).help(&root, &[])?;
//! assert_eq!(out, "root commands:\n    quit  Quit\n\n");
//! # Ok::<(), cmdtree::DispatchError>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, HelpConfig};
use crate::error::DispatchError;
use crate::tree::{Node, Tree};

/// Help renderer writing into a borrowed sink.
#[derive(Debug)]
pub struct HelpWriter<'w, W: Write, C: HelpConfig = DefaultConfig> {
    out: &'w mut W,
    _config: PhantomData<C>,
}

impl<'w, W: Write> HelpWriter<'w, W, DefaultConfig> {
    /// Create writer using [`DefaultConfig`] (80 columns).
    pub fn new(out: &'w mut W) -> Self {
        Self::with_config(out)
    }
}

impl<'w, W: Write, C: HelpConfig> HelpWriter<'w, W, C> {
    /// Create writer using layout `C`.
    ///
    /// ```
    /// use cmdtree::HelpWriter;
    /// use cmdtree::config::CompactConfig;
    ///
    /// let mut out = String::new();
    /// let _help = HelpWriter::<_, CompactConfig>::with_config(&mut out);
    /// ```
    pub fn with_config(out: &'w mut W) -> Self {
        Self {
            out,
            _config: PhantomData,
        }
    }

    /// Render help for the node named by `args`, or for `tree` itself when
    /// `args` is empty.
    ///
    /// The arguments are joined with spaces and looked up from `tree`; lookup
    /// errors propagate unchanged.
    pub fn help<T>(&mut self, tree: &Tree<T>, args: &[&str]) -> Result<(), DispatchError> {
        if args.is_empty() {
            return self.write_help(Node::Tree(tree));
        }
        let line = args.join(" ");
        let selection = tree.lookup(&line)?;
        self.write_help(selection.node)
    }

    /// Render full help for one node.
    ///
    /// A subtree renders as a listing of its children; a command renders its
    /// usage, description and shortcuts.
    pub fn write_help<T>(&mut self, node: Node<'_, T>) -> Result<(), DispatchError> {
        match node {
            Node::Tree(tree) => self.write_listing(tree),
            Node::Command(_) => {
                self.write_usage(node)?;
                self.write_description(node)?;
                self.write_shortcuts(node)
            }
        }
    }

    /// Render the children of `tree`, sorted by name, one per line.
    ///
    /// Children without a brief are skipped but still count toward the name
    /// column width.
    pub fn write_listing<T>(&mut self, tree: &Tree<T>) -> Result<(), DispatchError> {
        let mut children: Vec<Node<'_, T>> = tree.children().collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        let width = children
            .iter()
            .map(|child| child.name().chars().count())
            .max()
            .unwrap_or(0);

        writeln!(self.out, "{} commands:", tree.name())?;
        for child in children.iter().filter(|child| !child.brief().is_empty()) {
            writeln!(
                self.out,
                "{:indent$}{:<width$}{:gap$}{}",
                "",
                child.name(),
                "",
                child.brief(),
                indent = C::LIST_INDENT,
                width = width,
                gap = C::COLUMN_GAP,
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Render the usage line.
    ///
    /// Commands without a usage hint print nothing; subtrees fall back to
    /// `<name> [subcommand]`.
    pub fn write_usage<T>(&mut self, node: Node<'_, T>) -> Result<(), DispatchError> {
        match node {
            _ if !node.usage().is_empty() => writeln!(self.out, "Usage: {}", node.usage())?,
            Node::Tree(tree) => writeln!(self.out, "Usage: {} [subcommand]", tree.name())?,
            Node::Command(_) => {}
        }
        Ok(())
    }

    /// Render the wrapped description, falling back to the brief.
    pub fn write_description<T>(&mut self, node: Node<'_, T>) -> Result<(), DispatchError> {
        if !node.description().is_empty() {
            let text = indent_wrap(C::DESCRIPTION_INDENT, node.description(), C::WRAP_WIDTH);
            write!(self.out, "Description:\n{}\n\n", text)?;
        } else if !node.brief().is_empty() {
            let text = indent_wrap(C::DESCRIPTION_INDENT, node.brief(), C::WRAP_WIDTH);
            write!(self.out, "Description:\n{}.\n\n", text)?;
        }
        Ok(())
    }

    /// Render the comma-joined shortcut list, if any.
    pub fn write_shortcuts<T>(&mut self, node: Node<'_, T>) -> Result<(), DispatchError> {
        match node.shortcuts() {
            [] => {}
            [only] => write!(self.out, "Shortcut: {}\n\n", only)?,
            many => write!(self.out, "Shortcuts: {}\n\n", many.join(", "))?,
        }
        Ok(())
    }
}

/// Word-wrap `text` into lines indented by `indent` spaces.
///
/// Words are packed greedily; a line (indent included) stays strictly below
/// `width` columns unless a single word is longer. Runs of whitespace,
/// newlines included, collapse to one separator.
pub fn indent_wrap(indent: usize, text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return out;
    };

    push_indent(&mut out, indent);
    out.push_str(first);
    let mut len = indent + first.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if len + 1 + word_len < width {
            out.push(' ');
            len += 1 + word_len;
        } else {
            out.push('\n');
            push_indent(&mut out, indent);
            len = indent + word_len;
        }
        out.push_str(word);
    }
    out
}

fn push_indent(out: &mut String, indent: usize) {
    out.extend(core::iter::repeat_n(' ', indent));
}
