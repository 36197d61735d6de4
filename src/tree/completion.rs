//! Autocompletion of partial command lines.
//!
//! Walks the same levels as lookup, but lists every key matching the typed
//! prefix instead of failing on ambiguity. Uses the stub function pattern:
//! the module always exists, and completion returns nothing when the
//! `completion` feature is disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

use alloc::string::String;
use alloc::vec::Vec;

use crate::tree::Tree;

#[cfg(feature = "completion")]
use crate::field::next_field;
#[cfg(feature = "completion")]
use crate::tree::Node;
#[cfg(feature = "completion")]
use alloc::format;
#[cfg(feature = "completion")]
use alloc::vec;
#[cfg(feature = "completion")]
use log::trace;

// ============================================================================
// Feature-enabled implementation
// ============================================================================

#[cfg(feature = "completion")]
impl<T> Tree<T> {
    /// Suggest full command paths for a partial `line`.
    ///
    /// Each suggestion is the space-joined key path from this tree, usable
    /// as a replacement for the typed input. Suggestions come back in
    /// lexicographic order.
    ///
    /// 1. No key matches the field: no suggestions
    /// 2. Several keys match: all of them if the field is the last one typed,
    ///    otherwise nothing (further input cannot disambiguate)
    /// 3. One command matches: its path if nothing follows, otherwise nothing
    /// 4. One subtree matches: the path ending in the matched key if nothing
    ///    follows and the field is not the subtree's own name (a partial key
    ///    or a shortcut), otherwise descend with the next field
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdtree::{CommandDescriptor, Tree, TreeDescriptor};
    ///
    /// let mut root = Tree::new(TreeDescriptor::new("root"));
    /// let file = root.add_subtree(TreeDescriptor::new("file"))?;
    /// file.add_command(CommandDescriptor::new("open", ()))?;
    /// file.add_command(CommandDescriptor::new("close", ()))?;
    ///
    /// assert_eq!(root.autocomplete("fil"), ["file"]);
    /// assert_eq!(root.autocomplete("file"), ["file close", "file open"]);
    /// assert_eq!(root.autocomplete("file o"), ["file open"]);
    /// # Ok::<(), cmdtree::DispatchError>(())
    /// ```
    pub fn autocomplete(&self, line: &str) -> Vec<String> {
        let (mut field, mut remain) = next_field(line);
        let mut tree = self;
        let mut path = String::new();

        loop {
            let mut candidates = tree.index.find_candidates(field);
            let Some((key, route)) = candidates.next() else {
                trace!("complete `{}` under `{}`: no candidates", field, tree.name);
                break;
            };

            if let Some(second) = candidates.next() {
                if !remain.is_empty() {
                    trace!("complete `{}` under `{}`: ambiguous", field, tree.name);
                    break;
                }
                return [(key, route), second]
                    .into_iter()
                    .chain(candidates)
                    .map(|(key, _)| format!("{}{}", path, key))
                    .collect();
            }

            match tree.node_at(route) {
                Some(Node::Command(_)) => {
                    if !remain.is_empty() {
                        break;
                    }
                    return vec![format!("{}{}", path, key)];
                }
                Some(Node::Tree(subtree)) => {
                    if remain.is_empty() && field != subtree.name {
                        return vec![format!("{}{}", path, key)];
                    }
                    trace!("complete `{}`: descend into `{}`", field, key);
                    path.push_str(key);
                    path.push(' ');
                    (field, remain) = next_field(remain);
                    tree = subtree;
                }
                None => break,
            }
        }

        Vec::new()
    }
}

/// Longest common prefix of a candidate list.
///
/// Lets an interactive shell extend the typed input as far as every
/// candidate agrees before listing the alternatives. Never splits a UTF-8
/// character.
///
/// # Returns
///
/// The common prefix, or `""` for an empty list or no shared prefix.
#[cfg(feature = "completion")]
pub fn common_prefix(candidates: &[String]) -> &str {
    let Some((first, rest)) = candidates.split_first() else {
        return "";
    };

    let mut len = rest.iter().fold(first.len(), |len, other| {
        first
            .bytes()
            .zip(other.bytes())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count()
    });
    while !first.is_char_boundary(len) {
        len -= 1;
    }
    &first[..len]
}

// ============================================================================
// Feature-disabled stub implementation
// ============================================================================

#[cfg(not(feature = "completion"))]
impl<T> Tree<T> {
    /// Stub implementation when completion feature is disabled.
    ///
    /// Returns no suggestions.
    pub fn autocomplete(&self, line: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Stub implementation when completion feature is disabled.
#[cfg(not(feature = "completion"))]
pub fn common_prefix(candidates: &[String]) -> &str {
    ""
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{CommandDescriptor, TreeDescriptor};
    use alloc::string::ToString;

    fn build_tree() -> Tree<()> {
        let mut root = Tree::new(TreeDescriptor::new("root"));
        for name in ["quit", "status", "start"] {
            root.add_command(CommandDescriptor::new(name, ())).unwrap();
        }
        let file = root.add_subtree(TreeDescriptor::new("file")).unwrap();
        for name in ["open", "close"] {
            file.add_command(CommandDescriptor::new(name, ())).unwrap();
        }
        let system = root.add_subtree(TreeDescriptor::new("system")).unwrap();
        let reboot = CommandDescriptor::new("reboot", ());
        system.add_command(reboot).unwrap();
        root
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_single_match_command() {
        let root = build_tree();
        assert_eq!(root.autocomplete("q"), ["quit"]);
        assert_eq!(root.autocomplete("quit"), ["quit"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_command_with_trailing_input() {
        let root = build_tree();
        assert!(root.autocomplete("quit now").is_empty());
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_multiple_matches_sorted() {
        let root = build_tree();
        assert_eq!(root.autocomplete("st"), ["start", "status"]);
        assert_eq!(root.autocomplete("s"), ["start", "status", "system"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_ambiguous_with_trailing_input() {
        let root = build_tree();
        assert!(root.autocomplete("s reboot").is_empty());
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_partial_subtree_expands() {
        let root = build_tree();
        assert_eq!(root.autocomplete("sy"), ["system"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_exact_subtree_lists_children() {
        let root = build_tree();
        assert_eq!(root.autocomplete("file"), ["file close", "file open"]);
        // Single child completes straight through
        assert_eq!(root.autocomplete("system"), ["system reboot"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_descend_with_partial_field() {
        let root = build_tree();
        assert_eq!(root.autocomplete("fi c"), ["file close"]);
        assert_eq!(root.autocomplete("sys re"), ["system reboot"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_no_matches() {
        let root = build_tree();
        assert!(root.autocomplete("xyz").is_empty());
        assert!(root.autocomplete("file xyz").is_empty());
        assert!(root.autocomplete("ST").is_empty());
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_empty_line_lists_all() {
        let root = build_tree();
        assert_eq!(
            root.autocomplete(""),
            ["file", "quit", "start", "status", "system"]
        );
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_empty_subtree() {
        let mut root = Tree::<()>::new(TreeDescriptor::new("root"));
        root.add_subtree(TreeDescriptor::new("empty")).unwrap();
        assert_eq!(root.autocomplete("em"), ["empty"]);
        assert!(root.autocomplete("empty").is_empty());
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_exact_subtree_shortcut_completes_to_itself() {
        let mut root = build_tree();
        root.add_shortcut("os", "system").unwrap();
        assert_eq!(root.autocomplete("os"), ["os"]);
        assert_eq!(root.autocomplete("os r"), ["os reboot"]);
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_common_prefix() {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(common_prefix(&list(&["start", "status", "stop"])), "st");
        assert_eq!(common_prefix(&list(&["network", "netscan"])), "net");
        assert_eq!(common_prefix(&list(&["abc", "xyz"])), "");
        assert_eq!(common_prefix(&list(&["file close"])), "file close");
        assert_eq!(common_prefix(&[]), "");
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_common_prefix_char_boundary() {
        // 'ä' and 'ö' share their first UTF-8 byte
        let list = ["bä".to_string(), "bö".to_string()];
        assert_eq!(common_prefix(&list), "b");
    }

    #[test]
    #[cfg(not(feature = "completion"))]
    fn test_stub_returns_empty() {
        let root = build_tree();
        assert!(root.autocomplete("q").is_empty());
        assert_eq!(common_prefix(&["a".to_string()]), "");
    }
}
