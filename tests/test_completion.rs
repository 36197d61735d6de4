//! Integration tests for autocompletion.
//!
//! Requires the `completion` feature (enabled by default).

#![cfg(feature = "completion")]

#[path = "fixtures/mod.rs"]
mod fixtures;

use cmdtree::common_prefix;
use fixtures::{build_tree, build_tree_with_run, init_logging};

#[test]
fn test_partial_subtree_expands() {
    init_logging();
    let root = build_tree();
    assert_eq!(root.autocomplete("fil"), ["file"]);
    assert_eq!(root.autocomplete("  f"), ["file"]);
}

#[test]
fn test_exact_subtree_lists_children() {
    init_logging();
    let root = build_tree();
    assert_eq!(
        root.autocomplete("file"),
        ["file close", "file open", "file read", "file write"]
    );
}

#[test]
fn test_descend_and_filter() {
    init_logging();
    let root = build_tree_with_run();
    assert_eq!(root.autocomplete("file r"), ["file read", "file run"]);
    assert_eq!(root.autocomplete("fi ru"), ["file run"]);
    assert_eq!(root.autocomplete("f w"), ["file write"]);
}

#[test]
fn test_command_complete_only_at_end() {
    let root = build_tree();
    assert_eq!(root.autocomplete("q"), ["quit"]);
    assert!(root.autocomplete("quit now").is_empty());
    assert!(root.autocomplete("file open x").is_empty());
}

#[test]
fn test_ambiguous_field_with_more_input() {
    let root = build_tree_with_run();
    assert!(root.autocomplete("file r x").is_empty());
}

#[test]
fn test_no_candidates() {
    let root = build_tree();
    assert!(root.autocomplete("zzz").is_empty());
    assert!(root.autocomplete("file zzz").is_empty());
}

#[test]
fn test_shortcuts_are_candidates() {
    let mut root = build_tree();
    root.add_shortcut("fo", "file open").unwrap();
    assert_eq!(root.autocomplete("f"), ["file", "fo"]);
    assert_eq!(root.autocomplete("fo"), ["fo"]);
}

#[test]
fn test_extend_with_common_prefix() {
    let root = build_tree_with_run();
    let candidates = root.autocomplete("file r");
    assert_eq!(common_prefix(&candidates), "file r");

    let candidates = root.autocomplete("file");
    assert_eq!(common_prefix(&candidates), "file ");
}

#[test]
fn test_completion_idempotent() {
    let root = build_tree_with_run();
    for line in ["", "f", "file", "file r", "q x"] {
        assert_eq!(root.autocomplete(line), root.autocomplete(line));
    }
}

#[test]
fn test_subtree_shortcut_typed_exactly() {
    init_logging();
    let mut root = build_tree();
    root.add_shortcut("fs", "file").unwrap();
    assert_eq!(root.autocomplete("fs"), ["fs"]);
    // The subtree's own name still descends
    assert_eq!(root.autocomplete("file o"), ["file open"]);
    assert_eq!(root.autocomplete("fs o"), ["fs open"]);
}
