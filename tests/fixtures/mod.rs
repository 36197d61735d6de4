//! Test fixtures for cmdtree integration tests.
//!
//! Provides:
//! - `build_tree`: root menu with a `file` subtree
//! - `build_tree_with_run`: same tree plus a `run` command in `file`
//! - `init_logging`: route `log` output through the test harness

#![allow(dead_code)]

use cmdtree::{CommandDescriptor, Tree, TreeDescriptor};

/// Payload type used by every fixture tree.
pub type Payload = &'static str;

/// Root menu used across tests.
///
/// ```text
/// root
/// ├── quit
/// └── file
///     ├── open
///     ├── close
///     ├── read
///     └── write
/// ```
pub fn build_tree() -> Tree<Payload> {
    build(false)
}

/// [`build_tree`] plus `file run`, which makes `file r` ambiguous.
pub fn build_tree_with_run() -> Tree<Payload> {
    build(true)
}

fn build(with_run: bool) -> Tree<Payload> {
    let about = "Top level menu of the test application.";
    let mut root = Tree::new(TreeDescriptor::new("root").with_description(about));
    root.add_command(
        CommandDescriptor::new("quit", "quit")
            .with_brief("Quit the program")
            .with_usage("quit"),
    )
    .unwrap();

    let file = root
        .add_subtree(TreeDescriptor::new("file").with_brief("File operations"))
        .unwrap();
    file.add_command(
        CommandDescriptor::new("open", "open")
            .with_brief("Open a file")
            .with_usage("open <path>")
            .with_description(
                "Open the file at the given path for reading and writing. \
                 The file is created when it does not exist yet.",
            ),
    )
    .unwrap();
    let mut simple = vec![
        ("close", "Close the open file"),
        ("read", "Read from the open file"),
        ("write", "Write to the open file"),
    ];
    if with_run {
        simple.push(("run", "Run the open file"));
    }
    for (name, brief) in simple {
        let cmd = CommandDescriptor::new(name, name).with_brief(brief);
        file.add_command(cmd).unwrap();
    }
    root
}

/// Install a test logger; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
