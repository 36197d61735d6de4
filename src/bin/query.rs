//! `cmdtree-query`: query a command tree described by a TOML manifest.
//!
//! ```text
//! cmdtree-query --manifest menu.toml lookup file open notes.txt
//! cmdtree-query --manifest menu.toml complete fi
//! cmdtree-query --manifest menu.toml help file
//! ```

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cmdtree::manifest::{self, ManifestError};
use cmdtree::{HelpWriter, Node, Tree};
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "cmdtree-query", version, about = "Query a command tree manifest")]
struct Args {
    /// Path to the TOML manifest describing the tree.
    #[arg(long, short = 'm')]
    manifest: String,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Resolve a line to a command or subtree and print its arguments.
    Lookup {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print completion candidates for a partial line, one per line.
    Complete {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print help for the tree or for the node named by the words.
    Help {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let tree = match load_tree(&args.manifest) {
        Ok(tree) => tree,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let result = match &args.query {
        Query::Lookup { words } => run_lookup(&tree, &join_words(words)),
        Query::Complete { words } => run_complete(&tree, &join_words(words)),
        Query::Help { words } => run_help(&tree, words),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn load_tree(path: &str) -> Result<Tree<String>, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read manifest `{}`: {}", path, err))?;
    let tree = manifest::from_toml::<String>(&text)
        .map_err(|err: ManifestError| err.to_string())?;
    info!("loaded tree `{}` from `{}`", tree.name(), path);
    Ok(tree)
}

/// Rebuild a line from shell words, re-quoting words that contain blanks.
fn join_words(words: &[String]) -> String {
    words
        .iter()
        .map(|word| {
            if word.contains([' ', '\t']) {
                format!("\"{}\"", word)
            } else {
                word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_lookup(tree: &Tree<String>, line: &str) -> Result<String, String> {
    debug!("lookup `{}`", line);
    let selection = tree.lookup(line).map_err(|err| err.to_string())?;

    let mut out = String::new();
    match selection.node {
        Node::Command(cmd) => {
            out.push_str(&format!("command: {}\n", cmd.name()));
            out.push_str(&format!("payload: {}\n", cmd.data()));
        }
        Node::Tree(subtree) => {
            out.push_str(&format!("tree: {}\n", subtree.name()));
            if let Some(data) = subtree.data() {
                out.push_str(&format!("payload: {}\n", data));
            }
        }
    }
    for (i, arg) in selection.args.iter().enumerate() {
        out.push_str(&format!("arg[{}]: {}\n", i, arg));
    }
    Ok(out)
}

fn run_complete(tree: &Tree<String>, line: &str) -> Result<String, String> {
    debug!("complete `{}`", line);
    let candidates = tree.autocomplete(line);
    if candidates.is_empty() {
        return Err(format!("No completions for `{}`", line));
    }
    Ok(candidates.iter().map(|c| format!("{}\n", c)).collect())
}

fn run_help(tree: &Tree<String>, words: &[String]) -> Result<String, String> {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let mut out = String::new();
    HelpWriter::new(&mut out)
        .help(tree, &words)
        .map_err(|err| err.to_string())?;
    Ok(out)
}
