//! Configuration traits and implementations for help layout.
//!
//! The `HelpConfig` trait fixes column widths and indentation at compile time,
//! so the renderer carries no runtime settings.

/// Help layout configuration trait.
///
/// All values are const (zero runtime cost). Implementations define the wrap
/// width for descriptions and the indentation used by listings.
pub trait HelpConfig {
    /// Column limit for wrapped description text (default: 80)
    const WRAP_WIDTH: usize;

    /// Indentation of wrapped description lines (default: 3)
    const DESCRIPTION_INDENT: usize;

    /// Indentation of child entries in a tree listing (default: 4)
    const LIST_INDENT: usize;

    /// Spaces between the name column and the brief column (default: 2)
    const COLUMN_GAP: usize;
}

/// Default configuration for an 80-column terminal.
///
/// - WRAP_WIDTH: 80 columns
/// - DESCRIPTION_INDENT: 3 spaces
/// - LIST_INDENT: 4 spaces
/// - COLUMN_GAP: 2 spaces
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl HelpConfig for DefaultConfig {
    const WRAP_WIDTH: usize = 80;
    const DESCRIPTION_INDENT: usize = 3;
    const LIST_INDENT: usize = 4;
    const COLUMN_GAP: usize = 2;
}

/// Compact configuration for narrow consoles (serial terminals, split panes).
///
/// - WRAP_WIDTH: 60 columns
/// - DESCRIPTION_INDENT: 2 spaces
/// - LIST_INDENT: 2 spaces
/// - COLUMN_GAP: 1 space
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompactConfig;

impl HelpConfig for CompactConfig {
    const WRAP_WIDTH: usize = 60;
    const DESCRIPTION_INDENT: usize = 2;
    const LIST_INDENT: usize = 2;
    const COLUMN_GAP: usize = 1;
}
