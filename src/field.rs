//! Field tokenizer for command lines.
//!
//! Splits input on spaces and tabs, treating one level of double-quoted text
//! as a single field. Zero-allocation: every field is a slice of the input.
//!
//! # Example
//!
//! ```
//! use cmdtree::field::{fields, next_field};
//!
//! assert_eq!(next_field("  \"a b\" c"), ("a b", "c"));
//!
//! let args: Vec<&str> = fields("open \"my file.txt\"\t-v").collect();
//! assert_eq!(args, ["open", "my file.txt", "-v"]);
//! ```

/// Check for a field delimiter. Spaces and tabs are equivalent.
fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Strip leading spaces and tabs.
pub fn strip_leading_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_delimiter)
}

/// Split the next field off `s`.
///
/// Returns `(field, remainder)` where the remainder has its leading whitespace
/// stripped. A field starting with `"` runs to the next `"` (exclusive); an
/// unterminated quote takes the rest of the string and leaves an empty
/// remainder. Malformed quoting is never an error.
///
/// Empty (or all-whitespace) input yields `("", "")`.
pub fn next_field(s: &str) -> (&str, &str) {
    let s = strip_leading_whitespace(s);

    if let Some(quoted) = s.strip_prefix('"') {
        return match quoted.find('"') {
            Some(end) => (&quoted[..end], strip_leading_whitespace(&quoted[end + 1..])),
            None => (quoted, ""),
        };
    }

    match s.find(is_delimiter) {
        Some(end) => (&s[..end], strip_leading_whitespace(&s[end..])),
        None => (s, ""),
    }
}

/// Iterate over all fields of `s`, left to right, quotes stripped.
pub fn fields(s: &str) -> Fields<'_> {
    Fields {
        remain: strip_leading_whitespace(s),
    }
}

/// Iterator returned by [`fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    remain: &'a str,
}

impl<'a> Fields<'a> {
    /// Unconsumed input, leading whitespace already stripped.
    pub fn remainder(&self) -> &'a str {
        self.remain
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remain.is_empty() {
            return None;
        }
        let (field, remain) = next_field(self.remain);
        self.remain = remain;
        Some(field)
    }
}
