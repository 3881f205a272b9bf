//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Command results go to stdout; diagnostics go through `tracing` to stderr.
//! JSON responses are printed compactly by default so they can be piped
//! straight back to a host, or pretty-printed for humans.

use std::fmt::Display;

use serde::Serialize;

use crate::tags::TagDescriptor;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Serialize a value as JSON, compact or pretty.
pub fn format_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Print a JSON value to stdout. JSON is the command's result, so it is
/// printed even in quiet mode.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<()> {
    println!("{}", format_json(value, pretty)?);
    Ok(())
}

/// Format one registry row: `id  kind, kind, ...`.
pub fn format_tag(tag: &TagDescriptor, id_width: usize) -> String {
    let kinds: Vec<&str> = tag.accepted_kinds().iter().map(String::as_str).collect();
    format!("{:<width$}  {}", tag.id(), kinds.join(", "), width = id_width)
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn compact_and_pretty_json() {
        let value = json!({ "tags": {} });
        assert_eq!(format_json(&value, false).unwrap(), r#"{"tags":{}}"#);
        assert_eq!(format_json(&value, true).unwrap(), "{\n  \"tags\": {}\n}");
    }

    #[test]
    fn tag_row_pads_id() {
        let tag = TagDescriptor::new("Img", ["image", "gallery"]).unwrap();
        // Kinds are listed in sorted order.
        assert_eq!(format_tag(&tag, 6), "img     gallery, image");
    }

    #[test]
    fn list_with_prefix() {
        assert_eq!(format_list(&["a", "b"], "- "), "- a\n- b");
    }
}
