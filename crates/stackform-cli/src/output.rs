//! Formatted output helpers for CLI commands.

/// Returns a horizontal rule of `width` box-drawing characters.
#[must_use]
pub fn rule(width: usize) -> String {
    "\u{2550}".repeat(width)
}

/// Returns the indentation prefix for a nesting depth.
#[must_use]
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Joins a list with commas, or returns a dash for an empty list.
#[must_use]
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_owned()
    } else {
        items.join(", ")
    }
}
