//! Terminal styling utilities
//!
//! Provides a consistent color scheme for the CLI summaries.
//! Uses crossterm for cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Category colors
/// - sdo: Cyan
/// - observable: Blue
/// - tlp-*: the TLP colour (white, green, amber, red)
/// - marking-definition: Magenta
/// - custom/unknown: Grey
pub fn category_style(category: &str) -> StyledContent<String> {
    let label = format!("[{}]", category);
    match category {
        "sdo" => label.cyan(),
        "observable" => label.blue(),
        "tlp-white" => label.white().bold(),
        "tlp-green" => label.green(),
        "tlp-amber" => label.dark_yellow(),
        "tlp-red" => label.red(),
        "marking-definition" => label.magenta(),
        _ => label.dark_grey(),
    }
}

/// Relation colors
/// - refers-to: Dim
/// - applied-to: Magenta (markings)
/// - anything else (relationship types): Green
pub fn relation_style(relation: &str) -> StyledContent<String> {
    match relation {
        "refers-to" => relation.to_string().dark_grey(),
        "applied-to" => relation.to_string().magenta(),
        _ => relation.to_string().green(),
    }
}

/// Count styling
/// - Zero: Dim
/// - Positive: White
pub fn count(n: usize) -> StyledContent<String> {
    if n == 0 {
        n.to_string().dark_grey()
    } else {
        n.to_string().white()
    }
}

/// Warning count: yellow when non-zero
pub fn count_warnings(n: usize) -> StyledContent<String> {
    if n == 0 {
        n.to_string().dark_grey()
    } else {
        n.to_string().yellow()
    }
}

/// Section headers
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().bold()
}

/// Dim/muted text
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Success text
pub fn success(text: &str) -> StyledContent<String> {
    text.to_string().green()
}

/// Warning text
pub fn warning(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Error text
pub fn error(text: &str) -> StyledContent<String> {
    text.to_string().red()
}

/// Path styling
pub fn path(p: &str) -> StyledContent<String> {
    p.to_string().blue()
}
