//! CLI output formatting for all build steps.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (collection name, item title, page path), with
//! counts and dates as secondary context on the same or indented lines.
//!
//! ```text
//! Collections
//! posts (2 items)
//!     001 Hello World (February 10, 2024)
//!     002 First Post (January 5, 2024)
//!
//! Passthrough copies
//! styles.css (1 file)
//! blog/attachments (4 files)
//!
//! Transforms
//! /blog/hello/index.html (2 rewrites)
//! ```
//!
//! Each step has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::collections::CollectionSet;
use crate::copy::CopiedEntry;
use crate::filters;
use crate::transform::TransformedPage;
use crate::types::ContentItem;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// One collection as a header plus indented item lines.
fn format_collection(name: &str, items: &[&ContentItem]) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", name, plural(items.len(), "item"))];
    for (i, item) in items.iter().enumerate() {
        let date = filters::nice_date(item.date.as_ref()).unwrap_or_else(|_| "undated".into());
        lines.push(format!(
            "    {} {} ({date})",
            format_index(i + 1),
            item.label()
        ));
    }
    lines
}

/// Format the derived collections of one build.
pub fn format_collections_output(set: &CollectionSet) -> Vec<String> {
    let mut lines = vec!["Collections".to_string()];
    lines.extend(format_collection("status", &set.status));
    lines.extend(format_collection("favorites", &set.favorites));
    lines.extend(format_collection("posts", &set.posts));
    lines
}

/// Format the passthrough copy report.
pub fn format_copy_output(copied: &[CopiedEntry]) -> Vec<String> {
    let mut lines = vec!["Passthrough copies".to_string()];
    for entry in copied {
        lines.push(format!("{} ({})", entry.target, plural(entry.files, "file")));
    }
    lines
}

/// Format the output-transform report.
pub fn format_transform_output(pages: &[TransformedPage]) -> Vec<String> {
    let mut lines = vec!["Transforms".to_string()];
    if pages.is_empty() {
        lines.push("    (no pages needed rewriting)".to_string());
        return lines;
    }
    for page in pages {
        lines.push(format!("{} ({})", page.path, plural(page.rewrites, "rewrite")));
    }
    lines
}

pub fn print_collections_output(set: &CollectionSet) {
    for line in format_collections_output(set) {
        println!("{line}");
    }
}

pub fn print_copy_output(copied: &[CopiedEntry]) {
    for line in format_copy_output(copied) {
        println!("{line}");
    }
}

pub fn print_transform_output(pages: &[TransformedPage]) {
    for line in format_transform_output(pages) {
        println!("{line}");
    }
}
