//! Shared types exchanged with the external build framework.
//!
//! The framework hands sitewire an items manifest (JSON) describing every
//! parsed content document; sitewire hands back derived collections. These
//! types must stay serialization-compatible on both sides of that boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed content document (post, page, favorites entry, ...).
///
/// Items are owned by the external framework; sitewire reads their metadata
/// and returns orderings, it never mutates them. Every field the framework
/// does not supply is simply absent in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Output URL path (e.g. `/blog/hello/`). Absent for non-routed content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Document title, used only for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Publication date. Items without one sort as earliest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Tag labels attached to the document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ContentItem {
    /// Whether this item carries the given tag label.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Display label for CLI reporting: title, then url, then a placeholder.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or("(untitled)")
    }
}

/// The framework → sitewire handoff document: all content items of one build.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItemsManifest {
    pub items: Vec<ContentItem>,
}
