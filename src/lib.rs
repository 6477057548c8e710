//! # Sitewire
//!
//! Declarative build wiring for a personal blog/website. The templating
//! framework renders pages; sitewire supplies the framework's inputs —
//! configuration, passthrough copies, derived collections, template filters —
//! and post-processes its outputs.
//!
//! # Architecture: Manifest Handoff
//!
//! Sitewire never parses or renders content. The rendering framework and
//! sitewire exchange JSON manifests instead:
//!
//! ```text
//! 1. Framework   content/  →  items.json        (parsed document metadata)
//! 2. Collections items.json → collections.json  (status/favorites/posts, ordered)
//! 3. Copy        config     →  _site/           (passthrough assets, verbatim)
//! 4. Transform   _site/**/blog/**.html          (image path rewriting, in place)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: each manifest is human-readable JSON you can inspect.
//! - **Framework independence**: anything that can emit an items manifest can
//!   drive the wiring — no engine-specific registration hooks.
//! - **Testability**: every step is a pure function over its input, so unit
//!   tests exercise the rules without a rendering framework in the loop.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, validation, stock defaults — directory layout, passthrough targets, default layout |
//! | [`types`] | Manifest types shared with the external framework (`ContentItem`, `ItemsManifest`) |
//! | [`collections`] | Derives the `status`, `favorites`, and `posts` collections, newest first |
//! | [`filters`] | Template value filters: `nice_date`, `starts_with` |
//! | [`copy`] | Passthrough copies into the output tree |
//! | [`transform`] | Blog image path rewriting over rendered HTML |
//! | [`output`] | CLI output formatting — information-first display of each step |
//!
//! # Design Decisions
//!
//! ## Explicit Config Over Registration Callbacks
//!
//! Frameworks in this space typically take a mutable configuration object and
//! a pile of `add_*` registration calls. Sitewire instead resolves one
//! immutable [`config::SiteConfig`] value at startup; filters, collection
//! builders, and the transform are plain functions. There is no hidden
//! registration state to get out of order.
//!
//! ## Typed Query Traits Over a Wide Item API
//!
//! Collection builders do not see the framework's item store. They see two
//! narrow capabilities — [`collections::TagFilterable`] and
//! [`collections::Enumerable`] — so each builder declares exactly what it
//! needs and any store can adapt in a few lines.
//!
//! ## Explicit Date Keys, No Date Arithmetic
//!
//! Ordering compares `Option<DateTime<Utc>>` keys directly: undated items are
//! defined to be earliest and the sort is stable, so a missing date can never
//! crash a build or reshuffle ties.
//!
//! ## Literal Rewrite, Not an HTML Parse
//!
//! The output transform matches the exact attribute spelling
//! `src="attachments/` and nothing else. A parser would be overkill for a
//! one-directory path correction and could reformat pages it has no business
//! touching.

pub mod collections;
pub mod config;
pub mod copy;
pub mod filters;
pub mod output;
pub mod transform;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
