//! Derived content collections.
//!
//! Given the full item set of one build, produce the three named, ordered
//! sequences the templates render: `status`, `favorites`, and `posts`. Each
//! builder reads item metadata and returns borrowed orderings — items are
//! never cloned or mutated, and collections are recomputed fresh every build.
//!
//! ## Query seam
//!
//! The external framework's item store is abstracted behind two narrow
//! capability traits rather than one wide API: [`TagFilterable`] for the
//! tag-driven collections and [`Enumerable`] for the url-driven one.
//! [`ItemQuery`] is the in-memory adapter over a manifest's item slice;
//! a framework adapter only needs to implement the trait its collection uses.
//!
//! ## Ordering
//!
//! All collections are newest-first by `date`. The comparison key is the
//! item's `Option<DateTime<Utc>>` directly: `None` orders before every
//! `Some`, so undated items are treated as earliest and land at the end.
//! The sort is stable, so items with equal dates keep their manifest order.

use serde::Serialize;

use crate::filters;
use crate::types::ContentItem;

/// Tag label marking status updates.
pub const STATUS_TAG: &str = "status";
/// Tag label marking blog posts.
pub const POST_TAG: &str = "post";
/// Url prefix of the favorites section. The section index itself is excluded.
pub const FAVORITES_PREFIX: &str = "/favorites/";

/// An item store that can filter by tag label.
pub trait TagFilterable {
    /// All items carrying `tag`, in store order.
    fn filtered_by_tag(&self, tag: &str) -> Vec<&ContentItem>;
}

/// An item store that can enumerate every item.
pub trait Enumerable {
    /// All items, in store order.
    fn all(&self) -> Vec<&ContentItem>;
}

/// In-memory query adapter over a build's item slice.
#[derive(Debug, Clone, Copy)]
pub struct ItemQuery<'a> {
    items: &'a [ContentItem],
}

impl<'a> ItemQuery<'a> {
    pub fn new(items: &'a [ContentItem]) -> Self {
        Self { items }
    }
}

impl TagFilterable for ItemQuery<'_> {
    fn filtered_by_tag(&self, tag: &str) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }
}

impl Enumerable for ItemQuery<'_> {
    fn all(&self) -> Vec<&ContentItem> {
        self.items.iter().collect()
    }
}

/// Sort items newest-first by date, undated items last.
///
/// Stable: equal dates (and equally-undated items) keep their input order.
pub fn sort_newest_first(items: &mut [&ContentItem]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Status updates: items tagged `status`, newest first.
pub fn status_items<Q: TagFilterable + ?Sized>(query: &Q) -> Vec<&ContentItem> {
    let mut items = query.filtered_by_tag(STATUS_TAG);
    sort_newest_first(&mut items);
    items
}

/// Blog posts: items tagged `post`, newest first.
pub fn post_items<Q: TagFilterable + ?Sized>(query: &Q) -> Vec<&ContentItem> {
    let mut items = query.filtered_by_tag(POST_TAG);
    sort_newest_first(&mut items);
    items
}

/// Favorites entries: items routed under `/favorites/`, newest first.
///
/// The section's own index page (`url == "/favorites/"`) does not list
/// itself. Items without a url never qualify.
pub fn favorite_items<Q: Enumerable + ?Sized>(query: &Q) -> Vec<&ContentItem> {
    let mut items: Vec<&ContentItem> = query
        .all()
        .into_iter()
        .filter(|item| {
            filters::starts_with(item.url.as_deref(), FAVORITES_PREFIX)
                && item.url.as_deref() != Some(FAVORITES_PREFIX)
        })
        .collect();
    sort_newest_first(&mut items);
    items
}

/// All three collections of one build, ready to serialize for the framework.
#[derive(Debug, Serialize)]
pub struct CollectionSet<'a> {
    pub status: Vec<&'a ContentItem>,
    pub favorites: Vec<&'a ContentItem>,
    pub posts: Vec<&'a ContentItem>,
}

/// Derive every collection from one query. An empty item set yields three
/// empty sequences, never an error.
pub fn build_collections<Q>(query: &Q) -> CollectionSet<'_>
where
    Q: TagFilterable + Enumerable,
{
    CollectionSet {
        status: status_items(query),
        favorites: favorite_items(query),
        posts: post_items(query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn status_filters_by_tag_and_sorts_newest_first() {
        let items = vec![
            item("old", "/status/1/", &["status"], Some("2023-01-01")),
            item("post", "/blog/a/", &["post"], Some("2024-06-01")),
            item("new", "/status/2/", &["status"], Some("2024-03-01")),
        ];
        let query = ItemQuery::new(&items);
        assert_eq!(titles(&status_items(&query)), ["new", "old"]);
    }

    #[test]
    fn posts_filters_by_tag_and_sorts_newest_first() {
        let items = vec![
            item("a", "/blog/a/", &["post"], Some("2024-01-05")),
            item("b", "/blog/b/", &["post"], Some("2024-02-10")),
            item("note", "/notes/", &[], Some("2024-03-01")),
        ];
        let query = ItemQuery::new(&items);
        assert_eq!(titles(&post_items(&query)), ["b", "a"]);
    }

    #[test]
    fn favorites_requires_prefix_and_excludes_section_index() {
        let items = vec![
            item("index", "/favorites/", &[], Some("2024-05-01")),
            item("book", "/favorites/some-book/", &[], Some("2024-01-01")),
            item("film", "/favorites/a-film/", &[], Some("2024-04-01")),
            item("post", "/blog/a/", &["post"], Some("2024-06-01")),
            item("unrouted", "", &[], Some("2024-06-01")),
        ];
        let query = ItemQuery::new(&items);
        assert_eq!(titles(&favorite_items(&query)), ["film", "book"]);
    }

    #[test]
    fn favorites_skips_items_without_url() {
        let mut orphan = item("orphan", "", &[], Some("2024-01-01"));
        orphan.url = None;
        let items = vec![orphan];
        let query = ItemQuery::new(&items);
        assert!(favorite_items(&query).is_empty());
    }

    #[test]
    fn undated_items_sort_last_without_panicking() {
        let items = vec![
            item("undated", "/status/u/", &["status"], None),
            item("dated", "/status/d/", &["status"], Some("2020-01-01")),
        ];
        let query = ItemQuery::new(&items);
        assert_eq!(titles(&status_items(&query)), ["dated", "undated"]);
    }

    #[test]
    fn equal_dates_keep_manifest_order() {
        let items = vec![
            item("first", "/blog/1/", &["post"], Some("2024-01-05")),
            item("second", "/blog/2/", &["post"], Some("2024-01-05")),
            item("third", "/blog/3/", &["post"], Some("2024-01-05")),
        ];
        let query = ItemQuery::new(&items);
        assert_eq!(titles(&post_items(&query)), ["first", "second", "third"]);
    }

    #[test]
    fn collections_are_non_increasing_in_date() {
        let items = vec![
            item("a", "/favorites/a/", &["post", "status"], Some("2022-07-01")),
            item("b", "/favorites/b/", &["post"], None),
            item("c", "/favorites/c/", &["status"], Some("2024-02-29")),
            item("d", "/favorites/d/", &["post", "status"], Some("2023-11-11")),
        ];
        let query = ItemQuery::new(&items);
        let set = build_collections(&query);
        assert_newest_first(&set.status);
        assert_newest_first(&set.favorites);
        assert_newest_first(&set.posts);
    }

    #[test]
    fn empty_item_set_yields_three_empty_collections() {
        let items: Vec<crate::types::ContentItem> = Vec::new();
        let query = ItemQuery::new(&items);
        let set = build_collections(&query);
        assert!(set.status.is_empty());
        assert!(set.favorites.is_empty());
        assert!(set.posts.is_empty());
    }

    #[test]
    fn builders_do_not_consume_or_reorder_the_source() {
        let items = vec![
            item("b", "/blog/b/", &["post"], Some("2024-02-10")),
            item("a", "/blog/a/", &["post"], Some("2024-01-05")),
        ];
        let before = items.clone();
        let query = ItemQuery::new(&items);
        let _ = build_collections(&query);
        assert_eq!(items, before);
    }
}
