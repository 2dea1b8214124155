//! Paginated and single-entity response envelopes.
//!
//! UKFast list endpoints return `{"data": [...], "meta": {"pagination":
//! {...}}}` and single-entity endpoints return `{"data": {...}}`. The types
//! here decode those envelopes and map the raw items into typed entities with
//! a mapping function supplied at construction, so a page can never be
//! iterated without its entity mapping.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata from a list response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default)]
    pub page: u32,
    /// Items per page
    #[serde(default)]
    pub per_page: u32,
    /// Total items across all pages
    #[serde(default)]
    pub total: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// Returns true if a page after the current one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if a page before the current one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Wire shape of the `meta` object on list responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Pagination metadata
    #[serde(default)]
    pub pagination: Pagination,
}

/// Decoded wire envelope for a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope {
    /// Raw, not-yet-hydrated items
    pub data: Vec<Value>,
    /// Response metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Decoded wire envelope for a single-entity response.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope {
    /// Raw, not-yet-hydrated entity
    pub data: Value,
}

/// One page of typed entities plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    pagination: Pagination,
}

impl<T> Page<T> {
    /// Build a page from a decoded list envelope, hydrating each raw item
    /// with `mapper`. The first item that fails to map fails the page.
    pub fn from_envelope<F>(envelope: ListEnvelope, mut mapper: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<T>,
    {
        let items = envelope
            .data
            .iter()
            .map(&mut mapper)
            .collect::<Result<Vec<T>>>()?;

        Ok(Self {
            items,
            pagination: envelope.meta.pagination,
        })
    }

    /// The hydrated items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Pagination metadata for this page.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Single-entity response wrapper returned after create/update calls.
///
/// Hydrates the entity at construction and keeps the raw body around for
/// callers that need fields outside the typed entity.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfResponse<T> {
    data: T,
    raw: Value,
}

impl<T> SelfResponse<T> {
    /// Build from a decoded single-entity envelope, hydrating with `mapper`.
    pub fn from_envelope<F>(envelope: ItemEnvelope, mapper: F) -> Result<Self>
    where
        F: FnOnce(&Value) -> Result<T>,
    {
        let data = mapper(&envelope.data)?;
        Ok(Self {
            data,
            raw: envelope.data,
        })
    }

    /// The hydrated entity.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consume the wrapper, returning the entity.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// The raw response body the entity was hydrated from.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn list_envelope(body: Value) -> ListEnvelope {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn page_from_envelope_maps_every_item() {
        let envelope = list_envelope(json!({
            "data": [{"name": "a"}, {"name": "b"}],
            "meta": {"pagination": {"page": 1, "per_page": 2, "total": 4, "total_pages": 2}}
        }));

        let page = Page::from_envelope(envelope, |item| {
            Ok(item["name"].as_str().unwrap().to_string())
        })
        .unwrap();

        assert_eq!(page.items(), &["a".to_string(), "b".to_string()]);
        assert_eq!(page.len(), 2);
        assert_eq!(page.pagination().total, 4);
        assert!(page.pagination().has_next());
        assert!(!page.pagination().has_previous());
    }

    #[test]
    fn page_identity_mapper_preserves_raw_items() {
        let raw_items = vec![json!({"id": 1}), json!({"id": 2})];
        let envelope = list_envelope(json!({"data": raw_items.clone()}));

        let page = Page::from_envelope(envelope, |item| Ok(item.clone())).unwrap();
        assert_eq!(page.items(), raw_items.as_slice());
    }

    #[test]
    fn page_fails_when_any_item_fails_to_map() {
        let envelope = list_envelope(json!({"data": [{"ok": true}, {"ok": false}]}));

        let result: Result<Page<()>> = Page::from_envelope(envelope, |item| {
            if item["ok"].as_bool().unwrap() {
                Ok(())
            } else {
                Err(Error::Parse("bad item".to_string()))
            }
        });

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn page_without_meta_defaults_pagination() {
        let envelope = list_envelope(json!({"data": []}));
        let page: Page<Value> =
            Page::from_envelope(envelope, |item| Ok(item.clone())).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.pagination(), &Pagination::default());
    }

    #[test]
    fn page_iteration() {
        let envelope = list_envelope(json!({"data": [{"n": 1}, {"n": 2}, {"n": 3}]}));
        let page = Page::from_envelope(envelope, |item| {
            Ok(u64::try_from(item["n"].as_i64().unwrap()).unwrap())
        })
        .unwrap();

        let sum: u64 = (&page).into_iter().sum();
        assert_eq!(sum, 6);

        let collected: Vec<u64> = page.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn self_response_hydrates_and_keeps_raw() {
        let envelope: ItemEnvelope =
            serde_json::from_value(json!({"data": {"id": 5, "name": "x"}})).unwrap();

        let response = SelfResponse::from_envelope(envelope, |raw| {
            Ok(raw["name"].as_str().unwrap().to_string())
        })
        .unwrap();

        assert_eq!(response.data(), "x");
        assert_eq!(response.raw()["id"], 5);
        assert_eq!(response.into_inner(), "x");
    }

    #[test]
    fn pagination_navigation_flags() {
        let last = Pagination {
            page: 3,
            per_page: 10,
            total: 25,
            total_pages: 3,
        };
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
