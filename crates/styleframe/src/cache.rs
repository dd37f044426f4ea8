//! Native style cache
//!
//! Equal stylers render to a single shared [`NamedStyle`]. The cache is
//! keyed by the styler's canonical key and never evicts on its own; callers
//! that need a bounded or isolated scope create their own [`StyleCache`]
//! and [`clear`](StyleCache::clear) it when done.

use crate::error::Result;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use styleframe_core::NamedStyle;

static GLOBAL: Lazy<StyleCache> = Lazy::new(StyleCache::new);

/// Cache of rendered native styles, keyed by canonical style key
#[derive(Debug, Default)]
pub struct StyleCache {
    styles: Mutex<AHashMap<String, Arc<NamedStyle>>>,
}

impl StyleCache {
    /// Create an empty, isolated cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`Styler::to_native_style`](crate::Styler::to_native_style)
    pub fn global() -> &'static StyleCache {
        &GLOBAL
    }

    /// Get the style cached under `key`, building and storing it on a miss
    ///
    /// The lock is held while `build` runs, so concurrent callers with the
    /// same key always receive the same `Arc`. A failed build caches nothing.
    pub fn get_or_try_insert_with<F>(&self, key: &str, build: F) -> Result<Arc<NamedStyle>>
    where
        F: FnOnce() -> Result<NamedStyle>,
    {
        let mut styles = self.lock();

        if let Some(style) = styles.get(key) {
            tracing::trace!(key_len = key.len(), "style cache hit");
            return Ok(Arc::clone(style));
        }

        let style = Arc::new(build()?);
        styles.insert(key.to_string(), Arc::clone(&style));
        tracing::debug!(
            key_len = key.len(),
            cached = styles.len(),
            "style cache miss, native style built"
        );
        Ok(style)
    }

    /// Get a cached style without building it
    pub fn get(&self, key: &str) -> Option<Arc<NamedStyle>> {
        self.lock().get(key).cloned()
    }

    /// Number of cached styles
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache holds no styles
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every cached style
    pub fn styles(&self) -> Vec<Arc<NamedStyle>> {
        self.lock().values().cloned().collect()
    }

    /// Drop every cached style
    ///
    /// Styles already handed out stay alive through their `Arc`s.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are immutable once inserted, so a panic elsewhere cannot leave
    // the map half-updated.
    fn lock(&self) -> MutexGuard<'_, AHashMap<String, Arc<NamedStyle>>> {
        self.styles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use styleframe_core::Style;

    fn named(name: &str) -> Result<NamedStyle> {
        Ok(NamedStyle::new(name, Style::new().bold(true)))
    }

    #[test]
    fn test_deduplication() {
        let cache = StyleCache::new();

        let first = cache.get_or_try_insert_with("a", || named("a")).unwrap();
        let second = cache
            .get_or_try_insert_with("a", || panic!("should not rebuild"))
            .unwrap();
        let other = cache.get_or_try_insert_with("b", || named("b")).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let cache = StyleCache::new();
        let result = cache.get_or_try_insert_with("bad", || {
            Err(Error::InvalidValue {
                attribute: "border_type",
                value: "wavy".into(),
            })
        });

        assert!(result.is_err());
        assert!(cache.is_empty());
        assert!(cache.get("bad").is_none());
    }

    #[test]
    fn test_clear() {
        let cache = StyleCache::new();
        let kept = cache.get_or_try_insert_with("a", || named("a")).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(kept.name, "a");

        let rebuilt = cache.get_or_try_insert_with("a", || named("a")).unwrap();
        assert!(!Arc::ptr_eq(&kept, &rebuilt));
        assert_eq!(cache.styles().len(), 1);
    }

    #[test]
    fn test_concurrent_misses_share_one_style() {
        let cache = Arc::new(StyleCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_try_insert_with("k", || named("k")).unwrap())
            })
            .collect();

        let styles: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(styles.iter().all(|s| Arc::ptr_eq(s, &styles[0])));
        assert_eq!(cache.len(), 1);
    }
}
