//! Reuse keys and the recycling view catalog.
//!
//! A [`ReuseCatalog`] maps a [`ReuseKey`] to a factory and a pool of idle
//! view instances. Views are built lazily the first time a key is dequeued
//! with an empty pool; once returned through [`ReuseCatalog::recycle`] they
//! are handed out again instead of being rebuilt.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use roundel_core::logging::targets;

use crate::error::{Result, TableError};

/// Identifier selecting which view template renders an item, header or
/// footer.
///
/// Cloning is cheap; the string is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReuseKey(Arc<str>);

impl ReuseKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ReuseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReuseKey({:?})", &*self.0)
    }
}

impl fmt::Display for ReuseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReuseKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ReuseKey {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

impl From<&ReuseKey> for ReuseKey {
    fn from(key: &ReuseKey) -> Self {
        key.clone()
    }
}

impl Borrow<str> for ReuseKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Factory producing a fresh view instance for a template.
pub type ViewFactory<V> = Arc<dyn Fn() -> Box<V> + Send + Sync>;

/// A pool of recyclable views keyed by [`ReuseKey`].
///
/// `V` is usually a trait object such as `dyn TableCell`.
///
/// # Example
///
/// ```
/// use roundel::model::ReuseCatalog;
///
/// trait Label: Send { fn text(&self) -> &str; }
/// struct Plain;
/// impl Label for Plain { fn text(&self) -> &str { "plain" } }
///
/// let mut catalog: ReuseCatalog<dyn Label> = ReuseCatalog::new();
/// catalog.register_template("plain", || Box::new(Plain));
///
/// let view = catalog.dequeue(&"plain".into()).unwrap();
/// assert_eq!(view.text(), "plain");
/// catalog.recycle("plain".into(), view);
/// assert_eq!(catalog.pooled_count("plain"), 1);
/// ```
pub struct ReuseCatalog<V: ?Sized> {
    templates: HashMap<ReuseKey, ViewFactory<V>>,
    pools: HashMap<ReuseKey, Vec<Box<V>>>,
    created: usize,
}

impl<V: ?Sized> Default for ReuseCatalog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> ReuseCatalog<V> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            pools: HashMap::new(),
            created: 0,
        }
    }

    /// Register (or replace) the template for `key`.
    ///
    /// Replacing a template discards idle views built by the old one.
    pub fn register_template<F>(&mut self, key: impl Into<ReuseKey>, factory: F)
    where
        F: Fn() -> Box<V> + Send + Sync + 'static,
    {
        let key = key.into();
        if self.templates.insert(key.clone(), Arc::new(factory)).is_some() {
            let discarded = self.pools.remove(&key).map_or(0, |pool| pool.len());
            tracing::debug!(target: targets::MODEL, %key, discarded, "replaced view template");
        }
    }

    /// Returns `true` if a template is registered for `key`.
    pub fn is_registered(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Take an idle view for `key`, building one if the pool is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownReuseKey`] when no template is registered.
    pub fn dequeue(&mut self, key: &ReuseKey) -> Result<Box<V>> {
        if let Some(view) = self.pools.get_mut(key).and_then(Vec::pop) {
            return Ok(view);
        }
        let factory = self
            .templates
            .get(key)
            .ok_or_else(|| TableError::unknown_reuse_key(key))?;
        self.created += 1;
        tracing::trace!(target: targets::MODEL, %key, created = self.created, "built new view");
        Ok(factory())
    }

    /// Return a view to the pool for `key`.
    ///
    /// Views for keys whose template was never registered are dropped.
    pub fn recycle(&mut self, key: ReuseKey, view: Box<V>) {
        if self.templates.contains_key(&key) {
            self.pools.entry(key).or_default().push(view);
        }
    }

    /// Number of idle views waiting in the pool for `key`.
    pub fn pooled_count(&self, key: &str) -> usize {
        self.pools.get(key).map_or(0, Vec::len)
    }

    /// Total number of views built by factories so far.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Drop every idle view, keeping the templates.
    pub fn clear_pools(&mut self) {
        self.pools.clear();
    }
}

impl<V: ?Sized> fmt::Debug for ReuseCatalog<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReuseCatalog")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .field("created", &self.created)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Numberable: Send {
        fn serial(&self) -> usize;
    }

    struct Numbered(usize);

    impl Numberable for Numbered {
        fn serial(&self) -> usize {
            self.0
        }
    }

    fn catalog() -> ReuseCatalog<dyn Numberable> {
        let mut catalog: ReuseCatalog<dyn Numberable> = ReuseCatalog::new();
        let counter = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        catalog.register_template("row", move || {
            let n = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Box::new(Numbered(n))
        });
        catalog
    }

    #[test]
    fn test_dequeue_builds_lazily() {
        let mut catalog = catalog();
        assert_eq!(catalog.created_count(), 0);

        let first = catalog.dequeue(&"row".into()).unwrap();
        let second = catalog.dequeue(&"row".into()).unwrap();
        assert_eq!(first.serial(), 0);
        assert_eq!(second.serial(), 1);
        assert_eq!(catalog.created_count(), 2);
    }

    #[test]
    fn test_recycled_view_is_reused() {
        let mut catalog = catalog();
        let view = catalog.dequeue(&"row".into()).unwrap();
        catalog.recycle("row".into(), view);

        let again = catalog.dequeue(&"row".into()).unwrap();
        assert_eq!(again.serial(), 0);
        assert_eq!(catalog.created_count(), 1);
        assert_eq!(catalog.pooled_count("row"), 0);
    }

    #[test]
    fn test_unknown_key() {
        let mut catalog = catalog();
        let err = catalog.dequeue(&"missing".into()).err();
        assert_eq!(err, Some(TableError::unknown_reuse_key("missing")));
    }

    #[test]
    fn test_replacing_template_discards_pool() {
        let mut catalog = catalog();
        let view = catalog.dequeue(&"row".into()).unwrap();
        catalog.recycle("row".into(), view);
        assert_eq!(catalog.pooled_count("row"), 1);

        catalog.register_template("row", || Box::new(Numbered(99)));
        assert_eq!(catalog.pooled_count("row"), 0);
        assert_eq!(catalog.dequeue(&"row".into()).unwrap().serial(), 99);
    }

    #[test]
    fn test_recycle_unregistered_key_drops_view() {
        let mut catalog = catalog();
        catalog.recycle("stray".into(), Box::new(Numbered(7)));
        assert_eq!(catalog.pooled_count("stray"), 0);
    }

    #[test]
    fn test_reuse_key_borrow_lookup() {
        let key = ReuseKey::from(String::from("header"));
        assert_eq!(key.as_str(), "header");
        assert_eq!(format!("{key:?}"), "ReuseKey(\"header\")");
    }
}
