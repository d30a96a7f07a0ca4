//! Sections, items and their opaque payloads.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::reuse::ReuseKey;

/// Opaque application data carried by items and sections.
///
/// The engine never inspects a payload; it is handed unchanged to the
/// application's configuration hooks, which downcast it to their own type.
///
/// # Example
///
/// ```
/// use roundel::model::Payload;
///
/// let payload = Payload::new(String::from("Inbox"));
/// assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("Inbox"));
/// assert!(payload.downcast_ref::<u32>().is_none());
/// ```
#[derive(Clone)]
pub struct Payload(Arc<dyn Any + Send + Sync>);

impl Payload {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the value as `T` if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if the value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns `true` if both payloads share the same allocation.
    pub fn ptr_eq(&self, other: &Payload) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}

/// A single row: the template that renders it and the data it renders.
#[derive(Debug, Clone)]
pub struct Item {
    /// Selects the recyclable view template for this row.
    pub id: ReuseKey,
    /// Opaque application data.
    pub data: Payload,
}

impl Item {
    /// Create an item rendered by the `id` template.
    pub fn new(id: impl Into<ReuseKey>, data: Payload) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Create an item from any value, wrapping it in a [`Payload`].
    pub fn with_value<T: Any + Send + Sync>(id: impl Into<ReuseKey>, value: T) -> Self {
        Self::new(id, Payload::new(value))
    }
}

/// An ordered group of items with optional header and footer templates.
///
/// A missing header or footer key means no view is requested for it.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Section-level data handed to header and footer configuration.
    pub data: Option<Payload>,
    /// Rows in render order.
    pub items: Vec<Item>,
    /// Header template, if any.
    pub header: Option<ReuseKey>,
    /// Footer template, if any.
    pub footer: Option<ReuseKey>,
}

impl Section {
    /// Create a section from its items.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the header template using builder pattern.
    pub fn with_header(mut self, key: impl Into<ReuseKey>) -> Self {
        self.header = Some(key.into());
        self
    }

    /// Sets the footer template using builder pattern.
    pub fn with_footer(mut self, key: impl Into<ReuseKey>) -> Self {
        self.footer = Some(key.into());
        self
    }

    /// Sets the section data using builder pattern.
    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = Some(data);
        self
    }

    /// Number of items, regardless of collapse state.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn has_footer(&self) -> bool {
        self.footer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let section = Section::new(vec![Item::with_value("row", 1u32), Item::with_value("row", 2u32)])
            .with_header("title")
            .with_data(Payload::new("Settings"));

        assert_eq!(section.len(), 2);
        assert!(section.has_header());
        assert!(!section.has_footer());
        assert_eq!(
            section.data.as_ref().and_then(|d| d.downcast_ref::<&str>()),
            Some(&"Settings")
        );
    }

    #[test]
    fn test_payload_is_shared_not_copied() {
        let payload = Payload::new(vec![1, 2, 3]);
        let item = Item::new("row", payload.clone());
        assert!(item.data.ptr_eq(&payload));
        assert!(item.data.is::<Vec<i32>>());
    }
}
