#![forbid(unsafe_code)]

//! The [`Orderable`] contract implemented by every reorderable record.
//!
//! One engine serves any number of collections (tours, gallery categories,
//! gallery subcategories, ...) by going through these three accessors
//! instead of concrete field names.

/// A record that participates in manual ordering.
///
/// # Contract
///
/// - [`id`](Orderable::id) is a stable unique identifier assigned by the
///   backend; it is never reused for a different record.
/// - [`order`](Orderable::order) is the persisted position, if the backend
///   has assigned one. `None` means "unordered" and sorts after every
///   ordered record. The value is advisory after the first client-side
///   sort: array position is the rendering truth, and the field is never
///   renumbered locally.
/// - [`display_name`](Orderable::display_name) is used only as a
///   deterministic tie-break when two records compare equal on `order`.
pub trait Orderable {
    /// Stable unique identifier.
    fn id(&self) -> &str;

    /// Persisted position, if any.
    fn order(&self) -> Option<u32>;

    /// Human-readable name; the ordering tie-break.
    fn display_name(&self) -> &str;
}

impl<T: Orderable> Orderable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn order(&self) -> Option<u32> {
        (**self).order()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
