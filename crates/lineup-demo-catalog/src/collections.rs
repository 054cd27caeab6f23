#![forbid(unsafe_code)]

//! The three reorderable catalog collections.
//!
//! Tours, gallery categories, and gallery subcategories are independent
//! collections that all reorder the same way; each implements
//! [`CatalogRecord`] and gets its own engine instance.

use lineup_core::Orderable;

/// A catalog record the demo store can manage.
///
/// Extends [`Orderable`] with what the in-memory backend and the view need:
/// writing the persisted order, constructing a fresh unordered record, and
/// matching subset filters.
pub trait CatalogRecord: Orderable + Clone {
    /// Overwrite the persisted order.
    fn set_order(&mut self, order: u32);

    /// A fresh record with no order assigned yet (it sorts last until the
    /// backend renumbers).
    fn fresh(id: String, name: String) -> Self;

    /// Whether this record belongs to the named subset (a status value, a
    /// parent category, ...). Collections without subsets match nothing.
    fn in_subset(&self, key: &str) -> bool;
}

/// Publication state of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStatus {
    /// Not yet visible on the customer site.
    Draft,
    /// Live.
    Published,
}

impl TourStatus {
    /// Stable label used by subset filters and display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

/// A tour offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Backend-assigned id.
    pub id: String,
    /// Title shown in the catalog.
    pub title: String,
    /// Persisted position, if any.
    pub order: Option<u32>,
    /// Publication state.
    pub status: TourStatus,
}

impl Orderable for Tour {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> Option<u32> {
        self.order
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl CatalogRecord for Tour {
    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }

    fn fresh(id: String, name: String) -> Self {
        Self {
            id,
            title: name,
            order: None,
            status: TourStatus::Draft,
        }
    }

    fn in_subset(&self, key: &str) -> bool {
        self.status.label() == key
    }
}

/// A top-level gallery category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCategory {
    /// Backend-assigned id.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Persisted position, if any.
    pub order: Option<u32>,
}

impl Orderable for GalleryCategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> Option<u32> {
        self.order
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for GalleryCategory {
    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }

    fn fresh(id: String, name: String) -> Self {
        Self {
            id,
            name,
            order: None,
        }
    }

    fn in_subset(&self, _key: &str) -> bool {
        false
    }
}

/// A gallery subcategory nested under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySubcategory {
    /// Backend-assigned id.
    pub id: String,
    /// Subcategory name.
    pub name: String,
    /// Persisted position, if any.
    pub order: Option<u32>,
    /// Owning category id; subset filters select by it.
    pub category_id: String,
}

impl Orderable for GallerySubcategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> Option<u32> {
        self.order
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for GallerySubcategory {
    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }

    fn fresh(id: String, name: String) -> Self {
        Self {
            id,
            name,
            order: None,
            category_id: "general".to_string(),
        }
    }

    fn in_subset(&self, key: &str) -> bool {
        self.category_id == key
    }
}
