#![forbid(unsafe_code)]

//! Catalog views: one engine + adapter + store per collection.
//!
//! `CollectionView` is the piece a real admin screen would own: it renders
//! from the engine's working copy, feeds gestures through the adapter, and
//! executes the engine's effects against its backend — synchronously here,
//! where a web host would await the requests instead.

use lineup_core::Orderable;
use lineup_engine::{
    CollectionBackend, CommitError, DragCall, Effect, EngineConfig, Notice, ReorderEngine,
    Selection,
};
use lineup_gesture::{AdapterConfig, DragAdapter, KeyCommand, PointerEvent};

use crate::collections::{
    CatalogRecord, GalleryCategory, GallerySubcategory, Tour, TourStatus,
};
use crate::store::InMemoryCollection;

/// One reorderable admin view over a catalog collection.
#[derive(Debug)]
pub struct CollectionView<T: CatalogRecord> {
    label: &'static str,
    engine: ReorderEngine<T>,
    adapter: DragAdapter,
    store: InMemoryCollection<T>,
}

impl<T: CatalogRecord> CollectionView<T> {
    /// Wrap a store in a view.
    #[must_use]
    pub fn new(label: &'static str, store: InMemoryCollection<T>) -> Self {
        let config = EngineConfig::new()
            .success_notice(format!("{label} order updated"))
            .failure_fallback(format!("Failed to update {label} order"));
        Self {
            label,
            engine: ReorderEngine::new(config),
            adapter: DragAdapter::new(AdapterConfig::default()),
            store,
        }
    }

    /// Collection label for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The working copy, in rendering order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        self.engine.items()
    }

    /// Rows passing the current filter, with their working-copy indices.
    ///
    /// Display only: gesture indices always refer to the unfiltered working
    /// copy, and the gate closes whenever this differs from [`rows`].
    #[must_use]
    pub fn visible(&self) -> Vec<(usize, &T)> {
        let filter = self.engine.filter();
        let term = filter.search_term().trim().to_lowercase();
        self.engine
            .items()
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                let searched =
                    term.is_empty() || row.display_name().to_lowercase().contains(&term);
                let selected = match filter.selection() {
                    Selection::All => true,
                    Selection::Only(key) => row.in_subset(key),
                };
                searched && selected
            })
            .collect()
    }

    /// Whether a new drag would currently be accepted.
    #[must_use]
    pub fn reorder_allowed(&self) -> bool {
        self.engine.reorder_allowed()
    }

    /// Engine counters for the `stats` command.
    #[must_use]
    pub fn stats(&self) -> lineup_engine::EngineStats {
        self.engine.stats()
    }

    /// Fetch from the store and run the sync path.
    pub fn refresh(&mut self) -> Vec<Notice> {
        match self.store.fetch() {
            Ok(rows) => {
                self.engine.apply_fetch(rows);
                Vec::new()
            }
            Err(err) => {
                let effects = self.engine.apply_fetch_error(&err);
                self.run_effects(effects)
            }
        }
    }

    /// Drag the row at `from` onto `to` (press → move → release).
    pub fn move_row(&mut self, from: usize, to: usize) -> Vec<Notice> {
        let mut notices = Vec::new();
        notices.extend(self.pointer(PointerEvent::press(from)));
        notices.extend(self.pointer(PointerEvent::move_over(to)));
        notices.extend(self.pointer(PointerEvent::release(to)));
        notices
    }

    /// Keyboard move of the row at `selected`.
    pub fn nudge(&mut self, command: KeyCommand, selected: usize) -> Vec<Notice> {
        let enabled = self.engine.reorder_allowed();
        let len = self.engine.len();
        let calls = self
            .adapter
            .on_key(command, Some(selected), len, enabled);
        self.run_calls(calls)
    }

    /// Feed one pointer event through the adapter.
    pub fn pointer(&mut self, event: PointerEvent) -> Vec<Notice> {
        let enabled = self.engine.reorder_allowed();
        let calls = self.adapter.on_pointer(&event, enabled);
        self.run_calls(calls)
    }

    /// Set or clear the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.engine.set_search_term(term);
    }

    /// Set or clear the subset selection.
    pub fn set_subset(&mut self, subset: Option<String>) {
        match subset {
            Some(key) => self.engine.set_selection(Selection::Only(key)),
            None => self.engine.set_selection(Selection::All),
        }
    }

    /// Create a row, then refetch (the mutation invalidated the list).
    pub fn create(&mut self, name: impl Into<String>) -> Vec<Notice> {
        self.store.create(name);
        self.refresh()
    }

    /// Delete the row at a working-copy index, then refetch.
    pub fn delete_at(&mut self, index: usize) -> Vec<Notice> {
        let Some(id) = self.engine.items().get(index).map(|row| row.id().to_string()) else {
            return vec![Notice::error(format!(
                "No {} row at index {index}",
                self.label
            ))];
        };
        self.store.delete(&id);
        self.refresh()
    }

    /// Make the next persist call fail, to demonstrate rollback.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.store
            .fail_next_persist(CommitError::network(message));
    }

    fn run_calls(&mut self, calls: Vec<DragCall>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for call in calls {
            let effects = self.engine.apply(call);
            notices.extend(self.run_effects(effects));
        }
        notices
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut queue: std::collections::VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Commit { ticket, request } => {
                    let result = self.store.persist_order(&request);
                    queue.extend(self.engine.resolve_commit(ticket, result));
                }
                Effect::Refetch => {
                    notices.extend(self.refresh());
                }
                Effect::Notice(notice) => notices.push(notice),
            }
        }
        notices
    }
}

/// The whole demo application: three independent views.
#[derive(Debug)]
pub struct CatalogApp {
    /// Tour offerings.
    pub tours: CollectionView<Tour>,
    /// Top-level gallery categories.
    pub gallery_categories: CollectionView<GalleryCategory>,
    /// Gallery subcategories.
    pub gallery_subcategories: CollectionView<GallerySubcategory>,
}

impl CatalogApp {
    /// Build the app over seeded stores and load every collection.
    #[must_use]
    pub fn seeded() -> Self {
        let mut app = Self {
            tours: CollectionView::new("tour", InMemoryCollection::new("tour", seed_tours())),
            gallery_categories: CollectionView::new(
                "gallery category",
                InMemoryCollection::new("cat", seed_categories()),
            ),
            gallery_subcategories: CollectionView::new(
                "gallery subcategory",
                InMemoryCollection::new("sub", seed_subcategories()),
            ),
        };
        app.tours.refresh();
        app.gallery_categories.refresh();
        app.gallery_subcategories.refresh();
        app
    }
}

fn seed_tours() -> Vec<Tour> {
    let tour = |id: &str, title: &str, order: Option<u32>, status: TourStatus| Tour {
        id: id.to_string(),
        title: title.to_string(),
        order,
        status,
    };
    vec![
        tour("tour-1", "Serengeti Safari", Some(0), TourStatus::Published),
        tour("tour-2", "Nile Cruise", Some(1), TourStatus::Published),
        tour("tour-3", "Atlas Trek", Some(2), TourStatus::Draft),
        tour("tour-4", "Zanzibar Escape", Some(3), TourStatus::Published),
        // Not yet manually ordered; sorts after the ordered tours.
        tour("tour-5", "Cape Coast Heritage", None, TourStatus::Draft),
    ]
}

fn seed_categories() -> Vec<GalleryCategory> {
    let cat = |id: &str, name: &str, order: Option<u32>| GalleryCategory {
        id: id.to_string(),
        name: name.to_string(),
        order,
    };
    vec![
        cat("cat-1", "Wildlife", Some(0)),
        cat("cat-2", "Beaches", Some(1)),
        cat("cat-3", "Culture", Some(2)),
    ]
}

fn seed_subcategories() -> Vec<GallerySubcategory> {
    let sub = |id: &str, name: &str, order: Option<u32>, category: &str| GallerySubcategory {
        id: id.to_string(),
        name: name.to_string(),
        order,
        category_id: category.to_string(),
    };
    vec![
        sub("sub-1", "Big Five", Some(0), "cat-1"),
        sub("sub-2", "Great Migration", Some(1), "cat-1"),
        sub("sub-3", "Island Hopping", Some(2), "cat-2"),
        sub("sub-4", "Festivals", Some(3), "cat-3"),
    ]
}
