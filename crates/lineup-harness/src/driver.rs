#![forbid(unsafe_code)]

//! Deterministic session driver: engine + adapter + scripted backend.
//!
//! Effects are executed synchronously and to completion: a `Commit` effect
//! immediately performs the scripted persist call and feeds the result back
//! into the engine; a `Refetch` immediately fetches and syncs; notices are
//! collected for assertions. Resolution effects are processed in the same
//! pass, so one driver call covers a whole fetch → drag → commit →
//! rollback arc.

use std::collections::VecDeque;

use lineup_engine::{
    CollectionBackend, DragCall, Effect, EngineConfig, Notice, ReorderEngine,
};
use lineup_gesture::{AdapterConfig, DragAdapter, KeyCommand, PointerEvent};

use crate::fixtures::FixtureEntity;
use crate::scripted::ScriptedBackend;

/// A complete, synchronously-driven reorder session over fixtures.
#[derive(Debug)]
pub struct SessionDriver {
    engine: ReorderEngine<FixtureEntity>,
    adapter: DragAdapter,
    backend: ScriptedBackend,
    notices: Vec<Notice>,
}

impl SessionDriver {
    /// Build a driver around a scripted backend.
    #[must_use]
    pub fn new(backend: ScriptedBackend) -> Self {
        Self::with_configs(backend, EngineConfig::default(), AdapterConfig::default())
    }

    /// Build a driver with explicit engine/adapter configuration.
    #[must_use]
    pub fn with_configs(
        backend: ScriptedBackend,
        engine_config: EngineConfig,
        adapter_config: AdapterConfig,
    ) -> Self {
        Self {
            engine: ReorderEngine::new(engine_config),
            adapter: DragAdapter::new(adapter_config),
            backend,
            notices: Vec::new(),
        }
    }

    /// The engine under test.
    #[must_use]
    pub fn engine(&self) -> &ReorderEngine<FixtureEntity> {
        &self.engine
    }

    /// Mutable engine access, for filter changes.
    pub fn engine_mut(&mut self) -> &mut ReorderEngine<FixtureEntity> {
        &mut self.engine
    }

    /// The scripted backend.
    #[must_use]
    pub fn backend(&self) -> &ScriptedBackend {
        &self.backend
    }

    /// Mutable backend access, for scripting further outcomes mid-test.
    pub fn backend_mut(&mut self) -> &mut ScriptedBackend {
        &mut self.backend
    }

    /// Every notice emitted so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Working-copy ids in rendering order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.engine
            .items()
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    /// Perform one list fetch and run it through the sync path.
    pub fn fetch(&mut self) {
        match self.backend.fetch() {
            Ok(items) => {
                self.engine.apply_fetch(items);
            }
            Err(err) => {
                let effects = self.engine.apply_fetch_error(&err);
                self.run_effects(effects);
            }
        }
    }

    /// Feed one pointer event through the adapter.
    pub fn pointer(&mut self, event: PointerEvent) {
        let enabled = self.engine.reorder_allowed();
        let calls = self.adapter.on_pointer(&event, enabled);
        self.run_calls(calls);
    }

    /// Feed one keyboard move command through the adapter.
    pub fn key(&mut self, command: KeyCommand, selected: Option<usize>) {
        let enabled = self.engine.reorder_allowed();
        let len = self.engine.len();
        let calls = self.adapter.on_key(command, selected, len, enabled);
        self.run_calls(calls);
    }

    /// Convenience: a full press → move → release drag gesture.
    pub fn drag(&mut self, source: usize, dest: usize) {
        self.pointer(PointerEvent::press(source));
        self.pointer(PointerEvent::move_over(dest));
        self.pointer(PointerEvent::release(dest));
    }

    fn run_calls(&mut self, calls: Vec<DragCall>) {
        for call in calls {
            let effects = self.engine.apply(call);
            self.run_effects(effects);
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Commit { ticket, request } => {
                    let result = self.backend.persist_order(&request);
                    queue.extend(self.engine.resolve_commit(ticket, result));
                }
                Effect::Refetch => match self.backend.fetch() {
                    Ok(items) => {
                        self.engine.apply_fetch(items);
                    }
                    Err(err) => {
                        queue.extend(self.engine.apply_fetch_error(&err));
                    }
                },
                Effect::Notice(notice) => self.notices.push(notice),
            }
        }
    }
}
