//! The live rule set shared between editors and renderers.
//!
//! Readers take an `Arc` snapshot and keep using it for as long as they
//! like. Writers never touch a published rule set; they build a new one and
//! swap the pointer. A render in flight therefore always sees one
//! consistent rule set, even if an edit lands halfway through it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::registry::ColoringRules;

/// Thread-safe holder for the current [`ColoringRules`] plus a flag that
/// tracks whether it has been saved since the last change.
#[derive(Debug)]
pub struct RulesHandle {
    current: RwLock<Arc<ColoringRules>>,
    saved: AtomicBool,
}

impl RulesHandle {
    /// Start with `rules` as the current set, marked saved.
    #[must_use]
    pub fn new(rules: ColoringRules) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
            saved: AtomicBool::new(true),
        }
    }

    /// The current rule set. Later swaps do not affect the returned value.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ColoringRules> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Publish an edited rule set and mark it unsaved. Returns the previous
    /// one.
    pub fn swap(&self, rules: ColoringRules) -> Arc<ColoringRules> {
        let previous = self.replace(rules);
        self.mark_saved(false);
        previous
    }

    /// Publish a rule set that came from storage and mark it saved. Returns
    /// the previous one.
    pub fn load(&self, rules: ColoringRules) -> Arc<ColoringRules> {
        let previous = self.replace(rules);
        self.mark_saved(true);
        previous
    }

    /// Clone the current rule set, let `edit` change the clone, and publish
    /// it. Runs under the write lock, so concurrent updates do not lose
    /// each other's edits.
    pub fn update<F>(&self, edit: F) -> Arc<ColoringRules>
    where
        F: FnOnce(&mut ColoringRules),
    {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ColoringRules::clone(&guard);
        edit(&mut next);
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        drop(guard);
        self.mark_saved(false);
        debug!(name = %next.name, "updated current rule set");
        next
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.saved.load(Ordering::Acquire)
    }

    pub fn mark_saved(&self, saved: bool) {
        self.saved.store(saved, Ordering::Release);
    }

    fn replace(&self, rules: ColoringRules) -> Arc<ColoringRules> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(from = %guard.name, to = %rules.name, "swapped current rule set");
        std::mem::replace(&mut *guard, Arc::new(rules))
    }
}

impl Default for RulesHandle {
    /// Starts with the built-in default rules.
    fn default() -> Self {
        Self::new(crate::builtin::default_rules())
    }
}
