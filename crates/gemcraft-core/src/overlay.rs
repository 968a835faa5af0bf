//! # Metadata Overlay
//!
//! Slot, title and external id assigned to gems by schedulers and
//! front-ends. Kept apart from the `Forge` so valuation records stay
//! immutable; the engine never reads this table.

use crate::GemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Externally owned metadata for one gem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GemOverlay {
    /// Physical slot assigned by a scheduler.
    pub slot: Option<u32>,
    /// Display title assigned by a front-end.
    pub title: Option<String>,
    /// Identifier assigned by a scheduler.
    pub id: Option<u32>,
}

/// Overlay entries keyed by gem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayTable {
    entries: BTreeMap<GemId, GemOverlay>,
}

impl OverlayTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, gem: GemId, slot: u32) {
        self.entries.entry(gem).or_default().slot = Some(slot);
    }

    pub fn set_title(&mut self, gem: GemId, title: impl Into<String>) {
        self.entries.entry(gem).or_default().title = Some(title.into());
    }

    pub fn set_id(&mut self, gem: GemId, id: u32) {
        self.entries.entry(gem).or_default().id = Some(id);
    }

    #[must_use]
    pub fn get(&self, gem: GemId) -> Option<&GemOverlay> {
        self.entries.get(&gem)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
