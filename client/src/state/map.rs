//! Map page view state: load status and the marker-selected listing.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::types::Property;

/// Provider load progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapStatus {
    #[default]
    Loading,
    Ready,
    /// Load failed or timed out; carries a user-visible reason.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapView {
    pub status: MapStatus,
    pub selected: Option<Property>,
}

impl MapView {
    /// Shows `property` in the overlay card, replacing any previous one.
    pub fn select(&mut self, property: Property) {
        self.selected = Some(property);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn mark_ready(&mut self) {
        self.status = MapStatus::Ready;
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.status = MapStatus::Failed(reason.into());
    }
}
