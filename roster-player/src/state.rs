use std::collections::HashSet;

use roster_core::carousel::{CarouselLayout, CarouselPositioner};
use roster_core::constants::carousel::OVERSCAN_PX;
use roster_core::detail_view::DetailPanel;
use roster_model::ItemId;

/// Host state. Owned by the update loop; background tasks only talk to it
/// through messages.
#[derive(Debug)]
pub struct RosterState {
    /// Bumped on every catalog load. Responses carrying an older value
    /// belong to a list that is gone.
    pub generation: u64,
    pub carousel: CarouselPositioner,
    /// Ids whose color extraction was already requested this generation.
    pub requested_colors: HashSet<ItemId>,
    /// Content for the open item; `None` while browsing.
    pub panel: Option<DetailPanel>,
    pub loading: bool,
    /// Last user-facing notice (load failure, rejected open).
    pub status: Option<String>,
    pub overscan: f32,
    dirty: bool,
}

impl RosterState {
    pub fn new(layout: CarouselLayout) -> Self {
        Self {
            generation: 0,
            carousel: CarouselPositioner::new(layout),
            requested_colors: HashSet::new(),
            panel: None,
            loading: false,
            status: None,
            overscan: OVERSCAN_PX,
            dirty: true,
        }
    }

    /// Mark the view as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear dirty flag and return whether it was dirty
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Start a new catalog generation and forget per-list bookkeeping.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.requested_colors.clear();
        self.carousel.close();
        self.panel = None;
        self.status = None;
        self.dirty = true;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
