//! Infinite horizontal carousel.
//!
//! The logical list is rendered three times back to back. The positioner
//! keeps the viewport inside the middle copy by jumping exactly one section
//! width whenever the scroll offset drifts within `threshold` of either end,
//! which reads as an endless strip. It also tracks which item sits closest
//! to the viewport center and owns the open/close lifecycle of that item.
//!
//! Everything here is synchronous and driven by explicit `Instant`s, so
//! hosts feed in scroll events and frame ticks and tests can replay exact
//! timelines.

pub mod animator;
pub mod focus;
pub mod layout;
pub mod positioner;

pub use animator::{Easing, SnapAnimator};
pub use focus::{DetailTab, FocusState, OpenItem, Presentation};
pub use layout::{CarouselLayout, ItemRect, center_delta};
pub use positioner::{CarouselPositioner, CarouselTiming, Navigation, ScrollOutcome, TickReport};

use roster_model::ItemId;
use thiserror::Error;

/// Number of times the logical list is repeated in the render list.
pub const COPIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Why an open request was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpenRejected {
    #[error("carousel is empty")]
    Empty,

    #[error("render index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("item at render index {open} is already open")]
    AlreadyOpen { open: usize },

    #[error("item {0} is not the centered item")]
    NotCentered(ItemId),
}
