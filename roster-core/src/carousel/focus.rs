//! Open/close state of the carousel's focused item.

use std::time::{Duration, Instant};

/// Section of the open item's detail panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Stats,
    Abilities,
    Moves,
    Types,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [Self::Stats, Self::Abilities, Self::Moves, Self::Types];

    pub fn next(self) -> Self {
        match self {
            Self::Stats => Self::Abilities,
            Self::Abilities => Self::Moves,
            Self::Moves => Self::Types,
            Self::Types => Self::Stats,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Stats => Self::Types,
            Self::Abilities => Self::Stats,
            Self::Moves => Self::Abilities,
            Self::Types => Self::Moves,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Abilities => "abilities",
            Self::Moves => "moves",
            Self::Types => "types",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for DetailTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How the open item is presented. It starts inline in the strip and is
/// promoted to an overlay once the open has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Inline,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenItem {
    pub render_index: usize,
    /// Scroll offset captured at open time; restored on close.
    pub restore_offset: f32,
    pub opened_at: Instant,
    pub presentation: Presentation,
    pub tab: DetailTab,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FocusState {
    #[default]
    Browsing,
    Open(OpenItem),
}

impl FocusState {
    pub fn open(render_index: usize, restore_offset: f32, now: Instant) -> Self {
        Self::Open(OpenItem {
            render_index,
            restore_offset,
            opened_at: now,
            presentation: Presentation::Inline,
            tab: DetailTab::default(),
        })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn open_item(&self) -> Option<&OpenItem> {
        match self {
            Self::Open(item) => Some(item),
            Self::Browsing => None,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_item().map(|item| item.render_index)
    }

    pub fn tab(&self) -> Option<DetailTab> {
        self.open_item().map(|item| item.tab)
    }

    pub fn set_tab(&mut self, tab: DetailTab) -> bool {
        match self {
            Self::Open(item) => {
                item.tab = tab;
                true
            }
            Self::Browsing => false,
        }
    }

    /// Promote an inline item to the overlay once `delay` has elapsed.
    /// Returns true on the transition only.
    pub fn settle(&mut self, now: Instant, delay: Duration) -> bool {
        match self {
            Self::Open(item)
                if item.presentation == Presentation::Inline
                    && now.saturating_duration_since(item.opened_at) >= delay =>
            {
                item.presentation = Presentation::Overlay;
                true
            }
            _ => false,
        }
    }

    /// Return to browsing, yielding the offset captured at open time.
    pub fn close(&mut self) -> Option<f32> {
        let restore = self.open_item().map(|item| item.restore_offset)?;
        *self = Self::Browsing;
        Some(restore)
    }
}
