use std::sync::Arc;
use std::time::Instant;

use roster_core::carousel::DetailTab;
use roster_model::{DisplayItem, ItemDetails, ItemId, ItemStyle};

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Left,
    Right,
    Open,
    Close,
    Tab(DetailTab),
    /// Click on a rendered card by render index.
    Click(usize),
    Reload,
    Quit,
}

/// Everything the update loop reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    Input { command: UserCommand, at: Instant },
    Tick(Instant),
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<DisplayItem>, String>,
    },
    ColorExtracted {
        generation: u64,
        id: ItemId,
        style: ItemStyle,
    },
    DetailsLoaded {
        generation: u64,
        id: ItemId,
        result: Result<Arc<ItemDetails>, String>,
    },
}

/// Work requested by the update loop and carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog {
        generation: u64,
    },
    ExtractColor {
        generation: u64,
        id: ItemId,
        image_url: String,
    },
    FetchDetails {
        generation: u64,
        id: ItemId,
    },
    /// The centered item changed.
    Cue,
    Exit,
}
