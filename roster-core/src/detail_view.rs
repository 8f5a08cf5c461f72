//! View model for the open item's detail panel.

use roster_model::{DisplayItem, ElementType, ItemDetails, ItemId, ItemStyle};

use crate::constants::detail::{MOVES_SHOWN, STAT_TRACK_MAX};

/// API names use hyphens ("special-attack"); only the first one is spaced.
pub fn display_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: u32,
    /// Track fill, 0..=100.
    pub fill_percent: f32,
}

impl StatBar {
    pub fn new(name: &str, value: u32) -> Self {
        Self {
            label: display_label(name),
            value,
            fill_percent: (value as f32 / STAT_TRACK_MAX * 100.0).min(100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub label: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveList {
    pub shown: Vec<String>,
    /// Moves beyond the shown ones.
    pub remaining: usize,
}

impl MoveList {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut shown = Vec::new();
        let mut remaining = 0;
        for name in names {
            if shown.len() < MOVES_SHOWN {
                shown.push(display_label(name));
            } else {
                remaining += 1;
            }
        }
        Self { shown, remaining }
    }

    pub fn more_line(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+ {} more moves", self.remaining))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: String,
    /// Unknown type names keep their label but get no element.
    pub element: Option<ElementType>,
}

impl TypeBadge {
    pub fn icon_path(&self) -> Option<String> {
        self.element.map(ElementType::icon_path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: ItemId,
    pub name: String,
    pub style: ItemStyle,
    pub stats: Vec<StatBar>,
    pub abilities: Vec<AbilityRow>,
    pub moves: MoveList,
    pub types: Vec<TypeBadge>,
}

impl DetailView {
    pub fn build(item: &DisplayItem, details: &ItemDetails) -> Self {
        let stats = details
            .stats
            .iter()
            .map(|slot| StatBar::new(&slot.stat.name, slot.base_stat))
            .collect();

        let abilities = details
            .abilities
            .iter()
            .map(|slot| AbilityRow {
                label: display_label(&slot.ability.name),
                hidden: slot.is_hidden,
            })
            .collect();

        let moves = MoveList::new(details.moves.iter().map(|slot| slot.resource.name.as_str()));

        let mut type_slots: Vec<_> = details.types.iter().collect();
        type_slots.sort_by_key(|slot| slot.slot);
        let types = type_slots
            .into_iter()
            .map(|slot| TypeBadge {
                label: display_label(&slot.resource.name),
                element: ElementType::from_name(&slot.resource.name),
            })
            .collect();

        Self {
            id: item.id().clone(),
            name: item.name().to_string(),
            style: item.style_or_fallback(),
            stats,
            abilities,
            moves,
            types,
        }
    }
}

/// Content state of the open item's panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailPanel {
    #[default]
    Loading,
    Ready(Box<DetailView>),
    /// The fetch failed; loading stops and the panel stays empty.
    Unavailable,
}

impl DetailPanel {
    pub fn view(&self) -> Option<&DetailView> {
        match self {
            Self::Ready(view) => Some(view.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
