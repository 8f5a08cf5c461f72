use std::sync::Arc;
use std::time::{Duration, Instant};

use roster_core::carousel::{CarouselLayout, DetailTab};
use roster_core::detail_view::DetailPanel;
use roster_model::{
    CatalogEntry, DisplayItem, ImageUrlTemplate, ItemDetails, ItemId, ItemStyle, Paint, Rgb,
};
use roster_player::messages::{Effect, Message, UserCommand};
use roster_player::state::RosterState;
use roster_player::update::{start, update};

fn numbered(n: usize) -> Vec<DisplayItem> {
    let template = ImageUrlTemplate::default();
    (1..=n)
        .map(|i| {
            let entry = CatalogEntry::new(
                format!("item-{i}"),
                format!("https://pokeapi.co/api/v2/pokemon/{i}/"),
            );
            DisplayItem::from_entry(&entry, &template).unwrap()
        })
        .collect()
}

fn input(command: UserCommand, at: Instant) -> Message {
    Message::Input { command, at }
}

/// State with ten items loaded and the first batch of color requests
/// already issued.
fn loaded() -> (RosterState, Vec<Effect>) {
    let mut state = RosterState::new(CarouselLayout::default());
    let effects = start(&mut state);
    assert_eq!(effects, [Effect::LoadCatalog { generation: 1 }]);

    let effects = update(
        &mut state,
        Message::CatalogLoaded {
            generation: 1,
            result: Ok(numbered(10)),
        },
    );
    (state, effects)
}

fn red() -> ItemStyle {
    ItemStyle::new(Paint::solid(Rgb::new(255, 0, 0)), Rgb::WHITE)
}

#[test]
fn visible_items_are_colored_once() {
    let (mut state, effects) = loaded();
    assert!(!state.loading);

    let requested: Vec<&str> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ExtractColor { generation: 1, id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    // The overscan window spans the whole middle copy and then some.
    assert_eq!(requested.len(), 10);

    assert!(update(&mut state, Message::Tick(Instant::now())).is_empty());

    update(
        &mut state,
        Message::ColorExtracted {
            generation: 1,
            id: ItemId::new("3"),
            style: red(),
        },
    );
    assert_eq!(state.carousel.items()[2].style(), Some(&red()));
}

#[test]
fn stale_generation_results_are_dropped() {
    let (mut state, _) = loaded();
    let at = Instant::now();

    let effects = update(&mut state, input(UserCommand::Reload, at));
    assert_eq!(effects, [Effect::LoadCatalog { generation: 2 }]);

    update(
        &mut state,
        Message::ColorExtracted {
            generation: 1,
            id: ItemId::new("1"),
            style: red(),
        },
    );
    assert_eq!(state.carousel.items()[0].style(), None);

    let effects = update(
        &mut state,
        Message::CatalogLoaded {
            generation: 1,
            result: Ok(numbered(3)),
        },
    );
    assert!(effects.is_empty());
    assert!(state.loading);
    assert_eq!(state.carousel.len(), 10);

    update(
        &mut state,
        Message::CatalogLoaded {
            generation: 2,
            result: Ok(numbered(4)),
        },
    );
    assert_eq!(state.carousel.len(), 4);
    assert!(!state.loading);
}

#[test]
fn opening_fetches_details_and_close_discards_late_results() {
    let (mut state, _) = loaded();
    let at = Instant::now();

    let effects = update(&mut state, input(UserCommand::Open, at));
    let centered = state.carousel.active_id().cloned().unwrap();
    assert_eq!(
        effects,
        [Effect::FetchDetails {
            generation: 1,
            id: centered.clone(),
        }]
    );
    assert_eq!(state.panel, Some(DetailPanel::Loading));

    // A response for some other id does not fill the panel.
    update(
        &mut state,
        Message::DetailsLoaded {
            generation: 1,
            id: ItemId::new("999"),
            result: Ok(Arc::new(ItemDetails::default())),
        },
    );
    assert_eq!(state.panel, Some(DetailPanel::Loading));

    let details = ItemDetails {
        id: 3,
        name: "item-3".into(),
        ..ItemDetails::default()
    };
    update(
        &mut state,
        Message::DetailsLoaded {
            generation: 1,
            id: centered.clone(),
            result: Ok(Arc::new(details)),
        },
    );
    let view = state.panel.as_ref().and_then(DetailPanel::view).unwrap();
    assert_eq!(view.id, centered);

    update(&mut state, input(UserCommand::Tab(DetailTab::Moves), at));
    assert_eq!(state.carousel.tab(), Some(DetailTab::Moves));

    update(&mut state, input(UserCommand::Close, at));
    assert_eq!(state.panel, None);

    update(
        &mut state,
        Message::DetailsLoaded {
            generation: 1,
            id: centered,
            result: Err("late".into()),
        },
    );
    assert_eq!(state.panel, None);
}

#[test]
fn failed_detail_fetch_leaves_panel_unavailable() {
    let (mut state, _) = loaded();
    let at = Instant::now();
    update(&mut state, input(UserCommand::Open, at));
    let id = state.carousel.active_id().cloned().unwrap();

    update(
        &mut state,
        Message::DetailsLoaded {
            generation: 1,
            id,
            result: Err("Details for 3 unavailable: HTTP 404".into()),
        },
    );
    assert_eq!(state.panel, Some(DetailPanel::Unavailable));
}

#[test]
fn clicking_a_side_card_centers_it_and_a_second_click_opens() {
    let (mut state, _) = loaded();
    let t0 = Instant::now();
    let target = state.carousel.active_render_index().unwrap() + 2;

    assert!(update(&mut state, input(UserCommand::Click(target), t0)).is_empty());
    assert!(state.panel.is_none());

    for frame in 1..=20u32 {
        update(&mut state, Message::Tick(t0 + Duration::from_millis(16) * frame));
    }
    assert_eq!(state.carousel.active_render_index(), Some(target));

    let effects = update(
        &mut state,
        input(UserCommand::Click(target), t0 + Duration::from_secs(1)),
    );
    assert!(matches!(effects.as_slice(), [Effect::FetchDetails { .. }]));
    assert!(state.carousel.focus().is_open());
}

#[test]
fn arrows_switch_tabs_while_open() {
    let (mut state, _) = loaded();
    let at = Instant::now();
    update(&mut state, input(UserCommand::Open, at));

    let offset = state.carousel.scroll_offset();
    update(&mut state, input(UserCommand::Right, at));
    update(&mut state, input(UserCommand::Right, at));
    assert_eq!(state.carousel.tab(), Some(DetailTab::Moves));
    assert!(!state.carousel.is_animating());
    assert_eq!(state.carousel.scroll_offset(), offset);
}

#[test]
fn load_failure_is_reported() {
    let mut state = RosterState::new(CarouselLayout::default());
    start(&mut state);
    update(
        &mut state,
        Message::CatalogLoaded {
            generation: 1,
            result: Err("HTTP 503 from https://pokeapi.co/api/v2/pokemon".into()),
        },
    );
    assert!(!state.loading);
    assert!(state.status.as_deref().is_some_and(|s| s.contains("503")));
    assert_eq!(update(&mut state, input(UserCommand::Quit, Instant::now())), [Effect::Exit]);
}

fn cues(effects: &[Effect]) -> usize {
    effects.iter().filter(|effect| **effect == Effect::Cue).count()
}

#[test]
fn centered_item_changes_ring_one_cue_each() {
    let (mut state, effects) = loaded();
    assert_eq!(cues(&effects), 0, "initial placement is silent");

    let frame = Duration::from_millis(16);
    let t0 = Instant::now();
    update(&mut state, input(UserCommand::Right, t0));
    let rung: usize = (1..=20u32)
        .map(|n| cues(&update(&mut state, Message::Tick(t0 + frame * n))))
        .sum();
    assert_eq!(rung, 1);

    // Ten steps left cross the leading threshold, so the strip wraps on the
    // way. The jump itself keeps the centered id and stays silent.
    let t1 = t0 + Duration::from_secs(1);
    for _ in 0..10 {
        update(&mut state, input(UserCommand::Left, t1));
    }
    let mut changes = 0;
    for n in 1..=40u32 {
        let before = state.carousel.active_id().cloned();
        let rung = cues(&update(&mut state, Message::Tick(t1 + frame * n)));
        let changed = state.carousel.active_id().cloned() != before;
        assert_eq!(rung, usize::from(changed), "frame {n}");
        changes += rung;
    }
    assert!(changes > 0);
    assert!(!state.carousel.is_animating());
    assert!(state.carousel.scroll_offset() >= state.carousel.threshold());
}
