//! Message handling. Pure state transitions; side effects are returned as
//! [`Effect`]s for the runtime to execute.

use std::time::Instant;

use roster_core::carousel::{Direction, Navigation};
use roster_core::detail_view::{DetailPanel, DetailView};
use roster_model::ItemId;

use crate::messages::{Effect, Message, UserCommand};
use crate::state::RosterState;

/// Kick off the first catalog load.
pub fn start(state: &mut RosterState) -> Vec<Effect> {
    let generation = state.begin_load();
    log::info!("Loading catalog (generation {generation})");
    vec![Effect::LoadCatalog { generation }]
}

pub fn update(state: &mut RosterState, message: Message) -> Vec<Effect> {
    match message {
        Message::Input { command, at } => handle_command(state, command, at),
        Message::Tick(now) => handle_tick(state, now),
        Message::CatalogLoaded { generation, result } => {
            if !state.is_current(generation) {
                log::debug!("Dropping catalog from stale generation {generation}");
                return Vec::new();
            }
            state.loading = false;
            state.mark_dirty();
            match result {
                Ok(items) => {
                    if items.is_empty() {
                        state.status = Some("catalog is empty".to_string());
                    }
                    state.carousel.set_items(items);
                    request_visible_colors(state)
                }
                Err(e) => {
                    log::error!("Catalog load failed: {e}");
                    state.status = Some(format!("catalog unavailable: {e}"));
                    Vec::new()
                }
            }
        }
        Message::ColorExtracted {
            generation,
            id,
            style,
        } => {
            if !state.is_current(generation) {
                log::debug!("Dropping color for {id} from stale generation {generation}");
                return Vec::new();
            }
            if state.carousel.restyle(&id, style) {
                if let Some(DetailPanel::Ready(view)) = state.panel.as_mut()
                    && view.id == id
                {
                    view.style = style;
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Message::DetailsLoaded {
            generation,
            id,
            result,
        } => {
            if !state.is_current(generation) || !is_open(state, &id) {
                log::debug!("Dropping details for {id}; no longer open");
                return Vec::new();
            }
            let panel = match (result, state.carousel.open_item()) {
                (Ok(details), Some(item)) => {
                    DetailPanel::Ready(Box::new(DetailView::build(item, &details)))
                }
                (Err(e), _) => {
                    log::warn!("Details for {id} unavailable: {e}");
                    DetailPanel::Unavailable
                }
                (Ok(_), None) => return Vec::new(),
            };
            state.panel = Some(panel);
            state.mark_dirty();
            Vec::new()
        }
    }
}

fn is_open(state: &RosterState, id: &ItemId) -> bool {
    state.carousel.open_item().is_some_and(|item| item.id() == id)
}

fn handle_command(state: &mut RosterState, command: UserCommand, at: Instant) -> Vec<Effect> {
    match command {
        UserCommand::Left | UserCommand::Right => {
            let direction = match command {
                UserCommand::Left => Direction::Left,
                _ => Direction::Right,
            };
            if state.carousel.navigate(direction, at) != Navigation::Ignored {
                state.mark_dirty();
            }
            Vec::new()
        }
        UserCommand::Open => open_active(state, at),
        UserCommand::Click(render_index) => {
            if state.carousel.active_render_index() == Some(render_index) {
                return open_active(state, at);
            }
            if !state.carousel.center_on(render_index, at) {
                log::debug!("Ignoring click on render index {render_index}");
            }
            Vec::new()
        }
        UserCommand::Close => {
            if state.carousel.close().is_some() {
                state.panel = None;
                state.mark_dirty();
            }
            Vec::new()
        }
        UserCommand::Tab(tab) => {
            if state.carousel.select_tab(tab) {
                state.mark_dirty();
            }
            Vec::new()
        }
        UserCommand::Reload => start(state),
        UserCommand::Quit => vec![Effect::Exit],
    }
}

fn open_active(state: &mut RosterState, at: Instant) -> Vec<Effect> {
    match state.carousel.open_active(at) {
        Ok(()) => {
            state.panel = Some(DetailPanel::Loading);
            state.status = None;
            state.mark_dirty();
            state
                .carousel
                .open_item()
                .map(|item| Effect::FetchDetails {
                    generation: state.generation,
                    id: item.id().clone(),
                })
                .into_iter()
                .collect()
        }
        Err(rejected) => {
            log::debug!("Open rejected: {rejected}");
            state.status = Some(rejected.to_string());
            state.mark_dirty();
            Vec::new()
        }
    }
}

fn handle_tick(state: &mut RosterState, now: Instant) -> Vec<Effect> {
    let report = state.carousel.tick(now);
    let active_changed = report.scroll.is_some_and(|outcome| outcome.active_changed());
    let jumped = report.scroll.is_some_and(|outcome| outcome.jump().is_some());
    if active_changed || jumped || report.overlay_engaged {
        state.mark_dirty();
    }

    let mut effects = Vec::new();
    if active_changed {
        effects.push(Effect::Cue);
    }
    effects.extend(request_visible_colors(state));
    effects
}

/// Color requests for unstyled items inside the overscan window. Each id is
/// requested once per generation.
pub fn request_visible_colors(state: &mut RosterState) -> Vec<Effect> {
    let mut effects = Vec::new();
    for logical in state.carousel.visible_logical(state.overscan) {
        let item = &state.carousel.items()[logical];
        if item.style().is_some() || state.requested_colors.contains(item.id()) {
            continue;
        }
        state.requested_colors.insert(item.id().clone());
        effects.push(Effect::ExtractColor {
            generation: state.generation,
            id: item.id().clone(),
            image_url: item.image_url().to_string(),
        });
    }
    effects
}
