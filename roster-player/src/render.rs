//! Plain-text view of the host state.

use std::fmt::Write;

use roster_core::carousel::{DetailTab, Presentation};
use roster_core::detail_view::{DetailPanel, DetailView};

use crate::state::RosterState;

const BAR_WIDTH: usize = 20;
/// Cards shown on each side of the centered one.
const STRIP_RADIUS: usize = 2;

pub fn view(state: &RosterState) -> String {
    let mut out = String::new();
    let carousel = &state.carousel;

    let _ = writeln!(
        out,
        "roster: {} items, offset {:.0}/{:.0}{}",
        carousel.len(),
        carousel.scroll_offset(),
        carousel.max_scroll(),
        if state.loading { " (loading)" } else { "" }
    );
    if let Some(status) = &state.status {
        let _ = writeln!(out, "  ! {status}");
    }

    if let Some(active) = carousel.active_render_index() {
        let first = active.saturating_sub(STRIP_RADIUS);
        let last = (active + STRIP_RADIUS).min(carousel.render_len().saturating_sub(1));
        let cards: Vec<String> = (first..=last)
            .filter_map(|index| {
                let item = carousel.render_item(index)?;
                Some(if index == active {
                    format!("[{index}: {}]", item.name().to_uppercase())
                } else {
                    format!("{index}: {}", item.name())
                })
            })
            .collect();
        let _ = writeln!(out, "  < {} >", cards.join(" | "));

        if let Some(item) = carousel.active_item() {
            let style = item.style_or_fallback();
            let _ = writeln!(
                out,
                "  #{} {}  background {}  text {}",
                item.id(),
                item.name(),
                style.background,
                style.text_color
            );
        }
    }

    if let (Some(open), Some(item)) = (carousel.open_item_state(), carousel.open_item()) {
        let mode = match open.presentation {
            Presentation::Inline => "expanding",
            Presentation::Overlay => "overlay",
        };
        let _ = writeln!(out, "== {} (#{}) [{mode}] ==", item.name(), item.id());
        let _ = writeln!(out, "  {}", tab_bar(open.tab));
        match state.panel.as_ref() {
            Some(DetailPanel::Ready(view)) => render_tab(&mut out, view, open.tab),
            Some(DetailPanel::Unavailable) => {
                let _ = writeln!(out, "  details unavailable");
            }
            Some(DetailPanel::Loading) | None => {
                let _ = writeln!(out, "  loading...");
            }
        }
    }

    out
}

fn tab_bar(current: DetailTab) -> String {
    DetailTab::ALL
        .iter()
        .map(|tab| {
            if *tab == current {
                format!("[{tab}]")
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_tab(out: &mut String, view: &DetailView, tab: DetailTab) {
    match tab {
        DetailTab::Stats => {
            for bar in &view.stats {
                let filled = ((bar.fill_percent / 100.0) * BAR_WIDTH as f32).round() as usize;
                let _ = writeln!(
                    out,
                    "  {:<16}{:>4}  {}{}",
                    bar.label,
                    bar.value,
                    "#".repeat(filled.min(BAR_WIDTH)),
                    ".".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
                );
            }
        }
        DetailTab::Abilities => {
            for ability in &view.abilities {
                let hidden = if ability.hidden { " (hidden)" } else { "" };
                let _ = writeln!(out, "  {}{hidden}", ability.label);
            }
        }
        DetailTab::Moves => {
            for name in &view.moves.shown {
                let _ = writeln!(out, "  {name}");
            }
            if let Some(more) = view.moves.more_line() {
                let _ = writeln!(out, "  {more}");
            }
        }
        DetailTab::Types => {
            for badge in &view.types {
                match badge.icon_path() {
                    Some(icon) => {
                        let _ = writeln!(out, "  {} ({icon})", badge.label);
                    }
                    None => {
                        let _ = writeln!(out, "  {}", badge.label);
                    }
                }
            }
        }
    }
}
