use std::ops::Range;
use std::time::{Duration, Instant};

use roster_model::{DisplayItem, ItemId, ItemStyle};

use super::{
    COPIES, CarouselLayout, DetailTab, Direction, Easing, FocusState, ItemRect, OpenItem,
    OpenRejected, SnapAnimator, center_delta,
};
use crate::constants::carousel as defaults;

/// Timing knobs for the positioner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    pub jump_suppress: Duration,
    pub open_settle: Duration,
    pub step_duration: Duration,
    pub easing: Easing,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            jump_suppress: Duration::from_millis(defaults::JUMP_SUPPRESS_MS),
            open_settle: Duration::from_millis(defaults::OPEN_SETTLE_MS),
            step_duration: Duration::from_millis(defaults::STEP_DURATION_MS),
            easing: Easing::EaseOut,
        }
    }
}

/// What a scroll report did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// No items.
    Idle,
    /// An item is open; wraparound and center detection are paused.
    Suspended,
    /// Inside the post-jump window. The offset was recorded but not evaluated.
    Suppressed,
    Moved { active_changed: bool },
    /// The offset was moved by `delta` to stay in the middle copy.
    Jumped { delta: f32, active_changed: bool },
}

impl ScrollOutcome {
    pub fn active_changed(&self) -> bool {
        matches!(
            self,
            Self::Moved { active_changed: true } | Self::Jumped { active_changed: true, .. }
        )
    }

    pub fn jump(&self) -> Option<f32> {
        match self {
            Self::Jumped { delta, .. } => Some(*delta),
            _ => None,
        }
    }
}

/// Result of one frame tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Set when the tick moved or re-evaluated the offset.
    pub scroll: Option<ScrollOutcome>,
    /// The open item switched to its overlay presentation on this tick.
    pub overlay_engaged: bool,
}

/// Result of a left/right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The strip started a one-card step.
    Stepped,
    /// An item is open and its detail tab changed.
    Tab(DetailTab),
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveItem {
    render_index: usize,
    id: ItemId,
}

/// Wraparound, center detection and open/close state for a tripled strip
/// of [`DisplayItem`]s.
#[derive(Debug, Clone)]
pub struct CarouselPositioner {
    items: Vec<DisplayItem>,
    layout: CarouselLayout,
    timing: CarouselTiming,
    scroll_offset: f32,
    active: Option<ActiveItem>,
    suppressed_until: Option<Instant>,
    // A report landed inside the suppression window and still needs evaluating.
    needs_refresh: bool,
    animator: SnapAnimator,
    focus: FocusState,
}

impl Default for CarouselPositioner {
    fn default() -> Self {
        Self::new(CarouselLayout::default())
    }
}

impl CarouselPositioner {
    pub fn new(layout: CarouselLayout) -> Self {
        Self::with_timing(layout, CarouselTiming::default())
    }

    pub fn with_timing(layout: CarouselLayout, timing: CarouselTiming) -> Self {
        Self {
            items: Vec::new(),
            layout,
            timing,
            scroll_offset: 0.0,
            active: None,
            suppressed_until: None,
            needs_refresh: false,
            animator: SnapAnimator::new(timing.step_duration, timing.easing),
            focus: FocusState::Browsing,
        }
    }

    /// Replace the logical list. Resets focus and places the viewport at the
    /// start of the middle copy. The initial active item is not reported as
    /// a change.
    pub fn set_items(&mut self, items: Vec<DisplayItem>) {
        self.items = items;
        self.focus = FocusState::Browsing;
        self.animator.cancel();
        self.suppressed_until = None;
        self.needs_refresh = false;
        self.active = None;
        self.scroll_offset = self.clamp_offset(self.section_width());
        if !self.items.is_empty() {
            self.detect_active();
        }
        tracing::debug!(
            "carousel loaded {} items (offset {:.1}, wraps: {})",
            self.items.len(),
            self.scroll_offset,
            self.wraps()
        );
    }

    /// Swap in a styled copy of every item with this id.
    pub fn restyle(&mut self, id: &ItemId, style: ItemStyle) -> bool {
        let mut touched = false;
        for item in self.items.iter_mut().filter(|item| item.id() == id) {
            *item = item.with_style(style);
            touched = true;
        }
        touched
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.items.len() * COPIES
    }

    /// Logical index of a render index.
    pub fn logical_index(&self, render_index: usize) -> Option<usize> {
        (render_index < self.render_len()).then(|| render_index % self.items.len())
    }

    pub fn render_item(&self, render_index: usize) -> Option<&DisplayItem> {
        self.logical_index(render_index).map(|i| &self.items[i])
    }

    /// The logical list repeated three times, in render order.
    pub fn render_list(&self) -> impl Iterator<Item = &DisplayItem> + '_ {
        self.items.iter().cycle().take(self.render_len())
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn timing(&self) -> &CarouselTiming {
        &self.timing
    }

    /// Resize the viewport. The offset is clamped into the new range and
    /// re-evaluated at the next tick.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.layout = CarouselLayout::new(
            self.layout.item_width,
            width,
            self.layout.leading_padding,
        );
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        self.needs_refresh = !self.items.is_empty();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn max_scroll(&self) -> f32 {
        self.layout.max_scroll(self.render_len())
    }

    pub fn threshold(&self) -> f32 {
        defaults::THRESHOLD_ITEMS * self.layout.item_width
    }

    /// Width of one copy of the logical list.
    pub fn section_width(&self) -> f32 {
        self.items.len() as f32 * self.layout.item_width
    }

    /// Whether wrap jumps are enabled. A jump must land strictly inside the
    /// band between the two thresholds, and it must not be possible to cross
    /// the threshold by less than one section; otherwise the offset is only
    /// clamped. Lists too short for that (a single item, or a viewport wider
    /// than the middle copy allows) never jump.
    pub fn wraps(&self) -> bool {
        let section = self.section_width();
        let threshold = self.threshold();
        let band = self.max_scroll() - 2.0 * threshold;
        section > 0.0 && section >= threshold && band >= section
    }

    pub fn active_id(&self) -> Option<&ItemId> {
        self.active.as_ref().map(|active| &active.id)
    }

    pub fn active_render_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.render_index)
    }

    pub fn active_item(&self) -> Option<&DisplayItem> {
        self.active_render_index().and_then(|i| self.render_item(i))
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }

    fn is_suppressed(&self, now: Instant) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }

    /// Feed a scroll offset reported by the host (or the animator).
    pub fn on_scroll(&mut self, offset: f32, now: Instant) -> ScrollOutcome {
        if self.items.is_empty() {
            return ScrollOutcome::Idle;
        }
        if self.focus.is_open() {
            self.scroll_offset = self.clamp_offset(offset);
            return ScrollOutcome::Suspended;
        }
        if self.is_suppressed(now) {
            self.scroll_offset = self.clamp_offset(offset);
            self.needs_refresh = true;
            return ScrollOutcome::Suppressed;
        }

        self.suppressed_until = None;
        self.needs_refresh = false;
        self.evaluate(offset, now)
    }

    fn evaluate(&mut self, offset: f32, now: Instant) -> ScrollOutcome {
        let jump = self.wrap_jump(offset);
        self.scroll_offset = self.clamp_offset(offset + jump.unwrap_or(0.0));

        if let Some(delta) = jump {
            self.animator.shift(delta);
            self.suppressed_until = Some(now + self.timing.jump_suppress);
            tracing::debug!(
                "carousel wrapped by {delta:+.1} to offset {:.1}",
                self.scroll_offset
            );
        }

        let active_changed = self.detect_active();
        match jump {
            Some(delta) => ScrollOutcome::Jumped {
                delta,
                active_changed,
            },
            None => ScrollOutcome::Moved { active_changed },
        }
    }

    fn wrap_jump(&self, offset: f32) -> Option<f32> {
        if !self.wraps() {
            return None;
        }
        let threshold = self.threshold();
        if offset < threshold {
            Some(self.section_width())
        } else if offset > self.max_scroll() - threshold {
            Some(-self.section_width())
        } else {
            None
        }
    }

    /// Render index whose center is nearest the viewport center. Ties go to
    /// the lower index.
    pub fn nearest_render_index(&self) -> Option<usize> {
        let len = self.render_len();
        if len == 0 {
            return None;
        }
        let width = self.layout.item_width;
        let center = self.scroll_offset + self.layout.viewport_width / 2.0;
        let guess = ((center - self.layout.leading_padding) / width)
            .floor()
            .clamp(0.0, (len - 1) as f32) as usize;

        let mut best: Option<(usize, f32)> = None;
        for index in guess.saturating_sub(1)..=(guess + 1).min(len - 1) {
            let distance = (self.layout.item_center(index) - center).abs();
            if best.is_none_or(|(_, closest)| distance < closest) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    fn detect_active(&mut self) -> bool {
        let next = self.nearest_render_index().map(|render_index| ActiveItem {
            render_index,
            id: self.items[render_index % self.items.len()].id().clone(),
        });
        let changed = self.active.as_ref().map(|a| &a.id) != next.as_ref().map(|a| &a.id);
        if changed && let Some(next) = &next {
            tracing::debug!("active item is now {} (render {})", next.id, next.render_index);
        }
        self.active = next;
        changed
    }

    /// Advance animations and deferred work.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();

        if let Some(offset) = self.animator.tick(now) {
            report.scroll = Some(self.on_scroll(offset, now));
        } else if self.needs_refresh && !self.is_suppressed(now) {
            report.scroll = Some(self.on_scroll(self.scroll_offset, now));
        }

        if self.focus.settle(now, self.timing.open_settle) {
            tracing::debug!("open item promoted to overlay");
            report.overlay_engaged = true;
        }
        report
    }

    /// Complete any running animation at once.
    pub fn settle(&mut self, now: Instant) -> Option<ScrollOutcome> {
        let offset = self.animator.finish()?;
        Some(self.on_scroll(offset, now))
    }

    pub fn step_left(&mut self, now: Instant) -> bool {
        self.step(Direction::Left, now)
    }

    pub fn step_right(&mut self, now: Instant) -> bool {
        self.step(Direction::Right, now)
    }

    /// Smooth-scroll by one card. Consecutive steps chain off the pending
    /// target rather than the live offset.
    pub fn step(&mut self, direction: Direction, now: Instant) -> bool {
        if self.items.is_empty() || self.focus.is_open() {
            return false;
        }
        let base = self.animator.target().unwrap_or(self.scroll_offset);
        self.animate_to(base + direction.sign() * self.layout.item_width, now);
        true
    }

    /// Smooth-scroll by `delta` from the live offset.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) -> bool {
        if self.items.is_empty() || self.focus.is_open() {
            return false;
        }
        self.animate_to(self.scroll_offset + delta, now);
        true
    }

    fn animate_to(&mut self, target: f32, now: Instant) {
        // Wrapping strips may overshoot; the jump pulls the target back.
        let target = if self.wraps() {
            target
        } else {
            self.clamp_offset(target)
        };
        self.animator.start(self.scroll_offset, target, now);
    }

    /// Left/right input: switches detail tabs while an item is open,
    /// otherwise steps the strip.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> Navigation {
        let tab = match direction {
            Direction::Left => self.previous_tab(),
            Direction::Right => self.next_tab(),
        };
        if let Some(tab) = tab {
            return Navigation::Tab(tab);
        }
        if self.step(direction, now) {
            Navigation::Stepped
        } else {
            Navigation::Ignored
        }
    }

    /// Rect of a rendered card relative to the container.
    pub fn item_rect(&self, render_index: usize) -> Option<ItemRect> {
        (render_index < self.render_len()).then(|| {
            ItemRect::new(
                self.layout.item_left(render_index) - self.scroll_offset,
                self.layout.item_width,
            )
        })
    }

    pub fn container_rect(&self) -> ItemRect {
        ItemRect::new(0.0, self.layout.viewport_width)
    }

    /// Smooth-scroll a rendered card to the viewport center.
    pub fn center_on(&mut self, render_index: usize, now: Instant) -> bool {
        let Some(rect) = self.item_rect(render_index) else {
            return false;
        };
        let delta = center_delta(rect, self.container_rect());
        self.scroll_by(delta, now)
    }

    /// Open the card at `render_index`. Only the centered item may open; any
    /// rendered copy of it qualifies.
    pub fn open(&mut self, render_index: usize, now: Instant) -> Result<(), OpenRejected> {
        if self.items.is_empty() {
            return Err(OpenRejected::Empty);
        }
        self.flush_pending(now);
        let Some(id) = self.render_item(render_index).map(|item| item.id().clone()) else {
            return Err(OpenRejected::OutOfRange {
                index: render_index,
                len: self.render_len(),
            });
        };
        if let Some(open) = self.focus.open_index() {
            return Err(OpenRejected::AlreadyOpen { open });
        }
        if self.active_id() != Some(&id) {
            return Err(OpenRejected::NotCentered(id));
        }

        self.animator.cancel();
        tracing::debug!("opening {id} at offset {:.1}", self.scroll_offset);
        self.focus = FocusState::open(render_index, self.scroll_offset, now);
        Ok(())
    }

    /// Open whichever card is currently centered.
    pub fn open_active(&mut self, now: Instant) -> Result<(), OpenRejected> {
        self.flush_pending(now);
        match self.active_render_index() {
            Some(index) => self.open(index, now),
            None => Err(OpenRejected::Empty),
        }
    }

    /// Evaluate an offset recorded inside the suppression window now, so
    /// an open never captures an offset that skipped the wrap check.
    fn flush_pending(&mut self, now: Instant) {
        if !self.needs_refresh || self.focus.is_open() {
            return;
        }
        self.suppressed_until = None;
        self.needs_refresh = false;
        self.evaluate(self.scroll_offset, now);
    }

    /// Close the open card, restoring the offset captured when it opened.
    pub fn close(&mut self) -> Option<f32> {
        let restore = self.focus.close()?;
        self.scroll_offset = self.clamp_offset(restore);
        // The viewport may have changed while open; the next tick re-checks.
        self.needs_refresh = true;
        self.detect_active();
        tracing::debug!("closed; offset restored to {:.1}", self.scroll_offset);
        Some(self.scroll_offset)
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn open_item_state(&self) -> Option<&OpenItem> {
        self.focus.open_item()
    }

    pub fn open_item(&self) -> Option<&DisplayItem> {
        self.focus
            .open_index()
            .and_then(|index| self.render_item(index))
    }

    pub fn tab(&self) -> Option<DetailTab> {
        self.focus.tab()
    }

    pub fn next_tab(&mut self) -> Option<DetailTab> {
        let tab = self.focus.tab()?.next();
        self.focus.set_tab(tab);
        Some(tab)
    }

    pub fn previous_tab(&mut self) -> Option<DetailTab> {
        let tab = self.focus.tab()?.previous();
        self.focus.set_tab(tab);
        Some(tab)
    }

    pub fn select_tab(&mut self, tab: DetailTab) -> bool {
        self.focus.set_tab(tab)
    }

    /// Render indices intersecting the viewport widened by `margin` on each
    /// side.
    pub fn visible_range(&self, margin: f32) -> Range<usize> {
        let len = self.render_len();
        if len == 0 {
            return 0..0;
        }
        let width = self.layout.item_width;
        let left = self.scroll_offset - margin - self.layout.leading_padding;
        let right = self.scroll_offset + self.layout.viewport_width + margin
            - self.layout.leading_padding;

        let start = (left / width).floor().max(0.0) as usize;
        let end = (right / width).ceil().max(0.0) as usize;
        start.min(len)..end.min(len)
    }

    /// Distinct logical indices inside [`Self::visible_range`], in render
    /// order.
    pub fn visible_logical(&self, margin: f32) -> Vec<usize> {
        let mut seen = Vec::new();
        for render_index in self.visible_range(margin) {
            if let Some(logical) = self.logical_index(render_index)
                && !seen.contains(&logical)
            {
                seen.push(logical);
            }
        }
        seen
    }
}
