//! Carousel geometry. Content coordinates start at the left edge of the
//! scrollable strip; viewport coordinates start at the container's left edge.

use crate::constants::carousel as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub item_width: f32,
    pub viewport_width: f32,
    /// Space before the first card and after the last one.
    pub leading_padding: f32,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            item_width: defaults::ITEM_WIDTH,
            viewport_width: defaults::VIEWPORT_WIDTH,
            leading_padding: defaults::LEADING_PADDING,
        }
    }
}

impl CarouselLayout {
    pub fn new(item_width: f32, viewport_width: f32, leading_padding: f32) -> Self {
        Self {
            item_width: item_width.max(1.0),
            viewport_width: viewport_width.max(0.0),
            leading_padding: leading_padding.max(0.0),
        }
    }

    pub fn content_width(&self, render_len: usize) -> f32 {
        2.0 * self.leading_padding + render_len as f32 * self.item_width
    }

    /// Content width minus viewport width, never negative.
    pub fn max_scroll(&self, render_len: usize) -> f32 {
        (self.content_width(render_len) - self.viewport_width).max(0.0)
    }

    pub fn item_left(&self, render_index: usize) -> f32 {
        self.leading_padding + render_index as f32 * self.item_width
    }

    pub fn item_center(&self, render_index: usize) -> f32 {
        self.item_left(render_index) + self.item_width / 2.0
    }
}

/// Horizontal extent of a laid-out box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub left: f32,
    pub width: f32,
}

impl ItemRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Scroll distance that brings `item` to the middle of `container`. Both
/// rects must be in the same coordinate space.
pub fn center_delta(item: ItemRect, container: ItemRect) -> f32 {
    (item.left - container.left + item.width / 2.0) - container.width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_centers_item() {
        let container = ItemRect::new(100.0, 1000.0);
        // Item spans 700..956 on screen; its center is 828, container center 600.
        let item = ItemRect::new(700.0, 256.0);
        assert_eq!(center_delta(item, container), 228.0);

        let centered = ItemRect::new(100.0 + 500.0 - 128.0, 256.0);
        assert_eq!(center_delta(centered, container), 0.0);
    }

    #[test]
    fn max_scroll_never_negative() {
        let layout = CarouselLayout::new(256.0, 1280.0, 32.0);
        assert_eq!(layout.max_scroll(0), 0.0);
        assert_eq!(layout.max_scroll(3), 0.0);
        assert_eq!(layout.max_scroll(9), 64.0 + 9.0 * 256.0 - 1280.0);
    }
}
