//! Cursor tracking for the single-line AddressBar.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll.
//! The text itself is owned by `AddressBar` and passed in explicitly.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Visible columns inside the bordered block.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(BORDER_OFFSET * 2)
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns scrolled off the left edge
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Place the cursor after the last character.
    pub fn to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor from the start of the buffer, capped at
    /// `u16::MAX`.
    pub fn column(&self, buffer: &str) -> u16 {
        u16::try_from(buffer[..self.pos].width()).unwrap_or(u16::MAX)
    }

    /// Scroll horizontally so the cursor stays inside the visible columns.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let width = inner_width(area_width);
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_offset {
            self.scroll_offset = col;
        } else if col >= self.scroll_offset.saturating_add(width) {
            self.scroll_offset = (col - width).saturating_add(1);
        }
    }

    /// Screen position of the cursor. Returns (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let visible_col = self.column(buffer).saturating_sub(self.scroll_offset);
        (
            area.x
                .saturating_add(BORDER_OFFSET)
                .saturating_add(visible_col),
            area.y.saturating_add(BORDER_OFFSET),
        )
    }
}
