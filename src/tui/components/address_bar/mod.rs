//! # AddressBar Component
//!
//! Single-line text field for typing a location to go to.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Emit `Submit` with the typed location on Enter
//! - Emit `Cancel` on Esc
//!
//! Opened from browse mode with `/` (prefilled with `/`) or `:` (prefilled
//! with the current address). Newlines in pasted text are dropped.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

/// Height of the rendered bar, borders included.
pub const ADDRESS_BAR_HEIGHT: u16 = 3;

/// Longest address the bar accepts, in bytes. Extra pasted text is dropped.
pub const MAX_ADDRESS_LEN: usize = 2048;

/// High-level events emitted by the AddressBar
#[derive(Debug, Clone, PartialEq)]
pub enum AddressEvent {
    /// User asked to go to the typed location (Enter)
    Submit(String),
    /// User gave up editing (Esc)
    Cancel,
    ContentChanged,
}

pub struct AddressBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    cursor: CursorState,
}

impl AddressBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    /// Start editing with `initial` in the buffer and the cursor at its end.
    pub fn open_with(&mut self, initial: &str) {
        self.buffer = initial.to_string();
        self.cursor.reset();
        self.cursor.to_end(&self.buffer);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn insert_str(&mut self, text: &str) -> Option<AddressEvent> {
        let mut room = MAX_ADDRESS_LEN.saturating_sub(self.buffer.len());
        let text: String = text
            .chars()
            .filter(|c| !c.is_control())
            .take_while(|c| {
                let fits = c.len_utf8() <= room;
                if fits {
                    room -= c.len_utf8();
                }
                fits
            })
            .collect();
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
        Some(AddressEvent::ContentChanged)
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AddressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Go to (Enter to open, Esc to cancel)");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green))
            .scroll((0, self.cursor.scroll_offset));

        frame.render_widget(input, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for AddressBar {
    type Event = AddressEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(AddressEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(AddressEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                AddressEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                AddressEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                AddressEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.to_end(&self.buffer);
                AddressEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let target = self.buffer.trim().to_string();
                if target.is_empty() {
                    return None;
                }
                self.clear();
                Some(AddressEvent::Submit(target))
            }
            TuiEvent::Escape => {
                self.clear();
                Some(AddressEvent::Cancel)
            }
            _ => None,
        }
    }
}
