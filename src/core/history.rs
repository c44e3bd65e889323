//! # History
//!
//! The address the user sees and the stack of places they have been.
//!
//! [`History`] is the seam between the navigator and whatever actually owns the
//! address (a browser's history API, a terminal address bar, a test double).
//! [`MemoryHistory`] is the in-process implementation the TUI uses.
//!
//! ```text
//! entries: ["/", "/booking", "/manage-rooms"]
//!                              ▲ cursor
//! push("/x")  → ["/", "/booking", "/manage-rooms", "/x"]
//! back()      → cursor on "/booking"
//! push("/y")  → ["/", "/booking", "/y"]   (forward entries dropped)
//! ```

use std::fmt;

/// A navigation target split into its parts.
///
/// Only `path` takes part in route matching. `query` and `hash` are kept
/// without their `?` / `#` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(q) = &self.query {
            write!(f, "?{q}")?;
        }
        if let Some(h) = &self.hash {
            write!(f, "#{h}")?;
        }
        Ok(())
    }
}

/// Owner of the visible address and the back/forward stack.
pub trait History {
    /// The address currently shown.
    fn location(&self) -> &str;

    /// Add a new entry after the current one, dropping any forward entries.
    fn push(&mut self, to: &str);

    /// Overwrite the current entry.
    fn replace(&mut self, to: &str);

    /// Move `delta` entries through the stack. Returns `false` (and stays put)
    /// if the target lies outside it.
    fn go(&mut self, delta: isize) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn back(&mut self) -> bool {
        self.go(-1)
    }

    fn forward(&mut self) -> bool {
        self.go(1)
    }
}

/// History kept in memory. Never empty: it starts with the initial location.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, to: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(to.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, to: &str) {
        self.entries[self.cursor] = to.to_string();
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.cursor.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() && delta != 0 => {
                self.cursor = target;
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
