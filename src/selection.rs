//! Timeline cursor owned by the presentation layer.
//!
//! The filter engine is stateless; whoever changes the filter publishes a
//! [`FilterChanged`] and the cursor drops its selection on receipt. The
//! expanded entry is left alone.

use crate::pipeline::FilterQuery;

/// Navigation input for the timeline list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
}

/// Published whenever the active filter is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChanged {
    pub query: FilterQuery,
    /// Length of the new filtered list.
    pub visible: usize,
}

/// Anything that holds state derived from the filtered list.
pub trait FilterListener {
    fn filter_changed(&mut self, change: &FilterChanged);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimelineCursor {
    selected: Option<usize>,
    expanded: Option<usize>,
}

impl TimelineCursor {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Apply a key against a list of `len` entries.
    pub fn handle_key(&mut self, key: NavKey, len: usize) {
        match key {
            NavKey::Up => {
                self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
            }
            NavKey::Down => {
                if len == 0 {
                    return;
                }
                let next = self.selected.map_or(0, |i| i + 1);
                self.selected = Some(next.min(len - 1));
            }
            NavKey::Enter => {
                if let Some(sel) = self.selected {
                    self.expanded = if self.expanded == Some(sel) { None } else { Some(sel) };
                }
            }
        }
    }

    /// Expand or collapse an entry directly, e.g. from a click.
    pub fn toggle_expanded(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }
}

impl FilterListener for TimelineCursor {
    fn filter_changed(&mut self, _change: &FilterChanged) {
        self.selected = None;
    }
}
