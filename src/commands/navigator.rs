use super::types::Match;

/// Cursor over the occurrence list.
///
/// The cursor is `None` exactly when the list is empty.
#[derive(Debug, Default, Clone)]
pub struct Navigator {
    occurrences: Vec<Match>,
    cursor: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<Match> {
        self.cursor.and_then(|index| self.occurrences.get(index).copied())
    }

    /// Cursor to render on the next search pass over `match_count` fresh matches.
    pub fn cursor_for(&self, match_count: usize) -> Option<usize> {
        match self.cursor {
            _ if match_count == 0 => None,
            Some(index) if index < match_count => Some(index),
            _ => Some(0),
        }
    }

    /// Installs a freshly computed occurrence list.
    pub fn on_search(&mut self, occurrences: Vec<Match>) {
        self.cursor = self.cursor_for(occurrences.len());
        self.occurrences = occurrences;
    }

    pub fn next(&mut self) -> bool {
        let len = self.occurrences.len();
        if len == 0 {
            return false;
        }

        self.cursor = Some(self.cursor.map_or(0, |index| (index + 1) % len));
        true
    }

    pub fn previous(&mut self) -> bool {
        let len = self.occurrences.len();
        if len == 0 {
            return false;
        }

        self.cursor = Some(match self.cursor {
            Some(index) if index > 0 && index < len => index - 1,
            _ => len - 1,
        });
        true
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.occurrences.len() {
            return false;
        }

        self.cursor = Some(index);
        true
    }

    /// Drops the current occurrence; the cursor stays on the same position, wrapping to the
    /// first occurrence when it falls off the end.
    pub fn remove_current(&mut self) -> Option<Match> {
        let index = self.cursor?;
        if index >= self.occurrences.len() {
            return None;
        }

        let removed = self.occurrences.remove(index);
        self.cursor = if self.occurrences.is_empty() {
            None
        } else if index >= self.occurrences.len() {
            Some(0)
        } else {
            Some(index)
        };

        Some(removed)
    }

    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.occurrences.clear();
        self.cursor = None;
    }
}
