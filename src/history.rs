//! Input history with shell-style up/down browsing.

/// Default number of entries kept when no usable limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded list of committed input strings.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    /// Browse position; `None` when not browsing
    cursor: Option<usize>,
    limit: usize,
    /// Input saved on the first `up` so `down` can restore it
    saved_input: String,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create a history holding at most `limit` entries (100 if `limit` is 0).
    pub fn new(limit: usize) -> Self {
        let limit = if limit < 1 {
            DEFAULT_HISTORY_LIMIT
        } else {
            limit
        };
        Self {
            entries: Vec::with_capacity(limit),
            cursor: None,
            limit,
            saved_input: String::new(),
        }
    }

    /// Commit an entry. Empty strings and repeats of the newest entry are ignored.
    pub fn add(&mut self, entry: &str) {
        if entry.is_empty() {
            return;
        }
        if self.entries.last().is_some_and(|last| last == entry) {
            return;
        }

        self.entries.push(entry.to_string());
        if self.entries.len() > self.limit {
            self.entries.remove(0);
        }

        self.reset();
    }

    /// Step toward older entries, returning the entry to show.
    pub fn up(&mut self, current_input: &str) -> String {
        if self.entries.is_empty() {
            return current_input.to_string();
        }

        let idx = match self.cursor {
            None => {
                self.saved_input = current_input.to_string();
                self.entries.len() - 1
            }
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.entries[idx].clone()
    }

    /// Step toward newer entries. Moving past the newest restores the saved input.
    pub fn down(&mut self) -> String {
        let Some(idx) = self.cursor else {
            return self.saved_input.clone();
        };

        let next = idx + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return self.saved_input.clone();
        }

        self.cursor = Some(next);
        self.entries[next].clone()
    }

    /// Leave browsing mode and forget the saved input.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.saved_input.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_falls_back() {
        let mut history = History::new(0);
        for i in 0..150 {
            history.add(&i.to_string());
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_add_ignores_empty_and_repeats() {
        let mut history = History::new(10);
        history.add("");
        history.add("abc");
        history.add("abc");
        history.add("def");
        history.add("abc");
        assert_eq!(history.entries(), &["abc", "def", "abc"]);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = History::new(2);
        history.add("one");
        history.add("two");
        history.add("three");
        assert_eq!(history.entries(), &["two", "three"]);
    }

    #[test]
    fn test_up_without_entries_returns_input() {
        let mut history = History::new(5);
        assert_eq!(history.up("typing"), "typing");
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_browse_up_and_down() {
        let mut history = History::new(5);
        history.add("first");
        history.add("second");

        assert_eq!(history.up("draft"), "second");
        assert!(history.is_browsing());
        assert_eq!(history.up("ignored"), "first");
        // Stops at the oldest entry
        assert_eq!(history.up("ignored"), "first");

        assert_eq!(history.down(), "second");
        assert_eq!(history.down(), "draft");
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_down_when_not_browsing() {
        let mut history = History::new(5);
        history.add("entry");
        assert_eq!(history.down(), "");
    }

    #[test]
    fn test_add_resets_browsing() {
        let mut history = History::new(5);
        history.add("a");
        history.up("x");
        history.add("b");
        assert!(!history.is_browsing());
        assert_eq!(history.up("y"), "b");
    }
}
