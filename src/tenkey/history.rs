use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Completed entries, oldest first, holding at most `limit` of the most recent ones.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Appends an entry, evicting from the front once the limit is exceeded.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_limit() {
        let mut history = History::new(3);
        history.push("a");
        history.push("b");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::new(3);
        for e in ["a", "b", "c", "d", "e"] {
            history.push(e);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["c", "d", "e"]);
        assert_eq!(history.last(), Some("e"));
    }

    #[test]
    fn default_limit_is_200() {
        let mut history = History::default();
        for i in 0..450 {
            history.push(i.to_string());
        }
        assert_eq!(history.len(), 200);
        assert_eq!(history.iter().next(), Some("250"));
    }

    #[test]
    fn zero_limit_is_clamped() {
        let mut history = History::new(0);
        history.push("a");
        history.push("b");
        assert_eq!(history.limit(), 1);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["b"]);
    }
}
