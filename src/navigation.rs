//! Visited-section history.

use crate::section::DEFAULT_KEY;

/// Ordered section keys, most recent last.
///
/// Once seeded, the history is never empty: [`back`](Self::back) refuses to pop the last
/// entry. There is no size cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::starting_at(DEFAULT_KEY)
    }
}

impl NavigationHistory {
    /// A history holding only `key`.
    pub fn starting_at(key: &str) -> Self {
        Self {
            entries: vec![key.to_string()],
        }
    }

    pub fn push(&mut self, key: &str) {
        self.entries.push(key.to_string());
    }

    /// Drop the current entry and return the new current one, or `None` (leaving the history
    /// untouched) when only one entry remains.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything and start over at `key`.
    pub fn reset(&mut self, key: &str) {
        self.entries.clear();
        self.entries.push(key.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_default_starts_at_welcome() {
        let history = NavigationHistory::default();
        check!(history.current() == Some("welcome"));
        check!(history.len() == 1);
        check!(!history.can_go_back());
    }

    #[test]
    fn test_back_with_single_entry_is_a_no_op() {
        let mut history = NavigationHistory::default();
        check!(history.back().is_none());
        check!(history.len() == 1);
        check!(history.current() == Some("welcome"));
    }

    #[test]
    fn test_back_returns_previous_entry() {
        let mut history = NavigationHistory::default();
        history.push("quick_start");
        history.push("settings");
        check!(history.back() == Some("quick_start"));
        check!(history.back() == Some("welcome"));
        check!(history.back().is_none());
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let mut history = NavigationHistory::default();
        history.push("welcome");
        check!(history.len() == 2);
        check!(history.can_go_back());
    }

    #[test]
    fn test_reset() {
        let mut history = NavigationHistory::default();
        history.push("a");
        history.push("b");
        history.reset("welcome");
        check!(history.iter().collect::<Vec<_>>() == ["welcome"]);
    }
}
