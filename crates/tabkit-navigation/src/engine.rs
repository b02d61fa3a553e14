//! Cyclic focus movement and roving tabindex
//!
//! | Input    | Next index          |
//! |----------|---------------------|
//! | next     | `(i + 1) mod N`     |
//! | previous | `(i - 1 + N) mod N` |
//! | first    | `0`                 |
//! | last     | `N - 1`             |
//!
//! Nothing here is stored between key events: the caller passes the index
//! that currently holds focus each time.

use serde::{Deserialize, Serialize};

use crate::direction::FocusDirection;

/// Roving tabindex value: `0` for the one focusable tab, `-1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum TabIndexHint {
    Focusable,
    Skipped,
}

impl TabIndexHint {
    pub fn value(&self) -> i8 {
        match self {
            TabIndexHint::Focusable => 0,
            TabIndexHint::Skipped => -1,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, TabIndexHint::Focusable)
    }
}

impl From<TabIndexHint> for i8 {
    fn from(hint: TabIndexHint) -> Self {
        hint.value()
    }
}

impl TryFrom<i8> for TabIndexHint {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TabIndexHint::Focusable),
            -1 => Ok(TabIndexHint::Skipped),
            other => Err(format!("Invalid tabindex hint: {}", other)),
        }
    }
}

/// Index reached from `current` in a strip of `len` tabs. `None` for an
/// empty strip.
pub fn next_index(direction: FocusDirection, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let target = match direction {
        FocusDirection::Next => (current % len + 1) % len,
        FocusDirection::Previous => (current % len + len - 1) % len,
        FocusDirection::First => 0,
        FocusDirection::Last => len - 1,
    };
    Some(target)
}

/// Instruction for the view: focus `target` and mark it as the only
/// focusable tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTransition {
    pub from: usize,
    pub target: usize,
    pub len: usize,
}

impl FocusTransition {
    pub fn hint(&self, index: usize) -> TabIndexHint {
        if index == self.target {
            TabIndexHint::Focusable
        } else {
            TabIndexHint::Skipped
        }
    }

    pub fn hints(&self) -> Vec<TabIndexHint> {
        (0..self.len).map(|i| self.hint(i)).collect()
    }
}

/// Compute a transition. `None` when the strip is empty or no tab in it
/// currently holds focus.
pub fn move_focus(
    direction: FocusDirection,
    focused: Option<usize>,
    len: usize,
) -> Option<FocusTransition> {
    let from = focused.filter(|&i| i < len)?;
    let target = next_index(direction, from, len)?;

    tracing::debug!(direction = %direction, from, target, len, "Focus moved");

    Some(FocusTransition { from, target, len })
}

/// View-side mirror of the tabindex marks of one strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RovingTabIndex {
    focusable: Option<usize>,
    len: usize,
}

impl RovingTabIndex {
    /// `initial` is usually the active tab's index; falls back to the first
    /// tab when absent or out of range.
    pub fn new(len: usize, initial: Option<usize>) -> Self {
        let mut roving = Self {
            focusable: None,
            len: 0,
        };
        roving.resize(len, initial);
        roving
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn focusable(&self) -> Option<usize> {
        self.focusable
    }

    pub fn apply(&mut self, transition: &FocusTransition) {
        if transition.len == self.len && transition.target < self.len {
            self.focusable = Some(transition.target);
        }
    }

    /// Re-render with `len` tabs. Keeps the current mark if still in range,
    /// otherwise uses `fallback`, otherwise the first tab.
    pub fn resize(&mut self, len: usize, fallback: Option<usize>) {
        self.len = len;
        if len == 0 {
            self.focusable = None;
            return;
        }

        let keep = self.focusable.filter(|&i| i < len);
        self.focusable = keep
            .or_else(|| fallback.filter(|&i| i < len))
            .or(Some(0));
    }

    /// Drop the tab at `index`. A mark after it shifts down with its tab; a
    /// mark on it moves to `fallback` (an index into the shortened strip).
    pub fn remove(&mut self, index: usize, fallback: Option<usize>) {
        if index >= self.len {
            return;
        }

        self.focusable = match self.focusable {
            Some(mark) if mark > index => Some(mark - 1),
            Some(mark) if mark == index => None,
            other => other,
        };
        self.resize(self.len - 1, fallback);
    }

    pub fn hint(&self, index: usize) -> TabIndexHint {
        if self.focusable == Some(index) {
            TabIndexHint::Focusable
        } else {
            TabIndexHint::Skipped
        }
    }

    pub fn hints(&self) -> Vec<TabIndexHint> {
        (0..self.len).map(|i| self.hint(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(next_index(FocusDirection::Next, 0, 3), Some(1));
        assert_eq!(next_index(FocusDirection::Next, 2, 3), Some(0));
        assert_eq!(next_index(FocusDirection::Previous, 1, 3), Some(0));
        assert_eq!(next_index(FocusDirection::Previous, 0, 3), Some(2));
        assert_eq!(next_index(FocusDirection::First, 2, 3), Some(0));
        assert_eq!(next_index(FocusDirection::Last, 0, 3), Some(2));
    }

    #[test]
    fn test_next_index_on_empty_strip() {
        for direction in FocusDirection::ALL {
            assert_eq!(next_index(direction, 0, 0), None);
            assert_eq!(next_index(direction, 5, 0), None);
        }
    }

    #[test]
    fn test_wraps_from_last_to_first() {
        let transition = move_focus(FocusDirection::Next, Some(2), 3).unwrap();
        assert_eq!(transition.target, 0);
        assert_eq!(
            transition.hints(),
            vec![
                TabIndexHint::Focusable,
                TabIndexHint::Skipped,
                TabIndexHint::Skipped
            ]
        );
    }

    #[test]
    fn test_no_focus_is_noop() {
        assert!(move_focus(FocusDirection::Next, None, 3).is_none());
        assert!(move_focus(FocusDirection::First, Some(5), 3).is_none());
    }

    #[test]
    fn test_empty_strip_is_noop() {
        for direction in FocusDirection::ALL {
            assert!(move_focus(direction, Some(0), 0).is_none());
        }
    }

    #[test]
    fn test_single_tab() {
        for direction in FocusDirection::ALL {
            assert_eq!(move_focus(direction, Some(0), 1).unwrap().target, 0);
        }
    }

    #[test]
    fn test_roving_initial_mark() {
        let roving = RovingTabIndex::new(3, Some(1));
        assert_eq!(roving.focusable(), Some(1));

        let roving = RovingTabIndex::new(3, None);
        assert_eq!(roving.focusable(), Some(0));

        let roving = RovingTabIndex::new(3, Some(9));
        assert_eq!(roving.focusable(), Some(0));

        let roving = RovingTabIndex::new(0, Some(0));
        assert!(roving.focusable().is_none());
        assert!(roving.hints().is_empty());
    }

    #[test]
    fn test_roving_apply_and_resize() {
        let mut roving = RovingTabIndex::new(4, None);
        let transition = move_focus(FocusDirection::Last, Some(0), 4).unwrap();
        roving.apply(&transition);
        assert_eq!(roving.focusable(), Some(3));

        roving.resize(2, Some(1));
        assert_eq!(roving.focusable(), Some(1));

        roving.resize(5, None);
        assert_eq!(roving.focusable(), Some(1));

        // transitions computed for a stale length are dropped
        roving.apply(&FocusTransition {
            from: 0,
            target: 3,
            len: 4,
        });
        assert_eq!(roving.focusable(), Some(1));
    }

    #[test]
    fn test_roving_remove_follows_marked_tab() {
        let mut roving = RovingTabIndex::new(4, Some(2));

        // removing an earlier tab shifts the mark with its tab
        roving.remove(0, None);
        assert_eq!(roving.len(), 3);
        assert_eq!(roving.focusable(), Some(1));

        // removing a later tab leaves it alone
        roving.remove(2, None);
        assert_eq!(roving.focusable(), Some(1));

        // removing the marked tab falls back
        roving.remove(1, Some(0));
        assert_eq!(roving.len(), 1);
        assert_eq!(roving.focusable(), Some(0));

        roving.remove(5, None);
        assert_eq!(roving.len(), 1);
        roving.remove(0, None);
        assert!(roving.is_empty());
        assert_eq!(roving.focusable(), None);
    }

    #[test]
    fn test_hint_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&TabIndexHint::Skipped).unwrap(), "-1");
        let hint: TabIndexHint = serde_json::from_str("0").unwrap();
        assert_eq!(hint, TabIndexHint::Focusable);
        assert!(serde_json::from_str::<TabIndexHint>("2").is_err());
    }
}
