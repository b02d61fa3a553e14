//! Selection State Machine
//!
//! ```text
//! construction ──(external value?)──► Controlled { value }
//!                        └──────────► Uncontrolled { current = default }
//! ```
//!
//! The mode is fixed for the lifetime of the selection. In controlled mode
//! `activate` only proposes the new value through the change listener; the
//! owner applies it with `set_controlled_value`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Change notification, invoked synchronously from `activate`.
pub type ChangeListener = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Caller owns the value
    Controlled,
    /// Selection owns the value, seeded by a default
    Uncontrolled,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Controlled => "controlled",
            SelectionMode::Uncontrolled => "uncontrolled",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single `activate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// Value that was requested
    pub value: String,
    /// Whether the selection changed its own state
    pub applied: bool,
    /// Whether a change listener was invoked
    pub notified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Controlled { value: String },
    Uncontrolled { current: String },
}

pub struct Selection {
    state: State,
    on_change: Option<ChangeListener>,
}

impl Selection {
    /// Pick the mode from the presence of `controlled`. When a controlled
    /// value is supplied `default_value` is ignored.
    pub fn new(
        controlled: Option<String>,
        default_value: Option<String>,
        on_change: Option<ChangeListener>,
    ) -> Self {
        match controlled {
            Some(value) => Self::controlled(value, on_change),
            None => Self::uncontrolled(default_value.unwrap_or_default(), on_change),
        }
    }

    pub fn controlled(value: impl Into<String>, on_change: Option<ChangeListener>) -> Self {
        Self {
            state: State::Controlled {
                value: value.into(),
            },
            on_change,
        }
    }

    pub fn uncontrolled(default_value: impl Into<String>, on_change: Option<ChangeListener>) -> Self {
        Self {
            state: State::Uncontrolled {
                current: default_value.into(),
            },
            on_change,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self.state {
            State::Controlled { .. } => SelectionMode::Controlled,
            State::Uncontrolled { .. } => SelectionMode::Uncontrolled,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.mode() == SelectionMode::Controlled
    }

    pub fn current_value(&self) -> &str {
        match &self.state {
            State::Controlled { value } => value,
            State::Uncontrolled { current } => current,
        }
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.current_value() == value
    }

    /// Replace the change listener. Does not affect the mode.
    pub fn set_listener(&mut self, on_change: Option<ChangeListener>) {
        self.on_change = on_change;
    }

    pub fn has_listener(&self) -> bool {
        self.on_change.is_some()
    }

    /// Make `value` the selection (uncontrolled) or propose it (controlled).
    pub fn activate(&mut self, value: &str) -> Activation {
        let applied = match &mut self.state {
            State::Uncontrolled { current } => {
                tracing::debug!(from = %current, to = %value, "Selection activated");
                *current = value.to_string();
                true
            }
            State::Controlled { value: held } => {
                tracing::debug!(held = %held, proposed = %value, "Selection change proposed");
                false
            }
        };

        let notified = match self.on_change.as_mut() {
            Some(listener) => {
                listener(value);
                true
            }
            None => false,
        };

        Activation {
            value: value.to_string(),
            applied,
            notified,
        }
    }

    /// Apply a value supplied by the external owner.
    ///
    /// Returns `false` (and logs a warning) in uncontrolled mode.
    pub fn set_controlled_value(&mut self, value: impl Into<String>) -> bool {
        match &mut self.state {
            State::Controlled { value: held } => {
                *held = value.into();
                true
            }
            State::Uncontrolled { .. } => {
                tracing::warn!(
                    "set_controlled_value called on an uncontrolled selection; ignoring"
                );
                false
            }
        }
    }

    /// Re-supply the external value on re-render.
    ///
    /// A value that would flip the mode decided at construction is ignored.
    pub fn sync_external(&mut self, external: Option<&str>) {
        match (&mut self.state, external) {
            (State::Controlled { value }, Some(next)) => {
                if value.as_str() != next {
                    *value = next.to_string();
                }
            }
            (State::Uncontrolled { .. }, None) => {}
            (State::Controlled { .. }, None) => {
                tracing::warn!("Controlled selection lost its value; staying controlled");
            }
            (State::Uncontrolled { .. }, Some(next)) => {
                tracing::warn!(
                    value = %next,
                    "Uncontrolled selection received an external value; staying uncontrolled"
                );
            }
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("mode", &self.mode())
            .field("current", &self.current_value())
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
