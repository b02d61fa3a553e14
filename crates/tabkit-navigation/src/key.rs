//! Key resolution for tab strips
//!
//! Keys use the DOM `KeyboardEvent.key` names (`"ArrowRight"`, `"Home"`,
//! `" "` for Space, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::direction::FocusDirection;
use crate::engine::{move_focus, FocusTransition};
use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(NavigationError::UnknownOrientation(s.to_string())),
        }
    }
}

/// What a key means to a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyResolution {
    Move(FocusDirection),
    /// Make the focused tab the selection
    Activate,
    /// Not ours; the event is left unclaimed
    Ignored,
}

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOutcome {
    /// Unrecognised key, event not claimed
    Ignored,
    /// Navigation key; carries the transition if focus could move
    Moved(Option<FocusTransition>),
    /// Activation key on the tab at this index
    Activate(usize),
}

impl KeyOutcome {
    /// Whether the view should stop default handling of the event.
    pub fn is_claimed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusEngine {
    orientation: Orientation,
}

impl FocusEngine {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn resolve(&self, key: &str) -> KeyResolution {
        let (next_key, previous_key) = match self.orientation {
            Orientation::Horizontal => ("ArrowRight", "ArrowLeft"),
            Orientation::Vertical => ("ArrowDown", "ArrowUp"),
        };

        match key {
            k if k == next_key => KeyResolution::Move(FocusDirection::Next),
            k if k == previous_key => KeyResolution::Move(FocusDirection::Previous),
            "Home" => KeyResolution::Move(FocusDirection::First),
            "End" => KeyResolution::Move(FocusDirection::Last),
            "Enter" | " " | "Spacebar" => KeyResolution::Activate,
            _ => KeyResolution::Ignored,
        }
    }

    /// Handle `key` for a strip of `len` tabs where `focused` is the index
    /// of the tab that currently holds input focus, if any.
    pub fn handle_key(&self, key: &str, focused: Option<usize>, len: usize) -> KeyOutcome {
        match self.resolve(key) {
            KeyResolution::Move(direction) => KeyOutcome::Moved(move_focus(direction, focused, len)),
            KeyResolution::Activate => match focused.filter(|&i| i < len) {
                Some(index) => KeyOutcome::Activate(index),
                None => KeyOutcome::Ignored,
            },
            KeyResolution::Ignored => KeyOutcome::Ignored,
        }
    }
}
