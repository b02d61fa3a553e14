//! tabkit Focus Navigation
//!
//! Keyboard movement inside a tab strip:
//! - ArrowRight / ArrowLeft (or ArrowDown / ArrowUp when vertical) cycle
//!   through the tabs, wrapping at both ends
//! - Home / End jump to the first / last tab
//! - Enter / Space activate the focused tab
//!
//! Focus movement never changes the selection. Exactly one tab in a strip is
//! keyboard-focusable at a time (roving tabindex).

mod direction;
mod engine;
mod error;
mod key;

pub use direction::FocusDirection;
pub use engine::{move_focus, next_index, FocusTransition, RovingTabIndex, TabIndexHint};
pub use error::NavigationError;
pub use key::{FocusEngine, KeyOutcome, KeyResolution, Orientation};

pub type Result<T> = std::result::Result<T, NavigationError>;
