//! tabkit Tab Groups
//!
//! Shared state of one tab group:
//! - process-unique group ids and the tab/panel ids derived from them
//! - the selection state machine (controlled or uncontrolled)
//! - the group context handed to tabs and panels
//! - composition rules for what a group or strip may contain

mod composition;
mod context;
mod entry;
mod error;
mod group;
mod identity;
mod selection;

pub use composition::{validate, CompositionGuard, Container, ElementKind, Node};
pub use context::{GroupContext, TabVariant};
pub use entry::{Badge, BadgeVariant, PanelEntry, TabEntry};
pub use error::TabsError;
pub use group::{GroupOptions, TabGroup};
pub use identity::{
    derive_panel_id, derive_tab_id, GroupLease, GroupRegistry, IdAllocator, RandomIds,
    SequentialIds, DEFAULT_ID_PREFIX,
};
pub use selection::{Activation, ChangeListener, Selection, SelectionMode};

pub type Result<T> = std::result::Result<T, TabsError>;
