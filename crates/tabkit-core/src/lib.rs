//! tabkit Core
//!
//! Coordination layer for a tabbed-navigation widget.
//! The core owns selection, focus and identity state; the view layer only
//! renders and applies the effects it is handed.

mod config;
mod error;
mod tabs;

pub use config::{Config, IdStrategy};
pub use error::CoreError;
pub use tabs::{Dispatch, Effect, PanelAttributes, TabAttributes, Tabs, TabsBuilder, TabsInput};

// Re-export core components
pub use tabkit_group::{
    derive_panel_id, derive_tab_id, validate, Activation, Badge, BadgeVariant, ChangeListener,
    CompositionGuard, Container, ElementKind, GroupContext, GroupOptions, GroupRegistry,
    IdAllocator, Node, PanelEntry, RandomIds, Selection, SelectionMode, SequentialIds, TabEntry,
    TabGroup, TabVariant, TabsError,
};
pub use tabkit_navigation::{
    move_focus, FocusDirection, FocusEngine, FocusTransition, KeyOutcome, KeyResolution,
    NavigationError, Orientation, RovingTabIndex, TabIndexHint,
};
pub use tabkit_tokens::{
    build_tokens, generate_css, parse_tokens, TokenError, TokenSet, DEFAULT_INPUT as DEFAULT_TOKENS_INPUT,
    DEFAULT_OUTPUT as DEFAULT_TOKENS_OUTPUT,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
