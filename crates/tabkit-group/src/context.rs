//! Group context handed to tabs and panels at construction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TabsError;
use crate::identity::{derive_panel_id, derive_tab_id};
use crate::Result;

/// Visual style of a group. Styling hint only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabVariant {
    #[default]
    Pill,
    Underline,
}

impl TabVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabVariant::Pill => "pill",
            TabVariant::Underline => "underline",
        }
    }
}

impl fmt::Display for TabVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TabVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pill" => Ok(TabVariant::Pill),
            "underline" => Ok(TabVariant::Underline),
            _ => Err(format!("Unknown tab variant: {}", s)),
        }
    }
}

/// Snapshot of a group's shared state.
///
/// Produced by `TabGroup::context` and passed explicitly into every tab and
/// panel constructor. Children read it; they never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupContext {
    pub group_id: String,
    pub variant: TabVariant,
    pub active_value: String,
}

impl GroupContext {
    pub fn new(
        group_id: impl Into<String>,
        variant: TabVariant,
        active_value: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            variant,
            active_value: active_value.into(),
        }
    }

    /// Strict accessor: fails with `ContextMisuse` naming `consumer` when
    /// there is no enclosing group.
    pub fn require<'a>(ctx: Option<&'a GroupContext>, consumer: &str) -> Result<&'a GroupContext> {
        ctx.ok_or_else(|| TabsError::ContextMisuse {
            consumer: consumer.to_string(),
        })
    }

    /// Optional accessor for components that can also run standalone.
    pub fn optional(ctx: Option<&GroupContext>) -> Option<&GroupContext> {
        ctx
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active_value == value
    }

    pub fn tab_id(&self, value: &str) -> String {
        derive_tab_id(Some(&self.group_id), value)
    }

    pub fn panel_id(&self, value: &str) -> String {
        derive_panel_id(Some(&self.group_id), value)
    }
}
