//! Tab and panel entries
//!
//! Entries carry the ids and active flags a view needs to render a tab
//! button or a content panel. Inside a group they are derived from the
//! [`GroupContext`]; outside a group they fall back to ungrouped ids and an
//! explicitly supplied selected flag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::GroupContext;
use crate::identity::{derive_panel_id, derive_tab_id};
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Positive => "positive",
            BadgeVariant::Negative => "negative",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Small count or status indicator shown inside a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub variant: BadgeVariant,
    pub text: String,
}

impl Badge {
    pub fn new(variant: BadgeVariant, text: impl Into<String>) -> Self {
        Self {
            variant,
            text: text.into(),
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(BadgeVariant::Neutral, text)
    }

    pub fn class_name(&self) -> String {
        format!("badge badge-{}", self.variant)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    /// Application-defined value, unique within the group
    pub value: String,
    pub label_text: String,
    pub badge: Option<Badge>,
    /// Owning group, `None` when rendered standalone
    pub group_id: Option<String>,
    pub tab_id: String,
    pub panel_id: String,
    pub is_active: bool,
}

impl TabEntry {
    pub fn new(ctx: Option<&GroupContext>, value: impl Into<String>, label_text: impl Into<String>) -> Self {
        let value = value.into();
        let mut entry = Self {
            tab_id: String::new(),
            panel_id: String::new(),
            label_text: label_text.into(),
            badge: None,
            group_id: None,
            is_active: false,
            value,
        };
        entry.sync(ctx);
        entry
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Explicit selected flag. Only honoured outside a group; inside a group
    /// the active flag always follows the shared selection.
    pub fn selected(mut self, is_selected: bool) -> Self {
        if self.group_id.is_none() {
            self.is_active = is_selected;
        }
        self
    }

    /// Recompute ids and the active flag against the current context.
    pub fn sync(&mut self, ctx: Option<&GroupContext>) {
        match GroupContext::optional(ctx) {
            Some(ctx) => {
                self.group_id = Some(ctx.group_id.clone());
                self.tab_id = ctx.tab_id(&self.value);
                self.panel_id = ctx.panel_id(&self.value);
                self.is_active = ctx.is_active(&self.value);
            }
            None => {
                self.group_id = None;
                self.tab_id = derive_tab_id(None, &self.value);
                self.panel_id = derive_panel_id(None, &self.value);
            }
        }
    }

    /// `aria-controls` of the tab button
    pub fn aria_controls(&self) -> &str {
        &self.panel_id
    }
}

/// Content panel.
///
/// A bound panel has a value and follows the group's selection. A standalone
/// panel has an explicit id and visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub id: String,
    pub value: Option<String>,
    /// `aria-labelledby`: id of the owning tab
    pub labelled_by: Option<String>,
    pub is_selected: bool,
}

impl PanelEntry {
    /// Panel bound to a tab value. Requires a group.
    pub fn bound(ctx: Option<&GroupContext>, value: impl Into<String>) -> Result<Self> {
        let ctx = GroupContext::require(ctx, "TabPanel")?;
        let value = value.into();

        Ok(Self {
            id: ctx.panel_id(&value),
            labelled_by: Some(ctx.tab_id(&value)),
            is_selected: ctx.is_active(&value),
            value: Some(value),
        })
    }

    pub fn standalone(id: impl Into<String>, is_selected: bool) -> Self {
        Self {
            id: id.into(),
            value: None,
            labelled_by: None,
            is_selected,
        }
    }

    pub fn labelled_by(mut self, tab_id: impl Into<String>) -> Self {
        self.labelled_by = Some(tab_id.into());
        self
    }

    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_hidden(&self) -> bool {
        !self.is_selected
    }

    /// Recompute visibility for a bound panel. Standalone panels keep their
    /// externally supplied flag.
    pub fn sync(&mut self, ctx: &GroupContext) {
        if let Some(value) = &self.value {
            self.id = ctx.panel_id(value);
            self.labelled_by = Some(ctx.tab_id(value));
            self.is_selected = ctx.is_active(value);
        }
    }

    pub fn set_selected(&mut self, is_selected: bool) {
        if self.value.is_none() {
            self.is_selected = is_selected;
        }
    }
}
