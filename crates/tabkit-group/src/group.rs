//! Tab Group
//!
//! A mounted group: unique id, variant and the selection it owns.

use std::fmt;

use crate::context::{GroupContext, TabVariant};
use crate::identity::{GroupLease, GroupRegistry, IdAllocator};
use crate::selection::{Activation, ChangeListener, Selection, SelectionMode};
use crate::Result;

/// Options recognised when mounting a group.
#[derive(Default)]
pub struct GroupOptions {
    pub variant: TabVariant,
    /// Seed for uncontrolled mode; ignored when `value` is set
    pub default_active_tab: Option<String>,
    /// Controlled value; its presence selects controlled mode
    pub value: Option<String>,
    pub on_change: Option<ChangeListener>,
}

impl GroupOptions {
    pub fn uncontrolled(default_active_tab: impl Into<String>) -> Self {
        Self {
            default_active_tab: Some(default_active_tab.into()),
            ..Self::default()
        }
    }

    pub fn controlled(value: impl Into<String>, on_change: Option<ChangeListener>) -> Self {
        Self {
            value: Some(value.into()),
            on_change,
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: TabVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn on_change(mut self, on_change: ChangeListener) -> Self {
        self.on_change = Some(on_change);
        self
    }
}

impl fmt::Debug for GroupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupOptions")
            .field("variant", &self.variant)
            .field("default_active_tab", &self.default_active_tab)
            .field("value", &self.value)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct TabGroup {
    lease: GroupLease,
    variant: TabVariant,
    selection: Selection,
}

impl TabGroup {
    /// Allocate an id, claim it in `registry` and create the selection.
    pub fn mount(
        ids: &dyn IdAllocator,
        registry: &GroupRegistry,
        options: GroupOptions,
    ) -> Result<Self> {
        let lease = registry.register(ids.next_group_id())?;
        let selection = Selection::new(options.value, options.default_active_tab, options.on_change);

        tracing::info!(
            group_id = %lease.group_id(),
            variant = %options.variant,
            mode = %selection.mode(),
            active = %selection.current_value(),
            "Mounted tab group"
        );

        Ok(Self {
            lease,
            variant: options.variant,
            selection,
        })
    }

    pub fn group_id(&self) -> &str {
        self.lease.group_id()
    }

    pub fn variant(&self) -> TabVariant {
        self.variant
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_value(&self) -> &str {
        self.selection.current_value()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.selection.is_active(value)
    }

    /// Snapshot handed to tab and panel constructors.
    pub fn context(&self) -> GroupContext {
        GroupContext::new(self.group_id(), self.variant, self.current_value())
    }

    pub fn activate(&mut self, value: &str) -> Activation {
        let activation = self.selection.activate(value);
        tracing::debug!(
            group_id = %self.group_id(),
            value = %value,
            applied = activation.applied,
            "Tab activated"
        );
        activation
    }

    pub fn set_controlled_value(&mut self, value: impl Into<String>) -> bool {
        self.selection.set_controlled_value(value)
    }

    pub fn sync_external(&mut self, value: Option<&str>) {
        self.selection.sync_external(value);
    }

    pub fn set_variant(&mut self, variant: TabVariant) {
        self.variant = variant;
    }

    /// Swap the change listener on re-render. The mode stays as mounted.
    pub fn set_on_change(&mut self, on_change: Option<ChangeListener>) {
        let had_listener = self.selection.has_listener();
        self.selection.set_listener(on_change);
        tracing::debug!(
            group_id = %self.group_id(),
            had_listener,
            has_listener = self.selection.has_listener(),
            "Change listener replaced"
        );
    }
}

impl Drop for TabGroup {
    fn drop(&mut self) {
        tracing::debug!(group_id = %self.group_id(), "Unmounted tab group");
    }
}
