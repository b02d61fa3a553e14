//! Tabs coordination
//!
//! Binds one group, its strip and its panels. Clicks and key presses go in;
//! effect instructions for the view come out. The view applies them (DOM
//! focus calls, tabindex attributes) and reports back which tab holds focus
//! on the next key event.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tabkit_group::{
    Activation, Badge, ChangeListener, CompositionGuard, Container, ElementKind, GroupContext,
    GroupOptions, GroupRegistry, IdAllocator, Node, PanelEntry, SelectionMode, TabEntry, TabGroup,
    TabVariant, TabsError,
};
use tabkit_navigation::{
    FocusDirection, FocusEngine, FocusTransition, KeyOutcome, Orientation, RovingTabIndex,
    TabIndexHint,
};

use crate::config::Config;
use crate::Result;

/// Input from the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabsInput {
    /// Pointer activation of the tab with this value
    Click { value: String },
    /// Key press inside the strip; `focused` is the index of the tab that
    /// currently holds input focus, if any
    Key { key: String, focused: Option<usize> },
}

/// Instruction for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Move input focus to the tab at `index`
    Focus { index: usize },
    SetTabIndex { index: usize, hint: TabIndexHint },
    /// Uncontrolled selection changed
    SelectionChanged { value: String },
    /// Controlled selection change proposed to the owner
    SelectionProposed { value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Whether the view should suppress default handling of the event
    pub claimed: bool,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    fn ignored() -> Self {
        Self::default()
    }
}

/// Everything a view needs to render one tab button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabAttributes {
    pub value: String,
    pub label_text: String,
    pub badge: Option<Badge>,
    pub tab_id: String,
    pub panel_id: String,
    /// `aria-controls`
    pub aria_controls: String,
    /// `aria-selected`
    pub is_active: bool,
    pub tab_index: TabIndexHint,
}

/// Everything a view needs to render one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelAttributes {
    pub id: String,
    /// `aria-labelledby`
    pub aria_labelled_by: Option<String>,
    pub hidden: bool,
}

enum PendingPanel {
    Bound(String),
    Standalone { id: String, selected: bool },
}

pub struct TabsBuilder {
    config: Config,
    ids: Option<Arc<dyn IdAllocator>>,
    registry: Option<GroupRegistry>,
    value: Option<String>,
    on_change: Option<ChangeListener>,
    tabs: Vec<(String, String, Option<Badge>)>,
    panels: Vec<PendingPanel>,
    extra_children: Vec<Node>,
    strip_extras: Vec<Node>,
}

impl TabsBuilder {
    fn new(config: Config) -> Self {
        Self {
            config,
            ids: None,
            registry: None,
            value: None,
            on_change: None,
            tabs: Vec::new(),
            panels: Vec::new(),
            extra_children: Vec::new(),
            strip_extras: Vec::new(),
        }
    }

    pub fn allocator(mut self, ids: Arc<dyn IdAllocator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn registry(mut self, registry: GroupRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn variant(mut self, variant: TabVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn default_active_tab(mut self, value: impl Into<String>) -> Self {
        self.config.default_active_tab = Some(value.into());
        self
    }

    /// Controlled mode. The default active tab is ignored when this is set.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn tab(mut self, value: impl Into<String>, label_text: impl Into<String>) -> Self {
        self.tabs.push((value.into(), label_text.into(), None));
        self
    }

    pub fn tab_with_badge(
        mut self,
        value: impl Into<String>,
        label_text: impl Into<String>,
        badge: Badge,
    ) -> Self {
        self.tabs.push((value.into(), label_text.into(), Some(badge)));
        self
    }

    /// Panel bound to a tab value.
    pub fn panel(mut self, value: impl Into<String>) -> Self {
        self.panels.push(PendingPanel::Bound(value.into()));
        self
    }

    /// Panel with its own id and visibility.
    pub fn standalone_panel(mut self, id: impl Into<String>, selected: bool) -> Self {
        self.panels.push(PendingPanel::Standalone {
            id: id.into(),
            selected,
        });
        self
    }

    /// Additional children rendered directly inside the group.
    pub fn child(mut self, node: Node) -> Self {
        self.extra_children.push(node);
        self
    }

    /// Additional children rendered inside the strip.
    pub fn strip_child(mut self, node: Node) -> Self {
        self.strip_extras.push(node);
        self
    }

    /// Validate the composition and mount the group.
    pub fn build(self) -> Result<Tabs> {
        let TabsBuilder {
            config,
            ids,
            registry,
            value,
            on_change,
            tabs,
            panels,
            extra_children,
            strip_extras,
        } = self;

        let mut group_guard = CompositionGuard::new(Container::Group);
        let mut strip_guard = CompositionGuard::new(Container::Strip);
        let group_children = group_nodes(panels.len(), &extra_children);
        let strip_children = strip_nodes(tabs.len(), &strip_extras);
        group_guard.check(&group_children)?;
        strip_guard.check(&strip_children)?;

        check_unique(tabs.iter().map(|(value, _, _)| value.as_str()))?;
        config.validate()?;

        let ids = ids.unwrap_or_else(|| config.allocator());
        let registry = registry.unwrap_or_else(GroupRegistry::shared);
        let options = GroupOptions {
            variant: config.variant,
            default_active_tab: config.default_active_tab.clone(),
            value,
            on_change,
        };
        let group = TabGroup::mount(ids.as_ref(), &registry, options)?;
        let ctx = group.context();

        let tabs: Vec<TabEntry> = tabs
            .into_iter()
            .map(|(value, label, badge)| {
                let entry = TabEntry::new(Some(&ctx), value, label);
                match badge {
                    Some(badge) => entry.with_badge(badge),
                    None => entry,
                }
            })
            .collect();

        let panels = panels
            .into_iter()
            .map(|pending| match pending {
                PendingPanel::Bound(value) => PanelEntry::bound(Some(&ctx), value),
                PendingPanel::Standalone { id, selected } => Ok(PanelEntry::standalone(id, selected)),
            })
            .collect::<tabkit_group::Result<Vec<_>>>()?;

        let active_index = tabs.iter().position(|t| t.is_active);
        let roving = RovingTabIndex::new(tabs.len(), active_index);

        Ok(Tabs {
            engine: FocusEngine::new(config.orientation),
            group,
            tabs,
            panels,
            roving,
            group_guard,
            strip_guard,
            extra_children,
            strip_extras,
        })
    }
}

fn group_nodes(panel_count: usize, extras: &[Node]) -> Vec<Node> {
    let mut nodes = vec![Node::Element(ElementKind::TabStrip)];
    nodes.extend(std::iter::repeat(Node::Element(ElementKind::TabPanel)).take(panel_count));
    nodes.extend(extras.iter().cloned());
    nodes
}

fn strip_nodes(tab_count: usize, extras: &[Node]) -> Vec<Node> {
    let mut nodes: Vec<Node> = std::iter::repeat(Node::Element(ElementKind::Tab))
        .take(tab_count)
        .collect();
    nodes.extend(extras.iter().cloned());
    nodes
}

fn check_unique<'a>(values: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(TabsError::DuplicateValue {
                value: value.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// A mounted tab group with its strip and panels.
pub struct Tabs {
    group: TabGroup,
    engine: FocusEngine,
    tabs: Vec<TabEntry>,
    panels: Vec<PanelEntry>,
    roving: RovingTabIndex,
    group_guard: CompositionGuard,
    strip_guard: CompositionGuard,
    extra_children: Vec<Node>,
    strip_extras: Vec<Node>,
}

impl Tabs {
    pub fn builder() -> TabsBuilder {
        TabsBuilder::new(Config::default())
    }

    pub fn with_config(config: &Config) -> TabsBuilder {
        TabsBuilder::new(config.clone())
    }

    pub fn group_id(&self) -> &str {
        self.group.group_id()
    }

    pub fn variant(&self) -> TabVariant {
        self.group.variant()
    }

    pub fn orientation(&self) -> Orientation {
        self.engine.orientation()
    }

    pub fn mode(&self) -> SelectionMode {
        self.group.mode()
    }

    pub fn context(&self) -> GroupContext {
        self.group.context()
    }

    pub fn active_value(&self) -> &str {
        self.group.current_value()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.group.is_active(value)
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn panels(&self) -> &[PanelEntry] {
        &self.panels
    }

    pub fn tab(&self, value: &str) -> Option<&TabEntry> {
        self.tabs.iter().find(|t| t.value == value)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.value == value)
    }

    pub fn roving(&self) -> &RovingTabIndex {
        &self.roving
    }

    pub fn tab_attributes(&self) -> Vec<TabAttributes> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| TabAttributes {
                value: tab.value.clone(),
                label_text: tab.label_text.clone(),
                badge: tab.badge.clone(),
                tab_id: tab.tab_id.clone(),
                panel_id: tab.panel_id.clone(),
                aria_controls: tab.aria_controls().to_string(),
                is_active: tab.is_active,
                tab_index: self.roving.hint(i),
            })
            .collect()
    }

    pub fn panel_attributes(&self) -> Vec<PanelAttributes> {
        self.panels
            .iter()
            .map(|panel| PanelAttributes {
                id: panel.id.clone(),
                aria_labelled_by: panel.labelled_by.clone(),
                hidden: panel.is_hidden(),
            })
            .collect()
    }

    /// Activate `value`. In controlled mode this only notifies the owner.
    pub fn activate(&mut self, value: &str) -> Activation {
        let activation = self.group.activate(value);
        if activation.applied {
            self.resync();
        }
        activation
    }

    /// Move focus from `focused` and update the roving mark.
    pub fn move_focus(&mut self, direction: FocusDirection, focused: Option<usize>) -> Option<FocusTransition> {
        let transition = tabkit_navigation::move_focus(direction, focused, self.tabs.len())?;
        self.roving.apply(&transition);
        Some(transition)
    }

    /// Apply a value from the owner of a controlled group.
    pub fn set_controlled_value(&mut self, value: impl Into<String>) -> bool {
        let applied = self.group.set_controlled_value(value);
        if applied {
            self.resync();
        }
        applied
    }

    /// Re-supply the external value on re-render. Never changes the mode.
    pub fn sync_external(&mut self, value: Option<&str>) {
        self.group.sync_external(value);
        self.resync();
    }

    /// Re-render with a new styling variant.
    pub fn set_variant(&mut self, variant: TabVariant) {
        self.group.set_variant(variant);
        self.resync();
    }

    /// Replace (or clear) the change listener.
    pub fn set_on_change(&mut self, on_change: Option<impl FnMut(&str) + 'static>) {
        let listener = on_change.map(|f| Box::new(f) as ChangeListener);
        self.group.set_on_change(listener);
    }

    pub fn set_standalone_panel(&mut self, id: &str, selected: bool) {
        if let Some(panel) = self.panels.iter_mut().find(|p| !p.is_bound() && p.id == id) {
            panel.set_selected(selected);
        }
    }

    pub fn handle(&mut self, input: TabsInput) -> Dispatch {
        match input {
            TabsInput::Click { value } => {
                if self.index_of(&value).is_none() {
                    tracing::debug!(group_id = %self.group_id(), value = %value, "Click on unknown tab");
                }
                Dispatch {
                    claimed: true,
                    effects: vec![self.activation_effect(&value)],
                }
            }
            TabsInput::Key { key, focused } => {
                match self.engine.handle_key(&key, focused, self.tabs.len()) {
                    KeyOutcome::Ignored => Dispatch::ignored(),
                    KeyOutcome::Moved(None) => Dispatch {
                        claimed: true,
                        effects: Vec::new(),
                    },
                    KeyOutcome::Moved(Some(transition)) => {
                        self.roving.apply(&transition);
                        let mut effects: Vec<Effect> = transition
                            .hints()
                            .into_iter()
                            .enumerate()
                            .map(|(index, hint)| Effect::SetTabIndex { index, hint })
                            .collect();
                        effects.push(Effect::Focus {
                            index: transition.target,
                        });
                        Dispatch {
                            claimed: true,
                            effects,
                        }
                    }
                    KeyOutcome::Activate(index) => {
                        let value = self.tabs[index].value.clone();
                        Dispatch {
                            claimed: true,
                            effects: vec![self.activation_effect(&value)],
                        }
                    }
                }
            }
        }
    }

    fn activation_effect(&mut self, value: &str) -> Effect {
        let activation = self.activate(value);
        if activation.applied {
            Effect::SelectionChanged {
                value: activation.value,
            }
        } else {
            Effect::SelectionProposed {
                value: activation.value,
            }
        }
    }

    /// Add a tab at the end of the strip.
    pub fn add_tab(&mut self, value: impl Into<String>, label_text: impl Into<String>) -> Result<&TabEntry> {
        let value = value.into();
        if self.index_of(&value).is_some() {
            return Err(TabsError::DuplicateValue { value }.into());
        }

        let strip_children = strip_nodes(self.tabs.len() + 1, &self.strip_extras);
        self.strip_guard.check(&strip_children)?;

        let ctx = self.group.context();
        self.tabs.push(TabEntry::new(Some(&ctx), value, label_text));
        self.resize_strip();

        let index = self.tabs.len() - 1;
        Ok(&self.tabs[index])
    }

    /// Remove a tab (and any panel bound to it).
    pub fn remove_tab(&mut self, value: &str) -> Option<TabEntry> {
        let index = self.index_of(value)?;
        let removed = self.tabs.remove(index);
        self.panels.retain(|p| p.value.as_deref() != Some(value));
        let active_index = self.tabs.iter().position(|t| t.is_active);
        self.roving.remove(index, active_index);
        tracing::debug!(group_id = %self.group_id(), value = %value, "Removed tab");
        Some(removed)
    }

    pub fn add_panel(&mut self, value: impl Into<String>) -> Result<&PanelEntry> {
        let group_children = group_nodes(self.panels.len() + 1, &self.extra_children);
        self.group_guard.check(&group_children)?;

        let ctx = self.group.context();
        self.panels.push(PanelEntry::bound(Some(&ctx), value)?);
        let index = self.panels.len() - 1;
        Ok(&self.panels[index])
    }

    /// Replace the extra children of the group and strip. Validated once per
    /// change.
    pub fn set_children(&mut self, group_extras: Vec<Node>, strip_extras: Vec<Node>) -> Result<()> {
        self.group_guard
            .check(&group_nodes(self.panels.len(), &group_extras))?;
        self.strip_guard
            .check(&strip_nodes(self.tabs.len(), &strip_extras))?;
        self.extra_children = group_extras;
        self.strip_extras = strip_extras;
        Ok(())
    }

    fn resize_strip(&mut self) {
        let active_index = self.tabs.iter().position(|t| t.is_active);
        self.roving.resize(self.tabs.len(), active_index);
    }

    fn resync(&mut self) {
        let ctx = self.group.context();
        for tab in &mut self.tabs {
            tab.sync(Some(&ctx));
        }
        for panel in &mut self.panels {
            panel.sync(&ctx);
        }
    }
}

impl std::fmt::Debug for Tabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabs")
            .field("group", &self.group)
            .field("orientation", &self.engine.orientation())
            .field("tabs", &self.tabs.len())
            .field("panels", &self.panels.len())
            .field("roving", &self.roving)
            .finish()
    }
}
