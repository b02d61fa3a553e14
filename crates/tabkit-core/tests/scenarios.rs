use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tabkit_core::{
    validate, Config, Container, CoreError, Effect, ElementKind, GroupRegistry, Node, SelectionMode,
    SequentialIds, Tabs, TabsError, TabsInput,
};

fn key(key: &str, focused: Option<usize>) -> TabsInput {
    TabsInput::Key {
        key: key.to_string(),
        focused,
    }
}

fn active_flags(tabs: &Tabs) -> Vec<bool> {
    tabs.tab_attributes().iter().map(|a| a.is_active).collect()
}

#[test]
fn default_active_tab_then_activate() {
    let mut tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .default_active_tab("tab2")
        .tab("tab1", "Tab 1")
        .tab("tab2", "Tab 2")
        .tab("tab3", "Tab 3")
        .build()
        .unwrap();

    assert_eq!(active_flags(&tabs), vec![false, true, false]);

    tabs.activate("tab3");
    assert!(tabs.is_active("tab3"));
    assert!(!tabs.is_active("tab2"));
    assert_eq!(active_flags(&tabs), vec![false, false, true]);
}

#[test]
fn controlled_value_wins_over_default() {
    let tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .value("tab5")
        .default_active_tab("tab2")
        .tab("tab2", "Tab 2")
        .tab("tab5", "Tab 5")
        .build()
        .unwrap();

    assert_eq!(tabs.mode(), SelectionMode::Controlled);
    assert_eq!(tabs.active_value(), "tab5");
}

#[test]
fn controlled_activation_waits_for_owner() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .value("tab1")
        .on_change(move |value| sink.borrow_mut().push(value.to_string()))
        .tab("tab1", "Tab 1")
        .tab("tab2", "Tab 2")
        .panel("tab1")
        .panel("tab2")
        .build()
        .unwrap();

    let dispatch = tabs.handle(TabsInput::Click {
        value: "tab2".to_string(),
    });
    assert_eq!(
        dispatch.effects,
        vec![Effect::SelectionProposed {
            value: "tab2".to_string()
        }]
    );
    assert_eq!(*seen.borrow(), vec!["tab2".to_string()]);
    assert_eq!(tabs.active_value(), "tab1");
    assert!(tabs.panel_attributes()[1].hidden);

    assert!(tabs.set_controlled_value("tab2"));
    assert_eq!(tabs.active_value(), "tab2");
    assert!(!tabs.panel_attributes()[1].hidden);
    assert!(tabs.panel_attributes()[0].hidden);
}

#[test]
fn uncontrolled_notifies_and_applies() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .on_change(move |value| sink.borrow_mut().push(value.to_string()))
        .tab("a", "A")
        .tab("b", "B")
        .build()
        .unwrap();

    assert_eq!(tabs.active_value(), "");
    tabs.activate("b");
    assert_eq!(tabs.active_value(), "b");
    assert_eq!(*seen.borrow(), vec!["b".to_string()]);

    // late external value does not turn the group controlled
    tabs.sync_external(Some("a"));
    assert_eq!(tabs.mode(), SelectionMode::Uncontrolled);
    assert_eq!(tabs.active_value(), "b");
}

#[test]
fn two_groups_with_same_value_get_distinct_ids() {
    let ids = Arc::new(SequentialIds::new("page"));
    let registry = GroupRegistry::new();

    let first = Tabs::builder()
        .allocator(ids.clone())
        .registry(registry.clone())
        .tab("overview", "Overview")
        .panel("overview")
        .build()
        .unwrap();
    let second = Tabs::builder()
        .allocator(ids)
        .registry(registry.clone())
        .tab("overview", "Overview")
        .panel("overview")
        .build()
        .unwrap();

    assert_ne!(first.group_id(), second.group_id());
    assert_eq!(registry.live_count(), 2);

    let a = &first.tab_attributes()[0];
    let b = &second.tab_attributes()[0];
    assert_ne!(a.tab_id, b.tab_id);
    assert_ne!(a.panel_id, b.panel_id);

    // panels point back at their own group's tab
    assert_eq!(first.panel_attributes()[0].aria_labelled_by.as_deref(), Some(a.tab_id.as_str()));
    assert_eq!(second.panel_attributes()[0].aria_labelled_by.as_deref(), Some(b.tab_id.as_str()));
    assert_eq!(a.aria_controls, first.panel_attributes()[0].id);

    drop(first);
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn groups_from_one_config_coexist() {
    let config = Config {
        id_prefix: "nav".to_string(),
        ..Config::default()
    };

    let first = Tabs::with_config(&config)
        .tab("overview", "Overview")
        .panel("overview")
        .build()
        .unwrap();
    let second = Tabs::with_config(&config)
        .tab("overview", "Overview")
        .panel("overview")
        .build()
        .unwrap();

    assert!(first.group_id().starts_with("nav-"));
    assert!(second.group_id().starts_with("nav-"));
    assert_ne!(first.group_id(), second.group_id());
    assert_ne!(first.tab_attributes()[0].tab_id, second.tab_attributes()[0].tab_id);
    assert_ne!(first.panel_attributes()[0].id, second.panel_attributes()[0].id);
}

#[test]
fn default_builders_coexist() {
    let first = Tabs::builder().tab("a", "A").build().unwrap();
    let second = Tabs::builder().tab("a", "A").build().unwrap();
    let third = Tabs::with_config(&Config::default()).tab("a", "A").build().unwrap();

    assert_ne!(first.group_id(), second.group_id());
    assert_ne!(second.group_id(), third.group_id());
    assert_ne!(first.group_id(), third.group_id());
}

#[test]
fn next_on_last_tab_wraps_to_first() {
    let mut tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .tab("tab1", "Tab 1")
        .tab("tab2", "Tab 2")
        .tab("tab3", "Tab 3")
        .build()
        .unwrap();

    let dispatch = tabs.handle(key("ArrowRight", Some(2)));
    assert!(dispatch.claimed);
    assert_eq!(dispatch.effects.last(), Some(&Effect::Focus { index: 0 }));

    let focusable: Vec<usize> = tabs
        .tab_attributes()
        .iter()
        .enumerate()
        .filter(|(_, a)| a.tab_index.is_focusable())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(focusable, vec![0]);
}

#[test]
fn focus_moves_never_change_selection() {
    let mut tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .default_active_tab("tab1")
        .tab("tab1", "Tab 1")
        .tab("tab2", "Tab 2")
        .tab("tab3", "Tab 3")
        .build()
        .unwrap();

    let mut focused = Some(0);
    for k in ["ArrowRight", "ArrowRight", "ArrowLeft", "End", "Home", "ArrowLeft"] {
        let dispatch = tabs.handle(key(k, focused));
        if let Some(Effect::Focus { index }) = dispatch.effects.last() {
            focused = Some(*index);
        }
        assert_eq!(tabs.active_value(), "tab1");
        let zeros = tabs
            .tab_attributes()
            .iter()
            .filter(|a| a.tab_index.value() == 0)
            .count();
        assert_eq!(zeros, 1);
    }
    assert_eq!(focused, Some(2));
}

#[test]
fn empty_strip_ignores_movement() {
    let mut tabs = Tabs::builder().registry(GroupRegistry::new()).build().unwrap();
    for k in ["ArrowRight", "ArrowLeft", "Home", "End"] {
        let dispatch = tabs.handle(key(k, None));
        assert!(dispatch.effects.is_empty());
    }
    assert!(tabs.tab_attributes().is_empty());
}

#[test]
fn composition_violation_fails_at_build() {
    let result = Tabs::builder()
        .registry(GroupRegistry::new())
        .tab("a", "A")
        .child(Node::other("Footer"))
        .build();

    match result {
        Err(CoreError::Tabs(TabsError::StructuralViolation { kind, .. })) => assert_eq!(kind, "Footer"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected a structural violation"),
    }

    let strip = Tabs::builder()
        .registry(GroupRegistry::new())
        .strip_child(Node::Element(ElementKind::TabPanel))
        .build();
    assert!(strip.is_err());
}

#[test]
fn text_children_are_accepted() {
    assert!(validate(Container::Group, &[Node::Text("intro".to_string())]).is_ok());

    let tabs = Tabs::builder()
        .registry(GroupRegistry::new())
        .tab("a", "A")
        .child(Node::Text("intro".to_string()))
        .strip_child(Node::Text("|".to_string()))
        .build();
    assert!(tabs.is_ok());
}
