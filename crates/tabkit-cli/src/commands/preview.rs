//! Attribute preview for a single group
use anyhow::{bail, Context};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use tabkit_core::{Config, FocusDirection, PanelAttributes, TabAttributes, Tabs};

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// JSON config file (variant, orientation, id prefix, default tab)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tab as `value` or `value=Label`; repeat for each tab
    #[arg(long = "tab", required = true)]
    pub tabs: Vec<String>,

    /// Active tab, overrides the config default
    #[arg(long)]
    pub active: Option<String>,

    /// Focus movement (next, previous, first, last) applied from the
    /// focusable tab; repeat to chain
    #[arg(long = "move")]
    pub moves: Vec<FocusDirection>,
}

#[derive(Debug, Serialize)]
struct PreviewOutput {
    group_id: String,
    variant: String,
    orientation: String,
    active_value: String,
    focused: Option<String>,
    tabs: Vec<TabAttributes>,
    panels: Vec<PanelAttributes>,
}

fn parse_tab(arg: &str) -> anyhow::Result<(String, String)> {
    let (value, label) = match arg.split_once('=') {
        Some((value, label)) => (value.trim(), label.trim()),
        None => (arg.trim(), arg.trim()),
    };
    if value.is_empty() {
        bail!("Tab value cannot be empty: '{}'", arg);
    }
    Ok((value.to_string(), label.to_string()))
}

pub fn run(args: &PreviewArgs) -> anyhow::Result<String> {
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let mut builder = Tabs::with_config(&config);
    if let Some(active) = &args.active {
        builder = builder.default_active_tab(active.clone());
    }
    for arg in &args.tabs {
        let (value, label) = parse_tab(arg)?;
        builder = builder.tab(value.clone(), label).panel(value);
    }
    let mut tabs = builder.build()?;

    for direction in &args.moves {
        let focused = tabs.roving().focusable();
        tabs.move_focus(*direction, focused);
    }
    let focused = tabs
        .roving()
        .focusable()
        .and_then(|index| tabs.tabs().get(index))
        .map(|tab| tab.value.clone());

    let output = PreviewOutput {
        group_id: tabs.group_id().to_string(),
        variant: tabs.variant().to_string(),
        orientation: tabs.orientation().to_string(),
        active_value: tabs.active_value().to_string(),
        focused,
        tabs: tabs.tab_attributes(),
        panels: tabs.panel_attributes(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
