//! Composition rules for groups and strips
//!
//! | Container | Permitted elements          |
//! |-----------|-----------------------------|
//! | Group     | TabStrip, TabPanel, Tab     |
//! | Strip     | Tab                         |
//!
//! Leaves (text, numbers, booleans, empty slots) are always permitted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TabsError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Tab,
    TabStrip,
    TabPanel,
    /// Anything else, tagged with its type name
    Other(String),
}

impl ElementKind {
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Tab => "Tab",
            ElementKind::TabStrip => "TabStrip",
            ElementKind::TabPanel => "TabPanel",
            ElementKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Child descriptor handed to the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
    Element(ElementKind),
}

impl Node {
    pub fn element(kind: ElementKind) -> Self {
        Node::Element(kind)
    }

    pub fn other(name: impl Into<String>) -> Self {
        Node::Element(ElementKind::Other(name.into()))
    }

    pub fn kind(&self) -> Option<&ElementKind> {
        match self {
            Node::Element(kind) => Some(kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Group,
    Strip,
}

impl Container {
    pub fn name(&self) -> &'static str {
        match self {
            Container::Group => "TabsGroup",
            Container::Strip => "TabStrip",
        }
    }

    pub fn permits(&self, kind: &ElementKind) -> bool {
        match self {
            Container::Group => matches!(
                kind,
                ElementKind::Tab | ElementKind::TabStrip | ElementKind::TabPanel
            ),
            Container::Strip => matches!(kind, ElementKind::Tab),
        }
    }

    fn allowed(&self) -> &'static str {
        match self {
            Container::Group => "TabStrip, TabPanel, and Tab",
            Container::Strip => "Tab components or text nodes",
        }
    }
}

/// Reject the first element whose kind `container` does not permit.
pub fn validate(container: Container, children: &[Node]) -> Result<()> {
    for kind in children.iter().filter_map(Node::kind) {
        if !container.permits(kind) {
            tracing::error!(
                container = container.name(),
                kind = %kind,
                "Structural violation"
            );
            return Err(TabsError::StructuralViolation {
                container: container.name().to_string(),
                allowed: container.allowed().to_string(),
                kind: kind.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Runs [`validate`] only when the element kinds of a container change.
#[derive(Debug, Clone)]
pub struct CompositionGuard {
    container: Container,
    validated: Option<Vec<ElementKind>>,
}

impl CompositionGuard {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            validated: None,
        }
    }

    pub fn container(&self) -> Container {
        self.container
    }

    /// Returns `Ok(true)` if validation actually ran.
    pub fn check(&mut self, children: &[Node]) -> Result<bool> {
        let signature: Vec<ElementKind> = children.iter().filter_map(Node::kind).cloned().collect();

        if self.validated.as_ref() == Some(&signature) {
            return Ok(false);
        }

        validate(self.container, children)?;
        self.validated = Some(signature);
        Ok(true)
    }
}
