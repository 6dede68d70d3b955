#![forbid(unsafe_code)]

//! Declarative menu fixtures.
//!
//! A compact JSON schema for the menu structures exercised by tests:
//!
//! ```json
//! {
//!   "label": "Main Navigation",
//!   "items": [
//!     { "text": "Home", "href": "/home" },
//!     { "text": "About", "items": [
//!       { "text": "Team" },
//!       { "text": "History" }
//!     ]},
//!     { "separator": true },
//!     { "text": "Contact" }
//!   ]
//! }
//! ```
//!
//! `href` defaults to `"#"` (a placeholder link that never commits
//! navigation). `wrap` inserts a transparent wrapper element around the
//! link, and `graphic` prepends an icon child to it — both exist to
//! exercise the scanner's structural tolerance.

use serde::{Deserialize, Serialize};

use crate::synthetic::{NodeSpec, SyntheticTree};
use navkit_core::node::NodeId;

/// Top-level fixture: one menubar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFixture {
    /// Accessible label for the menubar; defaults to whatever the
    /// controller's configuration supplies when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Top-level items in document order.
    pub items: Vec<ItemFixture>,
}

/// One item, possibly with a nested submenu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFixture {
    /// Visible link text. Items without text (and not separators) are
    /// skipped.
    #[serde(default)]
    pub text: Option<String>,
    /// Navigation target; defaults to `"#"`.
    #[serde(default)]
    pub href: Option<String>,
    /// Nested submenu items.
    #[serde(default)]
    pub items: Vec<ItemFixture>,
    /// Render as a separator instead of a link.
    #[serde(default)]
    pub separator: bool,
    /// Wrap the link in a transparent element.
    #[serde(default)]
    pub wrap: bool,
    /// Prepend an icon child to the link.
    #[serde(default)]
    pub graphic: bool,
}

impl ItemFixture {
    /// A plain link item.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A trigger item with a nested submenu.
    #[must_use]
    pub fn submenu(text: impl Into<String>, items: Vec<ItemFixture>) -> Self {
        Self {
            text: Some(text.into()),
            items,
            ..Self::default()
        }
    }

    /// A separator.
    #[must_use]
    pub fn rule() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }
}

impl MenuFixture {
    /// Build the synthetic host tree this fixture describes.
    ///
    /// Returns the tree and the mount root (a wrapper element above the
    /// list, as a host page would have).
    #[must_use]
    pub fn build(&self) -> (SyntheticTree, NodeId) {
        let mut list = NodeSpec::list();
        if let Some(label) = &self.label {
            list = list.with_label(label.clone());
        }
        for item in &self.items {
            list = list.child(item_spec(item));
        }
        SyntheticTree::build(NodeSpec::wrapper().child(list))
    }
}

fn item_spec(item: &ItemFixture) -> NodeSpec {
    if item.separator || item.text.is_none() {
        return NodeSpec::item();
    }
    let text = item.text.clone().unwrap_or_default();
    let href = item.href.clone().unwrap_or_else(|| "#".to_string());

    let mut link = NodeSpec::link(text, href);
    if item.graphic {
        // The icon is the link's first element child; text content sits
        // beside it, exactly like an inlined SVG in real markup.
        link = link.child(NodeSpec::graphic());
    }

    let link = if item.wrap {
        NodeSpec::wrapper().child(link)
    } else {
        link
    };

    let mut spec = NodeSpec::item().child(link);
    if !item.items.is_empty() {
        let mut submenu = NodeSpec::list();
        for child in &item.items {
            submenu = submenu.child(item_spec(child));
        }
        spec = spec.child(submenu);
    }
    spec
}

/// Parse a [`MenuFixture`] from JSON and build its tree.
pub fn from_json(json: &str) -> Result<(SyntheticTree, NodeId), serde_json::Error> {
    let fixture: MenuFixture = serde_json::from_str(json)?;
    Ok(fixture.build())
}
