#![forbid(unsafe_code)]

//! Per-menu metadata store.
//!
//! Populated once by the scanner at mount, then read on every interaction.
//! Menus are keyed by a [`MenuId`] derived from the container's role and
//! accessible label, so the same identifier can be re-derived from any node
//! inside the menu later.

use std::fmt;

use navkit_core::node::{NodeId, Orientation, Role};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Stable identifier of one menu's item group.
///
/// Derived as `role "-" slug(label)`, e.g. `menubar-main-navigation` or
/// `menu-about-us`. Stable for the menu's lifetime because roles and labels
/// are assigned once at mount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(String);

impl MenuId {
    /// Derive the identifier for a menu container from its role and
    /// accessible label.
    #[must_use]
    pub fn derive(role: Role, label: &str) -> Self {
        Self(format!("{}-{}", role.as_str(), slug(label)))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn an accessible label into an identifier fragment.
///
/// Trims, lowercases, and replaces every space and slash with a dash.
fn slug(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace([' ', '/'], "-")
}

/// Classification of a menu by its position in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// The menubar itself (depth 0).
    Root,
    /// A menu directly under the menubar (depth 1).
    Popup,
    /// A menu nested under a popup (depth > 1).
    Popout,
}

impl MenuKind {
    /// Whether this is the top-level menubar.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Registered metadata for one menu container.
///
/// Orientation and classification are computed once at registration and
/// never change afterwards.
#[derive(Debug, Clone)]
pub struct MenuRecord {
    /// Derived identifier.
    pub id: MenuId,
    /// The menu's container node.
    pub node: NodeId,
    /// Nesting depth; 0 is the menubar root.
    pub depth: usize,
    /// Layout direction of the item group.
    pub orientation: Orientation,
    /// Root / popup / popout classification.
    pub kind: MenuKind,
    /// Item nodes in document order.
    items: SmallVec<[NodeId; 8]>,
    /// Lowercase first character of each item's label, parallel to `items`.
    first_chars: SmallVec<[Option<char>; 8]>,
}

impl MenuRecord {
    /// Item nodes in document order.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// First item of the group.
    #[must_use]
    pub fn first_item(&self) -> Option<NodeId> {
        self.items.first().copied()
    }

    /// Last item of the group.
    #[must_use]
    pub fn last_item(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    /// Position of `item` within the group.
    #[must_use]
    pub fn index_of(&self, item: NodeId) -> Option<usize> {
        self.items.iter().position(|n| *n == item)
    }

    /// Item at `index`, if in range.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    /// Number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item at or after `start` whose label begins with
    /// `ch` (already lowercased by the caller).
    #[must_use]
    pub fn first_char_match(&self, start: usize, ch: char) -> Option<usize> {
        self.first_chars
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, fc)| **fc == Some(ch))
            .map(|(i, _)| i)
    }
}

/// Registered metadata for one menu item.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    /// The item node.
    pub node: NodeId,
    /// Identifier of the owning menu.
    pub menu: MenuId,
    /// Display label (the item's visible text).
    pub label: String,
    /// Lowercase first character of the label, for type-ahead.
    pub first_char: Option<char>,
    /// Whether this item owns a submenu.
    pub has_popup: bool,
    /// The submenu's container node, when `has_popup`.
    pub submenu: Option<NodeId>,
}

/// Lowercase first character of a label, for the type-ahead index.
///
/// Takes the first grapheme cluster of the trimmed label and lowercases it;
/// the first scalar of the result is the index key.
#[must_use]
pub(crate) fn first_char(label: &str) -> Option<char> {
    let grapheme = label.trim().graphemes(true).next()?;
    grapheme.to_lowercase().chars().next()
}

// ---------------------------------------------------------------------------
// MenuRegistry
// ---------------------------------------------------------------------------

/// All menu and item metadata discovered by one scan.
///
/// An empty registry is the inert state: every controller operation against
/// it is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    menus: FxHashMap<MenuId, MenuRecord>,
    items: FxHashMap<NodeId, ItemRecord>,
    /// Trigger item for each submenu container node.
    triggers: FxHashMap<NodeId, NodeId>,
    /// Items that own popups, in document order.
    popup_triggers: Vec<NodeId>,
    /// Identifier of the menubar root group.
    root: Option<MenuId>,
}

impl MenuRegistry {
    /// Whether the scan found no menu structure at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Number of registered menus.
    #[must_use]
    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    /// Look up a menu by identifier.
    #[must_use]
    pub fn menu(&self, id: &MenuId) -> Option<&MenuRecord> {
        self.menus.get(id)
    }

    /// Look up an item by node.
    #[must_use]
    pub fn item(&self, node: NodeId) -> Option<&ItemRecord> {
        self.items.get(&node)
    }

    /// The menu record owning `item`.
    #[must_use]
    pub fn menu_of_item(&self, item: NodeId) -> Option<&MenuRecord> {
        self.menus.get(&self.items.get(&item)?.menu)
    }

    /// The menubar root group, when one was discovered.
    #[must_use]
    pub fn root(&self) -> Option<&MenuId> {
        self.root.as_ref()
    }

    /// Trigger item owning the submenu container `menu_node`.
    #[must_use]
    pub fn trigger_of(&self, menu_node: NodeId) -> Option<NodeId> {
        self.triggers.get(&menu_node).copied()
    }

    /// Items that own popups, in document order.
    #[must_use]
    pub fn popup_triggers(&self) -> &[NodeId] {
        &self.popup_triggers
    }

    /// Iterate all registered menus (arbitrary order).
    pub fn menus(&self) -> impl Iterator<Item = &MenuRecord> {
        self.menus.values()
    }

    pub(crate) fn register_menu(
        &mut self,
        id: MenuId,
        node: NodeId,
        depth: usize,
        orientation: Orientation,
        kind: MenuKind,
        items: SmallVec<[NodeId; 8]>,
        first_chars: SmallVec<[Option<char>; 8]>,
    ) {
        if kind.is_root() {
            self.root = Some(id.clone());
        }
        self.menus.insert(
            id.clone(),
            MenuRecord {
                id,
                node,
                depth,
                orientation,
                kind,
                items,
                first_chars,
            },
        );
    }

    pub(crate) fn register_item(&mut self, record: ItemRecord) {
        if let Some(submenu) = record.submenu {
            self.triggers.insert(submenu, record.node);
        }
        self.items.insert(record.node, record);
    }

    pub(crate) fn push_popup_trigger(&mut self, item: NodeId) {
        self.popup_triggers.push(item);
    }
}
