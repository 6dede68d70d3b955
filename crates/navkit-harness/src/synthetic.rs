#![forbid(unsafe_code)]

//! Arena-backed synthetic host tree.
//!
//! Implements [`HostTree`] over a plain vector of nodes. Every mutation the
//! controller applies (roles, expansion, tabindex, popup visibility,
//! markers, focus, listener bindings) lands in inspectable fields, and
//! [`SyntheticTree::observable_state`] snapshots the externally visible
//! parts for equality assertions.

use navkit_core::geometry::Rect;
use navkit_core::node::{HostTree, Marker, NodeId, NodeKind, Orientation, Placement, Role};

/// One synthetic node.
#[derive(Debug, Clone)]
pub struct SyntheticNode {
    /// Structural kind.
    pub kind: NodeKind,
    /// Role assigned by the scanner, if any.
    pub role: Option<Role>,
    /// Accessible label.
    pub label: Option<String>,
    /// Own text content (subtree text is concatenated on query).
    pub text: String,
    /// Navigation target for link nodes.
    pub hyperlink: Option<String>,
    /// Explicit orientation override.
    pub orientation: Option<Orientation>,
    /// `aria-haspopup` mirror.
    pub has_popup: bool,
    /// `aria-expanded` mirror.
    pub expanded: bool,
    /// Roving focusability index.
    pub tab_index: i32,
    /// Border box handed to placement computations.
    pub bounds: Rect,
    /// Whether this container is currently shown as a popup.
    pub shown: bool,
    /// Placement applied by the last `show_popup`, if still shown.
    pub placement: Option<Placement>,
    /// `focus` styling marker.
    pub focus_marker: bool,
    /// Expanded-mirror marker (menubar root only).
    pub expanded_marker: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SyntheticNode {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        // Links get a plausible default border box so placement math has
        // something to work with; everything else is zero-sized.
        let bounds = match kind {
            NodeKind::Link => Rect::from_size(120.0, 40.0),
            _ => Rect::default(),
        };
        // Links are natively focusable, like anchors in a real host;
        // nothing else participates in the tab order until told to.
        let tab_index = match kind {
            NodeKind::Link => 0,
            _ => -1,
        };
        Self {
            kind,
            role: None,
            label: None,
            text: String::new(),
            hyperlink: None,
            orientation: None,
            has_popup: false,
            expanded: false,
            tab_index,
            bounds,
            shown: false,
            placement: None,
            focus_marker: false,
            expanded_marker: false,
            parent,
            children: Vec::new(),
        }
    }
}

/// Declarative node description for building synthetic trees.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    kind: NodeKind,
    text: String,
    hyperlink: Option<String>,
    label: Option<String>,
    bounds: Option<Rect>,
    children: Vec<NodeSpec>,
}

impl NodeSpec {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            hyperlink: None,
            label: None,
            bounds: None,
            children: Vec::new(),
        }
    }

    /// A list container (`<ul>`-like).
    #[must_use]
    pub fn list() -> Self {
        Self::new(NodeKind::List)
    }

    /// A list item wrapper (`<li>`-like).
    #[must_use]
    pub fn item() -> Self {
        Self::new(NodeKind::Item)
    }

    /// A hyperlink with visible text.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        let mut spec = Self::new(NodeKind::Link);
        spec.text = text.into();
        spec.hyperlink = Some(href.into());
        spec
    }

    /// An icon/graphic node (`<svg>`-like).
    #[must_use]
    pub fn graphic() -> Self {
        Self::new(NodeKind::Graphic)
    }

    /// Transparent wrapper markup (`<div>`-like).
    #[must_use]
    pub fn wrapper() -> Self {
        Self::new(NodeKind::Other)
    }

    /// Append a child (builder).
    #[must_use]
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Set an accessible label (builder).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the default border box (builder).
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Externally observable widget state, for equality assertions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservableState {
    /// Nodes with `expanded == true`, in id order.
    pub expanded: Vec<NodeId>,
    /// Containers currently shown as popups, in id order.
    pub shown: Vec<NodeId>,
    /// Nodes with tabindex 0, in id order.
    pub tab_stops: Vec<NodeId>,
    /// The node holding input focus.
    pub focused: Option<NodeId>,
}

/// Arena-backed synthetic host tree with mutation recording.
#[derive(Debug, Clone, Default)]
pub struct SyntheticTree {
    nodes: Vec<SyntheticNode>,
    /// Node holding input focus.
    pub focused: Option<NodeId>,
    /// Items activated (navigation committed), in order.
    pub activated: Vec<NodeId>,
    /// Items with listeners currently bound.
    pub bound_items: Vec<NodeId>,
    /// Roots with listeners currently bound.
    pub bound_roots: Vec<NodeId>,
    /// Total bind calls over the tree's lifetime.
    pub total_binds: usize,
    /// Total unbind calls over the tree's lifetime.
    pub total_unbinds: usize,
}

impl SyntheticTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a [`NodeSpec`], returning the tree and its root.
    #[must_use]
    pub fn build(spec: NodeSpec) -> (Self, NodeId) {
        let mut tree = Self::new();
        let root = tree.add_spec(None, spec);
        (tree, root)
    }

    /// Append a node under `parent` (or as a root when `None`).
    pub fn add_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SyntheticNode::new(kind, parent));
        if let Some(parent) = parent {
            self.nodes[parent.raw() as usize].children.push(id);
        }
        id
    }

    fn add_spec(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> NodeId {
        let id = self.add_node(parent, spec.kind);
        {
            let node = self.node_mut(id);
            node.text = spec.text;
            node.hyperlink = spec.hyperlink;
            node.label = spec.label;
            if let Some(bounds) = spec.bounds {
                node.bounds = bounds;
            }
        }
        for child in spec.children {
            self.add_spec(Some(id), child);
        }
        id
    }

    /// Immutable access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SyntheticNode {
        &self.nodes[id.raw() as usize]
    }

    /// Mutable access to a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut SyntheticNode {
        &mut self.nodes[id.raw() as usize]
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, in creation (document) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }

    /// First link node whose text equals `text`.
    #[must_use]
    pub fn find_item_by_text(&self, text: &str) -> Option<NodeId> {
        self.ids()
            .find(|id| self.node(*id).kind == NodeKind::Link && self.node(*id).text == text)
    }

    /// Nodes currently marked expanded, in id order.
    #[must_use]
    pub fn expanded_triggers(&self) -> Vec<NodeId> {
        self.ids().filter(|id| self.node(*id).expanded).collect()
    }

    /// Containers currently shown as popups, in id order.
    #[must_use]
    pub fn shown_menus(&self) -> Vec<NodeId> {
        self.ids().filter(|id| self.node(*id).shown).collect()
    }

    /// Nodes with tabindex 0, in id order.
    #[must_use]
    pub fn tab_stops(&self) -> Vec<NodeId> {
        self.ids().filter(|id| self.node(*id).tab_index == 0).collect()
    }

    /// Listener bindings still outstanding.
    #[must_use]
    pub fn outstanding_bindings(&self) -> usize {
        self.bound_items.len() + self.bound_roots.len()
    }

    /// Snapshot the externally observable state.
    #[must_use]
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            expanded: self.expanded_triggers(),
            shown: self.shown_menus(),
            tab_stops: self.tab_stops(),
            focused: self.focused,
        }
    }
}

impl HostTree for SyntheticTree {
    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).children.first().copied()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node).parent?;
        let siblings = &self.node(parent).children;
        let index = siblings.iter().position(|n| *n == node)?;
        siblings.get(index + 1).copied()
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node).parent?;
        let siblings = &self.node(parent).children;
        let index = siblings.iter().position(|n| *n == node)?;
        index.checked_sub(1).and_then(|i| siblings.get(i).copied())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        self.node(node).kind
    }

    fn role(&self, node: NodeId) -> Option<Role> {
        self.node(node).role
    }

    fn label(&self, node: NodeId) -> Option<String> {
        self.node(node).label.clone()
    }

    fn text(&self, node: NodeId) -> String {
        let mut out = self.node(node).text.clone();
        for child in self.node(node).children.clone() {
            out.push_str(&self.text(child));
        }
        out
    }

    fn orientation_hint(&self, node: NodeId) -> Option<Orientation> {
        self.node(node).orientation
    }

    fn has_popup(&self, node: NodeId) -> bool {
        self.node(node).has_popup
    }

    fn is_expanded(&self, node: NodeId) -> bool {
        self.node(node).expanded
    }

    fn hyperlink(&self, node: NodeId) -> Option<String> {
        self.node(node).hyperlink.clone()
    }

    fn bounds(&self, node: NodeId) -> Rect {
        self.node(node).bounds
    }

    fn set_role(&mut self, node: NodeId, role: Role) {
        self.node_mut(node).role = Some(role);
    }

    fn set_label(&mut self, node: NodeId, label: &str) {
        self.node_mut(node).label = Some(label.to_string());
    }

    fn set_has_popup(&mut self, node: NodeId, value: bool) {
        self.node_mut(node).has_popup = value;
    }

    fn set_expanded(&mut self, node: NodeId, value: bool) {
        self.node_mut(node).expanded = value;
    }

    fn set_tab_index(&mut self, node: NodeId, index: i32) {
        self.node_mut(node).tab_index = index;
    }

    fn set_marker(&mut self, node: NodeId, marker: Marker, on: bool) {
        match marker {
            Marker::Focus => self.node_mut(node).focus_marker = on,
            Marker::Expanded => self.node_mut(node).expanded_marker = on,
        }
    }

    fn show_popup(&mut self, menu: NodeId, placement: Placement) {
        let node = self.node_mut(menu);
        node.shown = true;
        node.placement = Some(placement);
    }

    fn hide_popup(&mut self, menu: NodeId) {
        let node = self.node_mut(menu);
        node.shown = false;
        node.placement = None;
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn activate(&mut self, node: NodeId) {
        self.activated.push(node);
    }

    fn bind_item(&mut self, item: NodeId) {
        self.bound_items.push(item);
        self.total_binds += 1;
    }

    fn unbind_item(&mut self, item: NodeId) {
        if let Some(index) = self.bound_items.iter().position(|n| *n == item) {
            self.bound_items.remove(index);
        }
        self.total_unbinds += 1;
    }

    fn bind_root(&mut self, root: NodeId) {
        self.bound_roots.push(root);
        self.total_binds += 1;
    }

    fn unbind_root(&mut self, root: NodeId) {
        if let Some(index) = self.bound_roots.iter().position(|n| *n == root) {
            self.bound_roots.remove(index);
        }
        self.total_unbinds += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> (SyntheticTree, NodeId) {
        SyntheticTree::build(
            NodeSpec::list()
                .child(NodeSpec::item().child(NodeSpec::link("Home", "/home")))
                .child(NodeSpec::item().child(NodeSpec::link("About", "/about"))),
        )
    }

    #[test]
    fn builder_wires_parents_and_siblings() {
        let (tree, root) = small_tree();
        let first_item = tree.first_child(root).unwrap();
        let second_item = tree.next_sibling(first_item).unwrap();
        assert_eq!(tree.prev_sibling(second_item), Some(first_item));
        assert_eq!(tree.parent(first_item), Some(root));
        assert_eq!(tree.next_sibling(second_item), None);
    }

    #[test]
    fn text_concatenates_the_subtree() {
        let (tree, root) = small_tree();
        let first_item = tree.first_child(root).unwrap();
        assert_eq!(tree.text(first_item), "Home");
    }

    #[test]
    fn find_item_by_text_locates_links() {
        let (tree, _) = small_tree();
        let about = tree.find_item_by_text("About").unwrap();
        assert_eq!(tree.node(about).kind, NodeKind::Link);
        assert!(tree.find_item_by_text("Missing").is_none());
    }

    #[test]
    fn bindings_are_recorded() {
        let (mut tree, root) = small_tree();
        let home = tree.find_item_by_text("Home").unwrap();
        tree.bind_item(home);
        tree.bind_root(root);
        assert_eq!(tree.outstanding_bindings(), 2);
        tree.unbind_item(home);
        tree.unbind_root(root);
        assert_eq!(tree.outstanding_bindings(), 0);
        assert_eq!(tree.total_binds, tree.total_unbinds);
    }

    #[test]
    fn observable_state_snapshots_compare() {
        let (mut tree, _) = small_tree();
        let before = tree.observable_state();
        let home = tree.find_item_by_text("Home").unwrap();
        tree.set_expanded(home, true);
        assert_ne!(before, tree.observable_state());
        tree.set_expanded(home, false);
        assert_eq!(before, tree.observable_state());
    }
}
