#![forbid(unsafe_code)]

//! Abstract host-tree interface.
//!
//! The menubar controller never touches a concrete display tree. It walks an
//! abstract node graph through [`HostTree`] — children, siblings, a role
//! query — and writes its output (roles, expansion flags, focusability,
//! popup placement) back through the same trait. A boundary adapter
//! implements `HostTree` over the real tree; tests implement it over a
//! synthetic one.
//!
//! # Design Notes
//!
//! - [`NodeId`] is an opaque handle minted by the host. The controller
//!   only stores and compares ids; it never fabricates them.
//! - [`NodeKind`] is *structural* (what the markup is); [`Role`] is
//!   *semantic* (what the scanner decided it means). The scanner derives
//!   roles from kinds once at mount.
//! - Every write method must be idempotent: setting an attribute to its
//!   current value is a no-op for the host.

use crate::geometry::Rect;

/// Opaque handle to a host tree node.
///
/// Stable for the node's lifetime; minted by the host, never by the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node id from a host-assigned raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw host-assigned value.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// Structural classification of a host node, prior to any role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A list container (`<ul>`-like). Candidate menu or menubar.
    List,
    /// A list item wrapper (`<li>`-like). Candidate menuitem or separator.
    Item,
    /// A hyperlink (`<a>`-like). The interactive part of a menuitem.
    Link,
    /// An icon or graphic (`<svg>`-like). Never descended into.
    Graphic,
    /// Anything else. Transparent to discovery: the scanner recurses
    /// through it into its children.
    Other,
}

/// Semantic role assigned onto the host tree by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The top-level (depth 0) container of menu items.
    Menubar,
    /// A container of items nested under a triggering item (depth >= 1).
    Menu,
    /// An interactive item inside a menu or menubar.
    MenuItem,
    /// A non-interactive divider between items.
    Separator,
    /// A wrapper with no semantics of its own (ARIA `none`).
    Presentation,
}

impl Role {
    /// The role marker string written onto the host tree.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menubar => "menubar",
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::Separator => "separator",
            Self::Presentation => "none",
        }
    }

    /// Whether this role denotes a container of menu items.
    #[must_use]
    pub const fn is_menu_container(&self) -> bool {
        matches!(self, Self::Menubar | Self::Menu)
    }
}

/// Layout direction of a menu's item group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left-to-right (the menubar itself).
    Horizontal,
    /// Items flow top-to-bottom (every popup and popout).
    Vertical,
}

impl Orientation {
    /// Whether this orientation is horizontal.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Styling hooks the controller toggles on the menubar root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The widget (or one of its menus) currently holds input focus.
    /// DOM hosts typically render this as a `focus` class.
    Focus,
    /// A top-level popup was intentionally opened and arrow navigation
    /// should keep re-opening popups as focus moves along the menubar.
    /// DOM hosts typically render this as a `data-menubar-item-expanded`
    /// attribute.
    Expanded,
}

/// Where an opened popup container is placed relative to its trigger.
///
/// Offsets are in host pixels, relative to the trigger's border box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Below the trigger, left-aligned. Used for menubar triggers.
    Below {
        /// Distance from the trigger's top edge to the popup's top edge.
        top: f32,
        /// Stacking order for the popup container.
        z_index: i32,
    },
    /// To the right of the trigger, top-aligned. Used for popup and
    /// popout triggers.
    Beside {
        /// Distance from the trigger's left edge to the popup's left edge.
        left: f32,
        /// Stacking order for the popup container.
        z_index: i32,
    },
}

impl Placement {
    /// Left offset in pixels.
    #[must_use]
    pub const fn left(&self) -> f32 {
        match self {
            Self::Below { .. } => 0.0,
            Self::Beside { left, .. } => *left,
        }
    }

    /// Top offset in pixels.
    #[must_use]
    pub const fn top(&self) -> f32 {
        match self {
            Self::Below { top, .. } => *top,
            Self::Beside { .. } => 0.0,
        }
    }

    /// Stacking order.
    #[must_use]
    pub const fn z_index(&self) -> i32 {
        match self {
            Self::Below { z_index, .. } | Self::Beside { z_index, .. } => *z_index,
        }
    }
}

// ---------------------------------------------------------------------------
// HostTree
// ---------------------------------------------------------------------------

/// Capability for reading and mutating the host's display tree.
///
/// The controller holds no reference to the host; every operation receives
/// `&mut impl HostTree` from the boundary adapter and completes
/// synchronously. All mutation methods are expected to be idempotent.
pub trait HostTree {
    // -- Traversal ----------------------------------------------------------

    /// First child of `node` in document order.
    fn first_child(&self, node: NodeId) -> Option<NodeId>;

    /// Next sibling of `node` in document order.
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Previous sibling of `node` in document order.
    fn prev_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Parent of `node`, `None` at the tree root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Structural kind of `node`.
    fn kind(&self, node: NodeId) -> NodeKind;

    // -- Semantic reads -----------------------------------------------------

    /// Role previously assigned to `node`, if any.
    fn role(&self, node: NodeId) -> Option<Role>;

    /// Accessible label of `node`, if the host carries one.
    fn label(&self, node: NodeId) -> Option<String>;

    /// Visible text content of `node` and its subtree.
    fn text(&self, node: NodeId) -> String;

    /// Explicit orientation override on `node`, if the host carries one.
    fn orientation_hint(&self, node: NodeId) -> Option<Orientation> {
        let _ = node;
        None
    }

    /// Whether `node` is marked as owning a popup.
    fn has_popup(&self, node: NodeId) -> bool;

    /// Whether `node`'s popup is marked open.
    fn is_expanded(&self, node: NodeId) -> bool;

    /// Navigation target of `node`, when it is a link.
    fn hyperlink(&self, node: NodeId) -> Option<String>;

    /// Border box of `node` in host pixels. Used for popup placement.
    fn bounds(&self, node: NodeId) -> Rect;

    // -- Semantic writes ----------------------------------------------------

    /// Assign a role marker to `node`.
    fn set_role(&mut self, node: NodeId, role: Role);

    /// Assign an accessible label to `node`.
    fn set_label(&mut self, node: NodeId, label: &str);

    /// Mark whether `node` owns a popup.
    fn set_has_popup(&mut self, node: NodeId, value: bool);

    /// Mark whether `node`'s popup is open.
    fn set_expanded(&mut self, node: NodeId, value: bool);

    /// Set the focusability index of `node` (0 focusable, -1 not).
    fn set_tab_index(&mut self, node: NodeId, index: i32);

    /// Toggle a styling marker on `node`.
    fn set_marker(&mut self, node: NodeId, marker: Marker, on: bool);

    // -- Popups, focus, activation ------------------------------------------

    /// Make a popup container visible at the given placement.
    fn show_popup(&mut self, menu: NodeId, placement: Placement);

    /// Hide a popup container.
    fn hide_popup(&mut self, menu: NodeId);

    /// Move host input focus to `node`.
    fn focus(&mut self, node: NodeId);

    /// Commit `node`'s default action (follow the link).
    fn activate(&mut self, node: NodeId);

    // -- Listener lifecycle -------------------------------------------------

    /// Attach per-item input listeners (keydown, capture-phase click) to
    /// `item`, routing them back into the controller.
    fn bind_item(&mut self, item: NodeId);

    /// Detach the listeners attached by [`bind_item`](Self::bind_item).
    fn unbind_item(&mut self, item: NodeId);

    /// Attach root-level listeners (focusin/focusout on the menu root and
    /// the capture-phase document pointerdown used for outside dismissal).
    fn bind_root(&mut self, root: NodeId);

    /// Detach the listeners attached by [`bind_root`](Self::bind_root).
    fn unbind_root(&mut self, root: NodeId);

    // -- Provided -----------------------------------------------------------

    /// Whether `node` is `ancestor` or lies inside its subtree.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = self.parent(n);
        }
        false
    }
}

/// Collect the descendants of `root` in document (pre-order) order.
///
/// `root` itself is excluded.
pub fn descendants<H: HostTree + ?Sized>(host: &H, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    if let Some(first) = host.first_child(root) {
        stack.push(first);
    }
    while let Some(node) = stack.pop() {
        out.push(node);
        // Push the sibling first so the child is visited before it.
        if let Some(sibling) = host.next_sibling(node) {
            stack.push(sibling);
        }
        if let Some(child) = host.first_child(node) {
            stack.push(child);
        }
    }
    out
}
