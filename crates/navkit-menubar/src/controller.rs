#![forbid(unsafe_code)]

//! The menubar controller: one value owning all per-widget state.
//!
//! A [`MenubarController`] is created per mounted widget. `mount` runs
//! discovery and binds listeners; every subsequent host event is routed in
//! by the boundary adapter as a method call and processed synchronously to
//! completion. `teardown` unbinds exactly what `mount` bound.
//!
//! # Invariants
//!
//! 1. Roving focus: within any menu group the controller has touched,
//!    exactly one item is focusable at rest.
//! 2. Open chain: the set of open popups always forms one unbroken
//!    ancestor path from a top-level trigger down to at most one leaf
//!    popout; sibling branches are never open simultaneously.
//! 3. Listener symmetry: every listener bound at mount (or per-item
//!    registration) is unbound exactly once at teardown.

use navkit_core::node::{HostTree, Marker, NodeId};

use crate::registry::{MenuId, MenuRegistry};
use crate::scan::{decorate, find_root_list, scan};

/// Tunable constants for one menubar instance.
///
/// Defaults mirror the widely deployed behavior of the pattern: popups open
/// 8 px below menubar triggers, popouts 10 px to the right of their
/// trigger, both stacked at z-index 100.
#[derive(Debug, Clone)]
pub struct MenubarConfig {
    /// Accessible label applied to the menubar when the host provides none.
    pub nav_label: String,
    /// Gap in pixels between a menubar trigger and its popup.
    pub below_gap: f32,
    /// Gap in pixels between a popup trigger and its popout.
    pub beside_gap: f32,
    /// Stacking order for open popup containers.
    pub z_index: i32,
}

impl Default for MenubarConfig {
    fn default() -> Self {
        Self {
            nav_label: "Main Navigation".to_string(),
            below_gap: 8.0,
            beside_gap: 10.0,
            z_index: 100,
        }
    }
}

impl MenubarConfig {
    /// Set the fallback accessible label (builder).
    #[must_use]
    pub fn with_nav_label(mut self, label: impl Into<String>) -> Self {
        self.nav_label = label.into();
        self
    }

    /// Set the popup gaps in pixels (builder).
    #[must_use]
    pub fn with_gaps(mut self, below: f32, beside: f32) -> Self {
        self.below_gap = below;
        self.beside_gap = beside;
        self
    }

    /// Set the stacking order for open popups (builder).
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// Hierarchical menubar navigation controller.
///
/// Owns the focus state and (via the host's expanded flags) the open-popup
/// set for exactly one mounted widget. Never shared between widgets.
#[derive(Debug, Default)]
pub struct MenubarController {
    pub(crate) config: MenubarConfig,
    pub(crate) registry: MenuRegistry,
    /// The menubar's root list node, once mounted.
    pub(crate) root: Option<NodeId>,
    /// The single authoritative (menu, item) focus pair.
    pub(crate) focus: Option<(MenuId, NodeId)>,
    /// Whether the widget currently holds input focus (focusin/focusout).
    pub(crate) focus_within: bool,
    /// Mirror of the root's expanded marker: a top-level popup was
    /// intentionally opened, so horizontal arrow travel re-opens popups.
    pub(crate) expanded_marker: bool,
    /// Items bound at mount, in bind order; drained at teardown.
    pub(crate) bound: Vec<NodeId>,
}

impl MenubarController {
    /// Create a controller with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with the given configuration.
    #[must_use]
    pub fn with_config(config: MenubarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Discover the menu structure under `root` and wire the widget up.
    ///
    /// Returns `false` when no list structure was found; the controller is
    /// then inert (every handler a no-op) and the content stays readable.
    /// Re-mounting an already mounted controller tears the old state down
    /// first, so discovery is idempotent across repeated mounts.
    pub fn mount<H: HostTree + ?Sized>(&mut self, host: &mut H, root: NodeId) -> bool {
        if self.root.is_some() {
            self.teardown(host);
        }

        let Some(root_list) = find_root_list(host, root) else {
            navkit_core::debug!("no list structure found; menubar stays inert");
            return false;
        };

        decorate(host, root_list, &self.config.nav_label);
        let outcome = scan(host, root_list);
        self.registry = outcome.registry;
        self.bound = outcome.bound;
        self.root = Some(root_list);
        self.focus_within = false;
        self.expanded_marker = false;
        host.bind_root(root_list);

        // The first top-level item is the widget's single tab stop.
        let initial = self.registry.root().cloned().and_then(|root_id| {
            let first = self.registry.menu(&root_id)?.first_item()?;
            Some((root_id, first))
        });
        if let Some((root_id, first)) = initial {
            host.set_tab_index(first, 0);
            self.focus = Some((root_id, first));
        }

        !self.registry.is_empty()
    }

    /// Unbind every listener bound at mount and drop all discovered state.
    ///
    /// Safe to call on an unmounted controller (no-op), and safe to call
    /// twice: the bound list is drained on the first call.
    pub fn teardown<H: HostTree + ?Sized>(&mut self, host: &mut H) {
        for item in self.bound.drain(..) {
            host.unbind_item(item);
        }
        if let Some(root) = self.root.take() {
            host.unbind_root(root);
            host.set_marker(root, Marker::Focus, false);
            host.set_marker(root, Marker::Expanded, false);
        }
        self.registry = MenuRegistry::default();
        self.focus = None;
        self.focus_within = false;
        self.expanded_marker = false;
    }

    /// Whether `mount` has discovered an interactive structure.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// The discovered menu metadata.
    #[must_use]
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// The currently focused item, if any.
    #[must_use]
    pub fn focused_item(&self) -> Option<NodeId> {
        self.focus.as_ref().map(|(_, item)| *item)
    }

    /// The menu group owning the currently focused item.
    #[must_use]
    pub fn focused_menu(&self) -> Option<&MenuId> {
        self.focus.as_ref().map(|(menu, _)| menu)
    }

    // -- Root focus styling hook --------------------------------------------

    /// The widget (or one of its menus) gained input focus.
    pub fn handle_focus_in<H: HostTree + ?Sized>(&mut self, host: &mut H) {
        self.focus_within = true;
        if let Some(root) = self.root {
            host.set_marker(root, Marker::Focus, true);
        }
    }

    /// Input focus left the widget.
    pub fn handle_focus_out<H: HostTree + ?Sized>(&mut self, host: &mut H) {
        self.focus_within = false;
        if let Some(root) = self.root {
            host.set_marker(root, Marker::Focus, false);
        }
    }

    // -- Pointer hover ------------------------------------------------------

    /// Pointer moved onto `item`.
    ///
    /// While the widget holds focus, hover moves the roving focus along
    /// with the pointer; while any popup is open (or the widget holds
    /// focus), hover re-anchors the open chain under the hovered item.
    pub fn handle_hover<H: HostTree + ?Sized>(&mut self, host: &mut H, item: NodeId) {
        let Some(record) = self.registry.item(item) else {
            return;
        };
        let menu_id = record.menu.clone();
        let has_popup = record.has_popup;

        if self.focus_within {
            self.set_focus(host, &menu_id, item);
        }
        if self.is_any_popup_open(host) || self.focus_within {
            self.close_all_popups(host, Some(item));
            if has_popup {
                self.open_popup(host, &menu_id, item);
            }
        }
    }

    // -- Outside dismissal --------------------------------------------------

    /// Close every open popup; called by the boundary adapter's
    /// capture-phase pointerdown listener when the press lands outside the
    /// widget's root.
    pub fn dismiss_popups<H: HostTree + ?Sized>(&mut self, host: &mut H) {
        self.close_all_popups(host, None);
        self.set_expanded_marker(host, false);
    }

    /// Update the root's expanded marker and its controller-side mirror.
    pub(crate) fn set_expanded_marker<H: HostTree + ?Sized>(&mut self, host: &mut H, on: bool) {
        self.expanded_marker = on;
        if let Some(root) = self.root {
            host.set_marker(root, Marker::Expanded, on);
        }
    }
}
