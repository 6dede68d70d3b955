#![forbid(unsafe_code)]

//! Popup open/close lifecycle and placement.
//!
//! The open-popup set is never stored separately: it is derived from the
//! host's expanded flags, so the host tree and the controller cannot drift
//! apart. `close_all_popups` is the operation that restores the open-chain
//! invariant after any focus change; every close operation is idempotent.

use navkit_core::node::{HostTree, NodeId, Placement};

use crate::controller::MenubarController;
use crate::registry::MenuId;
use crate::scan::menu_id_of;

impl MenubarController {
    /// Open the popup owned by `item` in the group `menu_id`.
    ///
    /// Requires the item to own a popup with an adjacent submenu
    /// container. Placement depends on the owning group: a menubar trigger
    /// opens its popup below itself, a popup or popout trigger opens its
    /// submenu to its right. Returns the opened submenu's identifier, or
    /// `None` (no mutation) when the preconditions fail.
    pub fn open_popup<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        menu_id: &MenuId,
        item: NodeId,
    ) -> Option<MenuId> {
        let record = self.registry.item(item)?;
        if !record.has_popup {
            return None;
        }
        let submenu = record.submenu?;
        let kind = self.registry.menu(menu_id)?.kind;

        let rect = host.bounds(item);
        let placement = if kind.is_root() {
            Placement::Below {
                top: rect.height + self.config.below_gap,
                z_index: self.config.z_index,
            }
        } else {
            Placement::Beside {
                left: rect.width + self.config.beside_gap,
                z_index: self.config.z_index,
            }
        };

        host.set_expanded(item, true);
        host.show_popup(submenu, placement);
        self.set_expanded_marker(host, true);
        navkit_core::trace!(item = item.raw(), "popup opened");

        menu_id_of(host, submenu)
    }

    /// Close every open popup whose trigger sits inside `container`'s
    /// subtree. A level never hides while a branch nested under it stays
    /// marked open.
    fn collapse_within<H: HostTree + ?Sized>(&mut self, host: &mut H, container: NodeId) {
        let triggers: Vec<NodeId> = self.registry.popup_triggers().to_vec();
        for trigger in triggers {
            if host.contains(container, trigger) && host.is_expanded(trigger) {
                host.set_expanded(trigger, false);
                if let Some(submenu) = self.registry.item(trigger).and_then(|r| r.submenu) {
                    host.hide_popup(submenu);
                }
            }
        }
    }

    /// Close the popup level `item` sits in (or owns).
    ///
    /// For a top-level item: closes the item's own popup when open and
    /// returns the item itself. For an item inside a popup or popout:
    /// collapses that one level, refocuses its trigger, and returns the
    /// trigger. Closing an already-closed level changes nothing.
    pub fn close_popup<H: HostTree + ?Sized>(&mut self, host: &mut H, item: NodeId) -> NodeId {
        let Some(menu) = self.registry.menu_of_item(item) else {
            return item;
        };

        if menu.kind.is_root() {
            if host.is_expanded(item) {
                host.set_expanded(item, false);
                if let Some(submenu) = self.registry.item(item).and_then(|r| r.submenu) {
                    host.hide_popup(submenu);
                    self.collapse_within(host, submenu);
                }
                navkit_core::trace!(item = item.raw(), "popup closed");
            }
            return item;
        }

        let menu_node = menu.node;
        let Some(trigger) = self.registry.trigger_of(menu_node) else {
            // No trigger element: treat the popup as already closed.
            return item;
        };
        self.collapse_within(host, menu_node);
        host.set_expanded(trigger, false);
        host.hide_popup(menu_node);
        host.focus(trigger);
        if let Some(trigger_menu) = self.registry.item(trigger).map(|r| r.menu.clone()) {
            self.focus = Some((trigger_menu, trigger));
        }
        navkit_core::trace!(item = trigger.raw(), "popup level collapsed");
        trigger
    }

    /// Collapse every nested open level from `item`'s menu up to the
    /// menubar, focusing and returning the top-level trigger.
    pub fn close_popout<H: HostTree + ?Sized>(&mut self, host: &mut H, item: NodeId) -> NodeId {
        let mut current = item;
        loop {
            let Some(menu) = self.registry.menu_of_item(current) else {
                break;
            };
            if menu.kind.is_root() {
                break;
            }
            let menu_node = menu.node;
            self.collapse_within(host, menu_node);
            let Some(trigger) = self.registry.trigger_of(menu_node) else {
                host.hide_popup(menu_node);
                break;
            };
            host.set_expanded(trigger, false);
            host.hide_popup(menu_node);
            current = trigger;
        }

        host.focus(current);
        if let Some(menu_id) = self.registry.item(current).map(|r| r.menu.clone()) {
            self.focus = Some((menu_id, current));
        }
        current
    }

    /// Close every open popup whose menu does not lie on `except`'s
    /// ancestor chain; close everything when `except` is `None`.
    pub fn close_all_popups<H: HostTree + ?Sized>(&mut self, host: &mut H, except: Option<NodeId>) {
        let triggers: Vec<NodeId> = self.registry.popup_triggers().to_vec();
        for trigger in triggers {
            let Some(submenu) = self.registry.item(trigger).and_then(|r| r.submenu) else {
                // Popup trigger without a container: already closed.
                continue;
            };
            let on_ancestor_path = except.is_some_and(|e| host.contains(submenu, e));
            if !on_ancestor_path && host.is_expanded(trigger) {
                host.set_expanded(trigger, false);
                host.hide_popup(submenu);
            }
        }
    }

    /// Whether any popup in the widget is currently open.
    #[must_use]
    pub fn is_any_popup_open<H: HostTree + ?Sized>(&self, host: &H) -> bool {
        self.registry
            .popup_triggers()
            .iter()
            .any(|t| host.is_expanded(*t))
    }
}
