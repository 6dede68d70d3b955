#![forbid(unsafe_code)]

//! Roving-tabindex focus management.
//!
//! Only one item per menu group is keyboard-focusable at rest; navigation
//! moves that flag rather than relying on per-item native tab stops. Every
//! focus move first restores the open-chain invariant by closing popups
//! that do not lie on the target's ancestor path.

use navkit_core::node::{HostTree, NodeId};

use crate::controller::MenubarController;
use crate::registry::MenuId;

impl MenubarController {
    /// Move the roving focus to `item` within the group `menu_id`.
    ///
    /// Closes every popup not on `item`'s ancestor path, makes `item` the
    /// group's single focusable entry, and moves host input focus to it.
    /// A target outside the group is a no-op.
    pub fn set_focus<H: HostTree + ?Sized>(&mut self, host: &mut H, menu_id: &MenuId, item: NodeId) {
        self.close_all_popups(host, Some(item));

        let Some(menu) = self.registry.menu(menu_id) else {
            return;
        };
        if menu.index_of(item).is_none() {
            return;
        }
        let items: Vec<NodeId> = menu.items().to_vec();
        for it in items {
            host.set_tab_index(it, if it == item { 0 } else { -1 });
        }
        host.focus(item);
        self.focus = Some((menu_id.clone(), item));
    }

    /// Focus the first item of the group.
    pub fn set_focus_first<H: HostTree + ?Sized>(&mut self, host: &mut H, menu_id: &MenuId) {
        if let Some(first) = self.registry.menu(menu_id).and_then(|m| m.first_item()) {
            self.set_focus(host, menu_id, first);
        }
    }

    /// Focus the last item of the group.
    pub fn set_focus_last<H: HostTree + ?Sized>(&mut self, host: &mut H, menu_id: &MenuId) {
        if let Some(last) = self.registry.menu(menu_id).and_then(|m| m.last_item()) {
            self.set_focus(host, menu_id, last);
        }
    }

    /// Focus the item before `current`, wrapping from the first item to the
    /// last. Returns the newly focused item.
    pub fn set_focus_previous<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        menu_id: &MenuId,
        current: NodeId,
    ) -> Option<NodeId> {
        let menu = self.registry.menu(menu_id)?;
        let index = menu.index_of(current)?;
        let target = if index == 0 {
            menu.last_item()?
        } else {
            menu.item_at(index - 1)?
        };
        self.set_focus(host, menu_id, target);
        Some(target)
    }

    /// Focus the item after `current`, wrapping from the last item to the
    /// first. Returns the newly focused item.
    pub fn set_focus_next<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        menu_id: &MenuId,
        current: NodeId,
    ) -> Option<NodeId> {
        let menu = self.registry.menu(menu_id)?;
        let index = menu.index_of(current)?;
        let target = if index + 1 >= menu.len() {
            menu.first_item()?
        } else {
            menu.item_at(index + 1)?
        };
        self.set_focus(host, menu_id, target);
        Some(target)
    }

    /// Type-ahead: focus the next item whose label starts with `ch`.
    ///
    /// Case-insensitive. The search starts just after `current` (wrapping
    /// to the top when `current` is last), and restarts from the top when
    /// the remainder has no match. With no match anywhere, focus is left
    /// unchanged.
    pub fn set_focus_by_first_character<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        menu_id: &MenuId,
        current: NodeId,
        ch: char,
    ) {
        let Some(ch) = ch.to_lowercase().next() else {
            return;
        };
        let Some(menu) = self.registry.menu(menu_id) else {
            return;
        };

        let mut start = menu.index_of(current).map_or(0, |i| i + 1);
        if start >= menu.len() {
            start = 0;
        }

        let matched = menu
            .first_char_match(start, ch)
            .or_else(|| menu.first_char_match(0, ch));

        if let Some(index) = matched {
            if let Some(target) = self.registry.menu(menu_id).and_then(|m| m.item_at(index)) {
                self.set_focus(host, menu_id, target);
            }
        }
    }
}
