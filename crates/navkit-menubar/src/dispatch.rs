#![forbid(unsafe_code)]

//! Keyboard and click dispatch.
//!
//! One transition table maps `(key, interaction context)` to focus and
//! popup operations. Context is derived per event: orientation of the
//! focused item's menu, whether the item owns a popup, the menu's
//! root/popup/popout classification, and whether any popup is open.
//!
//! Shortcut chords (Ctrl/Alt/Super held) and unrecognized keys pass
//! through untouched; Tab closes the open chain but never consumes, so
//! default focus traversal proceeds unobstructed.

use navkit_core::event::{Key, KeyEvent};
use navkit_core::node::{HostTree, NodeId};

use crate::controller::MenubarController;
use crate::registry::MenuKind;

/// Whether a dispatched event was consumed by the menubar.
///
/// `Consumed` means the boundary adapter must stop propagation and
/// suppress the host's default handling; `Ignored` leaves both alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was handled; stop propagation and suppress defaults.
    Consumed,
    /// The event was not handled (or deliberately left to the host).
    Ignored,
}

impl EventResult {
    /// Whether the event was consumed.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

impl MenubarController {
    /// Dispatch a keydown delivered to the focused item `target`.
    pub fn handle_key<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        target: NodeId,
        event: KeyEvent,
    ) -> EventResult {
        if event.has_shortcut_modifier() {
            return EventResult::Ignored;
        }
        let Some(record) = self.registry.item(target) else {
            return EventResult::Ignored;
        };
        let menu_id = record.menu.clone();
        let has_popup = record.has_popup;
        let Some(menu) = self.registry.menu(&menu_id) else {
            return EventResult::Ignored;
        };
        let horizontal = menu.orientation.is_horizontal();
        let kind = menu.kind;

        navkit_core::trace!(key = ?event.key, item = target.raw(), "dispatching keydown");

        match event.key {
            key if key.is_activation() => {
                if has_popup {
                    if let Some(popup_id) = self.open_popup(host, &menu_id, target) {
                        self.set_focus_first(host, &popup_id);
                    }
                } else if host.hyperlink(target).is_some_and(|href| href != "#") {
                    self.close_all_popups(host, None);
                    self.set_expanded_marker(host, false);
                    host.activate(target);
                }
                EventResult::Consumed
            }

            Key::Escape => {
                self.close_popup(host, target);
                self.set_expanded_marker(host, false);
                EventResult::Consumed
            }

            Key::Up => {
                if horizontal {
                    if has_popup {
                        if let Some(popup_id) = self.open_popup(host, &menu_id, target) {
                            self.set_focus_last(host, &popup_id);
                        }
                    }
                } else {
                    self.set_focus_previous(host, &menu_id, target);
                }
                EventResult::Consumed
            }

            Key::Down => {
                if horizontal {
                    if has_popup {
                        if let Some(popup_id) = self.open_popup(host, &menu_id, target) {
                            self.set_focus_first(host, &popup_id);
                        }
                    }
                } else {
                    self.set_focus_next(host, &menu_id, target);
                }
                EventResult::Consumed
            }

            Key::Left => {
                if horizontal {
                    let reopen = self.is_any_popup_open(host) || self.expanded_marker;
                    if let Some(next) = self.set_focus_previous(host, &menu_id, target) {
                        if reopen {
                            self.open_popup(host, &menu_id, next);
                        }
                    }
                } else if kind == MenuKind::Popout {
                    // Collapse this level, then step back on the parent
                    // level and open the submenu there, if any.
                    let parent = self.close_popup(host, target);
                    if let Some(parent_menu) = self.registry.item(parent).map(|r| r.menu.clone()) {
                        if let Some(prev) = self.set_focus_previous(host, &parent_menu, parent) {
                            self.open_popup(host, &parent_menu, prev);
                        }
                    }
                } else {
                    // First-level popup: collapse out to the menubar.
                    let ancestor = self.close_popout(host, target);
                    if let Some(menu) = self.registry.item(ancestor).map(|r| r.menu.clone()) {
                        self.set_focus(host, &menu, ancestor);
                    }
                }
                EventResult::Consumed
            }

            Key::Right => {
                if horizontal {
                    let reopen = self.is_any_popup_open(host) || self.expanded_marker;
                    if let Some(next) = self.set_focus_next(host, &menu_id, target) {
                        if reopen {
                            self.open_popup(host, &menu_id, next);
                        }
                    }
                } else if has_popup {
                    if let Some(popup_id) = self.open_popup(host, &menu_id, target) {
                        self.set_focus_first(host, &popup_id);
                    }
                } else {
                    // Leaf item: collapse out, advance along the menubar,
                    // and open the next top-level submenu.
                    let ancestor = self.close_popout(host, target);
                    if let Some(menu) = self.registry.item(ancestor).map(|r| r.menu.clone()) {
                        if let Some(next) = self.set_focus_next(host, &menu, ancestor) {
                            self.open_popup(host, &menu, next);
                        }
                    }
                }
                EventResult::Consumed
            }

            Key::Home | Key::PageUp => {
                self.set_focus_first(host, &menu_id);
                EventResult::Consumed
            }

            Key::End | Key::PageDown => {
                self.set_focus_last(host, &menu_id);
                EventResult::Consumed
            }

            Key::Tab => {
                self.close_all_popups(host, None);
                self.set_expanded_marker(host, false);
                EventResult::Ignored
            }

            key => match key.printable_char() {
                Some(ch) => {
                    self.set_focus_by_first_character(host, &menu_id, target, ch);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
        }
    }

    /// Dispatch a capture-phase click on `target`.
    ///
    /// A popup trigger toggles its popup (consuming the click); a plain
    /// item closes every open popup and lets the navigation commit proceed.
    pub fn handle_click<H: HostTree + ?Sized>(
        &mut self,
        host: &mut H,
        target: NodeId,
    ) -> EventResult {
        let Some(record) = self.registry.item(target) else {
            return EventResult::Ignored;
        };
        let menu_id = record.menu.clone();
        let has_popup = record.has_popup;

        if has_popup {
            if host.is_expanded(target) {
                self.close_popup(host, target);
            } else {
                self.close_all_popups(host, Some(target));
                self.open_popup(host, &menu_id, target);
            }
            EventResult::Consumed
        } else {
            self.close_all_popups(host, None);
            self.set_expanded_marker(host, false);
            EventResult::Ignored
        }
    }
}
