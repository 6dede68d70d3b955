#![forbid(unsafe_code)]

//! One-time structural discovery.
//!
//! Two passes over the host tree at mount:
//!
//! 1. [`decorate`] assigns semantic roles onto the raw markup: the root
//!    list becomes the menubar, every nested list a menu labelled after its
//!    trigger, item wrappers become presentation/separator nodes and their
//!    links menuitems.
//! 2. [`scan`] walks the decorated tree recursively and registers every
//!    menu group and item into a [`MenuRegistry`], binding per-item input
//!    listeners along the way.
//!
//! Discovery tolerates arbitrary wrapper markup: a node that is neither a
//! menu container nor a menuitem is transparent — the walk recurses into
//! its first child and then continues with its next sibling. Graphic nodes
//! are never descended into. A tree with no recognizable list structure
//! yields an empty registry and the widget silently stays inert.

use navkit_core::node::{HostTree, NodeId, NodeKind, Orientation, Role, descendants};
use smallvec::SmallVec;

use crate::registry::{ItemRecord, MenuId, MenuKind, MenuRegistry, first_char};

/// Everything one scan produced: the registry plus the list of items that
/// had listeners bound (so teardown can unbind exactly those).
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Discovered menu metadata.
    pub registry: MenuRegistry,
    /// Items bound during the scan, in bind order.
    pub bound: Vec<NodeId>,
}

/// Find the list container the menubar is built from: `root` itself when it
/// is a list, otherwise the first list in its subtree.
#[must_use]
pub fn find_root_list<H: HostTree + ?Sized>(host: &H, root: NodeId) -> Option<NodeId> {
    if host.kind(root) == NodeKind::List {
        return Some(root);
    }
    descendants(host, root)
        .into_iter()
        .find(|n| host.kind(*n) == NodeKind::List)
}

/// Assign role markers onto the host tree before discovery.
///
/// Labels the root list with `default_label` when the host provides none;
/// nested lists are labelled with their trigger's text so menu identifiers
/// stay human-readable.
pub fn decorate<H: HostTree + ?Sized>(host: &mut H, root_list: NodeId, default_label: &str) {
    host.set_role(root_list, Role::Menubar);
    if host.label(root_list).is_none() {
        host.set_label(root_list, default_label);
    }

    for node in descendants(host, root_list) {
        match host.kind(node) {
            NodeKind::List => {
                host.set_role(node, Role::Menu);
                // The trigger is the list's previous sibling. A submenu
                // with no trigger is left unlabeled and will never open.
                if let Some(trigger) = host.prev_sibling(node) {
                    host.set_has_popup(trigger, true);
                    host.set_expanded(trigger, false);
                    let label = host.text(trigger);
                    host.set_label(node, &label);
                }
            }
            NodeKind::Item => {
                let link = descendants(host, node)
                    .into_iter()
                    .find(|n| host.kind(*n) == NodeKind::Link);
                match link {
                    Some(link) => {
                        host.set_role(node, Role::Presentation);
                        host.set_role(link, Role::MenuItem);
                    }
                    None => host.set_role(node, Role::Separator),
                }
            }
            _ => {}
        }
    }
}

/// Recursively discover the decorated tree into a fresh [`MenuRegistry`].
pub fn scan<H: HostTree + ?Sized>(host: &mut H, root_list: NodeId) -> ScanOutcome {
    let mut out = ScanOutcome::default();
    init_menu(host, &mut out, root_list, 0);
    navkit_core::debug!(
        menus = out.registry.menu_count(),
        popups = out.registry.popup_triggers().len(),
        "menu structure discovered"
    );
    out
}

/// Register one menu group at `depth`, recursing into nested menus.
fn init_menu<H: HostTree + ?Sized>(host: &mut H, out: &mut ScanOutcome, menu: NodeId, depth: usize) {
    let Some(menu_id) = menu_id_of(host, menu) else {
        return;
    };
    let role = host.role(menu).unwrap_or(Role::Menu);
    let orientation = host.orientation_hint(menu).unwrap_or(match role {
        Role::Menubar => Orientation::Horizontal,
        _ => Orientation::Vertical,
    });
    let kind = match (role, depth) {
        (Role::Menu, 1) => MenuKind::Popup,
        (Role::Menu, _) if depth > 1 => MenuKind::Popout,
        _ => MenuKind::Root,
    };

    let mut found = Vec::new();
    collect_items(host, out, host.first_child(menu), depth, &mut found);

    let mut items: SmallVec<[NodeId; 8]> = SmallVec::new();
    let mut first_chars: SmallVec<[Option<char>; 8]> = SmallVec::new();
    for item in found {
        host.set_tab_index(item, -1);
        host.bind_item(item);
        out.bound.push(item);

        let label = host.text(item);
        let fc = first_char(&label);
        let submenu = host
            .next_sibling(item)
            .filter(|n| host.role(*n) == Some(Role::Menu));

        items.push(item);
        first_chars.push(fc);
        out.registry.register_item(ItemRecord {
            node: item,
            menu: menu_id.clone(),
            label,
            first_char: fc,
            has_popup: host.has_popup(item),
            submenu,
        });
    }

    out.registry
        .register_menu(menu_id, menu, depth, orientation, kind, items, first_chars);
}

/// Walk a sibling chain, classifying each node as a nested menu, a
/// menuitem, or transparent wrapper markup.
fn collect_items<H: HostTree + ?Sized>(
    host: &mut H,
    out: &mut ScanOutcome,
    start: Option<NodeId>,
    depth: usize,
    items: &mut Vec<NodeId>,
) {
    let mut cursor = start;
    while let Some(node) = cursor {
        let mut descend = true;
        match host.role(node) {
            Some(Role::Menu) => {
                host.set_tab_index(node, -1);
                init_menu(host, out, node, depth + 1);
                descend = false;
            }
            Some(Role::MenuItem) => {
                if host.has_popup(node) {
                    out.registry.push_popup_trigger(node);
                }
                items.push(node);
            }
            _ => {}
        }

        if descend {
            if let Some(child) = host.first_child(node) {
                if host.kind(child) != NodeKind::Graphic {
                    collect_items(host, out, Some(child), depth, items);
                }
            }
        }
        cursor = host.next_sibling(node);
    }
}

/// Derive the [`MenuId`] governing `node`: ascend ancestors (starting at
/// `node` itself) until one carries a menu or menubar role.
///
/// Returns `None` when no qualifying ancestor exists; callers treat that as
/// "no group, no-op" rather than an error.
#[must_use]
pub fn menu_id_of<H: HostTree + ?Sized>(host: &H, node: NodeId) -> Option<MenuId> {
    let container = containing_menu(host, node)?;
    let role = host.role(container)?;
    let label = host.label(container).unwrap_or_default();
    Some(MenuId::derive(role, &label))
}

/// The nearest ancestor-or-self of `node` carrying a menu or menubar role.
#[must_use]
pub fn containing_menu<H: HostTree + ?Sized>(host: &H, node: NodeId) -> Option<NodeId> {
    let mut cursor = Some(node);
    while let Some(n) = cursor {
        if host.role(n).is_some_and(|r| r.is_menu_container()) {
            return Some(n);
        }
        cursor = host.parent(n);
    }
    None
}
