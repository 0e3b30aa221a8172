//! Navigation items shared by the breadcrumb and the vertical nav bar.

use crate::icons::NavIcon;

/// A selectable entry. Choosing it dispatches `on_activate` verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem<A> {
    pub id: String,
    pub label: String,
    pub icon: Option<NavIcon>,
    pub on_activate: A,
}

impl<A: Clone> NavItem<A> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, on_activate: A) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            on_activate,
        }
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn activate(&self) -> A {
        self.on_activate.clone()
    }
}

/// Find an item by id and return its activation payload
pub fn activate_by_id<A: Clone>(items: &[NavItem<A>], id: &str) -> Option<A> {
    items.iter().find(|item| item.id == id).map(NavItem::activate)
}

/// Depth cursor over a fixed list of breadcrumb levels.
///
/// The visible trail is every level up to and including the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadcrumbTrail {
    len: usize,
    current: usize,
}

impl BreadcrumbTrail {
    /// Starts at the deepest level. An empty trail stays empty.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: len.saturating_sub(1),
        }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Number of levels currently shown
    pub fn visible(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.current + 1
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.len > 0 && self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.len
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jump to a level; out-of-range levels are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }
}
