//! Collapsible panels and accordion groups.
//!
//! Every [`Panel`] belongs to exactly one [`PanelGroup`]. At most one member
//! of a group is expanded: expanding a panel collapses its siblings. Groups
//! are passed to panels explicitly; there is no global panel state.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::geom::ScreenRect;
use crate::render::{Canvas, RectStyle, TextAnchor, TextStyle};
use crate::style::Theme;

const TITLE_PADDING: f32 = 6.0;

/// Member identifier inside a panel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

/// Visibility of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Only the title row is drawn.
    Collapsed,
    /// The panel body is drawn.
    Expanded,
}

/// Shared accordion group. Cloning yields another handle to the same group.
#[derive(Debug, Clone, Default)]
pub struct PanelGroup {
    inner: Arc<RwLock<GroupState>>,
}

#[derive(Debug, Default)]
struct GroupState {
    next_member_id: u64,
    members: Vec<PanelId>,
    expanded: Option<PanelId>,
}

impl PanelGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new member, initially collapsed.
    pub fn register(&self) -> PanelId {
        let mut state = self.write();
        state.next_member_id = state.next_member_id.wrapping_add(1);
        let id = PanelId(state.next_member_id);
        state.members.push(id);
        id
    }

    /// Remove a member. Removing the expanded member leaves the group
    /// collapsed.
    pub fn unregister(&self, id: PanelId) {
        let mut state = self.write();
        state.members.retain(|member| *member != id);
        if state.expanded == Some(id) {
            state.expanded = None;
        }
    }

    /// Expand a member and collapse all of its siblings.
    pub fn expand(&self, id: PanelId) {
        let mut state = self.write();
        if !state.members.contains(&id) {
            return;
        }
        if state.expanded != Some(id) {
            debug!("expanding panel {id:?}");
            state.expanded = Some(id);
        }
    }

    /// Collapse a member if it is expanded.
    pub fn collapse(&self, id: PanelId) {
        let mut state = self.write();
        if state.expanded == Some(id) {
            debug!("collapsing panel {id:?}");
            state.expanded = None;
        }
    }

    /// Flip a member between expanded and collapsed.
    pub fn toggle(&self, id: PanelId) {
        let mut state = self.write();
        if state.expanded == Some(id) {
            debug!("collapsing panel {id:?}");
            state.expanded = None;
        } else if state.members.contains(&id) {
            debug!("expanding panel {id:?}");
            state.expanded = Some(id);
        }
    }

    /// Collapse every member.
    pub fn collapse_all(&self) {
        self.write().expanded = None;
    }

    /// Check whether a member is expanded.
    pub fn is_expanded(&self, id: PanelId) -> bool {
        self.read().expanded == Some(id)
    }

    /// The expanded member, if any.
    pub fn expanded(&self) -> Option<PanelId> {
        self.read().expanded
    }

    /// Current members in registration order.
    pub fn members(&self) -> Vec<PanelId> {
        self.read().members.clone()
    }

    /// Check whether two handles refer to the same group.
    pub fn same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, GroupState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GroupState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Membership of one panel in a group. Dropping it leaves the group.
#[derive(Debug)]
pub struct Panel {
    group: PanelGroup,
    id: PanelId,
}

impl Panel {
    /// Join `group` as a collapsed member.
    pub fn new(group: &PanelGroup) -> Self {
        let group = group.clone();
        let id = group.register();
        Self { group, id }
    }

    /// Create a panel in a private group of its own.
    pub fn standalone() -> Self {
        Self::new(&PanelGroup::new())
    }

    /// Identifier within the current group.
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// The group this panel belongs to.
    pub fn group(&self) -> &PanelGroup {
        &self.group
    }

    /// Leave the current group and join `group`, collapsed.
    pub fn join(&mut self, group: &PanelGroup) {
        if self.group.same_group(group) {
            return;
        }
        self.group.unregister(self.id);
        self.group = group.clone();
        self.id = self.group.register();
    }

    /// Current visibility.
    pub fn state(&self) -> PanelState {
        if self.is_expanded() {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    /// Check whether the panel is expanded.
    pub fn is_expanded(&self) -> bool {
        self.group.is_expanded(self.id)
    }

    /// Expand this panel, collapsing its siblings.
    pub fn expand(&self) {
        self.group.expand(self.id);
    }

    /// Collapse this panel.
    pub fn collapse(&self) {
        self.group.collapse(self.id);
    }

    /// Flip this panel's visibility.
    pub fn toggle(&self) {
        self.group.toggle(self.id);
    }

    /// Draw the clickable title row. A click inside the row toggles the
    /// panel through its group.
    pub fn draw_title(&self, row: ScreenRect, title: &str, canvas: &mut impl Canvas, theme: &Theme) {
        if canvas.is_hovered(row) {
            canvas.draw_rect(row, RectStyle::filled(theme.title_highlight));
            if canvas.clicked() {
                self.toggle();
            }
        }

        let inner = row.inset_x(TITLE_PADDING);
        let marker = match self.state() {
            PanelState::Expanded => "Expanded",
            PanelState::Collapsed => "Collapsed",
        };
        let marker_style = TextStyle {
            color: theme.muted_text,
            size: theme.label_size,
            anchor: TextAnchor::Right,
        };
        canvas.draw_text(inner, marker, &marker_style);

        let title_style = TextStyle {
            color: theme.text,
            size: theme.title_size,
            anchor: TextAnchor::Left,
        };
        canvas.draw_text(inner, title, &title_style);
        canvas.draw_rect(row, RectStyle::outlined(theme.panel_border, 1.0));
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.group.unregister(self.id);
    }
}
