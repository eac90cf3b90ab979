//! Tree view state machine.
//!
//! One owned state struct holds the expansion/selection/focus triple plus the
//! search query, and is mutated only by discrete [`TreeViewEvent`]s. The
//! filtered tree and the visible order are derived on demand, never stored.

use std::collections::HashSet;

use crate::filter;
use crate::flatten::{self, VisibleRow};
use crate::node::{find_node, NodeKind, TreeNode};

/// Events that can be sent to the tree view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViewEvent {
    /// The search query changed (typing, backspace, or a programmatic clear).
    QueryChanged(String),
    /// Return keyboard focus to the search field.
    FocusSearch,
    /// ArrowDown from the search field: focus the first visible row.
    FocusFirst,
    /// ArrowDown on a node.
    FocusNext,
    /// ArrowUp on a node.
    FocusPrev,
    /// ArrowRight on a node: expand a folder with children, keep focus.
    ExpandFocused,
    /// ArrowLeft on a node: collapse an expanded folder, keep focus.
    CollapseFocused,
    /// Enter/Space on a node: select a file or toggle a folder.
    ActivateFocused,
    /// Pointer click on a folder row.
    ToggleExpand(String),
    /// Pointer click on a file row.
    Select(String),
}

/// What an event did to the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Any part of the state changed; the caller should redraw.
    pub changed: bool,
    /// The selection changed; the selection handler must be notified.
    pub selection_changed: bool,
}

/// View model for rendering the tree view
#[derive(Debug, Clone)]
pub struct TreeViewModel {
    pub rows: Vec<VisibleRow>,
    /// Index of the focused row, if a node has keyboard focus.
    pub cursor: Option<usize>,
    pub query: String,
    /// True when the search field has keyboard focus.
    pub search_focused: bool,
    pub selected: Option<String>,
}

/// The tree view state: full tree plus the query/expansion/selection/focus
/// tuple. The tree itself is immutable from the widget's perspective.
#[derive(Debug)]
pub struct TreeViewState {
    roots: Vec<TreeNode>,
    query: String,
    expanded: HashSet<String>,
    selected: Option<String>,
    focused: Option<String>,
}

impl TreeViewState {
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self {
            roots,
            query: String::new(),
            expanded: HashSet::new(),
            selected: None,
            focused: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The search field has focus whenever no node does.
    pub fn is_search_focused(&self) -> bool {
        self.focused.is_none()
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The currently selected node, resolved against the full tree.
    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected
            .as_deref()
            .and_then(|id| find_node(&self.roots, id))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// The visible order: the filtered tree flattened through the expansion
    /// set. Recomputed on each call; nothing here is cached.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        if self.query.is_empty() {
            flatten::visible_rows(&self.roots, &self.expanded)
        } else {
            let outcome = filter::filter_tree(&self.roots, &self.query);
            flatten::visible_rows(&outcome.nodes, &self.expanded)
        }
    }

    /// Build the view model for rendering.
    pub fn view_model(&self) -> TreeViewModel {
        let rows = self.visible_rows();
        let cursor = self
            .focused
            .as_ref()
            .and_then(|id| rows.iter().position(|row| &row.id == id));

        TreeViewModel {
            rows,
            cursor,
            query: self.query.clone(),
            search_focused: self.focused.is_none(),
            selected: self.selected.clone(),
        }
    }

    /// Handle an event and report what changed.
    pub fn handle_event(&mut self, event: TreeViewEvent) -> Transition {
        let selection_before = self.selected.clone();
        let state_before = (
            self.query.clone(),
            self.expanded.clone(),
            self.selected.clone(),
            self.focused.clone(),
        );

        match event {
            TreeViewEvent::QueryChanged(query) => self.set_query(query),
            TreeViewEvent::FocusSearch => self.focused = None,

            TreeViewEvent::FocusFirst => {
                let rows = self.visible_rows();
                if let Some(first) = rows.first() {
                    self.focused = Some(first.id.clone());
                }
            }

            TreeViewEvent::FocusNext => {
                let rows = self.visible_rows();
                match self.focused_index(&rows) {
                    Some(index) if index + 1 < rows.len() => {
                        self.focused = Some(rows[index + 1].id.clone());
                    }
                    // Last row: focus stays put.
                    Some(_) => {}
                    // Stale focus self-corrects to the first row.
                    None => {
                        if let Some(first) = rows.first() {
                            self.focused = Some(first.id.clone());
                        }
                    }
                }
            }

            TreeViewEvent::FocusPrev => {
                let rows = self.visible_rows();
                match self.focused_index(&rows) {
                    Some(index) if index > 0 => {
                        self.focused = Some(rows[index - 1].id.clone());
                    }
                    // First row, or a stale focus: back to the search field.
                    _ => self.focused = None,
                }
            }

            TreeViewEvent::ExpandFocused => {
                if let Some(row) = self.focused_row() {
                    if row.kind == NodeKind::Folder && row.has_children {
                        self.expanded.insert(row.id);
                    }
                }
            }

            TreeViewEvent::CollapseFocused => {
                if let Some(row) = self.focused_row() {
                    if row.kind == NodeKind::Folder {
                        self.expanded.remove(&row.id);
                    }
                }
            }

            TreeViewEvent::ActivateFocused => {
                if let Some(row) = self.focused_row() {
                    match row.kind {
                        NodeKind::File => self.toggle_selection(&row.id),
                        NodeKind::Folder if row.has_children => self.toggle_expansion(&row.id),
                        NodeKind::Folder => {}
                    }
                }
            }

            TreeViewEvent::ToggleExpand(id) => {
                if let Some(row) = self.displayed_row(&id) {
                    if row.kind == NodeKind::Folder && row.has_children {
                        self.toggle_expansion(&id);
                    }
                }
            }

            TreeViewEvent::Select(id) => {
                // Only file nodes can carry the selection.
                if matches!(find_node(&self.roots, &id), Some(node) if node.kind == NodeKind::File)
                {
                    self.toggle_selection(&id);
                }
            }
        }

        let state_after = (
            self.query.clone(),
            self.expanded.clone(),
            self.selected.clone(),
            self.focused.clone(),
        );

        Transition {
            changed: state_before != state_after,
            selection_changed: selection_before != self.selected,
        }
    }

    /// Query transition: for a non-empty query the expansion set is cleared
    /// and repopulated with the filter's path-to-match folders. Clearing the
    /// query leaves the expansion set as-is.
    fn set_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        if !query.is_empty() {
            let outcome = filter::filter_tree(&self.roots, &query);
            self.expanded = outcome.auto_expand;
        }
        self.query = query;
    }

    fn toggle_selection(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        log::debug!("selection -> {:?}", self.selected);
    }

    fn toggle_expansion(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    fn focused_index(&self, rows: &[VisibleRow]) -> Option<usize> {
        self.focused
            .as_ref()
            .and_then(|id| rows.iter().position(|row| &row.id == id))
    }

    /// The focused row in the displayed tree, if the focus is not stale.
    fn focused_row(&self) -> Option<VisibleRow> {
        let focused = self.focused.as_ref()?;
        self.visible_rows().into_iter().find(|row| &row.id == focused)
    }

    /// A row by id in the displayed tree. Pointer events can only land on
    /// rows that are currently visible.
    fn displayed_row(&self, id: &str) -> Option<VisibleRow> {
        self.visible_rows().into_iter().find(|row| row.id == id)
    }
}
