//! The tree view widget shell.
//!
//! `TreeView` owns the state machine, the search placeholder, and the
//! selection-change handler, and translates terminal key/mouse events into
//! state machine events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    widgets::ListState,
    Frame,
};

use crate::node::{NodeKind, TreeNode};
use crate::state::{TreeViewEvent, TreeViewState};
use crate::theme::Theme;
use crate::ui;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Invoked exactly once per Select event, after state has settled, with the
/// resulting selected node or `None`.
pub type SelectionHandler = Box<dyn FnMut(Option<&TreeNode>)>;

pub struct TreeView {
    state: TreeViewState,
    placeholder: String,
    on_selection_change: Option<SelectionHandler>,
    list_state: ListState,
    // Inner rows area from the last render, for pointer hit-testing.
    rows_area: Option<Rect>,
}

impl TreeView {
    /// Construct the widget over an ordered sequence of root nodes. The tree
    /// is taken as-is; ids are trusted to be unique.
    pub fn new(data: Vec<TreeNode>) -> Self {
        Self {
            state: TreeViewState::new(data),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            on_selection_change: None,
            list_state: ListState::default(),
            rows_area: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_selection_handler(
        mut self,
        handler: impl FnMut(Option<&TreeNode>) + 'static,
    ) -> Self {
        self.on_selection_change = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &TreeViewState {
        &self.state
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn is_search_focused(&self) -> bool {
        self.state.is_search_focused()
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.state.selected_node()
    }

    /// Clear the query and put keyboard focus back in the search field.
    pub fn clear_query(&mut self) -> bool {
        let cleared = self.dispatch(TreeViewEvent::QueryChanged(String::new()));
        let refocused = self.dispatch(TreeViewEvent::FocusSearch);
        cleared || refocused
    }

    /// Handle a key event. Returns true if the state changed.
    ///
    /// While the search field has focus, printable keys edit the query and
    /// ArrowDown enters the tree. While a node has focus, arrows navigate and
    /// Enter/Space activate. Anything else is left to the host app.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.is_search_focused() {
            match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    let mut query = self.state.query().to_string();
                    query.push(c);
                    self.dispatch(TreeViewEvent::QueryChanged(query))
                }
                KeyCode::Backspace => {
                    let mut query = self.state.query().to_string();
                    query.pop();
                    self.dispatch(TreeViewEvent::QueryChanged(query))
                }
                KeyCode::Down => self.dispatch(TreeViewEvent::FocusFirst),
                _ => false,
            }
        } else {
            match key.code {
                KeyCode::Down => self.dispatch(TreeViewEvent::FocusNext),
                KeyCode::Up => self.dispatch(TreeViewEvent::FocusPrev),
                KeyCode::Right => self.dispatch(TreeViewEvent::ExpandFocused),
                KeyCode::Left => self.dispatch(TreeViewEvent::CollapseFocused),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.dispatch(TreeViewEvent::ActivateFocused)
                }
                _ => false,
            }
        }
    }

    /// Handle a mouse event. A left click on a visible row toggles a folder
    /// or selects a file; it does not move keyboard focus.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        let Some(area) = self.rows_area else {
            return false;
        };
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }

        let index = (mouse.row - area.y) as usize + self.list_state.offset();
        let rows = self.state.visible_rows();
        let Some(row) = rows.get(index) else {
            return false;
        };

        let event = match row.kind {
            NodeKind::Folder => TreeViewEvent::ToggleExpand(row.id.clone()),
            NodeKind::File => TreeViewEvent::Select(row.id.clone()),
        };
        self.dispatch(event)
    }

    /// Render the widget (search field + rows) into the given area.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let model = self.state.view_model();
        self.list_state.select(model.cursor);
        let rows_area = ui::draw_tree_view(
            frame,
            area,
            &model,
            &self.placeholder,
            theme,
            &mut self.list_state,
        );
        self.rows_area = Some(rows_area);
    }

    fn dispatch(&mut self, event: TreeViewEvent) -> bool {
        let transition = self.state.handle_event(event);
        if transition.selection_changed {
            if let Some(handler) = self.on_selection_change.as_mut() {
                handler(self.state.selected_node());
            }
        }
        transition.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::sample_tree;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_query(view: &mut TreeView, text: &str) {
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_default_placeholder() {
        let view = TreeView::new(sample_tree());
        assert_eq!(view.placeholder, "Search...");

        let view = TreeView::new(sample_tree()).with_placeholder("Find files");
        assert_eq!(view.placeholder, "Find files");
    }

    #[test]
    fn test_typing_edits_query() {
        let mut view = TreeView::new(sample_tree());
        assert!(view.is_search_focused());

        type_query(&mut view, "rep");
        assert_eq!(view.query(), "rep");

        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.query(), "re");
    }

    #[test]
    fn test_control_chars_do_not_edit_query() {
        let mut view = TreeView::new(sample_tree());
        let handled = view.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!handled);
        assert_eq!(view.query(), "");
    }

    #[test]
    fn test_arrow_down_enters_tree() {
        let mut view = TreeView::new(sample_tree());
        assert!(view.handle_key(key(KeyCode::Down)));
        assert!(!view.is_search_focused());
        assert_eq!(view.state().focused_id(), Some("1"));
    }

    #[test]
    fn test_arrow_up_from_first_returns_to_search() {
        let mut view = TreeView::new(sample_tree());
        view.handle_key(key(KeyCode::Down));
        assert!(view.handle_key(key(KeyCode::Up)));
        assert!(view.is_search_focused());

        // Typing works again immediately.
        type_query(&mut view, "p");
        assert_eq!(view.query(), "p");
    }

    #[test]
    fn test_selection_handler_fires_once_per_select() {
        let notifications: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = notifications.clone();
        let mut view = TreeView::new(sample_tree()).with_selection_handler(move |node| {
            sink.borrow_mut().push(node.map(|n| n.name.clone()));
        });

        // Walk down to report.pdf: expand Documents, Work, Project A.
        view.handle_key(key(KeyCode::Down)); // Documents
        view.handle_key(key(KeyCode::Right));
        view.handle_key(key(KeyCode::Down)); // Work
        view.handle_key(key(KeyCode::Right));
        view.handle_key(key(KeyCode::Down)); // Project A
        view.handle_key(key(KeyCode::Right));
        view.handle_key(key(KeyCode::Down)); // report.pdf

        // Expansion alone must not notify.
        assert!(notifications.borrow().is_empty());

        view.handle_key(key(KeyCode::Enter));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(
            *notifications.borrow(),
            vec![Some("report.pdf".to_string()), None]
        );
    }

    #[test]
    fn test_space_selects_like_enter() {
        let mut view = TreeView::new(sample_tree());
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Right));
        view.handle_key(key(KeyCode::Down)); // Work
        view.handle_key(key(KeyCode::Char(' '))); // toggles the folder
        assert!(view.state().is_expanded("1.1"));
    }

    #[test]
    fn test_mouse_click_toggles_and_selects() {
        let mut view = TreeView::new(sample_tree());
        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &theme);
            })
            .unwrap();

        // Layout: search field rows 0-2, tree block border on row 3, first
        // row of the list at (1, 4).
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        assert!(view.handle_mouse(click(1, 4)));
        assert!(view.state().is_expanded("1"));
        // Click does not move keyboard focus.
        assert!(view.is_search_focused());

        // Re-render so hit-testing sees the expanded rows, then walk into
        // Personal > resume.pdf by clicking each row.
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &theme);
            })
            .unwrap();
        assert!(view.handle_mouse(click(1, 6))); // Personal
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &theme);
            })
            .unwrap();
        assert!(view.handle_mouse(click(1, 7))); // resume.pdf
        assert_eq!(view.selected_node().unwrap().name, "resume.pdf");

        // A click outside the rows area is ignored.
        assert!(!view.handle_mouse(click(1, 0)));
    }

    #[test]
    fn test_clear_query_refocuses_search() {
        let mut view = TreeView::new(sample_tree());
        type_query(&mut view, "report");
        view.handle_key(key(KeyCode::Down));
        assert!(!view.is_search_focused());

        assert!(view.clear_query());
        assert_eq!(view.query(), "");
        assert!(view.is_search_focused());
    }
}
