use std::sync::mpsc;

use crate::node::{sample_tree, TreeNode};
use crate::theme::Theme;
use crate::widget::TreeView;

/// The demo host: owns the tree view widget, reacts to its selection
/// notifications, and provides the "show selected file" action.
pub struct App {
    pub tree_view: TreeView,
    pub theme: Theme,
    pub selected_file: Option<TreeNode>,
    pub status_message: String,
    pub should_quit: bool,
    selection_events: mpsc::Receiver<Option<TreeNode>>,
}

impl App {
    pub fn new(data: Vec<TreeNode>) -> Self {
        // The widget's selection handler runs inside event dispatch; the
        // channel carries the notification out to the app, which drains it
        // in the same loop iteration.
        let (sender, receiver) = mpsc::channel();
        let tree_view = TreeView::new(data).with_selection_handler(move |node| {
            let _ = sender.send(node.cloned());
        });

        Self {
            tree_view,
            theme: Theme::default(),
            selected_file: None,
            status_message: "Ready".to_string(),
            should_quit: false,
            selection_events: receiver,
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample_tree())
    }

    /// Apply selection notifications emitted since the last tick.
    pub fn drain_selection_events(&mut self) {
        while let Ok(selection) = self.selection_events.try_recv() {
            log::debug!(
                "selection changed: {:?}",
                selection.as_ref().map(|node| node.name.as_str())
            );
            self.selected_file = selection;
        }
    }

    pub fn selection_summary(&self) -> &'static str {
        if self.selected_file.is_some() {
            "1 file selected"
        } else {
            "No file selected"
        }
    }

    /// The "show selected file" action. With no selection this is user
    /// guidance, not an error.
    pub fn show_selected_file(&mut self) {
        self.status_message = match &self.selected_file {
            Some(node) => format!("Selected file: {}", node.name),
            None => "Please select a file".to_string(),
        };
    }
}
