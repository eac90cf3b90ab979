//! A filterable tree view for the terminal.
//!
//! The widget renders a folder/file hierarchy with a search field on top:
//! typing prunes the tree to matches and their ancestors, arrow keys walk the
//! visible rows, Enter/Space select files or toggle folders, and a selection
//! handler reports the single selected file to the host. The binary wires the
//! widget to a sample data set as a small demo.

pub mod app;
pub mod cli;
pub mod error;
pub mod event;
pub mod filter;
pub mod flatten;
pub mod node;
pub mod screenshot;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widget;

pub use error::{Result, TreeViewError};
pub use node::{NodeKind, TreeNode};
pub use widget::TreeView;
