use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::flatten::VisibleRow;
use crate::node::NodeKind;
use crate::state::TreeViewModel;
use crate::theme::Theme;

/// Draw the demo: the tree view widget, the footer with the selection summary
/// and the "show selected file" action, and the status bar.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    app.tree_view.render(frame, chunks[0], &app.theme);
    draw_footer(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the widget itself: search field on top, visible rows below.
///
/// Returns the inner rows area so the widget can hit-test pointer clicks
/// against what was actually rendered.
pub fn draw_tree_view(
    frame: &mut Frame,
    area: Rect,
    model: &TreeViewModel,
    placeholder: &str,
    theme: &Theme,
    list_state: &mut ListState,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_search_field(frame, chunks[0], model, placeholder, theme);
    draw_rows(frame, chunks[1], model, theme, list_state)
}

fn draw_search_field(
    frame: &mut Frame,
    area: Rect,
    model: &TreeViewModel,
    placeholder: &str,
    theme: &Theme,
) {
    let border_style = if model.search_focused {
        Style::default().fg(theme.search_border_active)
    } else {
        Style::default().fg(theme.search_border_inactive)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let content = if model.query.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme.search_placeholder),
        ))
    } else {
        Line::from(Span::styled(
            model.query.clone(),
            Style::default().fg(theme.search_text),
        ))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    // The terminal cursor is the "DOM focus" of the search field.
    if model.search_focused && inner.width > 0 {
        let cursor_x = inner.x + (model.query.chars().count() as u16).min(inner.width - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn draw_rows(
    frame: &mut Frame,
    area: Rect,
    model: &TreeViewModel,
    theme: &Theme,
    list_state: &mut ListState,
) -> Rect {
    let border_style = if model.search_focused {
        Style::default().fg(theme.tree_border_inactive)
    } else {
        Style::default().fg(theme.tree_border_active)
    };

    let block = Block::default()
        .title(" Files ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    if model.rows.is_empty() {
        let message = if model.query.is_empty() {
            "No files"
        } else {
            "No matches"
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(theme.empty_text));
        frame.render_widget(paragraph, area);
        return inner;
    }

    let items: Vec<ListItem> = model
        .rows
        .iter()
        .map(|row| ListItem::new(row_line(row, model, theme)))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.focused_bg)
            .fg(theme.focused_fg)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, list_state);
    inner
}

fn row_line(row: &VisibleRow, model: &TreeViewModel, theme: &Theme) -> Line<'static> {
    let indent = "  ".repeat(row.depth);

    let marker = match row.kind {
        NodeKind::Folder => {
            if !row.has_children {
                "  "
            } else if row.is_expanded {
                "▼ "
            } else {
                "▶ "
            }
        }
        NodeKind::File => {
            if model.selected.as_deref() == Some(row.id.as_str()) {
                "(•) "
            } else {
                "( ) "
            }
        }
    };

    let name_style = match row.kind {
        NodeKind::Folder => Style::default()
            .fg(theme.folder)
            .add_modifier(Modifier::BOLD),
        NodeKind::File => Style::default().fg(theme.file),
    };
    let match_style = Style::default().bg(theme.match_bg).fg(theme.match_fg);

    let mut spans = vec![Span::raw(format!("{}{}", indent, marker))];
    spans.extend(highlight_spans(&row.name, &model.query, name_style, match_style));
    Line::from(spans)
}

/// Split a node name into styled spans, highlighting every case-insensitive
/// occurrence of the query.
///
/// Offsets are computed on lowercased copies; when the lowercase mapping
/// shifts byte offsets (non-ASCII edge cases) the name falls back to a single
/// unhighlighted span rather than slicing off a char boundary.
fn highlight_spans(
    name: &str,
    query: &str,
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    if query.is_empty() {
        return vec![Span::styled(name.to_string(), base)];
    }

    let lowered_name = name.to_lowercase();
    let lowered_query = query.to_lowercase();
    if lowered_name.len() != name.len() {
        return vec![Span::styled(name.to_string(), base)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;
    while let Some(offset) = lowered_name[search_from..].find(&lowered_query) {
        let start = search_from + offset;
        let end = start + lowered_query.len();
        if !name.is_char_boundary(start) || !name.is_char_boundary(end) {
            break;
        }
        if start > cursor {
            spans.push(Span::styled(name[cursor..start].to_string(), base));
        }
        spans.push(Span::styled(name[start..end].to_string(), highlight));
        cursor = end;
        search_from = end;
    }
    if cursor < name.len() {
        spans.push(Span::styled(name[cursor..].to_string(), base));
    }
    spans
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let action_style = if app.selected_file.is_some() {
        Style::default()
            .fg(app.theme.action_enabled)
            .add_modifier(Modifier::BOLD)
    } else {
        // The action is disabled until a file is selected.
        Style::default().fg(app.theme.action_disabled)
    };

    let line = Line::from(vec![
        Span::styled(
            app.selection_summary(),
            Style::default().fg(app.theme.summary_text),
        ),
        Span::raw("    "),
        Span::styled("Ctrl+S: show selected file", action_style),
    ]);

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(app.status_message.as_str()).style(
        Style::default()
            .bg(app.theme.status_bar_bg)
            .fg(app.theme.status_bar_fg),
    );
    frame.render_widget(paragraph, area);
}
