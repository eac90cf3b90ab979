use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::app::App;
use crate::error::Result;

/// Route a terminal event through the demo app. Returns true if the UI needs
/// a redraw.
///
/// Quit keys are owned by the app, not the widget, and stay out of the way of
/// search input: `q` only quits while a node has focus, and Esc clears a
/// non-empty query before it quits.
pub fn handle_event(event: Event, app: &mut App) -> Result<bool> {
    match event {
        Event::Key(key) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') => {
                        app.should_quit = true;
                        return Ok(false);
                    }
                    KeyCode::Char('s') => {
                        app.show_selected_file();
                        return Ok(true);
                    }
                    _ => {}
                }
            }

            match key.code {
                KeyCode::Esc => {
                    if app.tree_view.query().is_empty() {
                        app.should_quit = true;
                        return Ok(false);
                    }
                    app.tree_view.clear_query();
                    return Ok(true);
                }
                KeyCode::Char('q') if !app.tree_view.is_search_focused() => {
                    app.should_quit = true;
                    return Ok(false);
                }
                _ => {}
            }

            let changed = app.tree_view.handle_key(key);
            app.drain_selection_events();
            Ok(changed)
        }
        Event::Mouse(mouse) => {
            let changed = app.tree_view.handle_mouse(mouse);
            app.drain_selection_events();
            Ok(changed)
        }
        Event::Resize(_, _) => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::with_sample_data();
        handle_event(
            key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_search() {
        let mut app = App::with_sample_data();

        // With the search field focused, 'q' is input, not quit.
        handle_event(key_event(KeyCode::Char('q')), &mut app).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.tree_view.query(), "q");
    }

    #[test]
    fn test_q_quits_when_tree_focused() {
        let mut app = App::with_sample_data();
        handle_event(key_event(KeyCode::Down), &mut app).unwrap();
        assert!(!app.tree_view.is_search_focused());

        handle_event(key_event(KeyCode::Char('q')), &mut app).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_clears_query_before_quitting() {
        let mut app = App::with_sample_data();
        for c in "pdf".chars() {
            handle_event(key_event(KeyCode::Char(c)), &mut app).unwrap();
        }
        assert_eq!(app.tree_view.query(), "pdf");

        let redraw = handle_event(key_event(KeyCode::Esc), &mut app).unwrap();
        assert!(redraw);
        assert_eq!(app.tree_view.query(), "");
        assert!(!app.should_quit);

        handle_event(key_event(KeyCode::Esc), &mut app).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_s_reports_status() {
        let mut app = App::with_sample_data();
        handle_event(
            key_event_with_modifiers(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut app,
        )
        .unwrap();
        assert_eq!(app.status_message, "Please select a file");
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut app = App::with_sample_data();
        let redraw = handle_event(Event::Resize(80, 24), &mut app).unwrap();
        assert!(redraw);
    }
}
