use ratatui::style::Color;

/// Theme data structure containing all colors used by the widget and the demo
#[derive(Debug, Clone)]
pub struct Theme {
    // Search field
    pub search_border_active: Color,
    pub search_border_inactive: Color,
    pub search_placeholder: Color,
    pub search_text: Color,

    // Tree rows
    pub tree_border_active: Color,
    pub tree_border_inactive: Color,
    pub folder: Color,
    pub file: Color,
    pub focused_bg: Color,
    pub focused_fg: Color,
    pub match_bg: Color,
    pub match_fg: Color,
    pub empty_text: Color,

    // Demo chrome
    pub summary_text: Color,
    pub action_enabled: Color,
    pub action_disabled: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Search field
            search_border_active: Color::Yellow,
            search_border_inactive: Color::DarkGray,
            search_placeholder: Color::DarkGray,
            search_text: Color::Reset,

            // Tree rows
            tree_border_active: Color::Yellow,
            tree_border_inactive: Color::DarkGray,
            folder: Color::Blue,
            file: Color::Reset,
            focused_bg: Color::White,
            focused_fg: Color::Black,
            match_bg: Color::Yellow,
            match_fg: Color::Black,
            empty_text: Color::Gray,

            // Demo chrome
            summary_text: Color::Gray,
            action_enabled: Color::White,
            action_disabled: Color::DarkGray,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }
}
