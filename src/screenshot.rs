use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::fs;

use crate::app::App;
use crate::error::Result;
use crate::node;
use crate::ui;

/// Render one frame of the demo headlessly and emit it as text.
pub fn generate_screenshot(
    data_path: Option<&str>,
    output_path: Option<&str>,
    width: u16,
    height: u16,
) -> Result<()> {
    let data = match data_path {
        Some(path) => node::load_from_file(path)?,
        None => node::sample_tree(),
    };
    let mut app = App::new(data);

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|frame| {
        ui::draw(frame, &mut app);
    })?;

    let buffer = terminal.backend().buffer().clone();
    let screenshot = buffer_to_string(&buffer);

    match output_path {
        Some(path) => {
            fs::write(path, screenshot)?;
            println!("Screenshot saved to: {}", path);
        }
        None => {
            print!("{}", screenshot);
        }
    }

    Ok(())
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();

    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            let cell = &buffer[(x, y)];
            let sym = cell.symbol();

            // Use a space for empty cells to make output more readable
            if sym.is_empty() {
                result.push(' ');
            } else {
                result.push_str(sym);
            }
        }
        result.push('\n');
    }

    result
}
