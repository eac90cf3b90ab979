use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use treeview::app::App;
use treeview::cli::{Cli, Commands};
use treeview::error::Result;
use treeview::{event, node, screenshot, ui};

fn main() -> Result<()> {
    // Initialize logger only if the TREEVIEW_LOG environment variable is set
    if let Ok(log_file) = std::env::var("TREEVIEW_LOG") {
        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_file)
                    .expect("Failed to open log file"),
            )))
            .filter_level(log::LevelFilter::Debug)
            .init();

        log::info!("treeview starting up");
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { data: None }) {
        Commands::Run { data } => run_interactive(data.as_deref()),
        Commands::Screenshot {
            data,
            output,
            width,
            height,
        } => screenshot::generate_screenshot(data.as_deref(), output.as_deref(), width, height),
    }
}

fn run_interactive(data_path: Option<&str>) -> Result<()> {
    let data = match data_path {
        Some(path) => node::load_from_file(path)?,
        None => node::sample_tree(),
    };
    let mut app = App::new(data);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let tick_rate = Duration::from_millis(250);
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if crossterm::event::poll(tick_rate)? {
            let ev = crossterm::event::read()?;
            if let Err(e) = event::handle_event(ev, &mut app) {
                app.status_message = format!("Error handling event: {}", e);
            }
        }

        // Selection notifications are emitted during event dispatch and
        // applied here, in the same loop iteration.
        app.drain_selection_events();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
