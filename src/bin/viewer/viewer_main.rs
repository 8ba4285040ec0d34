//! Viewer main function that can be called from docstrip.rs
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use docstrip::transcript::markdown::page_from_markdown;
use docstrip::transcript::surface::{PageBlock, PageSurface};
use ratatui::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::app::App;
use super::ui;

/// Run the viewer for the given file path
pub fn run_viewer(file_path: PathBuf) -> io::Result<()> {
    // Load the file
    let content = fs::read_to_string(&file_path)?;
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    // Markdown pages contribute one candidate per fenced block; any other
    // file is viewed as a single transcript.
    let is_markdown = matches!(
        file_path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("markdown")
    );
    let surface = if is_markdown {
        page_from_markdown(&content)
    } else {
        PageSurface::new(vec![PageBlock::new(None, content)])
    };

    let mut app = App::new(surface);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &file_name);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    file_name: &str,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app, file_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _ = app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration re-renders
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}
