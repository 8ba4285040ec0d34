//! Rendering for the viewer
//!
//! Layout: a header with the file name and mode indicator, a block list on
//! the left, the focused block's current text on the right, and a key-hint
//! footer. Prompted lines are tinted so the as-captured rendition is easy
//! to tell apart at a glance.

use docstrip::transcript::markers::contains_marker;
use docstrip::transcript::surface::RenderSurface;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::App;

pub fn render(frame: &mut Frame, app: &App, file_name: &str) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, file_name, outer[0]);
    render_body(frame, app, outer[1]);
    render_footer(frame, outer[2]);
}

fn render_header(frame: &mut Frame, app: &App, file_name: &str, area: Rect) {
    let header = Line::from(vec![
        Span::styled(file_name.to_string(), Style::default().bold()),
        Span::raw("  -  "),
        Span::styled(
            format!("[p] {}", app.surface.mode_label()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_block_list(frame, app, columns[0]);
    render_block_text(frame, app, columns[1]);
}

fn render_block_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .ids
        .iter()
        .map(|id| {
            let language = app
                .surface
                .resolve(id)
                .and_then(|index| app.surface.language_tag(index))
                .unwrap_or("-");
            ListItem::new(format!("{} ({})", id, language))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Transcripts"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut state = ListState::default();
    if !app.ids.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_block_text(frame: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match app.selected_id().and_then(|id| app.surface.resolve(id)) {
        Some(index) => (
            format!("{}", app.ids[app.selected]),
            app.surface.text(index).to_string(),
        ),
        None => ("no transcripts".to_string(), String::new()),
    };

    let lines: Vec<Line> = text
        .lines()
        .map(|line| {
            if contains_marker(line) {
                Line::styled(line.to_string(), Style::default().fg(Color::Yellow))
            } else {
                Line::raw(line.to_string())
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " j/k move   enter/space toggle block   p toggle page   q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
