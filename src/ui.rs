//! UI rendering for the terminal front end.
//!
//! This module draws the now-playing screen with `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState};
use crate::config::Settings;

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step_seconds: u64) -> String {
    [
        "[space/p] play/pause".to_string(),
        format!("[h/l] seek -/+{seek_step_seconds}s"),
        "[s] stop".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn state_style(state: PlaybackState) -> Style {
    match state {
        PlaybackState::Playing => Style::new().green().add_modifier(Modifier::BOLD),
        PlaybackState::Loading => Style::new().yellow(),
        PlaybackState::Failed => Style::new().red().add_modifier(Modifier::BOLD),
        _ => Style::new(),
    }
}

/// Draw the whole screen.
pub fn draw(f: &mut Frame, app: &App, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .bold();
    f.render_widget(header, chunks[0]);

    let state = app.playback();
    let info = Paragraph::new(vec![
        format!("Source: {}", app.track.source()).into(),
        Line::styled(app.state_text(), state_style(state)),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" now playing ")
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(info, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::new().cyan())
        .ratio(app.track.completed_fraction().clamp(0.0, 1.0))
        .label(app.time_text(&settings.ui));
    f.render_widget(gauge, chunks[2]);

    let footer_text = match &app.status {
        Some(status) => status.clone(),
        None => controls_text(settings.playback.seek_step_seconds),
    };
    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[4]);
}
