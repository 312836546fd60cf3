//! Rendering - phase-driven drawing for the diagnosis screen.
//!
//! One page, four looks: input form (Idle), spinner (Loading), result
//! cards (Success), error banner (Failed). Arabic renders right-aligned.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use autodiag_common::i18n::Translation;
use autodiag_common::types::{DiagnosisRecord, Severity};

use super::event_loop::TuiState;
use crate::form::FocusField;
use crate::session::Phase;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Badge style per severity level.
fn severity_style(severity: Severity) -> Style {
    let style = Style::default();
    match severity {
        Severity::Low => style.fg(Color::Green),
        Severity::Medium => style.fg(Color::Yellow),
        Severity::High => style.fg(Color::Red),
        Severity::Critical => style.fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

fn text_alignment(state: &TuiState) -> Alignment {
    if state.session.lang.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Draw the UI: header, phase-dependent body, key-hint footer.
pub fn draw_ui(f: &mut Frame, state: &TuiState) {
    let t = state.session.translation();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_header(f, chunks[0], state, t);

    match &state.session.phase {
        Phase::Idle => draw_form(f, chunks[1], state, t),
        Phase::Loading => draw_loading(f, chunks[1], state, t),
        Phase::Success(records) => draw_results(f, chunks[1], state, t, records),
        Phase::Failed(_) => draw_error(f, chunks[1], state, t),
    }

    draw_footer(f, chunks[2], state, t);
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                t.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", state.session.lang.native_name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(t.subtitle, Style::default().fg(Color::Gray))),
    ])
    .alignment(text_alignment(state))
    .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", t.input_section));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(inner);

    for (field, chunk) in FocusField::ALL.into_iter().zip(chunks.iter()) {
        draw_field(f, *chunk, state, t, field);
    }
}

fn draw_field(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation, field: FocusField) {
    let focused = state.focus == field;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let marker = if field.is_required() { " *" } else { "" };
    let title = format!(" {}{} ", field.label(t), marker);

    let value = field.value(&state.session.form);
    let mut spans = Vec::new();
    if value.is_empty() && field == FocusField::Symptoms {
        spans.push(Span::styled(
            t.symptoms_placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .alignment(text_alignment(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

    f.render_widget(paragraph, area);
}

fn draw_loading(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", spinner, t.analyzing),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn draw_results(
    f: &mut Frame,
    area: Rect,
    state: &TuiState,
    t: &Translation,
    records: &[DiagnosisRecord],
) {
    let width = area.width.saturating_sub(4).max(20) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if records.is_empty() {
        lines.push(Line::from(Span::styled(
            t.no_results,
            Style::default().fg(Color::Yellow),
        )));
    } else {
        for record in records {
            lines.push(Line::from(Span::styled(
                record.fault_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", t.severity)),
                Span::styled(
                    format!("[{}]", record.severity.label()),
                    severity_style(record.severity),
                ),
            ]));
            for wrapped in textwrap::wrap(&record.description, width) {
                lines.push(Line::from(wrapped.into_owned()));
            }

            if !record.causes.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("{}:", t.possible_causes),
                    Style::default().fg(Color::Yellow),
                )));
                for (i, cause) in record.causes.iter().enumerate() {
                    for (j, wrapped) in textwrap::wrap(cause, width.saturating_sub(5)).iter().enumerate() {
                        let prefix = if j == 0 {
                            format!("  {}. ", i + 1)
                        } else {
                            "     ".to_string()
                        };
                        lines.push(Line::from(format!("{}{}", prefix, wrapped)));
                    }
                }
            }

            if !record.solutions.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("{}:", t.solutions),
                    Style::default().fg(Color::Green),
                )));
                for (i, solution) in record.solutions.iter().enumerate() {
                    for (j, wrapped) in textwrap::wrap(solution, width.saturating_sub(5)).iter().enumerate() {
                        let prefix = if j == 0 {
                            format!("  {}. ", i + 1)
                        } else {
                            "     ".to_string()
                        };
                        lines.push(Line::from(format!("{}{}", prefix, wrapped)));
                    }
                }
            }

            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("{}: {}", t.warning, t.safety_tip),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        t.visit_mechanic,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .alignment(text_alignment(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", t.results_title)),
        );

    f.render_widget(paragraph, area);
}

fn draw_error(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            t.error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(format!(" {} ", t.warning)),
        );

    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, area: Rect, state: &TuiState, t: &Translation) {
    let time_str = chrono::Local::now().format("%H:%M:%S").to_string();
    let hints = match state.session.phase {
        Phase::Idle => format!(
            "Tab · Enter {} · F2 {} · Esc {}",
            t.analyze_button,
            t.language,
            t.quit
        ),
        Phase::Loading => t.analyzing.to_string(),
        Phase::Success(_) => format!(
            "PgUp/PgDn · Ctrl+R {} · F2 {} · Esc {}",
            t.reset,
            t.language,
            t.quit
        ),
        Phase::Failed(_) => format!("Enter {} · F2 {} · Esc {}", t.reset, t.language, t.quit),
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        format!("{} · {}", time_str, hints),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(text_alignment(state));

    f.render_widget(footer, area);
}
