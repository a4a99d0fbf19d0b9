//! Stateless UI rendering for the drill.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_numeri::{AcceptedAnswers, Feedback, Snapshot};

/// Renders one frame from a session snapshot.
pub fn draw(
    frame: &mut Frame,
    snapshot: &Snapshot,
    answers: &AcceptedAnswers,
    input: &str,
    shaking: bool,
) {
    if snapshot.phase.is_over() {
        draw_game_over(frame, snapshot);
        return;
    }

    let area = center_rect(frame.area(), 56, 22);
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // HUD
        Constraint::Length(3), // Audio
        Constraint::Length(3), // Answer
        Constraint::Min(6),    // Feedback
        Constraint::Length(2), // Footer
    ])
    .split(area);

    let title = Paragraph::new("Strictly Numeri - Ascolta e scrivi")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_hud(frame, chunks[1], snapshot);
    draw_audio(frame, chunks[2], snapshot);
    draw_input(frame, chunks[3], snapshot, input, shaking);
    draw_feedback(frame, chunks[4], snapshot, answers);

    let footer = Paragraph::new(format!(
        "Level {} • Numbers up to {}",
        snapshot.level, snapshot.level_cap
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[5]);
}

fn draw_hud(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let hearts: Vec<Span> = (0..snapshot.max_lives)
        .map(|i| {
            if i < snapshot.lives {
                Span::styled("♥ ", Style::default().fg(Color::Red))
            } else {
                Span::styled("♥ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let mut line = hearts;
    line.push(Span::raw(format!(
        "  Score {}  Streak {}  Level {}",
        snapshot.score, snapshot.streak, snapshot.level
    )));
    if snapshot.streak >= 3 {
        line.push(Span::styled(
            format!("  🔥 {}x", snapshot.multiplier),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hud = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hud, area);
}

fn draw_audio(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let text = if snapshot.speech_available {
        Line::from(Span::styled(
            "🔊 Tab or Ctrl+R to hear it again",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "🔇 Speech synthesis is not available on this system.",
            Style::default().fg(Color::Red),
        ))
    };
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, area: Rect, snapshot: &Snapshot, input: &str, shaking: bool) {
    let border = if shaking {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if snapshot.feedback == Feedback::Idle {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if input.is_empty() && snapshot.feedback == Feedback::Idle {
        Span::styled("Type digits or word...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.to_string(), Style::default().add_modifier(Modifier::BOLD))
    };

    // Shift the box sideways while the shake cue runs.
    let area = if shaking {
        Rect {
            x: area.x.saturating_add(2),
            width: area.width.saturating_sub(2),
            ..area
        }
    } else {
        area
    };

    let paragraph = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, snapshot: &Snapshot, answers: &AcceptedAnswers) {
    let Some(verdict) = snapshot.feedback.verdict() else {
        let hint = Paragraph::new("Enter to check your answer")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    };

    let color = match snapshot.feedback {
        Feedback::Correct => Color::Green,
        _ => Color::Red,
    };

    let mut verdict_line = vec![Span::styled(
        verdict,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(points) = snapshot.last_award {
        verdict_line.push(Span::styled(
            format!("  +{} pts", points),
            Style::default().fg(Color::Green),
        ));
    }

    let mut lines = vec![
        Line::from(verdict_line),
        Line::from(""),
        Line::from(Span::styled(
            snapshot.digits.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            answers.word().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    if snapshot.lives > 0 {
        lines.push(Line::from("Enter to continue →"));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_game_over(frame: &mut Frame, snapshot: &Snapshot) {
    let area = center_rect(frame.area(), 40, 11);
    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("You reached Level {}", snapshot.level),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(format!("Final Score  {}", snapshot.score)),
        Line::from(format!("Best Streak  {}", snapshot.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to play again, q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height.min(area.height)),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width.min(area.width)),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}
