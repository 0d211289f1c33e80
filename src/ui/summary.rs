use crate::models::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());

    let title_text = format!("Session Summary - {}", session.bank_name);
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let answered = session.right_list.len() + session.wrong_list.len();
    let mut score_text = Text::default();
    score_text.push_line(Line::from(vec![
        Span::from(format!("{} of {} questions right", session.right_list.len(), answered)),
        Span::from("  ·  "),
        Span::from(format!("{} asked in total", session.questions.len())),
    ]));
    if session.results_saved {
        score_text.push_line(Line::from(Span::styled(
            format!(
                "Saved {} and {}",
                crate::export::RIGHT_FILE,
                crate::export::WRONG_FILE
            ),
            Style::default().fg(Color::Green),
        )));
    }
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, layout.score_area);

    let mut list_text = Text::default();
    if session.wrong_list.is_empty() {
        list_text.push_line(Line::from(Span::styled(
            "Everything answered correctly.",
            Style::default().fg(Color::Green),
        )));
    } else {
        list_text.push_line(Line::from("Still to learn:"));
        list_text.push_line(Line::from(""));
        for missed in &session.wrong_list {
            list_text.push_line(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(Color::Red)),
                Span::from(truncate_string(&missed.question.text, 70)),
            ]));
            if !missed.user_text.trim().is_empty() {
                list_text.push_line(Line::from(format!(
                    "   Your Answer: {}",
                    truncate_string(&missed.user_text, 64)
                )));
            }
            list_text.push_line(Line::from(format!(
                "   {}",
                truncate_string(&missed.question.explanation, 67)
            )));
            list_text.push_line(Line::from(""));
        }
    }

    let list = Paragraph::new(list_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(list, layout.list_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Save Results  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
