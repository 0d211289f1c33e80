use crate::models::{Classification, QuizSession};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::wrapped_cursor_position;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &mut QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let question = session.current_question().clone();
    let progress = format!(
        "Question {} / {} - {}",
        session.current_index + 1,
        session.questions.len(),
        session.bank_name
    );

    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_widget = Paragraph::new(Text::from(question.text.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_widget, layout.question_area);

    let answer_title = if session.feedback.is_some() {
        "Result (Press Enter to continue)"
    } else {
        "Your Answer (Press Enter to submit)"
    };

    let answer_content = if let Some(classification) = session.feedback {
        let (marker, color) = match classification {
            Classification::Correct => ("Correct!", Color::Green),
            Classification::Partial => ("Partially right", Color::Yellow),
            Classification::Wrong => ("Wrong", Color::Red),
        };
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            marker,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        if !classification.is_correct() {
            text.push_line(Line::from(""));
            text.push_line(Line::from(question.explanation.as_str()));
        }
        if let Some(missed) = session
            .wrong_list
            .iter()
            .find(|m| m.question.id == question.id)
        {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                "Your Answer:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(missed.user_text.as_str()));
        }
        text
    } else {
        Text::from(if session.input_buffer.is_empty() {
            "[richtig / falsch, oder eine kurze Erklärung...]"
        } else {
            session.input_buffer.as_str()
        })
    };

    // Keep the cursor visible while typing by scrolling the input box
    let scroll_y = if session.feedback.is_none() {
        let visible_height = layout.answer_area.height.saturating_sub(2) as usize;
        let text_width = layout.answer_area.width.saturating_sub(2) as usize;
        let (cursor_line, _) =
            wrapped_cursor_position(&session.input_buffer, session.cursor_position, text_width);

        let mut scroll = session.input_scroll_y as usize;
        if cursor_line < scroll {
            scroll = cursor_line;
        } else if visible_height > 0 && cursor_line >= scroll + visible_height {
            scroll = cursor_line - visible_height + 1;
        }
        session.input_scroll_y = scroll as u16;
        scroll as u16
    } else {
        0
    };

    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .scroll((scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title(answer_title));
    f.render_widget(answer, layout.answer_area);

    if session.feedback.is_none() {
        let text_width = layout.answer_area.width.saturating_sub(2) as usize;
        let (cursor_line, cursor_col) =
            wrapped_cursor_position(&session.input_buffer, session.cursor_position, text_width);
        let cursor_x = layout.answer_area.x + 1 + cursor_col as u16;
        let cursor_y = layout.answer_area.y + 1 + (cursor_line as u16).saturating_sub(scroll_y);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let mut help_spans = Vec::new();
    if session.feedback.is_none() {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Submit  "),
        ]);
    } else {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Next Question  "),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Menu"),
    ]);

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this session and return to the main menu?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
