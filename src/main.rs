use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use robotik_quiz::{
    bank, export, logger,
    models::{AppState, Question, QuizSession},
    session::handle_quiz_input,
    ui,
};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut app_state = AppState::Menu;
    let bank_files = bank::get_bank_files();
    let mut selected_file_index: usize = 0;
    // the loaded bank is kept around so a restart can reshuffle from scratch
    let mut bank_questions: Vec<Question> = Vec::new();
    let mut quiz_session: Option<QuizSession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => ui::draw_menu(f, &bank_files, selected_file_index),
            AppState::Quiz => {
                if let Some(session) = &mut quiz_session {
                    ui::draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => ui::draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    ui::draw_summary(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        selected_file_index = selected_file_index.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if selected_file_index < bank_files.len().saturating_sub(1) {
                            selected_file_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if !bank_files.is_empty() {
                            let path = &bank_files[selected_file_index];
                            match bank::load_bank(path) {
                                Ok(questions) => {
                                    let bank_name = path
                                        .file_stem()
                                        .map(|s| s.to_string_lossy().to_string())
                                        .unwrap_or_default();
                                    quiz_session = Some(QuizSession::new(
                                        bank_name,
                                        bank::shuffled(&questions),
                                    ));
                                    bank_questions = questions;
                                    app_state = AppState::Quiz;
                                }
                                Err(err) => {
                                    logger::log(&format!("failed to load bank: {err}"));
                                }
                            }
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut app_state);
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        quiz_session = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Quiz;
                    }
                    _ => {}
                },
                AppState::Summary => match key.code {
                    KeyCode::Char('s') => {
                        if let Some(session) = &mut quiz_session
                            && !session.results_saved
                        {
                            match export::write_results(
                                Path::new("."),
                                &session.right_list,
                                &session.wrong_list,
                            ) {
                                Ok(_) => session.results_saved = true,
                                Err(err) => {
                                    logger::log(&format!("failed to save results: {err}"));
                                }
                            }
                        }
                    }
                    KeyCode::Char('r') => {
                        if let Some(session) = &quiz_session {
                            let bank_name = session.bank_name.clone();
                            quiz_session = Some(QuizSession::new(
                                bank_name,
                                bank::shuffled(&bank_questions),
                            ));
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('m') => {
                        quiz_session = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
            }
        }
    }

    Ok(())
}
