use crate::evaluator;
use crate::logger;
use crate::models::{AppState, Classification, MissedQuestion, Question, QuizSession};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Byte offset of the `char_index`-th character, so edits stay on char
/// boundaries with umlauts in the buffer.
fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if session.feedback.is_none() {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Enter => {
                session.submit_answer();
            }
            KeyCode::Left => {
                session.cursor_position = session.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if session.cursor_position < session.input_buffer.chars().count() {
                    session.cursor_position += 1;
                }
            }
            KeyCode::Backspace => {
                if session.cursor_position > 0 {
                    let at = byte_index(&session.input_buffer, session.cursor_position - 1);
                    session.input_buffer.remove(at);
                    session.cursor_position -= 1;
                }
            }
            KeyCode::Char(c) => {
                let at = byte_index(&session.input_buffer, session.cursor_position);
                session.input_buffer.insert(at, c);
                session.cursor_position += 1;
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Enter => {
                session.advance();
                if session.is_finished() {
                    *app_state = AppState::Summary;
                }
            }
            _ => {}
        }
    }
}

impl QuizSession {
    pub fn new(bank_name: String, questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            bank_name,
            right_list: Vec::new(),
            wrong_list: Vec::new(),
            feedback: None,
            input_buffer: String::new(),
            cursor_position: 0,
            input_scroll_y: 0,
            results_saved: false,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Classify the input buffer against the current question and record the
    /// outcome. The feedback view takes over until `advance`.
    pub fn submit_answer(&mut self) {
        let raw = self.input_buffer.clone();
        let classification = evaluator::classify(self.current_question(), &raw);
        logger::log(&format!(
            "question {} answered {:?} (input: {:?})",
            self.current_question().id,
            classification,
            raw
        ));
        self.record_answer(classification, &raw);
        self.feedback = Some(classification);
    }

    /// Update the right/wrong lists for one answered attempt. An id that has
    /// reached the right list stays there for the rest of the session; a
    /// missed question keeps only the latest submitted text.
    pub fn record_answer(&mut self, classification: Classification, raw_input: &str) {
        let question = self.questions[self.current_index].clone();
        match classification {
            Classification::Correct => {
                self.wrong_list.retain(|m| m.question.id != question.id);
                if !self.right_list.iter().any(|q| q.id == question.id) {
                    self.right_list.push(question);
                }
            }
            Classification::Partial | Classification::Wrong => {
                if self.right_list.iter().any(|q| q.id == question.id) {
                    return;
                }
                if let Some(missed) = self
                    .wrong_list
                    .iter_mut()
                    .find(|m| m.question.id == question.id)
                {
                    missed.user_text = raw_input.to_string();
                } else {
                    self.wrong_list.push(MissedQuestion {
                        question,
                        user_text: raw_input.to_string(),
                    });
                }
            }
        }
    }

    /// Move to the next question. A missed question is spliced back into the
    /// sequence at a random position strictly after the current one, so it
    /// comes up again before the session ends.
    pub fn advance(&mut self) {
        self.advance_with(&mut rand::thread_rng());
    }

    pub fn advance_with<R: Rng>(&mut self, rng: &mut R) {
        if let Some(classification) = self.feedback.take()
            && !classification.is_correct()
        {
            let question = self.questions[self.current_index].clone();
            let at = rng.gen_range(self.current_index + 1..=self.questions.len());
            logger::log(&format!(
                "re-queueing question {} at position {} of {}",
                question.id,
                at,
                self.questions.len()
            ));
            self.questions.insert(at, question);
        }
        self.current_index += 1;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_scroll_y = 0;
    }
}
