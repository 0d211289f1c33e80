pub mod bank;
pub mod evaluator;
pub mod export;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{get_bank_files, load_bank, shuffled, BankError};
pub use evaluator::{classify, contains_any_keyword, keywords, normalize};
pub use export::write_results;
pub use models::{AnswerKey, AppState, Classification, MissedQuestion, Question, QuizSession};
pub use session::handle_quiz_input;
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::{truncate_string, wrapped_cursor_position};
