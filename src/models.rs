use serde::{Deserialize, Serialize};

/// Answer key for a question. Statement questions are judged against the
/// fixed tokens "richtig"/"falsch", free-text questions against a reference
/// answer string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Statement { correct: bool },
    FreeText { answer: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(flatten)]
    pub key: AnswerKey,
    pub explanation: String,
}

/// Three-way outcome of judging a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Correct,
    Partial,
    Wrong,
}

impl Classification {
    pub fn is_correct(self) -> bool {
        matches!(self, Classification::Correct)
    }
}

/// A question the learner has not answered correctly yet, paired with the
/// last text they submitted for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissedQuestion {
    #[serde(flatten)]
    pub question: Question,
    #[serde(rename = "userText")]
    pub user_text: String,
}

#[derive(Debug)]
pub struct QuizSession {
    /// Working sequence. Grows when a missed question is re-queued.
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub bank_name: String,
    /// Questions classified Correct at least once, in the order they got there.
    pub right_list: Vec<Question>,
    /// Questions never classified Correct, with the last submitted input.
    pub wrong_list: Vec<MissedQuestion>,
    /// Set after submitting, cleared on advance. Some(_) means the feedback
    /// view is showing.
    pub feedback: Option<Classification>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub input_scroll_y: u16,
    pub results_saved: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_deserializes_statement_variant() {
        let json = r#"{
            "id": 1,
            "text": "SLAM steht für Simultaneous Localization and Mapping.",
            "correct": true,
            "explanation": "Bei SLAM wird gleichzeitig eine Karte erstellt und der Standort geschätzt."
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 1);
        assert_eq!(q.key, AnswerKey::Statement { correct: true });
    }

    #[test]
    fn test_question_deserializes_free_text_variant() {
        let json = r#"{
            "id": 7,
            "text": "Wofür steht SLAM?",
            "answer": "Simultaneous Localization and Mapping",
            "explanation": "Karte erstellen und Standort schätzen zugleich."
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        match q.key {
            AnswerKey::FreeText { ref answer } => {
                assert_eq!(answer, "Simultaneous Localization and Mapping")
            }
            _ => panic!("expected free-text variant"),
        }
    }

    #[test]
    fn test_question_roundtrips_flattened_key() {
        let q = Question {
            id: 3,
            text: "Ein RGB-Sensor liefert Tiefeninformationen.".to_string(),
            key: AnswerKey::Statement { correct: false },
            explanation: "RGB-Sensoren liefern nur Farbinformationen.".to_string(),
        };
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"correct\":false"));
        assert!(!json.contains("Statement"));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_missed_question_serializes_user_text_alongside_record() {
        let missed = MissedQuestion {
            question: Question {
                id: 2,
                text: "Frage".to_string(),
                key: AnswerKey::Statement { correct: true },
                explanation: "Erklärung".to_string(),
            },
            user_text: "falsch".to_string(),
        };
        let json = serde_json::to_string(&missed).unwrap();
        assert!(json.contains("\"userText\":\"falsch\""));
        assert!(json.contains("\"id\":2"));
    }

    #[test]
    fn test_classification_is_correct() {
        assert!(Classification::Correct.is_correct());
        assert!(!Classification::Partial.is_correct());
        assert!(!Classification::Wrong.is_correct());
    }
}
