use crate::models::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question bank {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate question id {id} in {path}")]
    DuplicateId { id: u32, path: PathBuf },
    #[error("question {id} has empty text in {path}")]
    EmptyText { id: u32, path: PathBuf },
    #[error("question bank {path} contains no questions")]
    Empty { path: PathBuf },
}

/// List the JSON question banks under `questions/`, sorted by path.
pub fn get_bank_files() -> Vec<PathBuf> {
    let bank_dir = PathBuf::from("questions");
    let mut files = Vec::new();

    if bank_dir.is_dir()
        && let Ok(entries) = fs::read_dir(&bank_dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

/// Load and validate a question bank. Fails fast on malformed records,
/// duplicate ids, empty statement text, or an empty bank.
pub fn load_bank(path: &Path) -> Result<Vec<Question>, BankError> {
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&content).map_err(|source| BankError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(BankError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::new();
    for question in &questions {
        if question.text.trim().is_empty() {
            return Err(BankError::EmptyText {
                id: question.id,
                path: path.to_path_buf(),
            });
        }
        if !seen.insert(question.id) {
            return Err(BankError::DuplicateId {
                id: question.id,
                path: path.to_path_buf(),
            });
        }
    }

    Ok(questions)
}

/// Return a shuffled copy of the bank. The input is left untouched and the
/// output is a permutation of it: same questions, same multiplicities.
pub fn shuffled(questions: &[Question]) -> Vec<Question> {
    shuffled_with(questions, &mut rand::thread_rng())
}

pub fn shuffled_with<R: Rng>(questions: &[Question], rng: &mut R) -> Vec<Question> {
    let mut sequence = questions.to_vec();
    sequence.shuffle(rng);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerKey;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    fn bank(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                text: format!("Aussage {id}"),
                key: AnswerKey::Statement { correct: id % 2 == 0 },
                explanation: format!("Erklärung {id}"),
            })
            .collect()
    }

    fn write_bank(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_bank_mixed_question_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "robotik.json",
            r#"[
                {"id": 1, "text": "SLAM steht für Simultaneous Localization and Mapping.",
                 "correct": true, "explanation": "Karte und Standort zugleich."},
                {"id": 2, "text": "Wofür steht SLAM?",
                 "answer": "Simultaneous Localization and Mapping",
                 "explanation": "Karte und Standort zugleich."}
            ]"#,
        );
        let questions = load_bank(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].key, AnswerKey::Statement { correct: true });
        assert!(matches!(questions[1].key, AnswerKey::FreeText { .. }));
    }

    #[test]
    fn test_load_bank_missing_answer_field_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "bad.json",
            r#"[{"id": 1, "text": "Aussage", "explanation": "weder correct noch answer"}]"#,
        );
        assert!(matches!(load_bank(&path), Err(BankError::Malformed { .. })));
    }

    #[test]
    fn test_load_bank_duplicate_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "dup.json",
            r#"[
                {"id": 1, "text": "A", "correct": true, "explanation": "x"},
                {"id": 1, "text": "B", "correct": false, "explanation": "y"}
            ]"#,
        );
        assert!(matches!(
            load_bank(&path),
            Err(BankError::DuplicateId { id: 1, .. })
        ));
    }

    #[test]
    fn test_load_bank_empty_text_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "blank.json",
            r#"[{"id": 4, "text": "   ", "correct": true, "explanation": "x"}]"#,
        );
        assert!(matches!(
            load_bank(&path),
            Err(BankError::EmptyText { id: 4, .. })
        ));
    }

    #[test]
    fn test_load_bank_empty_array_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(dir.path(), "empty.json", "[]");
        assert!(matches!(load_bank(&path), Err(BankError::Empty { .. })));
    }

    #[test]
    fn test_load_bank_missing_file_fails() {
        assert!(matches!(
            load_bank(Path::new("questions/does-not-exist.json")),
            Err(BankError::Io { .. })
        ));
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let questions = bank(20);
        let mut rng = StdRng::seed_from_u64(7);
        let result = shuffled_with(&questions, &mut rng);

        assert_eq!(result.len(), questions.len());
        let mut ids: Vec<u32> = result.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        let expected: Vec<u32> = (1..=20).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_shuffled_does_not_mutate_input() {
        let questions = bank(10);
        let before = questions.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = shuffled_with(&questions, &mut rng);
        assert_eq!(questions, before);
    }

    #[test]
    fn test_shuffled_records_are_unchanged() {
        let questions = bank(8);
        let mut rng = StdRng::seed_from_u64(11);
        let result = shuffled_with(&questions, &mut rng);
        for q in &result {
            assert_eq!(questions.iter().find(|o| o.id == q.id), Some(q));
        }
    }
}
