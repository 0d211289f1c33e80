use crate::models::{AnswerKey, Classification, Question};
use regex::Regex;

/// Minimum character length (exclusive) for an input or a token to take part
/// in the Partial check. Shorter inputs can only be Correct or Wrong.
const KEYWORD_MIN_CHARS: usize = 4;

lazy_static::lazy_static! {
    /// Splits lowercased input into keyword candidates. German letters count
    /// as word characters, everything else is a separator.
    static ref NON_LETTER: Regex = Regex::new("[^a-zäöüß]+").unwrap();
}

/// Trim and lowercase a submitted answer. `to_lowercase` folds the German
/// uppercase letters (Ä, Ö, Ü) correctly.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Extract keyword candidates from normalized input: split on non-letter
/// runs, keep tokens longer than `KEYWORD_MIN_CHARS` characters.
pub fn keywords(normalized: &str) -> Vec<&str> {
    NON_LETTER
        .split(normalized)
        .filter(|token| token.chars().count() > KEYWORD_MIN_CHARS)
        .collect()
}

/// True if `haystack` contains any keyword of `normalized` as a
/// case-insensitive substring. The first hit wins; there is no best-match
/// ranking.
pub fn contains_any_keyword(haystack: &str, normalized: &str) -> bool {
    let haystack = haystack.to_lowercase();
    keywords(normalized)
        .iter()
        .any(|token| haystack.contains(token))
}

/// Classify a submitted answer against a question.
///
/// Statement questions expect the literal token "richtig" or "falsch"; a miss
/// can still rate Partial when the input shares a long keyword with the
/// explanation. Free-text questions compare against the reference answer and
/// use *that* as the keyword haystack. The two kinds deliberately look at
/// different haystacks; see DESIGN.md before changing either branch.
pub fn classify(question: &Question, raw_input: &str) -> Classification {
    let input = normalize(raw_input);

    match &question.key {
        AnswerKey::Statement { correct } => {
            let expected = if *correct { "richtig" } else { "falsch" };
            if input == expected {
                Classification::Correct
            } else if input.chars().count() > KEYWORD_MIN_CHARS
                && contains_any_keyword(&question.explanation, &input)
            {
                Classification::Partial
            } else {
                Classification::Wrong
            }
        }
        AnswerKey::FreeText { answer } => {
            if input == normalize(answer) {
                Classification::Correct
            } else if input.chars().count() > KEYWORD_MIN_CHARS
                && contains_any_keyword(answer, &input)
            {
                Classification::Partial
            } else {
                Classification::Wrong
            }
        }
    }
}
