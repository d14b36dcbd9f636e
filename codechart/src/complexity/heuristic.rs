use regex::Regex;
use std::sync::OnceLock;

/// Control-flow keywords counted by the line heuristic.
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "case", "catch", "&&", "||", "and", "or",
];

fn keyword_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    #[allow(clippy::expect_used)]
    PATTERNS.get_or_init(|| {
        KEYWORDS
            .iter()
            .map(|keyword| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
                    .expect("Invalid keyword pattern")
            })
            .collect()
    })
}

/// Scores a single line of text by keyword occurrence.
///
/// Starts at 1 and adds 1 for each whole-word, case-insensitive match of a
/// control-flow keyword anywhere in the line. Language-agnostic; used when
/// structural parsing is unavailable and no external score was supplied.
#[must_use]
pub fn heuristic_score(line: &str) -> usize {
    let mut score = 1;
    for pattern in keyword_patterns() {
        score += pattern.find_iter(line).count();
    }
    score
}
