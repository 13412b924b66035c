use crate::rank::ScoredPath;
use crate::scorer;

/// Folds one character for case-insensitive comparison.
///
/// Characters whose lowercase form expands to several characters fold to the
/// first one, so folded text always has the same length as the input.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

pub(crate) fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// A normalized query, built once and shared by every candidate scored against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: Vec<char>,
}

impl Query {
    pub fn build(text: &str) -> Self {
        let folded = fold(text);
        log::debug!(
            "query {:?} folded to {:?} ({} chars)",
            text,
            folded.iter().collect::<String>(),
            folded.len()
        );
        Self {
            raw: text.to_string(),
            folded,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Scores `candidate` in `[0, 1]`; `0.0` means no match.
    pub fn score(&self, candidate: &str) -> f64 {
        scorer::score(self, candidate)
    }

    pub fn score_path(&self, candidate: &str) -> ScoredPath {
        ScoredPath {
            path: candidate.to_string(),
            score: self.score(candidate),
        }
    }
}
