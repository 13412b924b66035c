use std::ops::ControlFlow;

use crate::memo::MemoCache;
use crate::offsets::{OffsetIndex, Occurrences};
use crate::query::{fold, Query};

const PATH_SEPARATOR: char = '/';

const SEPARATOR_FACTOR: f64 = 0.9;
const WORD_BREAK_FACTOR: f64 = 0.8;
const CAMEL_CASE_FACTOR: f64 = 0.8;
const DOT_FACTOR: f64 = 0.7;
const DISTANCE_FACTOR: f64 = 0.75;

/// Upper bound on memo slots reserved before the search; the table grows past it on demand.
const MEMO_PREALLOC: usize = 1024;

#[inline]
fn is_word_break(c: char) -> bool {
    matches!(c, '-' | '_' | ' ') || c.is_ascii_digit()
}

/// Query characters that never pay a distance penalty.
#[inline]
fn is_structural(c: char) -> bool {
    c == PATH_SEPARATOR || c == '.'
}

/// Penalty multiplier for a character matched `distance > 1` positions after the previous match.
pub(crate) fn boundary_factor(matched: char, prev: Option<char>, distance: usize) -> f64 {
    match prev {
        Some(PATH_SEPARATOR) => SEPARATOR_FACTOR,
        Some(p) if is_word_break(p) => WORD_BREAK_FACTOR,
        Some(p) if p.is_lowercase() && matched.is_uppercase() => CAMEL_CASE_FACTOR,
        Some('.') => DOT_FACTOR,
        // gap without a boundary: the further away, the less it is worth
        _ => DISTANCE_FACTOR / distance as f64,
    }
}

/// A candidate prepared for one scoring call.
pub(crate) struct Candidate {
    chars: Vec<char>,
    folded: Vec<char>,
    max_contribution: f64,
}

impl Candidate {
    pub(crate) fn new(text: &str, query_len: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let folded = fold(text);
        let max_contribution = (1.0 / chars.len() as f64 + 1.0 / query_len as f64) / 2.0;
        Self {
            chars,
            folded,
            max_contribution,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Score for matching the query character `qc` at `pos`.
    fn contribution(&self, qc: char, pos: usize, last_matched: Option<usize>) -> f64 {
        let distance = match last_matched {
            Some(last) => pos - last,
            None => pos + 1,
        };
        if distance <= 1 || is_structural(qc) {
            return self.max_contribution;
        }
        let prev = pos.checked_sub(1).map(|p| self.chars[p]);
        self.max_contribution * boundary_factor(self.chars[pos], prev, distance)
    }
}

/// Position in the alignment search; the memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Frame {
    query_pos: usize,
    candidate_pos: usize,
    last_matched: Option<usize>,
}

/// `None` when the remaining query cannot be aligned.
type Subscore = Option<f64>;

struct Search<'a, L> {
    query: &'a [char],
    candidate: &'a Candidate,
    lookup: &'a L,
}

impl<L: Occurrences> Search<'_, L> {
    fn best_score(&self, frame: Frame, memo: &mut MemoCache<Frame, Subscore>) -> Subscore {
        if frame.query_pos == self.query.len() {
            return Some(0.0);
        }
        memo.get_or_compute(frame, |memo| self.explore(frame, memo))
    }

    /// Tries every viable occurrence of the current query character and keeps the best total.
    ///
    /// Moving on to the next occurrence is the "skip" branch; it keeps `last_matched` unchanged.
    fn explore(&self, frame: Frame, memo: &mut MemoCache<Frame, Subscore>) -> Subscore {
        let qc = self.query[frame.query_pos];
        let remaining = self.query.len() - frame.query_pos;
        let mut best: Subscore = None;
        let mut from = frame.candidate_pos;

        while let Some(pos) = self.lookup.next_at_or_after(qc, from) {
            if self.candidate.len() - pos < remaining {
                break;
            }
            let next = Frame {
                query_pos: frame.query_pos + 1,
                candidate_pos: pos + 1,
                last_matched: Some(pos),
            };
            // a later occurrence leaves less room, so it cannot succeed where this one failed
            let Some(rest) = self.best_score(next, memo) else {
                break;
            };
            let total = self.candidate.contribution(qc, pos, frame.last_matched) + rest;
            best = Some(best.map_or(total, |b| b.max(total)));
            from = pos + 1;
        }
        best
    }
}

/// Settles the cases that need no search, otherwise prepares the candidate.
fn prepare(query: &Query, text: &str) -> ControlFlow<f64, Candidate> {
    let query_len = query.len();
    if query_len == 0 || text.is_empty() {
        return ControlFlow::Break(0.0);
    }
    let candidate = Candidate::new(text, query_len);
    if query_len > candidate.len() {
        return ControlFlow::Break(0.0);
    }
    if query_len == candidate.len() {
        let identical = candidate.folded == query.folded();
        return ControlFlow::Break(if identical { 1.0 } else { 0.0 });
    }
    ControlFlow::Continue(candidate)
}

/// Best alignment of `query` within `candidate`, or `0.0` when there is none.
fn align<L: Occurrences>(query: &Query, candidate: &Candidate, lookup: &L) -> f64 {
    let search = Search {
        query: query.folded(),
        candidate,
        lookup,
    };
    let mut memo = MemoCache::with_capacity(
        query.len().saturating_mul(candidate.len()).min(MEMO_PREALLOC),
    );
    let root = Frame {
        query_pos: 0,
        candidate_pos: 0,
        last_matched: None,
    };
    let score = search.best_score(root, &mut memo).unwrap_or(0.0);
    log::trace!(
        "aligned {:?} in {} chars: {:.4} ({} subproblems)",
        query.raw(),
        candidate.len(),
        score,
        memo.len()
    );
    score
}

pub(crate) fn score(query: &Query, text: &str) -> f64 {
    match prepare(query, text) {
        ControlFlow::Break(score) => score,
        ControlFlow::Continue(candidate) => {
            let index = OffsetIndex::build(&candidate.folded);
            align(query, &candidate, &index)
        }
    }
}
