use rayon::prelude::*;
use serde::Serialize;

use crate::query::Query;

/// A candidate paired with its score against a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath {
    pub path: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Order by descending score, ties by ascending path. Input order otherwise.
    pub sort: bool,
    /// Maximum number of results, applied after filtering and sorting.
    pub limit: Option<usize>,
    /// Score candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            sort: true,
            limit: None,
            parallel: false,
        }
    }
}

/// Scores every candidate, drops non-matches, then sorts and truncates per `options`.
pub fn rank<S>(query: &Query, candidates: &[S], options: RankOptions) -> Vec<ScoredPath>
where
    S: AsRef<str> + Sync,
{
    let score_one = |candidate: &S| {
        let scored = query.score_path(candidate.as_ref());
        (scored.score > 0.0).then_some(scored)
    };

    let mut matches: Vec<ScoredPath> = if options.parallel {
        candidates.par_iter().filter_map(score_one).collect()
    } else {
        candidates.iter().filter_map(score_one).collect()
    };

    log::debug!(
        "{} of {} candidates matched {:?}",
        matches.len(),
        candidates.len(),
        query.raw()
    );

    if options.sort {
        matches.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.path.cmp(&b.path))
        });
    }
    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CANDIDATES: [&str; 6] = ["x/x1a", "x/x2a", "x/x3b", "x/x4a", "x/x5a", "a"];

    fn paths(results: &[ScoredPath]) -> Vec<&str> {
        results.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn sorts_by_score_then_path() {
        let query = Query::build("a");
        let results = rank(&query, &CANDIDATES, RankOptions::default());

        assert_eq!(
            paths(&results),
            vec!["a", "x/x1a", "x/x2a", "x/x4a", "x/x5a"]
        );
        assert_eq!(results[0].score, 1.0);
        assert!(results[1..].iter().all(|r| (r.score - 0.48).abs() < 1e-9));
    }

    #[test]
    fn ties_break_lexicographically_regardless_of_input_order() {
        let query = Query::build("a");
        let reversed: Vec<&str> = CANDIDATES.iter().rev().copied().collect();
        let results = rank(&query, &reversed, RankOptions::default());

        assert_eq!(
            paths(&results),
            vec!["a", "x/x1a", "x/x2a", "x/x4a", "x/x5a"]
        );
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let query = Query::build("a");
        let options = RankOptions {
            sort: false,
            ..RankOptions::default()
        };
        let results = rank(&query, &CANDIDATES, options);

        assert_eq!(
            paths(&results),
            vec!["x/x1a", "x/x2a", "x/x4a", "x/x5a", "a"]
        );
    }

    #[test]
    fn limit_applies_after_sorting() {
        let query = Query::build("a");
        let options = RankOptions {
            limit: Some(2),
            ..RankOptions::default()
        };
        let results = rank(&query, &CANDIDATES, options);

        assert_eq!(paths(&results), vec!["a", "x/x1a"]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let query = Query::build("mod");
        let candidates: Vec<String> = (0..500)
            .map(|i| format!("crates/m{i}/src/{}mod_{i}.rs", "x".repeat(i % 7)))
            .collect();

        let sequential = rank(&query, &candidates, RankOptions::default());
        let parallel = rank(
            &query,
            &candidates,
            RankOptions {
                parallel: true,
                ..RankOptions::default()
            },
        );

        assert_eq!(sequential.len(), candidates.len());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn serializes_as_path_and_score() {
        let scored = ScoredPath {
            path: "src/main".to_string(),
            score: 0.75,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json, serde_json::json!({"path": "src/main", "score": 0.75}));
    }
}
