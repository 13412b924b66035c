//! Fuzzy path ranking: scores how well a short query matches a candidate path
//! as a case-insensitive subsequence, favouring matches at path and word boundaries.

mod memo;
mod offsets;
mod query;
mod rank;
mod scorer;

pub use memo::MemoCache;
pub use offsets::OffsetIndex;
pub use query::Query;
pub use rank::{rank, RankOptions, ScoredPath};
