use std::collections::HashMap;

/// Finds the next position at which a case-folded character occurs in a candidate.
pub(crate) trait Occurrences {
    fn next_at_or_after(&self, c: char, from: usize) -> Option<usize>;
}

/// Per-candidate map from folded character to the ascending positions where it occurs.
///
/// Built in one pass before the search starts and never mutated afterwards.
#[derive(Debug, Default)]
pub struct OffsetIndex {
    positions: HashMap<char, Vec<usize>>,
}

impl OffsetIndex {
    pub fn build(folded: &[char]) -> Self {
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (pos, &c) in folded.iter().enumerate() {
            positions.entry(c).or_default().push(pos);
        }
        Self { positions }
    }

    /// Sorted positions of `c`; empty when the candidate never contains it.
    pub fn positions_of(&self, c: char) -> &[usize] {
        self.positions.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Occurrences for OffsetIndex {
    fn next_at_or_after(&self, c: char, from: usize) -> Option<usize> {
        let positions = self.positions_of(c);
        let idx = positions.partition_point(|&pos| pos < from);
        positions.get(idx).copied()
    }
}

/// Scans the folded candidate directly. Same answers as [`OffsetIndex`], without the setup.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearScan<'a> {
    folded: &'a [char],
}

#[cfg(test)]
impl<'a> LinearScan<'a> {
    pub(crate) fn new(folded: &'a [char]) -> Self {
        Self { folded }
    }
}

#[cfg(test)]
impl Occurrences for LinearScan<'_> {
    fn next_at_or_after(&self, c: char, from: usize) -> Option<usize> {
        self.folded
            .get(from..)?
            .iter()
            .position(|&x| x == c)
            .map(|offset| from + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn positions_are_sorted_and_cached_per_char() {
        let folded = chars("a/b/a_a");
        let index = OffsetIndex::build(&folded);

        assert_eq!(index.positions_of('a'), &[0, 4, 6]);
        assert_eq!(index.positions_of('/'), &[1, 3]);
        assert!(index.positions_of('z').is_empty());
        assert!(std::ptr::eq(index.positions_of('a'), index.positions_of('a')));
    }

    #[test]
    fn next_at_or_after_finds_smallest_position() {
        let folded = chars("xaxxa");
        let index = OffsetIndex::build(&folded);

        assert_eq!(index.next_at_or_after('a', 0), Some(1));
        assert_eq!(index.next_at_or_after('a', 1), Some(1));
        assert_eq!(index.next_at_or_after('a', 2), Some(4));
        assert_eq!(index.next_at_or_after('a', 5), None);
        assert_eq!(index.next_at_or_after('a', 99), None);
        assert_eq!(index.next_at_or_after('q', 0), None);
    }

    #[test]
    fn linear_scan_agrees_with_index() {
        let folded = chars("src/main_module/mod.rs");
        let index = OffsetIndex::build(&folded);
        let scan = LinearScan::new(&folded);

        for c in ['s', 'm', '/', '.', '_', 'z'] {
            for from in 0..=folded.len() + 1 {
                assert_eq!(
                    index.next_at_or_after(c, from),
                    scan.next_at_or_after(c, from),
                    "c={c:?} from={from}"
                );
            }
        }
    }
}
