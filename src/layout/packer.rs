//! Greedy interval partitioning.
//!
//! # Algorithm
//!
//! 1. Stable-sort intervals by `(start, end)`. Among equal starts the
//!    earlier-ending interval goes first and so claims the earlier row.
//! 2. For each interval, scan rows in creation order and append it to the
//!    first row whose last interval ends at or before its start.
//! 3. If no row accepts it, open a new row at the end.
//!
//! The row count equals the largest number of intervals overlapping at a
//! single instant, which is optimal for interval graphs.
//!
//! # Complexity
//! O(n log n + n * r) where r = number of rows.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use crate::error::BoardResult;
use crate::models::{Interval, Row};

/// Packs intervals into the fewest rows of non-overlapping intervals.
///
/// Output is deterministic: equal input sequences always produce equal rows.
///
/// # Errors
/// [`BoardError::InvalidInterval`](crate::BoardError::InvalidInterval) for the
/// first interval with `start >= end`; nothing is packed in that case.
pub fn pack(intervals: &[Interval]) -> BoardResult<Vec<Row>> {
    for interval in intervals {
        interval.validate()?;
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| (i.start, i.end));

    let mut rows: Vec<Row> = Vec::new();
    for interval in sorted {
        match rows.iter_mut().find(|row| row.accepts(&interval)) {
            Some(row) => row.push(interval),
            None => rows.push(Row::with_first(interval)),
        }
    }

    log::debug!(
        "packed {} intervals into {} rows",
        intervals.len(),
        rows.len()
    );
    Ok(rows)
}

/// Largest number of intervals covering one instant.
///
/// Only a start instant can raise the count, so it suffices to probe each start.
pub fn max_overlap(intervals: &[Interval]) -> usize {
    intervals
        .iter()
        .map(|probe| {
            intervals
                .iter()
                .filter(|i| i.start <= probe.start && probe.start < i.end)
                .count()
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn owners(rows: &[Row]) -> Vec<Vec<&str>> {
        rows.iter().map(|r| r.owners()).collect()
    }

    fn random_intervals(rng: &mut StdRng, n: usize) -> Vec<Interval> {
        (0..n)
            .map(|k| {
                // Coarse hours so ties and touching edges are common.
                let start = rng.random_range(0..20) * 60;
                let len = rng.random_range(1..6) * 60;
                Interval::new(format!("E{k}"), start, start + len)
            })
            .collect()
    }

    #[test]
    fn test_pack_overlapping_sample() {
        let rows = pack(&[
            Interval::new("E0", 480, 1020),
            Interval::new("E1", 480, 660),
            Interval::new("E2", 600, 960),
        ])
        .unwrap();
        // E1 (shorter) is sorted before E0; E0 overlaps both others.
        assert_eq!(owners(&rows), vec![vec!["E1"], vec!["E0"], vec!["E2"]]);
    }

    #[test]
    fn test_pack_reuses_earliest_row() {
        let rows = pack(&[
            Interval::new("A", 480, 600),
            Interval::new("B", 540, 720),
            Interval::new("C", 600, 660), // touches A's end
            Interval::new("D", 720, 780), // fits row 0 and row 1, takes row 0
        ])
        .unwrap();
        assert_eq!(owners(&rows), vec![vec!["A", "C", "D"], vec!["B"]]);
    }

    #[test]
    fn test_pack_tie_break_shorter_first() {
        let rows = pack(&[
            Interval::new("long", 480, 720),
            Interval::new("short", 480, 540),
            Interval::new("late", 540, 600),
        ])
        .unwrap();
        assert_eq!(owners(&rows), vec![vec!["short", "late"], vec!["long"]]);
    }

    #[test]
    fn test_pack_equal_intervals_keep_input_order() {
        let rows = pack(&[
            Interval::new("X", 480, 540),
            Interval::new("Y", 480, 540),
        ])
        .unwrap();
        assert_eq!(owners(&rows), vec![vec!["X"], vec!["Y"]]);
    }

    #[test]
    fn test_pack_empty() {
        assert!(pack(&[]).unwrap().is_empty());
        assert_eq!(max_overlap(&[]), 0);
    }

    #[test]
    fn test_pack_rejects_zero_width() {
        let err = pack(&[
            Interval::new("E0", 480, 600),
            Interval::new("E1", 600, 600),
        ])
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidInterval { owner, .. } if owner == "E1"));
    }

    #[test]
    fn test_pack_random_rows_never_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(0..25);
            let intervals = random_intervals(&mut rng, n);
            let rows = pack(&intervals).unwrap();

            assert_eq!(rows.iter().map(Row::len).sum::<usize>(), intervals.len());
            for row in &rows {
                for pair in row.intervals().windows(2) {
                    assert!(pair[0].end <= pair[1].start, "{pair:?}");
                }
            }
        }
    }

    #[test]
    fn test_pack_random_row_count_is_optimal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(0..25);
            let intervals = random_intervals(&mut rng, n);
            let rows = pack(&intervals).unwrap();
            assert_eq!(rows.len(), max_overlap(&intervals));
        }
    }

    #[test]
    fn test_pack_deterministic() {
        let mut rng = StdRng::seed_from_u64(1234);
        let intervals = random_intervals(&mut rng, 40);
        let first = pack(&intervals).unwrap();
        for _ in 0..10 {
            assert_eq!(pack(&intervals).unwrap(), first);
        }
    }
}
