//! Field-wise totals across a set of count records.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::record::CountResult;

/// Sum of the numeric fields of a set of [`CountResult`]s.
///
/// The file type has no meaning on an aggregate and is not carried. Every
/// record is summed, including records of unknown type. Sums saturate at
/// `u64::MAX` rather than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub file_size: u64,
    pub statement: u64,
    pub document: u64,
    pub comment: u64,
    pub empty: u64,
    pub total: u64,
}

impl Aggregate {
    /// Create an aggregate with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum a complete record set from scratch.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CountResult>) -> Self {
        results.into_iter().map(Aggregate::from).sum()
    }
}

impl From<&CountResult> for Aggregate {
    fn from(result: &CountResult) -> Self {
        Self {
            file_size: result.file_size,
            statement: result.statement,
            document: result.document,
            comment: result.comment,
            empty: result.empty,
            total: result.total,
        }
    }
}

impl Add for Aggregate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_size: self.file_size.saturating_add(other.file_size),
            statement: self.statement.saturating_add(other.statement),
            document: self.document.saturating_add(other.document),
            comment: self.comment.saturating_add(other.comment),
            empty: self.empty.saturating_add(other.empty),
            total: self.total.saturating_add(other.total),
        }
    }
}

impl AddAssign for Aggregate {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<&CountResult> for Aggregate {
    fn add_assign(&mut self, result: &CountResult) {
        *self += Aggregate::from(result);
    }
}

impl Sum for Aggregate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Aggregate::new(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::FileType;

    fn sample(statement: u64, document: u64, comment: u64, empty: u64) -> CountResult {
        CountResult::new(FileType::known("Java"))
            .with_file_size(100)
            .with_lines(statement, document, comment, empty)
    }

    #[test]
    fn test_aggregate_default() {
        let agg = Aggregate::new();
        assert_eq!(agg.file_size, 0);
        assert_eq!(agg.statement, 0);
        assert_eq!(agg.total, 0);
    }

    #[test]
    fn test_aggregate_add() {
        let a = Aggregate::from(&sample(10, 5, 3, 2));
        let b = Aggregate::from(&sample(1, 1, 1, 1));
        let sum = a + b;
        assert_eq!(sum.file_size, 200);
        assert_eq!(sum.statement, 11);
        assert_eq!(sum.document, 6);
        assert_eq!(sum.comment, 4);
        assert_eq!(sum.empty, 3);
        assert_eq!(sum.total, 24);
    }

    #[test]
    fn test_aggregate_add_assign_result() {
        let mut agg = Aggregate::new();
        agg += &sample(4, 0, 0, 1);
        agg += &sample(6, 0, 0, 0);
        assert_eq!(agg.statement, 10);
        assert_eq!(agg.total, 11);
    }

    #[test]
    fn test_from_results_matches_field_sums() {
        let results = vec![
            sample(10, 5, 3, 2),
            CountResult::unknown(4096).with_total(7),
            sample(0, 0, 0, 9),
        ];
        let agg = Aggregate::from_results(&results);

        assert_eq!(agg.file_size, results.iter().map(|r| r.file_size).sum::<u64>());
        assert_eq!(agg.statement, results.iter().map(|r| r.statement).sum::<u64>());
        assert_eq!(agg.document, results.iter().map(|r| r.document).sum::<u64>());
        assert_eq!(agg.comment, results.iter().map(|r| r.comment).sum::<u64>());
        assert_eq!(agg.empty, results.iter().map(|r| r.empty).sum::<u64>());
        assert_eq!(agg.total, results.iter().map(|r| r.total).sum::<u64>());
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        let results = vec![CountResult::unknown(u64::MAX), CountResult::unknown(1)];
        let agg = Aggregate::from_results(&results);
        assert_eq!(agg.file_size, u64::MAX);
        assert_eq!(agg.total, 0);

        let mut running = Aggregate::from(&sample(u64::MAX, 0, 0, 0));
        running += &sample(5, 0, 0, 0);
        assert_eq!(running.statement, u64::MAX);
        assert_eq!(running.total, u64::MAX);
    }

    #[test]
    fn test_from_results_empty() {
        let agg = Aggregate::from_results(std::iter::empty());
        assert_eq!(agg, Aggregate::new());
    }
}
