use crate::algebra::NotPositiveDefinite;
use std::num::NonZeroUsize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a factorization.
///
/// A matrix that is not positive definite is an expected property of the
/// input rather than an error in the call, so it is reported here and not
/// through [`CholError`](crate::algebra::CholError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CholStatus {
    /// Every pivot was strictly positive
    Success,
    /// The pivot of this row (1-indexed) was not strictly positive.
    /// Rows at or beyond it do not hold meaningful factor values.
    FailedAtRow(NonZeroUsize),
}

impl CholStatus {
    /// Failure for the 0-indexed row `i`
    pub(crate) fn failed_at(i: usize) -> Self {
        CholStatus::FailedAtRow(NonZeroUsize::MIN.saturating_add(i))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CholStatus::Success)
    }

    /// 1-indexed row of the failing pivot, if any
    pub fn failed_row(&self) -> Option<usize> {
        match self {
            CholStatus::Success => None,
            CholStatus::FailedAtRow(k) => Some(k.get()),
        }
    }

    pub fn into_result(self) -> Result<(), NotPositiveDefinite> {
        match self {
            CholStatus::Success => Ok(()),
            CholStatus::FailedAtRow(k) => Err(NotPositiveDefinite { row: k.get() }),
        }
    }
}

impl std::fmt::Display for CholStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CholStatus::Success => write!(f, "success"),
            CholStatus::FailedAtRow(k) => write!(f, "not positive definite at row {}", k),
        }
    }
}

#[test]
fn test_status() {
    let s = CholStatus::failed_at(1);
    assert_eq!(s.failed_row(), Some(2));
    assert!(!s.is_success());
    assert_eq!(s.into_result(), Err(NotPositiveDefinite { row: 2 }));
    assert_eq!(s.to_string(), "not positive definite at row 2");

    assert_eq!(CholStatus::Success.failed_row(), None);
    assert!(CholStatus::Success.into_result().is_ok());
}
