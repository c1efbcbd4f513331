//! Per-entity train/test splitting
//!
//! Holds out the most recent observations of every entity, the way a
//! forecast would be checked against years it has not seen.

use regression_spi::{Dataset, GroupSplitter, Observation, RegressionError, Result, Split};
use std::cmp::Ordering;

/// Split `dataset` holding out the `holdout` most recent years per entity.
///
/// Entities with no more than `holdout` observations end up entirely in the
/// test subset. Both outputs are ordered by entity, then year ascending, so
/// the result does not depend on the input order.
///
/// # Example
///
/// ```rust
/// use regression_core::split::split;
/// use regression_spi::{Dataset, Observation};
///
/// let data: Dataset = vec![
///     Observation::new("A", 2002, 30.0),
///     Observation::new("A", 2000, 10.0),
///     Observation::new("A", 2001, 20.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let split = split(&data, 1).unwrap();
/// assert_eq!(split.train.len(), 2);
/// assert_eq!(split.test.observations()[0].year, 2002);
/// ```
pub fn split(dataset: &Dataset, holdout: usize) -> Result<Split> {
    if holdout == 0 {
        return Err(RegressionError::invalid_parameter(
            "holdout",
            "must be at least 1",
        ));
    }

    let mut train = Vec::with_capacity(dataset.len());
    let mut test = Vec::new();

    for (_, mut group) in dataset.group_by_entity() {
        group.sort_by(|a, b| most_recent_first(a, b));

        let cut = holdout.min(group.len());
        let (recent, older) = group.split_at(cut);

        test.extend(recent.iter().rev().map(|o| (*o).clone()));
        train.extend(older.iter().rev().map(|o| (*o).clone()));
    }

    Ok(Split {
        train: Dataset::new(train),
        test: Dataset::new(test),
    })
}

// Year ties are broken on value so equal years still sort deterministically.
fn most_recent_first(a: &Observation, b: &Observation) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| b.value.total_cmp(&a.value))
}

/// [`GroupSplitter`] with a fixed hold-out count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldoutSplitter {
    holdout: usize,
}

impl HoldoutSplitter {
    /// Create a splitter holding out `holdout` years per entity.
    pub fn new(holdout: usize) -> Result<Self> {
        if holdout == 0 {
            return Err(RegressionError::invalid_parameter(
                "holdout",
                "must be at least 1",
            ));
        }
        Ok(Self { holdout })
    }

    pub fn holdout(&self) -> usize {
        self.holdout
    }
}

impl GroupSplitter for HoldoutSplitter {
    fn split(&self, dataset: &Dataset) -> Result<Split> {
        split(dataset, self.holdout)
    }
}
