//! Group splitter trait definition.

use crate::error::Result;
use crate::model::{Dataset, Split};

/// Partitions a dataset into train and test subsets, entity by entity.
///
/// Implementations must be deterministic: the result may depend only on the
/// observations themselves, never on their input order.
pub trait GroupSplitter {
    /// Split `dataset` into a [`Split`].
    fn split(&self, dataset: &Dataset) -> Result<Split>;
}
