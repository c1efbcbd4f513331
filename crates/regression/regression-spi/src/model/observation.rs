//! Observation and dataset types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `(entity, year, value)` measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Grouping key (a country)
    pub entity: String,
    /// Calendar year of the measurement
    pub year: i32,
    /// Measured value
    pub value: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(entity: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            entity: entity.into(),
            year,
            value,
        }
    }
}

/// Ordered collection of observations, grouped logically by entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Create a dataset from a list of observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Append one observation.
    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in stored order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterate over observations in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Group observations by entity, entities in sorted order.
    ///
    /// Within each group observations keep their stored order.
    pub fn group_by_entity(&self) -> BTreeMap<&str, Vec<&Observation>> {
        let mut groups: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
        for obs in &self.observations {
            groups.entry(obs.entity.as_str()).or_default().push(obs);
        }
        groups
    }

    /// Distinct entities, sorted.
    pub fn entities(&self) -> Vec<&str> {
        self.group_by_entity().into_keys().collect()
    }

    /// Observations belonging to `entity`, in stored order.
    pub fn for_entity<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations.iter().filter(move |o| o.entity == entity)
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// A dataset partitioned into train and test subsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Observations used for fitting
    pub train: Dataset,
    /// Most recent observations held out for evaluation
    pub test: Dataset,
}
