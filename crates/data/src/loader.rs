//! CSV loading for `Entity,Code,Year,<value>` tables.

use crate::error::{LoadError, Result};
use regression_spi::{Dataset, Observation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Column names and filters applied while loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Grouping column
    pub entity_column: String,
    /// Year column
    pub year_column: String,
    /// Country code column, dropped on load
    pub code_column: Option<String>,
    /// Value column; the first remaining column when unset
    pub value_column: Option<String>,
    /// Aggregate rows to drop, matched case-insensitively
    pub excluded_entities: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            entity_column: "Entity".to_string(),
            year_column: "Year".to_string(),
            code_column: Some("Code".to_string()),
            value_column: None,
            excluded_entities: vec!["World".to_string()],
        }
    }
}

impl LoaderConfig {
    /// Use `column` as the value column.
    pub fn with_value_column(mut self, column: &str) -> Self {
        self.value_column = Some(column.to_string());
        self
    }

    /// Also drop rows for `entity`.
    pub fn exclude(mut self, entity: &str) -> Self {
        self.excluded_entities.push(entity.to_string());
        self
    }

    /// Keep every entity, including aggregates.
    pub fn keep_all_entities(mut self) -> Self {
        self.excluded_entities.clear();
        self
    }

    fn is_excluded(&self, entity: &str) -> bool {
        self.excluded_entities
            .iter()
            .any(|e| e.eq_ignore_ascii_case(entity))
    }
}

/// A loaded dataset and what was discarded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// Header of the column read as the value
    pub value_column: String,
    /// Rows with an empty entity or an unparsable year or value
    pub skipped_rows: usize,
    /// Rows dropped by the entity filter
    pub filtered_rows: usize,
}

/// Load a dataset file.
pub fn load_csv_file(path: &Path, config: &LoaderConfig) -> Result<LoadedDataset> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_csv(BufReader::new(file), config)?;

    info!(
        path = %path.display(),
        column = %loaded.value_column,
        observations = loaded.dataset.len(),
        skipped = loaded.skipped_rows,
        filtered = loaded.filtered_rows,
        "loaded dataset"
    );
    Ok(loaded)
}

/// Read a dataset from any CSV source with a header row.
pub fn read_csv<R: Read>(source: R, config: &LoaderConfig) -> Result<LoadedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
            })
    };

    let entity_idx = find(&config.entity_column)?;
    let year_idx = find(&config.year_column)?;
    let code_idx = config
        .code_column
        .as_deref()
        .and_then(|c| headers.iter().position(|h| h.eq_ignore_ascii_case(c)));

    let value_idx = match config.value_column.as_deref() {
        Some(name) => find(name)?,
        None => (0..headers.len())
            .find(|i| *i != entity_idx && *i != year_idx && Some(*i) != code_idx)
            .ok_or_else(|| LoadError::MissingColumn {
                column: "<value>".to_string(),
            })?,
    };
    let value_column = headers.get(value_idx).unwrap_or_default().to_string();

    let mut observations = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped_rows = 0;
    let mut filtered_rows = 0;

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let entity = record.get(entity_idx).unwrap_or_default();
        let year = record.get(year_idx).and_then(|y| y.parse::<i32>().ok());
        let value = record
            .get(value_idx)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite());

        let (Some(year), Some(value)) = (year, value) else {
            debug!(line = line + 2, "skipping row without a usable year or value");
            skipped_rows += 1;
            continue;
        };
        if entity.is_empty() {
            skipped_rows += 1;
            continue;
        }
        if config.is_excluded(entity) {
            filtered_rows += 1;
            continue;
        }
        if !seen.insert((entity.to_string(), year)) {
            warn!(entity, year, "duplicate observation for entity and year");
        }

        observations.push(Observation::new(entity, year, value));
    }

    if skipped_rows > 0 {
        warn!(skipped_rows, "rows without a usable year or value were skipped");
    }
    if observations.is_empty() {
        return Err(LoadError::NoData);
    }

    Ok(LoadedDataset {
        dataset: Dataset::new(observations),
        value_column,
        skipped_rows,
        filtered_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSION: &str = "\
Entity,Code,Year,Net forest conversion
Brazil,BRA,1990,-4254000
Brazil,BRA,2000,-3951000
World,OWID_WRL,1990,-7840000
Chile,CHL,2010,
";

    #[test]
    fn test_read_resolves_value_column() {
        let loaded = read_csv(CONVERSION.as_bytes(), &LoaderConfig::default()).unwrap();
        assert_eq!(loaded.value_column, "Net forest conversion");
        assert_eq!(loaded.dataset.len(), 2);
        assert_eq!(loaded.filtered_rows, 1);
        assert_eq!(loaded.skipped_rows, 1);
        assert_eq!(
            loaded.dataset.observations()[0],
            Observation::new("Brazil", 1990, -4_254_000.0)
        );
    }

    #[test]
    fn test_keep_all_entities() {
        let config = LoaderConfig::default().keep_all_entities();
        let loaded = read_csv(CONVERSION.as_bytes(), &config).unwrap();
        assert!(loaded.dataset.entities().contains(&"World"));
    }

    #[test]
    fn test_explicit_value_column() {
        let csv = "entity,year,a,b\nPeru,2000,1.0,2.0\n";
        let config = LoaderConfig::default().with_value_column("b");
        let loaded = read_csv(csv.as_bytes(), &config).unwrap();
        assert_eq!(loaded.dataset.observations()[0].value, 2.0);
    }

    #[test]
    fn test_missing_year_column() {
        let csv = "Entity,Code,Value\nPeru,PER,1.0\n";
        let err = read_csv(csv.as_bytes(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "Year"));
    }

    #[test]
    fn test_only_world_is_no_data() {
        let csv = "Entity,Code,Year,Value\nWorld,OWID_WRL,2000,1.0\n";
        let err = read_csv(csv.as_bytes(), &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::NoData));
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let csv = "Entity,Year,Value\nPeru,2000,NaN\nPeru,2001,inf\nPeru,2002,3\n";
        let loaded = read_csv(csv.as_bytes(), &LoaderConfig::default()).unwrap();
        assert_eq!(loaded.dataset.len(), 1);
        assert_eq!(loaded.skipped_rows, 2);
    }
}
