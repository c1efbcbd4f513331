//! Dataset loading for the forest trend report
//!
//! Reads `Entity,Code,Year,<value>` CSV tables (the Our World in Data layout)
//! into a [`Dataset`](regression_spi::Dataset), dropping the code column and
//! aggregate rows such as `World`.
//!
//! ```rust,ignore
//! use forest_data::{load_csv_file, ForestMetric, LoaderConfig};
//!
//! let loaded = load_csv_file("forest-area.csv".as_ref(), &LoaderConfig::default())?;
//! let profile = ForestMetric::AreaShare.profile();
//! ```

pub mod error;
pub mod loader;
pub mod metric;

pub use error::{LoadError, Result};
pub use loader::{load_csv_file, read_csv, LoadedDataset, LoaderConfig};
pub use metric::ForestMetric;
