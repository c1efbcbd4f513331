//! The two forest datasets and their analysis settings.

use crate::error::LoadError;
use regression_api::AnalysisProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which forest dataset a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForestMetric {
    /// Net forest conversion, hectares per year
    NetConversion,
    /// Share of global forest area, percent
    AreaShare,
}

impl ForestMetric {
    /// Default analysis settings for this dataset.
    pub fn profile(self) -> AnalysisProfile {
        match self {
            Self::NetConversion => AnalysisProfile::net_conversion(),
            Self::AreaShare => AnalysisProfile::forest_area(),
        }
    }

    /// Environment variable naming the dataset file.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::NetConversion => "FORESTFIT_CONVERSION_CSV",
            Self::AreaShare => "FORESTFIT_AREA_CSV",
        }
    }

    /// Short name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetConversion => "conversion",
            Self::AreaShare => "area",
        }
    }
}

impl fmt::Display for ForestMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForestMetric {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conversion" | "net_conversion" | "net-conversion" => Ok(Self::NetConversion),
            "area" | "area_share" | "forest_area" | "forest-area" => Ok(Self::AreaShare),
            other => Err(LoadError::UnknownMetric(other.to_string())),
        }
    }
}
