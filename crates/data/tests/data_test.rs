//! File-based tests for the forest data loader

use forest_data::{load_csv_file, ForestMetric, LoadError, LoaderConfig};
use regression_spi::Observation;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_load_forest_area_file() {
    let file = write_csv(
        "Entity,Code,Year,Share of global forest area\n\
         Angola,AGO,1990,1.8755\n\
         Angola,AGO,2000,1.8418\n\
         World,OWID_WRL,1990,100\n\
         Angola,AGO,2010,1.8128\n",
    );

    let loaded = load_csv_file(file.path(), &LoaderConfig::default()).unwrap();

    assert_eq!(loaded.value_column, "Share of global forest area");
    assert_eq!(loaded.filtered_rows, 1);
    assert_eq!(loaded.dataset.entities(), vec!["Angola"]);
    assert_eq!(
        loaded.dataset.observations()[2],
        Observation::new("Angola", 2010, 1.8128)
    );
}

#[test]
fn test_load_trims_whitespace_and_case_insensitive_headers() {
    let file = write_csv("entity , code , year , value\n Peru , PER , 2001 , 12.5 \n");
    let loaded = load_csv_file(file.path(), &LoaderConfig::default()).unwrap();
    assert_eq!(
        loaded.dataset.observations(),
        &[Observation::new("Peru", 2001, 12.5)]
    );
}

#[test]
fn test_load_missing_file() {
    let err = load_csv_file(Path::new("/nonexistent/forest.csv"), &LoaderConfig::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
}

#[test]
fn test_load_custom_exclusions() {
    let file = write_csv(
        "Entity,Code,Year,Value\n\
         Africa,,2000,1\n\
         Kenya,KEN,2000,2\n",
    );
    let config = LoaderConfig::default().exclude("Africa");
    let loaded = load_csv_file(file.path(), &config).unwrap();
    assert_eq!(loaded.dataset.entities(), vec!["Kenya"]);
    assert_eq!(loaded.filtered_rows, 1);
}

#[test]
fn test_metric_profiles_drive_holdout() {
    assert_eq!(ForestMetric::NetConversion.profile().holdout, 1);
    assert_eq!(ForestMetric::AreaShare.profile().holdout, 4);
    assert_eq!(ForestMetric::AreaShare.env_var(), "FORESTFIT_AREA_CSV");
}
