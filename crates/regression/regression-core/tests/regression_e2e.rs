//! End-to-end tests for the regression core
//!
//! Exercises split → fit → predict using only this crate's public API.

use regression_core::prelude::*;

/// Textbook OLS on raw years, used as an independent reference.
fn reference_ols(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xx: f64 = points.iter().map(|p| p.0 * p.0).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;
    (intercept, slope)
}

fn relative_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

/// Noisy but trending series for a handful of countries.
fn forest_like() -> Dataset {
    let wobble = [0.3, -0.2, 0.1, -0.4, 0.25, 0.0, -0.15, 0.35, -0.05, 0.2, -0.3, 0.1];
    let mut rows = Vec::new();
    for (k, entity) in ["Brazil", "Indonesia", "Norway"].iter().enumerate() {
        for (i, year) in (1990..2002).enumerate() {
            let trend = 50.0 - (k as f64 + 1.0) * 0.8 * f64::from(year - 1990);
            rows.push(Observation::new(*entity, year, trend + wobble[(i + k) % wobble.len()]));
        }
    }
    // Irregular, sparse years
    for (year, value) in [(1990, 3.0), (2000, 2.6), (2010, 2.1), (2015, 1.9)] {
        rows.push(Observation::new("Ghana", year, value));
    }
    rows.into_iter().collect()
}

#[test]
fn e2e_coefficients_match_reference_ols() {
    let data = forest_like();
    let split = split(&data, 1).unwrap();

    for (entity, group) in split.train.group_by_entity() {
        let points: Vec<(f64, f64)> = group.iter().map(|o| (f64::from(o.year), o.value)).collect();
        let (a, b) = reference_ols(&points);
        let model = fit_entity(entity, group.iter().copied()).unwrap();

        assert!(relative_eq(model.slope(), b, 1e-9), "{entity} slope");
        assert!(relative_eq(model.intercept(), a, 1e-9), "{entity} intercept");
    }
}

#[test]
fn e2e_threshold_is_strict() {
    let data = forest_like();
    let train = split(&data, 1).unwrap().train;
    let group: Vec<Observation> = train.for_entity("Brazil").cloned().collect();
    let score = fit_entity("Brazil", &group)
        .unwrap()
        .adjusted_r_squared()
        .unwrap();

    let only_brazil = Dataset::new(group);
    assert!(!fit_models(&only_brazil, score).contains("Brazil"));
    assert!(fit_models(&only_brazil, score - 1e-12).contains("Brazil"));
}

#[test]
fn e2e_default_threshold_filters_poor_fits() {
    let mut rows: Vec<Observation> = forest_like().into_iter().collect();
    // No trend at all
    for (year, value) in [(1990, 1.0), (1991, 5.0), (1992, 1.0), (1993, 5.0), (1994, 1.0)] {
        rows.push(Observation::new("Flatland", year, value));
    }
    let data = Dataset::new(rows);
    let report = fit_report(&split(&data, 1).unwrap().train, 0.6);

    for model in report.models.iter() {
        assert!(model.adjusted_r_squared().unwrap() > 0.6);
    }
    assert!(report.models.contains("Brazil"));
    assert!(!report.models.contains("Flatland"));
    assert!(report.excluded.iter().any(|e| e.entity == "Flatland"));
}

#[test]
fn e2e_perfect_line_reproduces_training_values() {
    let data: Dataset = (2000..2010)
        .map(|y| Observation::new("Perfect", y, 12.5 - 0.75 * f64::from(y - 2000)))
        .collect();
    let split = split(&data, 1).unwrap();
    let models = fit_models(&split.train, 0.6);

    for obs in split.train.iter() {
        let predicted = predict(&models, "Perfect", obs.year, 9).unwrap();
        assert!((predicted - obs.value).abs() < 1e-9);
    }
    // Held-out year is also on the line
    assert!((predict(&models, "Perfect", 2009, 9).unwrap() - 5.75).abs() < 1e-9);
}

#[test]
fn e2e_predict_idempotent() {
    let data = forest_like();
    let models = fit_models(&split(&data, 4).unwrap().train, 0.6);
    let a = predict(&models, "Norway", 2075, 5).unwrap();
    let b = predict(&models, "Norway", 2075, 5).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn e2e_three_point_scenario_two_training_points() {
    // (A,2000,10), (A,2001,20), (A,2002,30) with one year held out
    let data: Dataset = vec![
        Observation::new("A", 2000, 10.0),
        Observation::new("A", 2001, 20.0),
        Observation::new("A", 2002, 30.0),
    ]
    .into_iter()
    .collect();

    let split = split(&data, 1).unwrap();
    assert_eq!(
        split.train.observations(),
        &[Observation::new("A", 2000, 10.0), Observation::new("A", 2001, 20.0)]
    );
    assert_eq!(split.test.observations(), &[Observation::new("A", 2002, 30.0)]);

    // The line itself is exact ...
    let line = fit_entity("A", &split.train).unwrap();
    assert!((line.predict_at(2002) - 30.0).abs() < 1e-9);
    assert_eq!(line.adjusted_r_squared(), None);

    // ... but with no defined adjusted R² the entity is excluded.
    let models = fit_models(&split.train, 0.6);
    assert!(models.is_empty());
    assert!(matches!(
        predict(&models, "A", 2002, 2),
        Err(RegressionError::ModelNotFound { .. })
    ));
}

#[test]
fn e2e_single_observation_entity_not_found() {
    let mut rows: Vec<Observation> = forest_like().into_iter().collect();
    rows.push(Observation::new("B", 2000, 4.0));
    rows.push(Observation::new("B", 2001, 5.0));
    let data = Dataset::new(rows);

    let split = split(&data, 1).unwrap();
    assert_eq!(split.train.for_entity("B").count(), 1);

    let models = fit_models(&split.train, 0.6);
    assert!(!models.contains("B"));
    for year in [1980, 2030, 2080] {
        let err = predict(&models, "B", year, 2).unwrap_err();
        assert_eq!(
            err,
            RegressionError::ModelNotFound {
                entity: "B".to_string()
            }
        );
    }
}

#[test]
fn e2e_analysis_with_forest_area_profile() {
    let analysis = Analysis::run(&forest_like(), AnalysisProfile::forest_area()).unwrap();

    // Ghana has 4 rows, all held out
    assert_eq!(analysis.split().train.for_entity("Ghana").count(), 0);
    assert!(!analysis.models().contains("Ghana"));
    assert!(analysis.evaluation().mae.is_some());

    let value = analysis.predict("Brazil", 2080).unwrap();
    // Five decimal places
    assert_eq!(value, (value * 1e5).round() / 1e5);
}
