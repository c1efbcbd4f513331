//! # forestfit
//!
//! Command-line report for per-country forest trend regression: loads a
//! forest dataset, fits one line per country, and predicts values for a
//! chosen country and year.

mod explore;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use forest_data::{load_csv_file, ForestMetric, LoaderConfig};
use regression_facade::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Most decimal places `predict` will print.
const MAX_PRECISION: i64 = 15;

#[derive(Parser)]
#[command(name = "forestfit", version)]
#[command(about = "Per-country forest trend models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List entities with a retained model
    Entities {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Predict one entity's value for a year
    Predict {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Entity (country) name
        #[arg(short, long)]
        entity: String,

        /// Year to predict
        #[arg(short, long)]
        year: i32,

        /// Decimal places (defaults to the metric's precision)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION))]
        precision: Option<u32>,
    },

    /// Print fitted models, exclusions and holdout accuracy
    Report {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Write the full report as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer prediction queries read from stdin
    Explore {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    /// Net forest conversion (hectares)
    Conversion,
    /// Share of global forest area (%)
    Area,
}

impl From<MetricArg> for ForestMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Conversion => ForestMetric::NetConversion,
            MetricArg::Area => ForestMetric::AreaShare,
        }
    }
}

#[derive(Args)]
struct DatasetArgs {
    /// Which dataset the input holds
    #[arg(short, long, value_enum)]
    metric: MetricArg,

    /// Input CSV (defaults to FORESTFIT_CONVERSION_CSV or FORESTFIT_AREA_CSV)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Value column name (default: first column besides entity, code and year)
    #[arg(short, long)]
    column: Option<String>,

    /// Adjusted R² a model must exceed to be kept
    #[arg(long)]
    threshold: Option<f64>,

    /// Most recent years held out per entity
    #[arg(long)]
    holdout: Option<usize>,
}

impl DatasetArgs {
    fn input_path(&self, metric: ForestMetric) -> Result<PathBuf> {
        if let Some(path) = &self.input {
            return Ok(path.clone());
        }
        match std::env::var_os(metric.env_var()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => bail!(
                "no input file: pass --input or set {}",
                metric.env_var()
            ),
        }
    }

    fn profile(&self, metric: ForestMetric) -> Result<AnalysisProfile> {
        let mut builder = AnalysisProfileBuilder::from_profile(metric.profile());
        if let Some(threshold) = self.threshold {
            builder = builder.quality_threshold(threshold);
        }
        if let Some(holdout) = self.holdout {
            builder = builder.holdout(holdout);
        }
        Ok(builder.build()?)
    }

    /// Load the dataset and fit it once.
    fn analyze(&self) -> Result<Analysis> {
        let metric = ForestMetric::from(self.metric);
        let path = self.input_path(metric)?;

        let mut config = LoaderConfig::default();
        if let Some(column) = &self.column {
            config = config.with_value_column(column);
        }

        let loaded = load_csv_file(&path, &config)
            .with_context(|| format!("loading {} dataset", metric))?;
        let analysis = Analysis::run(&loaded.dataset, self.profile(metric)?)?;
        Ok(analysis)
    }
}

fn run_entities(dataset: DatasetArgs) -> Result<()> {
    let analysis = dataset.analyze()?;
    for entity in analysis.entities() {
        println!("{entity}");
    }
    Ok(())
}

fn run_predict(
    dataset: DatasetArgs,
    entity: String,
    year: i32,
    precision: Option<u32>,
) -> Result<()> {
    let analysis = dataset.analyze()?;
    let profile = analysis.profile();

    if !profile.contains_year(year) {
        bail!(
            "year {} is outside the selectable range {}-{}",
            year,
            profile.min_year,
            profile.max_year
        );
    }

    let precision = precision.unwrap_or(profile.precision);
    match predict(analysis.models(), &entity, year, precision) {
        Ok(value) => {
            println!(
                "{} {}: {:.*} {}",
                entity, year, precision as usize, value, profile.unit
            );
            Ok(())
        }
        Err(e) if e.is_model_not_found() => bail!(
            "no model for '{}': it was filtered out or is not in the dataset",
            entity
        ),
        Err(e) => Err(e.into()),
    }
}

fn run_report(dataset: DatasetArgs, output: Option<PathBuf>) -> Result<()> {
    let analysis = dataset.analyze()?;
    let profile = analysis.profile();
    let report = analysis.report();
    let evaluation = analysis.evaluation();

    println!("=== {} ===", profile.name);
    println!(
        "Entities: {} fitted, {} excluded (holdout {}, adjusted R² > {})",
        report.models.len(),
        report.excluded.len(),
        profile.holdout,
        profile.quality_threshold
    );

    println!("\n{:<32} {:>16} {:>14} {:>8} {:>4}", "Entity", "Intercept", "Slope", "Adj R²", "n");
    for model in report.models.iter() {
        println!(
            "{:<32} {:>16.4} {:>14.6} {:>8.4} {:>4}",
            model.entity(),
            model.intercept(),
            model.slope(),
            model.adjusted_r_squared().unwrap_or(f64::NAN),
            model.n_observations()
        );
    }

    if !report.excluded.is_empty() {
        println!("\nExcluded:");
        for exclusion in &report.excluded {
            println!("  {}: {}", exclusion.entity, exclusion.reason);
        }
    }

    println!("\n=== Holdout Accuracy ===");
    println!("Scored observations: {}", evaluation.rows.len());
    match (evaluation.mae, evaluation.rmse) {
        (Some(mae), Some(rmse)) => {
            println!("MAE:  {:.*} {}", profile.precision as usize, mae, profile.unit);
            println!("RMSE: {:.*} {}", profile.precision as usize, rmse, profile.unit);
        }
        _ => println!("No held-out observation has a model"),
    }
    if let Some(mape) = evaluation.mape {
        println!("MAPE: {:.2}%", mape * 100.0);
    }

    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &analysis).context("writing JSON report")?;
        writer.flush().context("writing JSON report")?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn run_explore(dataset: DatasetArgs) -> Result<()> {
    let analysis = dataset.analyze()?;
    let answered = explore::run(&analysis, io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!(answered, "explore session finished");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "forestfit=info,forest_data=info,regression_core=info".into()
            }),
        )
        .init();
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Entities { dataset } => run_entities(dataset),
        Commands::Predict {
            dataset,
            entity,
            year,
            precision,
        } => run_predict(dataset, entity, year, precision),
        Commands::Report { dataset, output } => run_report(dataset, output),
        Commands::Explore { dataset } => run_explore(dataset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
