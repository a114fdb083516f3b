use forecast_select::data::SeriesLoader;
use forecast_select::{
    forecaster, ForecastError, ModelSelector, Result, SelectionConfig, SelectionReport,
};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: select_forecast <csv-path> <column> [config.toml] [date-column]";

fn run(args: &[String]) -> Result<()> {
    let (path, column) = match args {
        [path, column, ..] => (path, column),
        _ => return Err(ForecastError::ConfigError(USAGE.to_string())),
    };
    let mut config = match args.get(2) {
        Some(config_path) => SelectionConfig::from_toml_file(config_path)?,
        None => SelectionConfig::default(),
    };
    if let Some(date_column) = args.get(3) {
        config.date_column = Some(date_column.clone());
    }

    println!(
        "Starting... First constructing models based on training and test datasets, in order to select best method."
    );
    let series = SeriesLoader::from_csv(path, column, &config.csv_options())?;
    let summary = series.summary();
    tracing::info!(
        observations = summary.count,
        mean = summary.mean,
        std_dev = summary.std_dev,
        min = summary.min,
        max = summary.max,
        "Series loaded"
    );

    let selector = ModelSelector::new(config)?;
    let selection = selector.select(&series)?;
    println!("Done.");
    println!("Now running selected best method.");

    let forecast = forecaster::refit(
        selection.winner().technique,
        &series,
        selector.config().horizon,
    )?;
    println!("{}", SelectionReport { selection, forecast });

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
