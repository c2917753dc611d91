use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mindcheck_cli::cli::Cli;
use mindcheck_cli::commands::{App, build_generator};
use mindcheck_cli::config::{BASE_URL_ENV, default_config_path, load_config};
use mindcheck_storage::assessments::AssessmentStore;
use mindcheck_storage::file::FileStore;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config_file {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config =
        load_config(&config_path)?.with_base_url_override(std::env::var(BASE_URL_ENV).ok());
    let data_dir = config.data_dir()?;
    tracing::debug!(config = %config_path.display(), data_dir = %data_dir.display(), "starting");

    let app = App {
        store: AssessmentStore::new(FileStore::new(data_dir)),
        generator: build_generator(&config),
        config,
        config_path,
        json: cli.json,
    };

    let output = app.run(cli.command)?;
    println!("{output}");
    Ok(())
}
