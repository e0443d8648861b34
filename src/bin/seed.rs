use api_counter::db::{self, CounterStorage};
use api_counter::{Config, CounterError};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    api_counter::logging::init(&cfg.loglevel);
    info!(database_url = %cfg.redacted_database_url(), "seeding");

    match run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "seeding failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: &Config) -> Result<(), CounterError> {
    let storage = CounterStorage::new(db::connect(cfg).await?);
    let result = init_and_seed(&storage).await;
    storage.close().await;
    result
}

async fn init_and_seed(storage: &CounterStorage) -> Result<(), CounterError> {
    storage.init_schema().await?;
    api_counter::service::seeder::seed(storage).await?;
    Ok(())
}
