use api_counter::db::{self, CounterStorage};
use api_counter::router;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = api_counter::Config::load()?;
    api_counter::logging::init(&cfg.loglevel);

    info!(
        database_url = %cfg.redacted_database_url(),
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        max_connections = cfg.max_connections
    );

    let pool = db::connect(&cfg).await?;
    let storage = CounterStorage::new(pool);
    storage.init_schema().await?;
    info!("database schema ready");

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    router::serve(listener, storage, router::shutdown_signal()).await?;
    Ok(())
}
