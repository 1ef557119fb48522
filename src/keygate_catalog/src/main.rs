use keygate_adapters::{Settings, telemetry::init_tracing};
use keygate_catalog::{CatalogService, PostgresProductStore};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let settings = Settings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    sqlx::migrate!().run(&pg_pool).await?;

    let product_store = PostgresProductStore::new(pg_pool);
    let catalog_service = CatalogService::new(product_store);

    let listener = tokio::net::TcpListener::bind(settings.catalog.address()).await?;
    catalog_service.run_standalone(listener).await?;

    Ok(())
}
