use keygate_adapters::{
    Argon2SecretHasher, ChannelEventPublisher, JwtConfig, JwtTokenIssuer,
    PostgresCredentialStore, Settings, spawn_log_drain, telemetry::init_tracing,
};
use keygate_auth_service::AuthService;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    // Create port adapters
    let credential_store = PostgresCredentialStore::new(pg_pool);
    let secret_hasher = Argon2SecretHasher::new();
    let token_issuer = JwtTokenIssuer::new(JwtConfig {
        secret: settings.jwt.secret.clone(),
        ttl_seconds: settings.jwt.ttl_seconds,
    });

    // Identity events flow through a channel so a broker transport can be
    // swapped in behind the receiver; until then they are logged.
    let (event_publisher, events) = ChannelEventPublisher::new();
    let _drain = spawn_log_drain(events);

    let auth_service = AuthService::new(
        credential_store,
        secret_hasher,
        token_issuer,
        event_publisher,
    );

    let allowed_origins = settings.auth.allowed_origins();
    let listener = tokio::net::TcpListener::bind(settings.auth.address()).await?;

    auth_service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
