use std::net::SocketAddr;
use std::sync::Arc;

use auth::Authenticator;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sso_service::account::ports::UserDirectory;
use sso_service::account::service::AuthService;
use sso_service::config::Config;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::grpc::ValidatorGrpcService;
use sso_service::proto::auth_server::AuthServer;
use sso_service::proto::validator_server::ValidatorServer;
use sso_service::repositories::InMemoryUserDirectory;
use sso_service::repositories::PostgresUserDirectory;
use sso_service::token::service::TokenValidator;
use tokio::signal;
use tokio::sync::watch;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        auth_port = config.server.auth_port,
        validator_port = config.server.validator_port,
        request_timeout_secs = config.server.request_timeout_secs,
        token_ttl_seconds = config.jwt.ttl_seconds,
        persistent = config.database.url.is_some(),
        "Configuration loaded"
    );

    let secret = config.jwt.secret.expose_secret().as_bytes();
    let authenticator = Arc::new(Authenticator::new(secret, config.jwt.ttl()?));
    let validator = Arc::new(TokenValidator::new(secret));

    match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .idle_timeout(config.database.idle_timeout())
                .max_lifetime(config.database.max_lifetime())
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let directory = Arc::new(PostgresUserDirectory::new(pg_pool));
            serve(&config, directory, authenticator, validator).await
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            let directory = Arc::new(InMemoryUserDirectory::new());
            serve(&config, directory, authenticator, validator).await
        }
    }
}

async fn serve<D>(
    config: &Config,
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
    validator: Arc<TokenValidator>,
) -> Result<(), anyhow::Error>
where
    D: UserDirectory,
{
    let auth_service = Arc::new(AuthService::new(directory, authenticator));

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    let auth_address: SocketAddr = format!("0.0.0.0:{}", config.server.auth_port).parse()?;
    tracing::info!(
        address = %auth_address,
        port = config.server.auth_port,
        protocol = "grpc",
        "Auth server listening"
    );
    let mut auth_shutdown = shutdown_rx.clone();
    let auth_server = Server::builder()
        .timeout(config.server.request_timeout())
        .add_service(AuthServer::new(AuthGrpcService::new(auth_service)))
        .serve_with_shutdown(auth_address, async move {
            let _ = auth_shutdown.changed().await;
        });

    let validator_address: SocketAddr =
        format!("0.0.0.0:{}", config.server.validator_port).parse()?;
    tracing::info!(
        address = %validator_address,
        port = config.server.validator_port,
        protocol = "grpc",
        "Validator server listening"
    );
    let mut validator_shutdown = shutdown_rx;
    let validator_server = Server::builder()
        .timeout(config.server.request_timeout())
        .add_service(ValidatorServer::new(ValidatorGrpcService::new(validator)))
        .serve_with_shutdown(validator_address, async move {
            let _ = validator_shutdown.changed().await;
        });

    match tokio::try_join!(auth_server, validator_server) {
        Ok((_, _)) => tracing::info!("Servers exited successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            return Err(e.into());
        }
    };

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }
}
