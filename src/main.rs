use anyhow::Result;
use blog_core::application::services::ApplicationServices;
use blog_core::config::{AppConfig, StorageBackend};
use blog_core::domain::{article::ArticleRepository, author::AuthorRepository};
use blog_core::infrastructure::{
    database,
    repositories::{InMemoryBlogRepository, PostgresArticleRepository, PostgresAuthorRepository},
    time::SystemClock,
};
use blog_core::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let (article_repo, author_repo) = build_repositories(&config).await?;

    let services = Arc::new(ApplicationServices::new(article_repo, author_repo));
    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn ArticleRepository>, Arc<dyn AuthorRepository>)> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(
                config.database_url(),
                config.max_connections(),
                config.acquire_timeout(),
            )
            .await?;
            if config.run_migrations() {
                database::run_migrations(&pool).await?;
                tracing::info!("migrations applied");
            }

            let article_repo: Arc<dyn ArticleRepository> =
                Arc::new(PostgresArticleRepository::new(pool.clone()));
            let author_repo: Arc<dyn AuthorRepository> =
                Arc::new(PostgresAuthorRepository::new(pool));
            Ok((article_repo, author_repo))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let store = InMemoryBlogRepository::new(Arc::new(SystemClock));
            let article_repo: Arc<dyn ArticleRepository> = Arc::new(store.clone());
            let author_repo: Arc<dyn AuthorRepository> = Arc::new(store);
            Ok((article_repo, author_repo))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
