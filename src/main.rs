use axum::Router;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tera::Tera;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;
use router::app_router;
use std::{process::ExitCode, sync::Arc, time::Duration};
mod ai;
use ai::relay::AdviceRelay;
mod config;
use config::Config;
mod middleware;
use middleware::handle_error;
mod data;
use data::repository::{
    InteractionRepository, StoryRepository, INTERACTIONS_MIGRATOR, STORIES_MIGRATOR,
};

pub struct AppState {
    tera: Tera,
    interactions: InteractionRepository,
    stories: StoryRepository,
    relay: AdviceRelay,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upstander=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let interactions_pool = connect(&config.interactions_database_path).await?;
    INTERACTIONS_MIGRATOR.run(&interactions_pool).await?;

    let stories_pool = connect(&config.stories_database_path).await?;
    STORIES_MIGRATOR.run(&stories_pool).await?;

    let tera = Tera::new(&config.templates_glob)?;

    let state = Arc::new(AppState {
        tera,
        interactions: InteractionRepository {
            pool: Arc::new(interactions_pool),
        },
        stories: StoryRepository {
            pool: Arc::new(stories_pool),
        },
        relay: AdviceRelay::new(config.advice_api_url.clone(), config.advice_api_token.clone()),
    });

    if config.advice_api_token.is_none() {
        tracing::warn!("ADVICE_API_TOKEN is not set, advice requests will be unauthenticated");
    }

    let app = Router::new()
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .merge(app_router(state.clone()))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handle_error,
        ))
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn connect(path: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    tracing::debug!(path, "opening database");
    let options = SqliteConnectOptions::new()
        .filename(path)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}
