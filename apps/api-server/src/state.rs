//! Application state - shared across all handlers.

use std::fmt;
use std::sync::Arc;

use quill_core::ports::{PostRepository, RateLimiter, TokenService};
use quill_infra::{DatabaseConnections, InMemoryPostRepository, JwtTokenService};

#[cfg(feature = "postgres")]
use quill_infra::PostgresPostRepository;

#[cfg(feature = "rate-limit")]
use quill_infra::InMemoryRateLimiter;

use crate::config::AppConfig;

/// Which backend is holding the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Postgres => f.write_str("postgres"),
            StoreKind::Memory => f.write_str("memory"),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub store: StoreKind,
    pub db: Option<Arc<DatabaseConnections>>,
    /// `None` disables throttling.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let state = Self::connect_store(config, tokens).await;

        #[cfg(feature = "rate-limit")]
        let state = state.with_rate_limiter(Arc::new(InMemoryRateLimiter::new(
            config.rate_limit.clone(),
        )));

        tracing::info!(
            store = %state.store,
            rate_limited = state.rate_limiter.is_some(),
            "Application state initialized"
        );

        state
    }

    #[cfg(feature = "postgres")]
    async fn connect_store(config: &AppConfig, tokens: Arc<dyn TokenService>) -> Self {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory(tokens);
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => {
                let conn = Arc::new(connections);
                Self {
                    posts: Arc::new(PostgresPostRepository::new(conn.main.clone())),
                    tokens,
                    store: StoreKind::Postgres,
                    db: Some(conn),
                    rate_limiter: None,
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory(tokens)
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_store(config: &AppConfig, tokens: Arc<dyn TokenService>) -> Self {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL is set but the postgres feature is disabled");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Self::in_memory(tokens)
    }

    /// State backed by a fresh in-memory store, without throttling.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self::with_posts(Arc::new(InMemoryPostRepository::new()), tokens)
    }

    /// State backed by the given in-memory store.
    pub fn with_posts(posts: Arc<InMemoryPostRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            posts,
            tokens,
            store: StoreKind::Memory,
            db: None,
            rate_limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }
}
