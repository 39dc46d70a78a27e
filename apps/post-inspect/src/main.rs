//! # Post Inspect
//!
//! Loads a post and its stored collections from a JSON fixture, evaluates
//! every derived fact for one viewer, and prints the result as JSON.

use std::sync::Arc;

use forum_core::PostService;
use forum_core::ports::{CacheInvalidation, Clock, FixedClock, SystemClock};
use forum_infra::database::connect;
use forum_infra::{
    DatabaseConfig, InMemoryCache, RedisCache, SeaOrmCategories, SeaOrmRevisionHistory,
    TracingObserver,
};

mod config;
mod fixture;
mod summary;
mod telemetry;

use config::{InspectArgs, InspectConfig};
use fixture::Fixture;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = InspectConfig::from_env()?;
    telemetry::init_telemetry(&config.telemetry);

    let args = InspectArgs::parse(std::env::args().skip(1))?;
    tracing::debug!(fixture = %args.fixture.display(), viewer = ?args.viewer, "Inspecting post");

    let clock: Arc<dyn Clock> = match config.now {
        Some(now) => Arc::new(FixedClock::new(now)),
        None => Arc::new(SystemClock),
    };
    let cache = connect_cache(&config).await;

    let (mut ports, post) = Fixture::load(&args.fixture)?.into_ports(clock, cache).await;

    // Stored history and categories take precedence over the fixture's.
    if let Some(db_config) = DatabaseConfig::from_env() {
        let db = connect(&db_config).await?;
        ports.categories = Arc::new(SeaOrmCategories::new(db.clone()));
        ports.history = Arc::new(SeaOrmRevisionHistory::new(db));
    }
    let service = PostService::new(ports, config.policy).with_observer(Arc::new(TracingObserver));

    if args.diff {
        match args.text_width {
            Some(width) => match service.post_difference(&post).await? {
                Some(difference) => print!("{}", difference.render_text(width)),
                None => tracing::info!(post_id = post.id, "Post has no revision history"),
            },
            None => match service.difference_hunks(&post).await? {
                Some(hunks) => {
                    let view = summary::diff_view(&hunks);
                    println!("{}", serde_json::to_string_pretty(&view)?);
                }
                None => tracing::info!(post_id = post.id, "Post has no revision history"),
            },
        }
        return Ok(());
    }

    let facts = service.facts(&post, args.viewer).await?;
    let view = summary::post_summary(&post, facts);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

/// Redis when configured and reachable, otherwise a process-local cache.
async fn connect_cache(config: &InspectConfig) -> Arc<dyn CacheInvalidation> {
    if config.redis_url.is_some() {
        match RedisCache::from_env().await {
            Ok(cache) => return Arc::new(cache),
            Err(e) => tracing::warn!(error = %e, "Redis unavailable, using in-memory cache"),
        }
    }
    Arc::new(InMemoryCache::new())
}
