use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use haiku_engine::Composer;
use haiku_lexicon::Lexicon;
use haiku_server::rate_limit::RateLimitLayer;
use haiku_server::{AppState, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_LEXICON: &str = "lexicon.txt";
const DEFAULT_MAX_TEXT_LEN: usize = 4096;
const DEFAULT_RATE_LIMIT_RPS: u32 = 5;
const DEFAULT_RATE_LIMIT_BURST: u32 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!("using lexicon at {}", config.lexicon_path.display());
    info!(
        "rate limit: {} req/s (burst {})",
        config.rate_limit_rps, config.rate_limit_burst
    );

    let start = Instant::now();
    let lexicon = Lexicon::load(&config.lexicon_path)?;
    if lexicon.is_empty() {
        info!("no lexicon entries loaded, heuristics only");
    }
    info!("lexicon ready in {} ms", start.elapsed().as_millis());

    let state = AppState {
        composer: Arc::new(Composer::new(lexicon)),
        max_text_len: config.max_text_len,
    };

    let rate_limiter = RateLimitLayer::new(config.rate_limit_rps, config.rate_limit_burst);
    let app = router(state)
        .layer(rate_limiter)
        .layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    lexicon_path: PathBuf,
    max_text_len: usize,
    rate_limit_rps: u32,
    rate_limit_burst: u32,
}

fn load_config() -> Config {
    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let lexicon_path = env::var("LEXICON_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEXICON));
    let max_text_len = env::var("MAX_TEXT_LEN")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_TEXT_LEN);
    let rate_limit_rps = env::var("RATE_LIMIT_RPS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RATE_LIMIT_RPS);
    let rate_limit_burst = env::var("RATE_LIMIT_BURST")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RATE_LIMIT_BURST);

    Config {
        host,
        port,
        lexicon_path,
        max_text_len,
        rate_limit_rps,
        rate_limit_burst,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
