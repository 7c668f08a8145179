use anyhow::Result;
use clap::Parser;
use crawler::{crawl, HttpFetcher};
use indexcore::{Index, StopwordSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Crawl a single host and serve ranked keyword queries over it")]
struct Args {
    /// URL the crawl starts from; only pages on its host are indexed
    #[arg(long)]
    seed: String,
    /// Path to a newline-delimited stopword list
    #[arg(long, default_value = "server/assets/stopwords-en.txt")]
    stopwords: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = 1000)]
    max_pages: usize,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent string sent with every request
    #[arg(long, default_value = "sitesearch-bot/0.1 (+https://example.com/bot)")]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    // Without the stopword list nothing can be filtered, so a load
    // failure aborts startup.
    let stopwords = StopwordSet::load(&args.stopwords)?;
    let fetcher = HttpFetcher::new(&args.user_agent, Duration::from_secs(args.timeout_secs))?;
    let index = Index::shared();

    // The crawl writes through the lock while the server answers queries,
    // so early queries see a partially built index rather than racing it.
    let crawl_index = Arc::clone(&index);
    let seed = args.seed.clone();
    let max_pages = args.max_pages;
    tokio::spawn(async move {
        match crawl(&seed, &crawl_index, &stopwords, &fetcher, max_pages).await {
            Ok(stats) => tracing::info!(
                fetched = stats.fetched,
                indexed = stats.indexed,
                errors = stats.errors,
                "crawl completed"
            ),
            Err(err) => tracing::error!(%err, "crawl failed"),
        }
    });

    let app = server::build_app(index);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
