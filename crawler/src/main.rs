use anyhow::Result;
use clap::Parser;
use crawler::{crawl, HttpFetcher};
use indexcore::{Index, StopwordSet};
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl a single host breadth-first and report index stats")]
struct Cli {
    /// URL the crawl starts from; only pages on its host are fetched
    #[arg(long)]
    seed: String,
    /// Path to a newline-delimited stopword list
    #[arg(long, default_value = "server/assets/stopwords-en.txt")]
    stopwords: String,
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
    let args = Cli::parse();

    let stopwords = StopwordSet::load(&args.stopwords)?;
    let fetcher = HttpFetcher::new(&args.user_agent, Duration::from_secs(args.timeout_secs))?;
    let index = Index::shared();

    let stats = crawl(&args.seed, &index, &stopwords, &fetcher, args.max_pages).await?;

    let idx = index.read();
    tracing::info!(
        fetched = stats.fetched,
        indexed = stats.indexed,
        errors = stats.errors,
        terms = idx.inv_index.len(),
        documents = idx.word_count.len(),
        discovered = idx.visited.len(),
        "crawl summary"
    );
    Ok(())
}
