use anyhow::{anyhow, Context, Result};
use indexcore::extract::extract;
use indexcore::stem::stem;
use indexcore::urlnorm::clean;
use indexcore::{SharedIndex, StopwordSet};
use reqwest::Client;
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Page retrieval capability. Non-2xx statuses and transport errors
/// (including timeouts) both surface as `Err` values.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// `reqwest`-backed fetcher used for real crawls.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("{url} returned status {status}"));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Counters reported when a crawl run ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlStats {
    /// Fetch attempts, successful or not.
    pub fetched: usize,
    /// Pages whose words made it into the index.
    pub indexed: usize,
    /// Fetches that failed and were skipped.
    pub errors: usize,
}

/// Breadth-first crawl of every page reachable from `seed` on the seed's
/// host, feeding extracted words into the shared index.
///
/// Frontier URLs are marked visited at enqueue time, so no URL is ever
/// queued twice; the flip side is that a URL whose fetch later fails is
/// never retried. Cross-host links are discarded at the front of the
/// queue without being fetched. `max_pages` caps fetch attempts so a
/// dynamic or unbounded site cannot keep the crawl alive forever.
///
/// Fetch failures are logged and skipped; only an unusable seed URL is an
/// error.
pub async fn crawl<F: Fetcher>(
    seed: &str,
    index: &SharedIndex,
    stopwords: &StopwordSet,
    fetcher: &F,
    max_pages: usize,
) -> Result<CrawlStats> {
    let origin = Url::parse(seed).with_context(|| format!("invalid seed url {seed}"))?;
    let origin_host = origin
        .host_str()
        .ok_or_else(|| anyhow!("seed url {seed} has no host"))?
        .to_string();

    let mut frontier: VecDeque<String> = VecDeque::new();
    frontier.push_back(origin.to_string());
    index.write().visited.insert(origin.to_string());

    let mut stats = CrawlStats::default();
    info!(seed = %origin, host = %origin_host, max_pages, "starting crawl");

    while let Some(current) = frontier.pop_front() {
        if stats.fetched >= max_pages {
            info!(max_pages, "page cap reached, stopping crawl");
            break;
        }

        let current_url = match Url::parse(&current) {
            Ok(url) => url,
            Err(err) => {
                warn!(url = %current, %err, "skipping unparseable frontier url");
                continue;
            }
        };
        // Cross-host links are dropped here, before any fetch, and are
        // recorded nowhere beyond the visited set.
        if current_url.host_str() != Some(origin_host.as_str()) {
            continue;
        }

        stats.fetched += 1;
        let body = match fetcher.fetch(&current_url).await {
            Ok(body) => body,
            Err(err) => {
                stats.errors += 1;
                warn!(url = %current, %err, "fetch failed, skipping page");
                continue;
            }
        };

        let (words, hrefs) = extract(&body);
        debug!(url = %current, words = words.len(), hrefs = hrefs.len(), "extracted page");

        {
            let mut idx = index.write();
            for href in &hrefs {
                let normalized = clean(&current, href);
                if idx.visited.insert(normalized.clone()) {
                    frontier.push_back(normalized);
                }
            }
            for word in stopwords.remove_stopwords(words) {
                idx.record(&current, stem(&word));
            }
        }
        stats.indexed += 1;

        if stats.indexed % 50 == 0 {
            info!(
                fetched = stats.fetched,
                frontier = frontier.len(),
                "crawl progress"
            );
        }
    }

    info!(
        fetched = stats.fetched,
        indexed = stats.indexed,
        errors = stats.errors,
        "crawl finished"
    );
    Ok(stats)
}
