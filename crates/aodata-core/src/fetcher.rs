//! Sequential price fetch loop over the (item, city, quality) cartesian
//! product.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{batch_stamp, ItemId, PriceEntry, PriceRecord, Quality};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Default price endpoint of the Albion Online Data Project (west server).
pub const DEFAULT_BASE_URL: &str = "https://west.albion-online-data.com/api/v2/stats/prices";

/// Environment variable overriding the upstream host.
pub const API_HOST_ENV: &str = "AODATA_API_HOST";

/// Tunables for the fetch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Price endpoint without the trailing item segment.
    pub base_url: String,
    /// Per-request transport timeout.
    pub request_timeout_ms: u64,
    /// Pause between consecutive tuple requests.
    pub request_delay: Duration,
    /// Cooldown before the single retry after a 429.
    pub rate_limit_cooldown: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_ms: 5_000,
            request_delay: Duration::from_millis(1_500),
            rate_limit_cooldown: Duration::from_secs(10),
        }
    }
}

impl FetcherConfig {
    /// Default configuration, with the host taken from `AODATA_API_HOST`
    /// when set (e.g. `https://east.albion-online-data.com`).
    pub fn from_env() -> Self {
        match std::env::var(API_HOST_ENV) {
            Ok(host) if !host.trim().is_empty() => Self {
                base_url: format!("{}/api/v2/stats/prices", host.trim().trim_end_matches('/')),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

/// The item/city/quality lists whose cartesian product one fetch covers.
///
/// No deduplication: duplicate tuples produce duplicate records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPlan {
    pub items: Vec<ItemId>,
    pub cities: Vec<String>,
    pub qualities: Vec<Quality>,
}

impl FetchPlan {
    pub fn new(items: Vec<ItemId>, cities: Vec<String>, qualities: Vec<Quality>) -> Self {
        Self {
            items,
            cities,
            qualities,
        }
    }

    /// Number of tuples the plan expands to.
    pub fn tuple_count(&self) -> usize {
        self.items.len() * self.cities.len() * self.qualities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuple_count() == 0
    }
}

/// All records produced by one fetch invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBatch {
    /// Records in plan order (items outer, cities middle, qualities inner).
    pub records: Vec<PriceRecord>,
    /// Hour-granularity stamp shared by every record of the batch.
    pub fetch_time: String,
    /// Tuples dropped on a non-success status other than a recovered 429.
    pub skipped: u32,
}

impl PriceBatch {
    fn new(fetch_time: String, capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            fetch_time,
            skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sequential fetcher issuing one HTTP GET per (item, city, quality) tuple.
#[derive(Clone)]
pub struct PriceFetcher {
    http_client: Arc<dyn HttpClient>,
    config: FetcherConfig,
}

impl PriceFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::new()),
            config,
        }
    }

    /// Fetcher with a custom transport, used by tests and embedders.
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: FetcherConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch one record per tuple of `plan`, in plan order.
    ///
    /// A tuple is only dropped when the upstream answers with a non-success
    /// status other than a recovered 429; empty bodies and transport or
    /// decode failures still produce a record, so a single bad tuple never
    /// aborts the batch. An empty plan returns an empty batch without any
    /// network activity.
    ///
    /// Requests are strictly sequential with a fixed pause between tuples.
    /// Must not be invoked twice concurrently from the same caller: the
    /// pacing assumes a single in-flight loop.
    pub async fn fetch(&self, plan: &FetchPlan) -> PriceBatch {
        let fetch_time = batch_stamp();
        let mut batch = PriceBatch::new(fetch_time, plan.tuple_count());

        let mut first = true;
        for item in &plan.items {
            for city in &plan.cities {
                for quality in &plan.qualities {
                    if !first {
                        tokio::time::sleep(self.config.request_delay).await;
                    }
                    first = false;
                    self.fetch_tuple(item, city, *quality, &mut batch).await;
                }
            }
        }

        batch
    }

    async fn fetch_tuple(&self, item: &ItemId, city: &str, quality: Quality, batch: &mut PriceBatch) {
        info!("fetching {} in {} (Q{})", item, city, quality);

        let fetch_time = batch.fetch_time.clone();
        let url = self.tuple_url(item, city, quality);
        let request = HttpRequest::get(url).with_timeout_ms(self.config.request_timeout_ms);

        let mut response = match self.http_client.execute(request.clone()).await {
            Ok(response) => response,
            Err(error) => {
                warn!("transport failure for {} in {} (Q{}): {}", item, city, quality, error);
                batch
                    .records
                    .push(PriceRecord::failed(item.clone(), city, quality, fetch_time, error.message()));
                return;
            }
        };

        if response.status == 429 {
            warn!(
                "rate limit hit for {} in {} (Q{}), cooling down for {:?}",
                item, city, quality, self.config.rate_limit_cooldown
            );
            tokio::time::sleep(self.config.rate_limit_cooldown).await;

            response = match self.http_client.execute(request).await {
                Ok(response) => response,
                Err(error) => {
                    warn!("transport failure on retry for {} in {} (Q{}): {}", item, city, quality, error);
                    batch
                        .records
                        .push(PriceRecord::failed(item.clone(), city, quality, fetch_time, error.message()));
                    return;
                }
            };
        }

        if !response.is_success() {
            warn!(
                "skipping {} in {} (Q{}): upstream returned status {}",
                item, city, quality, response.status
            );
            batch.skipped += 1;
            return;
        }

        match first_entry(&response.body) {
            Ok(Some(entry)) => batch
                .records
                .push(PriceRecord::quoted(item.clone(), city, quality, fetch_time, entry)),
            Ok(None) => batch
                .records
                .push(PriceRecord::empty(item.clone(), city, quality, fetch_time)),
            Err(message) => {
                warn!("bad body for {} in {} (Q{}): {}", item, city, quality, message);
                batch
                    .records
                    .push(PriceRecord::failed(item.clone(), city, quality, fetch_time, &message));
            }
        }
    }

    fn tuple_url(&self, item: &ItemId, city: &str, quality: Quality) -> String {
        format!(
            "{}/{}?locations={}&qualities={}",
            self.config.base_url,
            item,
            urlencoding::encode(city),
            quality
        )
    }
}

/// First entry of the response array; `None` means "no market data"
/// (an empty array, or valid JSON that is not an array at all).
fn first_entry(body: &str) -> Result<Option<PriceEntry>, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| format!("invalid JSON body: {}", e))?;

    let Value::Array(entries) = value else {
        return Ok(None);
    };
    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };

    serde_json::from_value(first)
        .map(Some)
        .map_err(|e| format!("malformed price entry: {}", e))
}
