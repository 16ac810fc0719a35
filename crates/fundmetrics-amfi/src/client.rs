//! AMFI HTTP client.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

use fundmetrics_core::types::{Date, NavPoint, NavSeries};

use crate::cache::SchemeCache;
use crate::error::{AmfiError, AmfiResult};
use crate::schemes::{parse_scheme_dump, SchemeRecord};

/// URL of the full scheme directory dump.
pub const SCHEMES_URL: &str = "https://www.amfiindia.com/spages/NAVAll.txt";

/// URL of the NAV history API.
pub const NAV_HISTORY_URL: &str = "https://www.amfiindia.com/api/nav-history";

/// AMFI serves at most five years of history per request.
const MAX_CHUNK_DAYS: i64 = 365 * 5;

/// A source of historical NAV series.
///
/// This is the interface the return metrics consume: a provider hands
/// over a clean, date-ordered [`NavSeries`] and any network or parse
/// failure propagates to the caller unretried.
#[async_trait]
pub trait NavProvider: Send + Sync {
    /// Fetches the NAV series for a scheme over the date range.
    async fn fetch_nav(&self, scheme_id: &str, start: Date, end: Date) -> AmfiResult<NavSeries>;
}

/// Client for the AMFI scheme directory and NAV history endpoints.
///
/// The scheme directory is loaded from the injected cache at connect
/// time and only refetched on [`refresh_schemes`](Self::refresh_schemes).
///
/// # Example
///
/// ```rust,no_run
/// use fundmetrics_amfi::{AmfiClient, CsvSchemeCache};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = CsvSchemeCache::new("amfi_navall.csv");
/// let client = AmfiClient::connect(Box::new(cache)).await?;
/// println!("{} schemes known", client.schemes().len());
/// # Ok(())
/// # }
/// ```
pub struct AmfiClient {
    http: Client,
    cache: Box<dyn SchemeCache>,
    schemes: Vec<SchemeRecord>,
}

impl AmfiClient {
    /// Connects with a load-or-refresh of the scheme directory: a warm
    /// cache avoids any network traffic, a cold one triggers a fetch
    /// whose result is stored back.
    ///
    /// # Errors
    ///
    /// Propagates cache, network, and provider failures.
    pub async fn connect(cache: Box<dyn SchemeCache>) -> AmfiResult<Self> {
        let http = Client::new();
        let mut client = Self {
            http,
            cache,
            schemes: Vec::new(),
        };

        match client.cache.load()? {
            Some(records) => {
                debug!("amfi: loaded {} schemes from cache", records.len());
                client.schemes = records;
            }
            None => {
                client.refresh_schemes().await?;
            }
        }

        Ok(client)
    }

    /// All schemes in the directory.
    #[must_use]
    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    /// The distinct fund houses in the directory.
    #[must_use]
    pub fn fund_houses(&self) -> BTreeSet<String> {
        self.schemes
            .iter()
            .filter(|record| !record.fund_house.is_empty())
            .map(|record| record.fund_house.clone())
            .collect()
    }

    /// The schemes belonging to the given fund house.
    #[must_use]
    pub fn schemes_by_fund_house(&self, fund_house: &str) -> Vec<&SchemeRecord> {
        self.schemes
            .iter()
            .filter(|record| record.fund_house == fund_house)
            .collect()
    }

    /// Forces a refetch of the scheme directory and updates the cache.
    ///
    /// # Errors
    ///
    /// Propagates network, provider, and cache failures.
    pub async fn refresh_schemes(&mut self) -> AmfiResult<&[SchemeRecord]> {
        let dump = self.fetch_text(SCHEMES_URL).await?;
        let records = parse_scheme_dump(&dump);
        info!("amfi: refreshed scheme directory, {} schemes", records.len());

        self.cache.store(&records)?;
        self.schemes = records;
        Ok(&self.schemes)
    }

    /// Downloads the NAV history for a scheme over a date range.
    ///
    /// AMFI caps each request at five years, so longer ranges are
    /// fetched in chunks and concatenated before being assembled into a
    /// date-ordered series.
    ///
    /// # Errors
    ///
    /// Propagates network and provider failures, and `InvalidData` if
    /// the payload contains a non-positive NAV.
    pub async fn nav_history(
        &self,
        scheme_id: &str,
        start: Date,
        end: Date,
    ) -> AmfiResult<NavSeries> {
        let mut records = Vec::new();
        for (from, to) in date_ranges(start, end, MAX_CHUNK_DAYS) {
            records.extend(self.fetch_nav_chunk(scheme_id, from, to).await?);
        }
        debug!(
            "amfi: fetched {} NAV records for scheme {scheme_id}",
            records.len()
        );

        let points = records
            .into_iter()
            .map(|record| {
                Ok(NavPoint::new(
                    parse_nav_date(&record.date)?,
                    record.nav.parse::<f64>().map_err(|_| {
                        AmfiError::Parse(format!("NAV is not a number: {}", record.nav))
                    })?,
                ))
            })
            .collect::<AmfiResult<Vec<NavPoint>>>()?;

        Ok(NavSeries::new(points)?)
    }

    async fn fetch_text(&self, url: &str) -> AmfiResult<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AmfiError::Provider {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.text().await?)
    }

    async fn fetch_nav_chunk(
        &self,
        scheme_id: &str,
        from: Date,
        to: Date,
    ) -> AmfiResult<Vec<NavRecord>> {
        let response = self
            .http
            .get(NAV_HISTORY_URL)
            .query(&[
                ("query_type", "historical_period"),
                ("sd_id", scheme_id),
                ("from_date", &from.to_string()),
                ("to_date", &to.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AmfiError::Provider {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let payload: NavHistoryResponse = response.json().await?;
        Ok(payload.into_records())
    }
}

#[async_trait]
impl NavProvider for AmfiClient {
    async fn fetch_nav(&self, scheme_id: &str, start: Date, end: Date) -> AmfiResult<NavSeries> {
        self.nav_history(scheme_id, start, end).await
    }
}

/// NAV history payload: `data.nav_groups[0].historical_records`.
#[derive(Debug, Deserialize)]
struct NavHistoryResponse {
    data: Option<NavHistoryData>,
}

impl NavHistoryResponse {
    /// Extracts the records, empty when the range had no data.
    fn into_records(self) -> Vec<NavRecord> {
        self.data
            .and_then(|data| data.nav_groups.into_iter().next())
            .map(|group| group.historical_records)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct NavHistoryData {
    #[serde(default)]
    nav_groups: Vec<NavGroup>,
}

#[derive(Debug, Deserialize)]
struct NavGroup {
    #[serde(default)]
    historical_records: Vec<NavRecord>,
}

#[derive(Debug, Deserialize)]
struct NavRecord {
    date: String,
    #[serde(deserialize_with = "string_or_number")]
    nav: String,
}

/// AMFI has served NAVs both as JSON strings and as bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Parses the date formats the NAV history endpoint is known to emit.
fn parse_nav_date(s: &str) -> AmfiResult<Date> {
    for format in ["%Y-%m-%d", "%d-%m-%Y", "%d-%b-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(Date::from(date));
        }
    }
    Err(AmfiError::Parse(format!("unrecognized NAV date: {s}")))
}

/// Splits `[start, end]` into consecutive inclusive chunks of at most
/// `chunk_days` days each.
fn date_ranges(start: Date, end: Date, chunk_days: i64) -> Vec<(Date, Date)> {
    let mut pairs = Vec::new();
    let mut current = start;

    while current <= end {
        let chunk_end = current.add_days(chunk_days - 1).min(end);
        pairs.push((current, chunk_end));
        current = chunk_end.add_days(1);
    }

    pairs
}
