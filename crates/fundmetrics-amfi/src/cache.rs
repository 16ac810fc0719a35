//! Injectable on-disk cache for the scheme directory.
//!
//! The full AMFI scheme dump is several megabytes and changes slowly,
//! so the client keeps a local copy and only refetches on an explicit
//! refresh. The cache is injected into [`crate::AmfiClient`] with its
//! own lifecycle (load-or-refresh at connect, explicit refresh after) —
//! there is no process-wide cache state.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::AmfiResult;
use crate::schemes::SchemeRecord;

/// Storage for the scheme directory between runs.
pub trait SchemeCache: Send + Sync {
    /// Loads the cached directory, or `None` when no cache exists yet.
    fn load(&self) -> AmfiResult<Option<Vec<SchemeRecord>>>;

    /// Replaces the cached directory.
    fn store(&self, records: &[SchemeRecord]) -> AmfiResult<()>;
}

/// File-backed [`SchemeCache`] in CSV format.
#[derive(Debug, Clone)]
pub struct CsvSchemeCache {
    path: PathBuf,
}

impl CsvSchemeCache {
    /// Creates a cache backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemeCache for CsvSchemeCache {
    fn load(&self) -> AmfiResult<Option<Vec<SchemeRecord>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);
        let records = reader
            .deserialize()
            .collect::<Result<Vec<SchemeRecord>, _>>()?;
        Ok(Some(records))
    }

    fn store(&self, records: &[SchemeRecord]) -> AmfiResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// In-memory [`SchemeCache`] that never persists anything.
///
/// `load` always misses, so every connect refetches. Useful for tests
/// and one-shot tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSchemeCache;

impl SchemeCache for NoopSchemeCache {
    fn load(&self) -> AmfiResult<Option<Vec<SchemeRecord>>> {
        Ok(None)
    }

    fn store(&self, _records: &[SchemeRecord]) -> AmfiResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<SchemeRecord> {
        vec![
            SchemeRecord {
                scheme_code: "119551".to_string(),
                isin_growth: "INF209KA12Z1".to_string(),
                isin_reinvestment: "INF209KA13Z9".to_string(),
                scheme_name: "Sample Debt Fund".to_string(),
                nav: "308.1566".to_string(),
                date: "21-Aug-2026".to_string(),
                fund_house: "Sample Mutual Fund".to_string(),
            },
            SchemeRecord {
                scheme_code: "120437".to_string(),
                isin_growth: "INF846K01EW2".to_string(),
                isin_reinvestment: "-".to_string(),
                scheme_name: "Sample Banking Fund".to_string(),
                nav: "2402.4071".to_string(),
                date: "21-Aug-2026".to_string(),
                fund_house: "Other Mutual Fund".to_string(),
            },
        ]
    }

    fn temp_cache(name: &str) -> CsvSchemeCache {
        let mut path = std::env::temp_dir();
        path.push(format!("fundmetrics-cache-test-{name}-{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);
        CsvSchemeCache::new(path)
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let cache = temp_cache("miss");
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let cache = temp_cache("roundtrip");
        let records = sample_records();

        cache.store(&records).unwrap();
        let loaded = cache.load().unwrap().unwrap();
        assert_eq!(loaded, records);

        let _ = std::fs::remove_file(cache.path());
    }

    #[test]
    fn test_store_replaces_previous_contents() {
        let cache = temp_cache("replace");
        cache.store(&sample_records()).unwrap();
        cache.store(&sample_records()[..1]).unwrap();

        let loaded = cache.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);

        let _ = std::fs::remove_file(cache.path());
    }

    #[test]
    fn test_noop_cache_always_misses() {
        let cache = NoopSchemeCache;
        cache.store(&sample_records()).unwrap();
        assert!(cache.load().unwrap().is_none());
    }
}
