//! Fetch command: crawls one component family into its CSV file.

use crate::catalog::{CatalogClient, CatalogSearch};
use crate::config::Config;
use crate::crawler::{CrawlStats, Crawler};
use crate::output::{CsvSink, Dedup, RecordSink};
use crate::progress::Progress;
use crate::query::ComponentFamily;
use crate::units::UnitTable;
use anyhow::{Context, Result};
use std::fmt;
use tracing::info;

/// Outcome of one family crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub family: ComponentFamily,
    pub stats: CrawlStats,
    /// Records dropped by deduplication
    pub duplicates: u64,
}

impl fmt::Display for FetchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: wrote {} parts to {} ({} searches, {} pages, {} skipped, {} duplicates)",
            self.family,
            self.stats.accepted - self.duplicates,
            self.family.output_file(),
            self.stats.descriptors,
            self.stats.pages,
            self.stats.skipped,
            self.duplicates
        )
    }
}

/// Crawls a component family.
pub struct FetchCommand {
    config: Config,
}

impl FetchCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Crawls `family` into its output file in the working directory.
    pub async fn execute(&self, family: ComponentFamily, units: &UnitTable) -> Result<String> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        let path = family.output_file();
        let mut sink =
            CsvSink::create(path).with_context(|| format!("Failed to create {}", path))?;

        let summary = self.execute_with_client(&client, family, units, &mut sink).await?;
        Ok(summary.to_string())
    }

    /// Crawls with a provided client and sink (for testing).
    pub async fn execute_with_client<S: RecordSink>(
        &self,
        client: &impl CatalogSearch,
        family: ComponentFamily,
        units: &UnitTable,
        sink: &mut S,
    ) -> Result<FetchSummary> {
        let descriptors = family
            .descriptors(units)
            .with_context(|| format!("Failed to build {} searches", family))?;

        info!("Crawling {} with {} searches", family, descriptors.len());

        let total = descriptors.len() as u64;
        let mut progress =
            if self.config.progress { Progress::new(total) } else { Progress::hidden(total) };

        let crawler = Crawler::new(client, units)
            .page_size(self.config.page_size)
            .min_stock(self.config.min_stock);

        // Only standard families overlap across scopes; a partition dump streams
        // straight through so memory stays flat on the full catalog.
        let (result, duplicates) = if self.config.dedupe && !family.is_partition() {
            let mut dedup = Dedup::new(&mut *sink);
            let result = crawler.crawl(descriptors, &mut progress, &mut dedup).await;
            (result, dedup.duplicates())
        } else {
            (crawler.crawl(descriptors, &mut progress, sink).await, 0)
        };

        progress.finish();

        // Keep whatever was written before a failure
        let flushed = sink.flush();
        let stats = result.with_context(|| format!("Failed to crawl {}", family))?;
        flushed.context("Failed to flush output")?;

        Ok(FetchSummary { family, stats, duplicates })
    }
}
