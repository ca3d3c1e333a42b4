//! Output records and the sinks they are streamed into.

use crate::catalog::CatalogItem;
use crate::error::{CrawlError, Result};
use crate::units::Quantity;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// One accepted catalog item, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "ComponentCode")]
    pub component_code: String,
    #[serde(rename = "ComponentModel")]
    pub component_model: String,
    #[serde(rename = "ComponentSpecification")]
    pub component_specification: String,
    #[serde(rename = "StockCount")]
    pub stock_count: u64,
    #[serde(rename = "ERPComponentName")]
    pub erp_component_name: String,
    #[serde(rename = "ComponentType")]
    pub component_type: String,
    #[serde(rename = "ComponentLibraryType")]
    pub component_library_type: String,
    /// Searched value in the family's canonical unit
    #[serde(rename = "SortableValueMagnitude")]
    pub sortable_magnitude: Option<Decimal>,
    #[serde(rename = "SortableValueUnit")]
    pub sortable_unit: Option<String>,
    #[serde(rename = "Datasheet")]
    pub datasheet: Option<String>,
}

impl OutputRecord {
    /// Column names, in output order.
    pub const HEADERS: [&'static str; 10] = [
        "ComponentCode",
        "ComponentModel",
        "ComponentSpecification",
        "StockCount",
        "ERPComponentName",
        "ComponentType",
        "ComponentLibraryType",
        "SortableValueMagnitude",
        "SortableValueUnit",
        "Datasheet",
    ];

    pub fn new(item: CatalogItem, target: Option<&Quantity>) -> Self {
        let datasheet = item.datasheet().map(str::to_string);

        Self {
            component_code: item.component_code,
            component_model: item.component_model_en,
            component_specification: item.component_specification_en,
            stock_count: item.stock_count,
            erp_component_name: item.erp_component_name,
            component_type: item.component_type_en,
            component_library_type: item.component_library_type,
            sortable_magnitude: target.map(|q| q.magnitude),
            sortable_unit: target.map(|q| q.unit.name()),
            datasheet,
        }
    }
}

/// Destination for accepted records.
pub trait RecordSink {
    fn write(&mut self, record: OutputRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

impl RecordSink for Vec<OutputRecord> {
    fn write(&mut self, record: OutputRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write(&mut self, record: OutputRecord) -> Result<()> {
        (**self).write(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// CSV writer. The header row is written up front, so an empty crawl still
/// produces a valid file.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Writing records to {}", path.display());
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(OutputRecord::HEADERS)?;
        Ok(Self { writer })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| CrawlError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write(&mut self, record: OutputRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Drops records whose component code has already been written.
pub struct Dedup<S> {
    inner: S,
    seen: HashSet<String>,
    duplicates: u64,
}

impl<S: RecordSink> Dedup<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, seen: HashSet::new(), duplicates: 0 }
    }

    /// Number of records dropped so far.
    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RecordSink> RecordSink for Dedup<S> {
    fn write(&mut self, record: OutputRecord) -> Result<()> {
        if !self.seen.insert(record.component_code.clone()) {
            debug!("Dropping duplicate {}", record.component_code);
            self.duplicates += 1;
            return Ok(());
        }
        self.inner.write(record)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
