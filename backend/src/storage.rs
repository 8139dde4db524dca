//! CSV persistence for the two ledgers
//!
//! Each ledger lives in one flat file with a header row. Writes always replace
//! the whole file. Two processes sharing the same files overwrite each other
//! without notice; the tracker is meant for a single operator.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::{CollectionRecord, IssuanceRecord, Ledgers};

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column order of the issuance file
pub const ISSUANCE_HEADERS: [&str; 8] = [
    "id",
    "date",
    "department",
    "location",
    "rangeStart",
    "rangeEnd",
    "recipient",
    "note",
];

/// Column order of the collection file; `id` is the issuance id
pub const COLLECTION_HEADERS: [&str; 6] =
    ["id", "serialNumber", "date", "department", "location", "note"];

/// Issuance row as stored on disk. Files saved with the Turkish column
/// names (`RecId,Tarih,Dükkan,...`) still load; saving rewrites them with
/// [`ISSUANCE_HEADERS`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssuanceRow {
    #[serde(alias = "RecId")]
    id: i64,
    #[serde(alias = "Tarih")]
    date: String,
    #[serde(alias = "Dükkan")]
    department: String,
    #[serde(alias = "İş Yeri")]
    location: String,
    #[serde(alias = "Seri Başlangıç")]
    range_start: i64,
    #[serde(alias = "Seri Bitiş")]
    range_end: i64,
    #[serde(alias = "Teslim Alan")]
    recipient: Option<String>,
    #[serde(alias = "Açıklama")]
    note: Option<String>,
}

/// Collection row as stored on disk
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionRow {
    #[serde(alias = "RecId")]
    id: i64,
    #[serde(alias = "Seri No")]
    serial_number: i64,
    #[serde(alias = "Tarih")]
    date: String,
    #[serde(alias = "Dükkan")]
    department: String,
    #[serde(alias = "İş Yeri")]
    location: String,
    #[serde(alias = "Açıklama")]
    note: Option<String>,
}

impl From<IssuanceRow> for IssuanceRecord {
    fn from(row: IssuanceRow) -> Self {
        Self {
            id: row.id,
            date: parse_date(&row.date),
            department: row.department,
            location: row.location,
            range_start: row.range_start,
            range_end: row.range_end,
            recipient: row.recipient,
            note: row.note,
        }
    }
}

impl From<&IssuanceRecord> for IssuanceRow {
    fn from(record: &IssuanceRecord) -> Self {
        Self {
            id: record.id,
            date: format_date(record.date),
            department: record.department.clone(),
            location: record.location.clone(),
            range_start: record.range_start,
            range_end: record.range_end,
            recipient: record.recipient.clone(),
            note: record.note.clone(),
        }
    }
}

impl From<CollectionRow> for CollectionRecord {
    fn from(row: CollectionRow) -> Self {
        Self {
            issuance_id: row.id,
            serial_number: row.serial_number,
            date: parse_date(&row.date),
            department: row.department,
            location: row.location,
            note: row.note,
        }
    }
}

impl From<&CollectionRecord> for CollectionRow {
    fn from(record: &CollectionRecord) -> Self {
        Self {
            id: record.issuance_id,
            serial_number: record.serial_number,
            date: format_date(record.date),
            department: record.department.clone(),
            location: record.location.clone(),
            note: record.note.clone(),
        }
    }
}

/// Parse a stored date. Accepts plain dates and the midnight timestamps the
/// spreadsheet-era files contain; anything else reads as missing.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
                .map(|dt| dt.date())
                .ok()
        })
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Decode a CSV table
fn decode_table<R: DeserializeOwned>(bytes: &[u8]) -> AppResult<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Encode a CSV table, always emitting the header so empty tables keep their schema
fn encode_table<R: Serialize>(headers: &[&str], rows: &[R]) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::StorageError(format!("CSV writer error: {}", e)))
}

/// Read a table, returning an empty one if the file does not exist
async fn read_table<R: DeserializeOwned>(path: &Path) -> AppResult<Vec<R>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => decode_table(&bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("{} not found, starting with an empty ledger", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrite a table file with the full contents
async fn write_table<R: Serialize>(path: &Path, headers: &[&str], rows: &[R]) -> AppResult<()> {
    let bytes = encode_table(headers, rows)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    tracing::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Location of both ledger files
#[derive(Debug, Clone)]
pub struct LedgerStore {
    issuance_path: PathBuf,
    collection_path: PathBuf,
}

impl LedgerStore {
    pub fn new(issuance_path: impl Into<PathBuf>, collection_path: impl Into<PathBuf>) -> Self {
        Self {
            issuance_path: issuance_path.into(),
            collection_path: collection_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.issuance_path(), config.collection_path())
    }

    pub fn issuance_path(&self) -> &Path {
        &self.issuance_path
    }

    pub fn collection_path(&self) -> &Path {
        &self.collection_path
    }

    pub async fn load_issuances(&self) -> AppResult<Vec<IssuanceRecord>> {
        let rows: Vec<IssuanceRow> = read_table(&self.issuance_path).await?;
        Ok(rows.into_iter().map(IssuanceRecord::from).collect())
    }

    pub async fn load_collections(&self) -> AppResult<Vec<CollectionRecord>> {
        let rows: Vec<CollectionRow> = read_table(&self.collection_path).await?;
        Ok(rows.into_iter().map(CollectionRecord::from).collect())
    }

    /// Load both ledgers into a fresh session
    pub async fn load(&self) -> AppResult<Ledgers> {
        let issuances = self.load_issuances().await?;
        let collections = self.load_collections().await?;
        tracing::info!(
            "Loaded {} issuance and {} collection records",
            issuances.len(),
            collections.len()
        );
        Ok(Ledgers::new(issuances, collections))
    }

    pub async fn persist_issuances(&self, records: &[IssuanceRecord]) -> AppResult<()> {
        let rows: Vec<IssuanceRow> = records.iter().map(IssuanceRow::from).collect();
        write_table(&self.issuance_path, &ISSUANCE_HEADERS, &rows).await
    }

    pub async fn persist_collections(&self, records: &[CollectionRecord]) -> AppResult<()> {
        let rows: Vec<CollectionRow> = records.iter().map(CollectionRow::from).collect();
        write_table(&self.collection_path, &COLLECTION_HEADERS, &rows).await
    }

    /// Write both ledgers
    pub async fn persist(&self, ledgers: &Ledgers) -> AppResult<()> {
        self.persist_issuances(&ledgers.issuances).await?;
        self.persist_collections(&ledgers.collections).await
    }
}
