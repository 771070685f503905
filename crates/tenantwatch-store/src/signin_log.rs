//! CSV-backed sign-in log store

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use tenantwatch_core::SignInRecord;

use crate::error::StoreError;
use crate::models::SignInRow;

/// Persistent store for sign-in activity.
///
/// The log is a flat CSV file holding the latest known sign-in per user plus
/// whatever history previous collections accumulated. Reads tolerate
/// malformed rows; writes replace the file wholesale.
#[derive(Debug, Clone)]
pub struct SignInLogStore {
    path: PathBuf,
}

impl SignInLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all sign-in records from the log.
    ///
    /// A missing file yields an empty list, not an error. Rows that fail to
    /// deserialize or carry an unparseable timestamp are skipped with a
    /// warning so one bad row cannot poison an analysis.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be opened or read.
    pub fn read(&self) -> Result<Vec<SignInRecord>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "sign-in log not found, returning empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (line, row) in reader.deserialize::<SignInRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(line = line + 2, error = %e, "skipping malformed sign-in log row");
                    skipped += 1;
                    continue;
                }
            };
            match row.into_record() {
                Some(Ok(record)) => records.push(record),
                Some(Err(e)) => {
                    warn!(line = line + 2, error = %e, "skipping sign-in row with bad timestamp");
                    skipped += 1;
                }
                // N/A sentinel or blank user id, nothing to index
                None => {}
            }
        }

        debug!(
            path = %self.path.display(),
            count = records.len(),
            skipped,
            "loaded sign-in log"
        );
        Ok(records)
    }

    /// Replace the log with the given records.
    ///
    /// Every row is stamped with today's date as the collection date. The
    /// previous file content is discarded.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn replace(&self, records: &[SignInRecord]) -> Result<(), StoreError> {
        let collection_date = Utc::now().format("%Y-%m-%d").to_string();
        let mut writer = csv::Writer::from_path(&self.path)?;

        for record in records {
            writer.serialize(SignInRow::from_record(record, &collection_date))?;
        }
        writer.flush().map_err(StoreError::Io)?;

        debug!(path = %self.path.display(), count = records.len(), "replaced sign-in log");
        Ok(())
    }
}
