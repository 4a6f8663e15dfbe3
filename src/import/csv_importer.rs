use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, error, warn};

use crate::import::errors::ImportError;
use crate::ledger::Ledger;
use crate::models::{Transaction, TransactionRecord};

/// Outcome of loading a CSV file into a ledger.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ImportSummary {
    /// Rows appended to the ledger.
    pub imported: usize,
    /// Rows that could not be parsed or failed transaction validation.
    pub rejected: usize
}

/// Loads transactions from CSV with the header
/// `id,user,account,category,kind,amount,date,description`.
///
/// Bad rows never abort the import: they are logged, counted and skipped.
pub struct CsvImporter;

impl CsvImporter {
    pub fn load_file(path: impl AsRef<Path>, ledger: &mut Ledger) -> Result<ImportSummary, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Open { path: path.to_path_buf(), source })?;

        Self::load(BufReader::new(file), ledger)
    }

    pub fn load<R: Read>(reader: R, ledger: &mut Ledger) -> Result<ImportSummary, ImportError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        reader.headers()?;

        let mut summary = ImportSummary::default();

        for result in reader.deserialize::<TransactionRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    error!("CSV deserialization error: {error}");
                    summary.rejected += 1;
                    continue;
                }
            };

            match Transaction::try_from(record) {
                Ok(transaction) => {
                    ledger.append(transaction);
                    summary.imported += 1;
                },
                Err(error) => {
                    warn!("{error}");
                    summary.rejected += 1;
                }
            }
        }

        debug!("Imported [{}] transactions, rejected [{}]", summary.imported, summary.rejected);

        Ok(summary)
    }
}
