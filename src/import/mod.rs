mod csv_importer;
mod errors;

pub use csv_importer::{CsvImporter, ImportSummary};
pub use errors::ImportError;
