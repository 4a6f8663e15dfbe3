mod errors;
mod report;
#[cfg(test)]
mod tests;
mod transaction_ledger;

pub use errors::LedgerError;
pub use report::{MonthlyReport, Period, PeriodSummary, ReportOrder};
pub use transaction_ledger::Ledger;
