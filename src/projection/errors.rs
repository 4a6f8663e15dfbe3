use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Annual inflation rate [{0}] must be greater than -1")]
    InvalidRate(Decimal),
    #[error("Numeric overflow totalling the transaction history")]
    HistoryOverflow,
    #[error("Numeric overflow projecting [{net}] over {months} months")]
    ProjectionOverflow {
        net: Decimal,
        months: u32
    },
    #[error("Numeric overflow adjusting [{amount}] for {months} months of inflation")]
    Overflow {
        amount: Decimal,
        months: u32
    }
}
