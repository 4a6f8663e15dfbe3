use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use ledger_projection_engine::types::{Amount, UserId};

/// Reports, projections and goal rewards for a CSV of transactions.
///
/// The report is written to stdout, logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "ledger-projection-engine", version)]
pub struct Args {
    /// CSV file with header `id,user,account,category,kind,amount,date,description`
    pub input: PathBuf,

    /// Only report and project this user's transactions
    #[arg(long)]
    pub user: Option<UserId>,

    /// Projection horizon in months
    #[arg(long, default_value_t = 6)]
    pub months: u32,

    /// Annual inflation rate used to deflate the projection
    #[arg(long, default_value = "0.06")]
    pub inflation_rate: Decimal,

    #[arg(long, default_value = "Savings goal")]
    pub goal_title: String,

    #[arg(long, default_value = "5000")]
    pub goal_target: Amount,

    /// Value granted for each achieved goal
    #[arg(long, default_value = "100.00")]
    pub reward_value: Amount,

    /// One-month challenge starting today, as `TITLE=VALUE` (repeatable)
    #[arg(long, value_parser = parse_challenge)]
    pub challenge: Vec<(String, Amount)>,

    /// List report months chronologically instead of in discovery order
    #[arg(long)]
    pub chronological: bool,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    pub log_level: String
}

fn parse_challenge(value: &str) -> Result<(String, Amount), String> {
    let (title, amount) = value.rsplit_once('=')
        .ok_or_else(|| format!("Challenge [{value}] must look like TITLE=VALUE"))?;

    let amount = amount.parse::<Amount>().map_err(|error| error.to_string())?;

    Ok((title.trim().to_string(), amount))
}
