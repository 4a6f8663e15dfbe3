mod cli;
mod output;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ledger_projection_engine::gamification::{Challenge, GamificationEngine, Goal, RewardPolicy};
use ledger_projection_engine::import::CsvImporter;
use ledger_projection_engine::ledger::{Ledger, MonthlyReport, ReportOrder};
use ledger_projection_engine::models::Transaction;
use ledger_projection_engine::projection::ProjectionService;

use crate::cli::Args;
use crate::output::ProjectionSummary;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let mut ledger = Ledger::new();

    let timer = Instant::now();
    let summary = CsvImporter::load_file(&args.input, &mut ledger)?;
    let duration = timer.elapsed();

    info!("Imported [{}] transactions, rejected [{}] in: {duration:?}", summary.imported, summary.rejected);

    let order = if args.chronological { ReportOrder::Chronological } else { ReportOrder::Discovery };

    let (reports, transactions): (Vec<MonthlyReport>, Vec<&Transaction>) = match args.user {
        Some(user_id) => (vec![ledger.monthly_report_with(user_id, order)?], ledger.transactions_for(user_id)),
        None => (
            ledger.user_ids().into_iter()
                .map(|user_id| ledger.monthly_report_with(user_id, order))
                .collect::<Result<_, _>>()?,
            ledger.transactions().iter().collect()
        )
    };

    let projected_balance = ProjectionService::project_balance(transactions.iter().copied(), args.months)?;

    let projection = ProjectionSummary {
        months: args.months,
        net_to_date: ProjectionService::net_to_date(transactions.iter().copied())?,
        projected_balance,
        inflation_adjusted: ProjectionService::adjust_for_inflation(projected_balance, args.inflation_rate, args.months)?,
        months_to_goal: ProjectionService::months_to_goal(args.goal_target.value(), transactions.iter().copied())?
    };

    let mut engine = GamificationEngine::new()
        .with_policy(RewardPolicy::new(args.reward_value));

    engine.add_goal(Goal::new(args.goal_title.as_str(), args.goal_target));

    let today = Utc::now().date_naive();

    for (title, value) in &args.challenge {
        engine.add_challenge(Challenge::starting_on(title.as_str(), *value, today)?);
    }

    engine.evaluate_goals(projected_balance);
    engine.evaluate_challenges();

    write_results_to_stdout(&reports, &projection, &engine)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(reports: &[MonthlyReport], projection: &ProjectionSummary, engine: &GamificationEngine) -> Result<()> {
    let mut writer = BufWriter::new(stdout().lock());

    for report in reports {
        output::write_report(&mut writer, report)?;
    }

    output::write_projection(&mut writer, projection)?;
    output::write_gamification(&mut writer, engine)?;

    writer.flush()?;

    Ok(())
}
