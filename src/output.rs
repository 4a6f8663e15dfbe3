use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;

use ledger_projection_engine::gamification::GamificationEngine;
use ledger_projection_engine::ledger::MonthlyReport;
use ledger_projection_engine::projection::GoalEstimate;

pub struct ProjectionSummary {
    pub months: u32,
    pub net_to_date: Decimal,
    pub projected_balance: Decimal,
    pub inflation_adjusted: Decimal,
    pub months_to_goal: GoalEstimate
}

pub fn write_report(output: &mut impl Write, report: &MonthlyReport) -> Result<()> {
    writeln!(output, "report,user={}", report.user_id)?;
    writeln!(output, "period,income,expense,net")?;

    for summary in &report.periods {
        writeln!(output, "{},{:.2},{:.2},{:.2}", summary.period, summary.income, summary.expense, summary.net)?;
    }

    writeln!(output)?;

    Ok(())
}

pub fn write_projection(output: &mut impl Write, projection: &ProjectionSummary) -> Result<()> {
    writeln!(output, "projection,months={}", projection.months)?;
    writeln!(output, "net_to_date,{:.2}", projection.net_to_date)?;
    writeln!(output, "projected_balance,{:.2}", projection.projected_balance)?;
    writeln!(output, "inflation_adjusted,{:.2}", projection.inflation_adjusted)?;

    match projection.months_to_goal {
        GoalEstimate::Months(months) => writeln!(output, "months_to_goal,{months}")?,
        GoalEstimate::Unreachable => writeln!(output, "months_to_goal,unreachable")?
    }

    writeln!(output)?;

    Ok(())
}

pub fn write_gamification(output: &mut impl Write, engine: &GamificationEngine) -> Result<()> {
    writeln!(output, "notifications")?;

    for notification in engine.notifications() {
        writeln!(output, "{}", notification.message())?;
    }

    writeln!(output)?;
    writeln!(output, "rewards")?;

    for reward in engine.rewards() {
        let status = if reward.is_redeemed() { "redeemed" } else { "available" };
        writeln!(output, "{},{:.2},{}", reward.description(), reward.value(), status)?;
    }

    Ok(())
}
