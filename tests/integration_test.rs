use std::path::Path;
use std::process::Command;

use anyhow::Result;

fn run_cli(sample: &str, extra_args: &[&str]) -> Result<(bool, String)> {
    let (code, stdout) = run_cli_with_code(sample, extra_args)?;

    Ok((code == Some(0), stdout))
}

fn run_cli_with_code(sample: &str, extra_args: &[&str]) -> Result<(Option<i32>, String)> {
    let binary_path = env!("CARGO_BIN_EXE_ledger-projection-engine");
    let sample_path = Path::new("samples").join(sample);

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(extra_args)
        .output()?;

    Ok((output.status.code(), String::from_utf8(output.stdout)?))
}

fn section<'a>(stdout: &'a str, header: &str) -> Vec<&'a str> {
    stdout.lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_cli_reports_single_user_in_discovery_order() -> Result<()> {
    let (success, stdout) = run_cli("transactions.csv", &["--user", "1"])?;

    assert!(success);

    let report = section(&stdout, "report,user=1");

    assert_eq!(report, vec![
        "period,income,expense,net",
        "09/2025,3000.00,250.00,2750.00",
        "10/2025,500.00,89.90,410.10",
    ]);

    assert!(!stdout.contains("report,user=2"));

    Ok(())
}

#[test]
fn test_cli_projects_balance_and_rewards_goal() -> Result<()> {
    let (success, stdout) = run_cli("transactions.csv", &["--user", "1"])?;

    assert!(success);

    let projection = section(&stdout, "projection,months=6");

    assert_eq!(projection[0], "net_to_date,3160.10");
    assert_eq!(projection[1], "projected_balance,18960.60");
    assert!(projection[2].starts_with("inflation_adjusted,"));
    assert_eq!(projection[3], "months_to_goal,2");

    let inflation_adjusted: f64 = projection[2].trim_start_matches("inflation_adjusted,").parse()?;
    assert!(inflation_adjusted < 18960.60);

    assert_eq!(section(&stdout, "notifications"), vec!["New goal added: Savings goal", "Goal achieved: Savings goal"]);
    assert_eq!(section(&stdout, "rewards"), vec!["Goal achieved: Savings goal,100.00,available"]);

    Ok(())
}

#[test]
fn test_cli_reports_every_user_and_skips_invalid_rows() -> Result<()> {
    let (success, stdout) = run_cli("transactions.csv", &["--months", "1", "--reward-value", "25"])?;

    assert!(success);
    assert_eq!(section(&stdout, "report,user=2"), vec!["period,income,expense,net", "09/2025,2000.00,150.75,1849.25"]);

    let projection = section(&stdout, "projection,months=1");

    assert_eq!(projection[0], "net_to_date,5009.35");
    assert_eq!(projection[3], "months_to_goal,0");
    assert_eq!(section(&stdout, "rewards"), vec!["Goal achieved: Savings goal,25.00,available"]);

    Ok(())
}

#[test]
fn test_cli_marks_goal_unreachable_when_overspending() -> Result<()> {
    let (success, stdout) = run_cli("overspending.csv", &["--chronological", "--challenge", "No takeout=200"])?;

    assert!(success);

    let projection = section(&stdout, "projection,months=6");

    assert_eq!(projection[1], "projected_balance,-2280.00");
    assert_eq!(projection[3], "months_to_goal,unreachable");
    assert_eq!(section(&stdout, "notifications"), vec!["New goal added: Savings goal", "New challenge started: No takeout"]);
    assert!(section(&stdout, "rewards").is_empty());

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_input() -> Result<()> {
    let (success, stdout) = run_cli("missing.csv", &[])?;

    assert!(!success);
    assert!(stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_reports_projection_overflow_as_an_error() -> Result<()> {
    let (code, stdout) = run_cli_with_code("large_amounts.csv", &["--months", "4000000000"])?;

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());

    let (success, stdout) = run_cli("large_amounts.csv", &["--months", "1"])?;

    assert!(success);
    assert_eq!(section(&stdout, "projection,months=1")[0], "net_to_date,49999999999999999880.00");

    Ok(())
}
