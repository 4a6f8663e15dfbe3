use super::{Ledger, LedgerError, Period, ReportOrder};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Account, Category, Transaction, TransactionKind, TransactionRecord};
use crate::types::{AccountId, TransactionId, UserId};

fn create_transaction(kind: TransactionKind, id: TransactionId, user_id: UserId, account_id: AccountId, amount: Decimal, date: (i32, u32, u32)) -> Result<Transaction> {
    let (year, month, day) = date;

    Ok(Transaction::try_from(TransactionRecord {
        id: Some(id),
        user_id: Some(user_id),
        account_id: Some(account_id),
        category_id: Some(10),
        kind: Some(kind),
        amount: Some(amount),
        date: Some(NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid date"))?),
        description: None
    })?)
}

fn sample_transactions() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction(TransactionKind::Income, 1, 1, 1, dec!(3000.00), (2025, 10, 2))?,
        create_transaction(TransactionKind::Expense, 2, 1, 1, dec!(250.00), (2025, 9, 6))?,
        create_transaction(TransactionKind::Income, 3, 1, 2, dec!(3000.00), (2025, 9, 2))?,
        create_transaction(TransactionKind::Expense, 4, 2, 1, dec!(89.90), (2025, 9, 10))?,
        create_transaction(TransactionKind::Expense, 5, 1, 2, dec!(120.50), (2025, 10, 15))?,
        create_transaction(TransactionKind::Investment, 6, 1, 2, dec!(500.00), (2025, 10, 20))?,
    ])
}

#[test]
fn test_balance_of_income_minus_expense() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.append(create_transaction(TransactionKind::Income, 100, 1, 1, dec!(2000.00), (2025, 9, 1))?);
    ledger.append(create_transaction(TransactionKind::Expense, 101, 1, 1, dec!(150.75), (2025, 9, 3))?);

    assert_eq!(ledger.balance_of(1)?, dec!(1849.25));

    Ok(())
}

#[test]
fn test_balance_of_unknown_account_is_zero() -> Result<()> {
    let mut ledger = Ledger::new();

    assert_eq!(ledger.balance_of(42)?, Decimal::ZERO);

    ledger.append(create_transaction(TransactionKind::Income, 1, 1, 1, dec!(10.00), (2025, 9, 1))?);

    assert_eq!(ledger.balance_of(42)?, Decimal::ZERO);

    Ok(())
}

#[test]
fn test_balance_is_independent_of_insertion_order() -> Result<()> {
    let transactions = sample_transactions()?;

    let mut forward = Ledger::new();
    transactions.iter().cloned().for_each(|transaction| forward.append(transaction));

    let mut reversed = Ledger::new();
    transactions.iter().rev().cloned().for_each(|transaction| reversed.append(transaction));

    let mut rotated = Ledger::new();
    let mut rotated_transactions = transactions.clone();
    rotated_transactions.rotate_left(2);
    rotated_transactions.into_iter().for_each(|transaction| rotated.append(transaction));

    for account_id in [1, 2, 3] {
        assert_eq!(forward.balance_of(account_id)?, reversed.balance_of(account_id)?);
        assert_eq!(forward.balance_of(account_id)?, rotated.balance_of(account_id)?);
    }

    assert_eq!(forward.balance_of(1)?, dec!(2660.10));
    assert_eq!(forward.balance_of(2)?, dec!(2879.50));

    Ok(())
}

#[test]
fn test_investment_transactions_do_not_move_balances() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.append(create_transaction(TransactionKind::Investment, 1, 1, 1, dec!(500.00), (2025, 9, 1))?);

    assert_eq!(ledger.balance_of(1)?, Decimal::ZERO);

    Ok(())
}

#[test]
fn test_balance_of_reports_overflow_instead_of_panicking() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.append(create_transaction(TransactionKind::Income, 1, 1, 1, Decimal::MAX, (2025, 9, 1))?);
    ledger.append(create_transaction(TransactionKind::Income, 2, 1, 1, Decimal::MAX, (2025, 9, 2))?);
    ledger.append(create_transaction(TransactionKind::Income, 3, 1, 2, dec!(10.00), (2025, 9, 3))?);

    assert!(matches!(ledger.balance_of(1), Err(LedgerError::BalanceOverflow { account_id: 1 })));
    assert_eq!(ledger.balance_of(2)?, dec!(10.00));

    Ok(())
}

#[test]
fn test_monthly_report_uses_discovery_order() -> Result<()> {
    let mut ledger = Ledger::new();
    sample_transactions()?.into_iter().for_each(|transaction| ledger.append(transaction));

    let report = ledger.monthly_report(1)?;
    let periods: Vec<Period> = report.periods.iter().map(|summary| summary.period).collect();

    assert_eq!(periods, vec![Period { year: 2025, month: 10 }, Period { year: 2025, month: 9 }]);

    let october = &report.periods[0];
    assert_eq!(october.income, dec!(3000.00));
    assert_eq!(october.expense, dec!(120.50));
    assert_eq!(october.net, dec!(2879.50));
    assert_eq!(october.transaction_count, 3);

    let september = &report.periods[1];
    assert_eq!(september.income, dec!(3000.00));
    assert_eq!(september.expense, dec!(250.00));
    assert_eq!(september.net, dec!(2750.00));
    assert_eq!(september.transaction_count, 2);

    Ok(())
}

#[test]
fn test_monthly_report_chronological_order_on_request() -> Result<()> {
    let mut ledger = Ledger::new();
    sample_transactions()?.into_iter().for_each(|transaction| ledger.append(transaction));

    let report = ledger.monthly_report_with(1, ReportOrder::Chronological)?;
    let periods: Vec<String> = report.periods.iter().map(|summary| summary.period.to_string()).collect();

    assert_eq!(periods, vec!["09/2025", "10/2025"]);

    Ok(())
}

#[test]
fn test_monthly_report_partitions_cover_all_user_transactions() -> Result<()> {
    let mut ledger = Ledger::new();
    sample_transactions()?.into_iter().for_each(|transaction| ledger.append(transaction));

    for user_id in ledger.user_ids() {
        let report = ledger.monthly_report(user_id)?;
        let user_transactions = ledger.transactions_for(user_id);
        let counted: usize = report.periods.iter().map(|summary| summary.transaction_count).sum();

        assert_eq!(counted, user_transactions.len());

        for summary in &report.periods {
            assert_eq!(summary.net, summary.income - summary.expense);
        }

        let mut distinct = report.periods.iter().map(|summary| summary.period).collect::<Vec<_>>();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), report.periods.len());
    }

    Ok(())
}

#[test]
fn test_monthly_report_for_unknown_user_is_empty() -> Result<()> {
    let mut ledger = Ledger::new();
    sample_transactions()?.into_iter().for_each(|transaction| ledger.append(transaction));

    let report = ledger.monthly_report(99)?;

    assert!(report.is_empty());
    assert_eq!(report.user_id, 99);

    Ok(())
}

#[test]
fn test_monthly_report_reports_overflowing_period() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.append(create_transaction(TransactionKind::Expense, 1, 1, 1, Decimal::MAX, (2025, 9, 1))?);
    ledger.append(create_transaction(TransactionKind::Expense, 2, 1, 2, Decimal::MAX, (2025, 9, 20))?);
    ledger.append(create_transaction(TransactionKind::Income, 3, 2, 1, dec!(10.00), (2025, 9, 3))?);

    let result = ledger.monthly_report(1);

    assert!(matches!(
        result,
        Err(LedgerError::ReportOverflow { user_id: 1, period: Period { year: 2025, month: 9 } })
    ));
    assert_eq!(ledger.monthly_report(2)?.periods[0].net, dec!(10.00));

    Ok(())
}

#[test]
fn test_user_ids_are_listed_in_discovery_order() -> Result<()> {
    let mut ledger = Ledger::new();
    sample_transactions()?.into_iter().for_each(|transaction| ledger.append(transaction));

    assert_eq!(ledger.user_ids(), vec![1, 2]);
    assert_eq!(ledger.len(), 6);

    Ok(())
}

#[test]
fn test_reference_data_registries_keep_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.register_account(Account::new(1, "Wallet"));
    ledger.register_account(Account::new(2, "Bank"));
    ledger.register_category(Category::new(10, "Salary"));

    assert_eq!(ledger.accounts().iter().map(|account| account.name.as_str()).collect::<Vec<_>>(), vec!["Wallet", "Bank"]);
    assert_eq!(ledger.categories().len(), 1);
    assert!(ledger.is_empty());
}
