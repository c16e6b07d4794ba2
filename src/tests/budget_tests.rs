use crate::engine::evaluate_budget;
use crate::error::ValidationError;
use crate::models::{BudgetPeriod, BudgetStatus, Expense, PeriodKind, Share};
use crate::money::Money;
use crate::tests::member_id;
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

fn budget(amount: i64, threshold: u8) -> BudgetPeriod {
    BudgetPeriod {
        amount: Money::from_minor(amount),
        kind: PeriodKind::Monthly,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        end_date: Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
        alert_threshold_pct: threshold,
    }
}

fn expense_on(amount: i64, year: i32, month: u32, day: u32) -> Expense {
    let member = member_id(1);
    Expense {
        id: Uuid::new_v4(),
        group_id: member_id(999),
        paid_by: member,
        amount: Money::from_minor(amount),
        description: "test".to_string(),
        occurred_at: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        shares: vec![Share {
            member_id: member,
            amount: Money::from_minor(amount),
        }],
    }
}

#[test]
fn warning_at_threshold() {
    // 850 of 1000 spent with an 80% alert threshold: 85%, warning.
    let report = evaluate_budget(&budget(100_000, 80), &[expense_on(85_000, 2025, 6, 10)]).unwrap();
    assert_eq!(report.total_spent, Money::from_minor(85_000));
    assert_eq!(report.remaining, Money::from_minor(15_000));
    assert_eq!(report.percentage_used, 85);
    assert_eq!(report.status, BudgetStatus::Warning);
}

#[test]
fn ok_below_threshold() {
    let report = evaluate_budget(&budget(100_000, 80), &[expense_on(50_000, 2025, 6, 10)]).unwrap();
    assert_eq!(report.percentage_used, 50);
    assert_eq!(report.status, BudgetStatus::Ok);
}

#[test]
fn exceeded_over_limit() {
    let report =
        evaluate_budget(&budget(100_000, 80), &[expense_on(120_000, 2025, 6, 10)]).unwrap();
    assert_eq!(report.status, BudgetStatus::Exceeded);
    assert_eq!(report.remaining, Money::from_minor(-20_000));
    assert_eq!(report.percentage_used, 120);
}

#[test]
fn threshold_compares_at_full_precision() {
    // 79.99% floors to 79 for display but must not trip an 80% alert;
    // 80.00% exactly must.
    let just_under =
        evaluate_budget(&budget(100_000, 80), &[expense_on(79_999, 2025, 6, 10)]).unwrap();
    assert_eq!(just_under.percentage_used, 79);
    assert_eq!(just_under.status, BudgetStatus::Ok);

    let exactly = evaluate_budget(&budget(100_000, 80), &[expense_on(80_000, 2025, 6, 10)]).unwrap();
    assert_eq!(exactly.status, BudgetStatus::Warning);
}

#[test]
fn expenses_outside_period_are_ignored() {
    let expenses = vec![
        expense_on(10_000, 2025, 5, 31),
        expense_on(20_000, 2025, 6, 15),
        expense_on(30_000, 2025, 7, 1),
    ];
    let report = evaluate_budget(&budget(100_000, 80), &expenses).unwrap();
    assert_eq!(report.total_spent, Money::from_minor(20_000));
}

#[test]
fn open_ended_period_keeps_counting() {
    let mut open = budget(100_000, 80);
    open.end_date = None;
    let report = evaluate_budget(&open, &[expense_on(30_000, 2026, 1, 1)]).unwrap();
    assert_eq!(report.total_spent, Money::from_minor(30_000));
}

#[test]
fn non_positive_budget_amount_is_rejected() {
    assert!(matches!(
        evaluate_budget(&budget(0, 80), &[]),
        Err(ValidationError::InvalidAmount)
    ));
}
