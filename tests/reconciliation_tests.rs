use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use team_ledger::{
    compute_project_finances,
    ledger::{Expense, ProfitSplit, Transfer, TransferSource},
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

fn roster() -> Vec<String> {
    vec!["Youssef".into(), "Essam".into(), "Gharib".into(), "Ayman".into()]
}

fn busy_ledger() -> (Vec<Expense>, Vec<Transfer>, Vec<ProfitSplit>) {
    let expenses = vec![
        Expense::new(day(), "Robot", "Youssef", "Motors", dec!(1250.40)),
        Expense::new(day(), "Robot", "Essam", "Sensors", dec!(480.10)),
        Expense::new(day(), "Robot", "Youssef", "Frame", dec!(99.50)),
        Expense::new(day(), "Website", "Ayman", "Hosting", dec!(300)),
        Expense::new(day(), "Robot", "Outsider", "Tools", dec!(70)),
    ];
    let transfers = vec![
        Transfer::new(day(), "Robot", TransferSource::Client, "Youssef", dec!(1000)),
        Transfer::new(day(), "Robot", TransferSource::member("Youssef"), "Essam", dec!(200)),
        Transfer::new(day(), "Website", TransferSource::Client, "Ayman", dec!(300)),
    ];
    let splits = vec![
        ProfitSplit::new("Robot", "Youssef", dec!(40)),
        ProfitSplit::new("Robot", "Essam", dec!(30)),
        ProfitSplit::new("Robot", "Gharib", dec!(15)),
        ProfitSplit::new("Robot", "Ayman", dec!(15)),
        ProfitSplit::new("Website", "Ayman", dec!(100)),
    ];
    (expenses, transfers, splits)
}

#[test]
fn balances_satisfy_the_identity() {
    let (expenses, transfers, splits) = busy_ledger();
    let summary = compute_project_finances(
        "Robot",
        dec!(6000),
        &roster(),
        &expenses,
        &transfers,
        &splits,
    );
    for account in summary.accounts.values() {
        assert_eq!(
            account.balance,
            account.profit_share + (account.expenses_paid - account.money_received)
        );
    }
    assert_eq!(summary.accounts.len(), 4);
}

#[test]
fn profit_ignores_transfers_and_splits() {
    let (expenses, transfers, splits) = busy_ledger();
    let with_all =
        compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &transfers, &splits);
    let expenses_only = compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &[], &[]);
    assert_eq!(with_all.profit, expenses_only.profit);
    assert_eq!(with_all.profit, dec!(6000) - with_all.total_expenses);
    assert_eq!(with_all.total_expenses, dec!(1900.00));
}

#[test]
fn dropped_payers_only_affect_totals() {
    let (expenses, transfers, splits) = busy_ledger();
    let summary =
        compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &transfers, &splits);
    let paid: Decimal = summary.accounts.values().map(|a| a.expenses_paid).sum();
    assert_eq!(paid + dec!(70), summary.total_expenses);
    assert!(summary.account("Outsider").is_none());
}

#[test]
fn inputs_are_left_untouched_and_results_repeat() {
    let (expenses, transfers, splits) = busy_ledger();
    let before = (expenses.clone(), transfers.clone(), splits.clone());
    let first =
        compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &transfers, &splits);
    let second =
        compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &transfers, &splits);
    assert_eq!(first, second);
    assert_eq!((expenses, transfers, splits), before);
}

#[test]
fn member_payments_are_one_sided() {
    let (expenses, transfers, splits) = busy_ledger();
    let summary =
        compute_project_finances("Robot", dec!(6000), &roster(), &expenses, &transfers, &splits);
    let youssef = summary.account("Youssef").expect("Youssef");
    assert_eq!(youssef.money_received, dec!(1000));
    assert_eq!(summary.account("Essam").expect("Essam").money_received, dec!(200));
    assert_eq!(summary.total_received, dec!(1200));
}
