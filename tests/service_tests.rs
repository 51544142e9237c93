mod common;

use common::{day, seeded_store};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use team_ledger::{
    core::services::{
        ProjectService, ServiceError, SummaryService, TransactionService, UserService,
    },
    engine::{Advisory, Standing},
    ledger::{Expense, ProfitSplit, Transfer, TransferSource},
    storage::{RecordStore, EXPENSES_TABLE},
};

#[test]
fn full_project_flow_reconciles() {
    let (store, _guard) = seeded_store();

    let user = UserService::login(&store, "A", "alpha").expect("login");
    let projects = ProjectService::for_member(&store, &user).expect("projects");
    assert_eq!(projects.len(), 1);
    let project = &projects[0].name;

    TransactionService::add_expense(
        &store,
        Expense::new(day(1), project, "A", "Components", dec!(2000)).with_notes("invoice 17"),
    )
    .expect("expense");
    TransactionService::add_transfer(
        &store,
        Transfer::new(day(2), project, TransferSource::Client, "A", dec!(1000)),
    )
    .expect("transfer");
    TransactionService::set_profit_split(&store, ProfitSplit::new(project, "A", dec!(50)))
        .expect("split A");
    TransactionService::set_profit_split(&store, ProfitSplit::new(project, "B", dec!(50)))
        .expect("split B");

    let summary = SummaryService::project_finances(&store, project).expect("summary");
    assert_eq!(summary.profit, dec!(8000));
    let a = summary.account("A").expect("A");
    assert_eq!(a.balance, dec!(5000));
    assert_eq!(a.standing(), Standing::ToReceive);
    assert_eq!(summary.account("B").expect("B").balance, dec!(4000));
    assert!(summary.split_check.as_ref().expect("split check").balanced);
}

#[test]
fn updated_split_supersedes_previous_row() {
    let (store, _guard) = seeded_store();
    TransactionService::set_profit_split(&store, ProfitSplit::new("Kiosk", "A", dec!(30)))
        .expect("first split");
    TransactionService::set_profit_split(&store, ProfitSplit::new("Kiosk", "A", dec!(45)))
        .expect("second split");

    assert_eq!(store.read_profit_splits().expect("rows").len(), 2);
    let summary = SummaryService::project_finances(&store, "Kiosk").expect("summary");
    assert_eq!(
        summary.account("A").expect("A").profit_percentage,
        dec!(45)
    );
    assert_eq!(
        summary.advisories,
        vec![Advisory::SplitImbalance {
            total_percentage: dec!(75)
        }]
    );
}

#[test]
fn malformed_amount_rows_do_not_block_the_ledger() {
    let (store, _guard) = seeded_store();
    std::fs::write(
        store.table_path(EXPENSES_TABLE),
        r#"[
            {"Date":"2024-04-01","Project":"Kiosk","Paid By":"A","Description":"ok","Amount":300,"Notes":""},
            {"Date":"2024-04-02","Project":"Kiosk","Paid By":"B","Description":"bad","Amount":"??","Notes":""},
            {"Date":"2024-04-03","Project":"Kiosk","Paid By":"B","Description":"blank","Notes":""}
        ]"#,
    )
    .expect("seed expenses");

    let summary = SummaryService::project_finances(&store, "Kiosk").expect("summary");
    assert_eq!(summary.total_expenses, dec!(300));
    assert_eq!(summary.account("B").expect("B").expenses_paid, Decimal::ZERO);
}

#[test]
fn bad_rows_elsewhere_do_not_block_a_project() {
    let (store, _guard) = seeded_store();
    std::fs::write(
        store.table_path(EXPENSES_TABLE),
        r#"[
            {"Date":"2024-04-01","Project":"Kiosk","Paid By":"A","Description":"ok","Amount":300,"Notes":""},
            {"Date":"01/02/2024","Project":"Other","Paid By":"C","Description":"odd date","Amount":50,"Notes":""},
            {"Date":"2024-04-02","Project":"Other","Paid By":null,"Amount":70},
            {"Date":"yesterday","Project":"Kiosk","Paid By":"B","Description":"odd date","Amount":20,"Notes":""}
        ]"#,
    )
    .expect("seed expenses");

    let summary = SummaryService::project_finances(&store, "Kiosk").expect("summary");
    assert_eq!(summary.total_expenses, dec!(320));
    assert_eq!(summary.account("A").expect("A").expenses_paid, dec!(300));
    assert_eq!(summary.account("B").expect("B").expenses_paid, dec!(20));
}

#[test]
fn storage_failure_surfaces_before_reconciliation() {
    let (store, _guard) = seeded_store();
    std::fs::write(store.table_path(EXPENSES_TABLE), "[{").expect("corrupt table");
    let err = SummaryService::project_finances(&store, "Kiosk").expect_err("must fail");
    assert!(matches!(err, ServiceError::Ledger(_)), "unexpected: {err:?}");
}

#[test]
fn login_rejects_bad_credentials() {
    let (store, _guard) = seeded_store();
    assert!(matches!(
        UserService::login(&store, "A", "bravo"),
        Err(ServiceError::Unauthorized(_))
    ));
    assert!(matches!(
        UserService::login(&store, "Nobody", "x"),
        Err(ServiceError::NotFound(_))
    ));
}
