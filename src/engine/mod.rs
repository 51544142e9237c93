//! Project reconciliation: turns raw expense, transfer and profit-split rows
//! into per-member balances.
//!
//! Everything here is a pure function of its inputs. Only members on the
//! project roster get an account; rows naming anyone else are left out of the
//! per-member figures (see [`unrostered_participants`] for auditing them).

pub mod account;
pub mod splits;

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{Expense, ProfitSplit, Project, Transfer};

pub use account::{MemberAccount, Standing, SETTLED_THRESHOLD};
pub use splits::{check_splits, Advisory, SplitCheck, SPLIT_TOLERANCE};

/// Financial breakdown of a single project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub budget: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_expenses: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_received: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub profit: Decimal,
    pub accounts: BTreeMap<String, MemberAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_check: Option<SplitCheck>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
}

impl FinanceSummary {
    /// Reconciles a stored project against the full record tables.
    pub fn for_project(
        project: &Project,
        expenses: &[Expense],
        transfers: &[Transfer],
        splits: &[ProfitSplit],
    ) -> Self {
        compute_project_finances(
            &project.name,
            project.budget,
            &project.team,
            expenses,
            transfers,
            splits,
        )
    }

    pub fn account(&self, member: &str) -> Option<&MemberAccount> {
        self.accounts.get(member)
    }

    /// Accounts in roster order, skipping names without an account.
    pub fn accounts_in<'a>(
        &'a self,
        team: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a MemberAccount)> + 'a {
        team.iter()
            .filter_map(move |member| self.accounts.get(member).map(|acc| (member.as_str(), acc)))
    }

    pub fn is_over_budget(&self) -> bool {
        self.profit < Decimal::ZERO
    }
}

/// Computes totals, profit and every roster member's account for one project.
///
/// `expenses`, `transfers` and `splits` are the unfiltered tables; rows are
/// matched to `project_name` exactly. Later split rows for the same member
/// replace earlier ones. Figures that overflow the decimal range are left
/// out and reported as [`Advisory::Overflow`].
pub fn compute_project_finances(
    project_name: &str,
    budget: Decimal,
    team_members: &[String],
    expenses: &[Expense],
    transfers: &[Transfer],
    splits: &[ProfitSplit],
) -> FinanceSummary {
    let project_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| expense.project == project_name)
        .collect();
    let project_transfers: Vec<&Transfer> = transfers
        .iter()
        .filter(|transfer| transfer.project == project_name)
        .collect();
    let project_splits: Vec<&ProfitSplit> = splits
        .iter()
        .filter(|split| split.project == project_name)
        .collect();

    let mut advisories = Vec::new();
    let mut overflow = |figure: String| {
        tracing::warn!(project = project_name, %figure, "amount out of range; left out");
        let advisory = Advisory::Overflow { figure };
        if !advisories.contains(&advisory) {
            advisories.push(advisory);
        }
    };

    let mut total_expenses = Decimal::ZERO;
    for expense in &project_expenses {
        if !accumulate(&mut total_expenses, expense.amount) {
            overflow("total expenses".to_string());
        }
    }
    let mut total_received = Decimal::ZERO;
    for transfer in &project_transfers {
        if !accumulate(&mut total_received, transfer.amount) {
            overflow("total received".to_string());
        }
    }
    let profit = budget.checked_sub(total_expenses).unwrap_or_else(|| {
        overflow("profit".to_string());
        Decimal::ZERO
    });

    let mut accounts: BTreeMap<String, MemberAccount> = team_members
        .iter()
        .map(|member| (member.clone(), MemberAccount::default()))
        .collect();

    for expense in &project_expenses {
        match accounts.get_mut(expense.paid_by.as_str()) {
            Some(account) => {
                if !accumulate(&mut account.expenses_paid, expense.amount) {
                    overflow(format!("expenses paid by {}", expense.paid_by));
                }
            }
            None => tracing::debug!(
                project = project_name,
                member = %expense.paid_by,
                "expense payer not on roster; dropped"
            ),
        }
    }

    for transfer in &project_transfers {
        match accounts.get_mut(transfer.to.as_str()) {
            Some(account) => {
                if !accumulate(&mut account.money_received, transfer.amount) {
                    overflow(format!("money received by {}", transfer.to));
                }
            }
            None => tracing::debug!(
                project = project_name,
                member = %transfer.to,
                "transfer recipient not on roster; dropped"
            ),
        }
    }

    for split in &project_splits {
        match accounts.get_mut(split.member.as_str()) {
            Some(account) => {
                account.profit_share = split
                    .percentage
                    .checked_div(Decimal::ONE_HUNDRED)
                    .and_then(|fraction| fraction.checked_mul(profit))
                    .unwrap_or_else(|| {
                        overflow(format!("profit share of {}", split.member));
                        Decimal::ZERO
                    });
                account.profit_percentage = split.percentage;
            }
            None => tracing::debug!(
                project = project_name,
                member = %split.member,
                "profit split member not on roster; dropped"
            ),
        }
    }

    for (member, account) in accounts.iter_mut() {
        if !account.settle() {
            overflow(format!("balance of {member}"));
        }
    }

    let split_check = check_splits(project_splits.iter().copied());
    if let Some(check) = split_check.as_ref().filter(|check| !check.balanced) {
        tracing::warn!(
            project = project_name,
            total = %check.total_percentage,
            "profit splits do not add up to 100%"
        );
        advisories.push(Advisory::SplitImbalance {
            total_percentage: check.total_percentage,
        });
    }

    FinanceSummary {
        budget,
        total_expenses,
        total_received,
        profit,
        accounts,
        split_check,
        advisories,
    }
}

/// Adds `amount` to `total` unless the sum overflows; `total` is then left
/// as it was.
fn accumulate(total: &mut Decimal, amount: Decimal) -> bool {
    match total.checked_add(amount) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => false,
    }
}

/// Names that appear on a project's expense, transfer or split rows but not
/// on its roster, sorted. Transfer sources are not included.
pub fn unrostered_participants(
    project_name: &str,
    team_members: &[String],
    expenses: &[Expense],
    transfers: &[Transfer],
    splits: &[ProfitSplit],
) -> Vec<String> {
    let roster: BTreeSet<&str> = team_members.iter().map(String::as_str).collect();
    let payers = expenses
        .iter()
        .filter(|e| e.project == project_name)
        .map(|e| e.paid_by.as_str());
    let recipients = transfers
        .iter()
        .filter(|t| t.project == project_name)
        .map(|t| t.to.as_str());
    let members = splits
        .iter()
        .filter(|s| s.project == project_name)
        .map(|s| s.member.as_str());

    payers
        .chain(recipients)
        .chain(members)
        .filter(|name| !roster.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
