//! Validated appends of expenses, transfers and profit splits.

use rust_decimal::Decimal;

use crate::core::services::{ProjectService, ServiceError, ServiceResult};
use crate::ledger::{Expense, ProfitSplit, Project, Transfer, TransferSource};
use crate::storage::RecordStore;

/// Checks new ledger rows against their project before handing them to the store.
pub struct TransactionService;

impl TransactionService {
    /// Records an expense paid by a team member.
    pub fn add_expense(store: &dyn RecordStore, expense: Expense) -> ServiceResult<()> {
        let project = ProjectService::find(store, &expense.project)?;
        if expense.description.trim().is_empty() {
            return Err(ServiceError::Invalid("Please enter a description".into()));
        }
        ensure_positive(expense.amount, "Amount")?;
        ensure_on_team(&project, &expense.paid_by)?;
        store.append_expense(&expense)?;
        tracing::info!(
            project = %expense.project,
            paid_by = %expense.paid_by,
            amount = %expense.amount,
            "expense recorded"
        );
        Ok(())
    }

    /// Records money handed to a member, by the client or by a teammate.
    pub fn add_transfer(store: &dyn RecordStore, transfer: Transfer) -> ServiceResult<()> {
        let project = ProjectService::find(store, &transfer.project)?;
        if transfer.from.member_name() == Some(transfer.to.as_str()) {
            return Err(ServiceError::Invalid(
                "Payer and recipient must be different".into(),
            ));
        }
        ensure_positive(transfer.amount, "Amount")?;
        if let TransferSource::Member(payer) = &transfer.from {
            ensure_on_team(&project, payer)?;
        }
        ensure_on_team(&project, &transfer.to)?;
        store.append_transfer(&transfer)?;
        tracing::info!(
            project = %transfer.project,
            from = %transfer.from,
            to = %transfer.to,
            amount = %transfer.amount,
            "transfer recorded"
        );
        Ok(())
    }

    /// Appends a split row. Earlier rows for the same member stay in storage
    /// and are superseded when balances are computed.
    pub fn set_profit_split(store: &dyn RecordStore, split: ProfitSplit) -> ServiceResult<()> {
        let project = ProjectService::find(store, &split.project)?;
        ensure_positive(split.percentage, "Percentage")?;
        if split.percentage > Decimal::ONE_HUNDRED {
            return Err(ServiceError::Invalid(
                "Percentage cannot exceed 100".into(),
            ));
        }
        ensure_on_team(&project, &split.member)?;
        store.append_profit_split(&split)?;
        tracing::info!(
            project = %split.project,
            member = %split.member,
            percentage = %split.percentage,
            "profit split updated"
        );
        Ok(())
    }
}

fn ensure_positive(value: Decimal, label: &str) -> ServiceResult<()> {
    if value <= Decimal::ZERO {
        Err(ServiceError::Invalid(format!("{} must be positive", label)))
    } else {
        Ok(())
    }
}

fn ensure_on_team(project: &Project, member: &str) -> ServiceResult<()> {
    if project.has_member(member) {
        Ok(())
    } else {
        Err(ServiceError::Invalid(format!(
            "`{}` is not on the `{}` team",
            member, project.name
        )))
    }
}
