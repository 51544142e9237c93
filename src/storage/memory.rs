use std::sync::{Mutex, MutexGuard};

use crate::{
    errors::LedgerError,
    ledger::{Expense, ProfitSplit, Project, Transfer, User},
};

use super::{RecordStore, Result};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    expenses: Vec<Expense>,
    transfers: Vec<Transfer>,
    splits: Vec<ProfitSplit>,
}

/// Process-local store, handy for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| LedgerError::Storage("memory store lock poisoned".into()))
    }
}

impl RecordStore for MemoryStore {
    fn read_users(&self) -> Result<Vec<User>> {
        Ok(self.lock()?.users.clone())
    }

    fn read_projects(&self) -> Result<Vec<Project>> {
        Ok(self.lock()?.projects.clone())
    }

    fn read_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.lock()?.expenses.clone())
    }

    fn read_transfers(&self) -> Result<Vec<Transfer>> {
        Ok(self.lock()?.transfers.clone())
    }

    fn read_profit_splits(&self) -> Result<Vec<ProfitSplit>> {
        Ok(self.lock()?.splits.clone())
    }

    fn append_user(&self, user: &User) -> Result<()> {
        self.lock()?.users.push(user.clone());
        Ok(())
    }

    fn append_project(&self, project: &Project) -> Result<()> {
        self.lock()?.projects.push(project.clone());
        Ok(())
    }

    fn append_expense(&self, expense: &Expense) -> Result<()> {
        self.lock()?.expenses.push(expense.clone());
        Ok(())
    }

    fn append_transfer(&self, transfer: &Transfer) -> Result<()> {
        self.lock()?.transfers.push(transfer.clone());
        Ok(())
    }

    fn append_profit_split(&self, split: &ProfitSplit) -> Result<()> {
        self.lock()?.splits.push(split.clone());
        Ok(())
    }
}
