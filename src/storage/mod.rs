//! Record store abstraction: read-all and append-one over the ledger tables.

pub mod json_backend;
pub mod memory;

use crate::{
    errors::LedgerError,
    ledger::{Expense, ProfitSplit, Project, Transfer, User},
};

pub type Result<T> = std::result::Result<T, LedgerError>;

pub const USERS_TABLE: &str = "Users";
pub const PROJECTS_TABLE: &str = "Projects";
pub const EXPENSES_TABLE: &str = "Expenses";
pub const TRANSFERS_TABLE: &str = "Reimbursements";
pub const PROFIT_SPLITS_TABLE: &str = "ProfitSplits";

/// Backends persisting the ledger tables.
pub trait RecordStore: Send + Sync {
    fn read_users(&self) -> Result<Vec<User>>;
    fn read_projects(&self) -> Result<Vec<Project>>;
    fn read_expenses(&self) -> Result<Vec<Expense>>;
    fn read_transfers(&self) -> Result<Vec<Transfer>>;
    fn read_profit_splits(&self) -> Result<Vec<ProfitSplit>>;

    fn append_user(&self, user: &User) -> Result<()>;
    fn append_project(&self, project: &Project) -> Result<()>;
    fn append_expense(&self, expense: &Expense) -> Result<()>;
    fn append_transfer(&self, transfer: &Transfer) -> Result<()>;
    fn append_profit_split(&self, split: &ProfitSplit) -> Result<()>;

    /// Fetches every table the reconciliation engine needs. Fails as a whole
    /// if any single table cannot be read.
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            projects: self.read_projects()?,
            expenses: self.read_expenses()?,
            transfers: self.read_transfers()?,
            splits: self.read_profit_splits()?,
        })
    }
}

/// Consistent copy of the ledger tables handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub expenses: Vec<Expense>,
    pub transfers: Vec<Transfer>,
    pub splits: Vec<ProfitSplit>,
}

impl Snapshot {
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStore;
