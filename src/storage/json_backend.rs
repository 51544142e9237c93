use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::{Expense, ProfitSplit, Project, Transfer, User},
    utils::paths::{ensure_dir, write_atomic, PathResolver},
};

use super::{
    RecordStore, Result, EXPENSES_TABLE, PROFIT_SPLITS_TABLE, PROJECTS_TABLE, TRANSFERS_TABLE,
    USERS_TABLE,
};

const TABLE_EXTENSION: &str = "json";

/// Stores each table as a JSON array of row objects keyed by column name.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| PathResolver::records_dir_in(&PathResolver::base_dir()));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{}.{}", table, TABLE_EXTENSION))
    }

    /// Loads every decodable row of `table`. A file that is not a JSON array
    /// fails the read; a single row that does not fit `T` is skipped.
    fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let rows = self.read_raw(table)?;
        let total = rows.len();
        let decoded: Vec<T> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(table, row = index, error = %err, "undecodable row skipped");
                    None
                }
            })
            .collect();
        tracing::debug!(table, rows = decoded.len(), skipped = total - decoded.len(), "table loaded");
        Ok(decoded)
    }

    fn read_raw(&self, table: &str) -> Result<Vec<Value>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Storage(format!("table `{}` is unreadable: {}", table, err))
        })
    }

    // Appends work on raw JSON so existing rows are written back untouched,
    // including cells that would coerce on a typed read.
    fn append_row<T: Serialize>(&self, table: &str, row: &T) -> Result<()> {
        let mut rows = self.read_raw(table)?;
        rows.push(serde_json::to_value(row)?);
        let json = serde_json::to_string_pretty(&rows)?;
        write_atomic(&self.table_path(table), &json)?;
        tracing::info!(table, rows = rows.len(), "row appended");
        Ok(())
    }
}

impl RecordStore for JsonStorage {
    fn read_users(&self) -> Result<Vec<User>> {
        self.read_table(USERS_TABLE)
    }

    fn read_projects(&self) -> Result<Vec<Project>> {
        self.read_table(PROJECTS_TABLE)
    }

    fn read_expenses(&self) -> Result<Vec<Expense>> {
        self.read_table(EXPENSES_TABLE)
    }

    fn read_transfers(&self) -> Result<Vec<Transfer>> {
        self.read_table(TRANSFERS_TABLE)
    }

    fn read_profit_splits(&self) -> Result<Vec<ProfitSplit>> {
        self.read_table(PROFIT_SPLITS_TABLE)
    }

    fn append_user(&self, user: &User) -> Result<()> {
        self.append_row(USERS_TABLE, user)
    }

    fn append_project(&self, project: &Project) -> Result<()> {
        self.append_row(PROJECTS_TABLE, project)
    }

    fn append_expense(&self, expense: &Expense) -> Result<()> {
        self.append_row(EXPENSES_TABLE, expense)
    }

    fn append_transfer(&self, transfer: &Transfer) -> Result<()> {
        self.append_row(TRANSFERS_TABLE, transfer)
    }

    fn append_profit_split(&self, split: &ProfitSplit) -> Result<()> {
        self.append_row(PROFIT_SPLITS_TABLE, split)
    }
}
