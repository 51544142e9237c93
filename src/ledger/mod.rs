//! Ledger record models as they are stored in the record tables.

pub mod amount;
pub mod date;
pub mod expense;
pub mod profit_split;
pub mod project;
pub mod transfer;
pub mod user;

pub use expense::Expense;
pub use profit_split::ProfitSplit;
pub use project::{parse_team, Project, ProjectStatus};
pub use transfer::{Transfer, TransferSource, CLIENT_SENTINEL};
pub use user::User;
