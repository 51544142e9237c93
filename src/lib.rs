#![doc(test(attr(deny(warnings))))]

//! Team Ledger tracks freelance project budgets, member-paid expenses,
//! transfers and profit splits, and reconciles them into per-member balances.

pub mod config;
pub mod core;
pub mod currency;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use engine::{compute_project_finances, FinanceSummary, MemberAccount};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Team Ledger tracing initialized.");
    });
}
