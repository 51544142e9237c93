use crate::engine::{unrostered_participants, FinanceSummary};
use crate::ledger::Project;
use crate::storage::RecordStore;

use super::{ProjectService, ServiceResult};

pub struct SummaryService;

impl SummaryService {
    /// Fetches a fresh snapshot and reconciles `project_name`. Storage
    /// failures surface before any computation happens.
    pub fn project_finances(
        store: &dyn RecordStore,
        project_name: &str,
    ) -> ServiceResult<FinanceSummary> {
        Self::project_report(store, project_name).map(|(_, summary)| summary)
    }

    /// Like [`Self::project_finances`], also returning the project row the
    /// figures were computed from.
    pub fn project_report(
        store: &dyn RecordStore,
        project_name: &str,
    ) -> ServiceResult<(Project, FinanceSummary)> {
        let snapshot = store.snapshot()?;
        let project = ProjectService::find_in(snapshot.projects, project_name)?;
        let summary = FinanceSummary::for_project(
            &project,
            &snapshot.expenses,
            &snapshot.transfers,
            &snapshot.splits,
        );
        Ok((project, summary))
    }

    /// Participants of `project_name` whose rows were left out of the balances.
    pub fn unrostered(store: &dyn RecordStore, project_name: &str) -> ServiceResult<Vec<String>> {
        let snapshot = store.snapshot()?;
        let project = ProjectService::find_in(snapshot.projects, project_name)?;
        Ok(unrostered_participants(
            &project.name,
            &project.team,
            &snapshot.expenses,
            &snapshot.transfers,
            &snapshot.splits,
        ))
    }
}
