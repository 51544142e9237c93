//! Project lookup and registration.

use crate::ledger::Project;
use crate::storage::RecordStore;

use super::{ServiceError, ServiceResult};

pub struct ProjectService;

impl ProjectService {
    /// Registers a new project after checking its name is free.
    pub fn add(store: &dyn RecordStore, project: Project) -> ServiceResult<()> {
        let name = project.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Project name is required".into()));
        }
        if project.team.is_empty() {
            return Err(ServiceError::Invalid(
                "Project needs at least one team member".into(),
            ));
        }
        if store.read_projects()?.iter().any(|p| p.name == project.name) {
            return Err(ServiceError::Invalid(format!(
                "Project `{}` already exists",
                project.name
            )));
        }
        store.append_project(&project)?;
        tracing::info!(project = %project.name, "project registered");
        Ok(())
    }

    pub fn find(store: &dyn RecordStore, name: &str) -> ServiceResult<Project> {
        Self::find_in(store.read_projects()?, name)
    }

    /// Projects whose roster includes `username`, in table order.
    pub fn for_member(store: &dyn RecordStore, username: &str) -> ServiceResult<Vec<Project>> {
        Ok(store
            .read_projects()?
            .into_iter()
            .filter(|project| project.has_member(username))
            .collect())
    }

    pub(crate) fn find_in(projects: Vec<Project>, name: &str) -> ServiceResult<Project> {
        projects
            .into_iter()
            .find(|project| project.name == name)
            .ok_or_else(|| ServiceError::NotFound(format!("Project `{}`", name)))
    }
}
