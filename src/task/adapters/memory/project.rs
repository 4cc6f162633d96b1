//! In-memory project repository.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Project, ProjectName},
    ports::{ProjectRepository, TaskListRepositoryError, TaskListRepositoryResult},
};

/// Thread-safe in-memory project repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn save(&self, project: &Project) -> TaskListRepositoryResult<()> {
        let mut projects = self.projects.write().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        projects.push(project.clone());
        Ok(())
    }

    fn find_all(&self) -> TaskListRepositoryResult<Vec<Project>> {
        let projects = self.projects.read().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(projects.clone())
    }

    fn find_by_name(&self, name: &ProjectName) -> TaskListRepositoryResult<Option<Project>> {
        let projects = self.projects.read().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(projects
            .iter()
            .find(|project| project.name() == name)
            .cloned())
    }
}
