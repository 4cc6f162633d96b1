//! Project aggregate.

use super::ProjectName;
use serde::{Deserialize, Serialize};

/// Named container for tasks. Projects are never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    name: ProjectName,
}

impl Project {
    /// Creates a project with the given name.
    #[must_use]
    pub const fn new(name: ProjectName) -> Self {
        Self { name }
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }
}
