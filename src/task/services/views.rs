//! Read-only grouped projections over stored tasks.
//!
//! Views hold cloned snapshots, so nothing done to a view reaches the stores.

use std::collections::{BTreeMap, HashMap};

use crate::task::domain::{Deadline, Project, ProjectName, Task};

/// One project together with its tasks in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTasks {
    project: Project,
    tasks: Vec<Task>,
}

impl ProjectTasks {
    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the project's tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Splits the group into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Project, Vec<Task>) {
        (self.project, self.tasks)
    }
}

/// Tasks grouped by project, projects in creation order.
///
/// Every project appears exactly once, including projects without tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksByProject {
    groups: Vec<ProjectTasks>,
}

impl TasksByProject {
    /// Groups `tasks` under `projects`, keeping both in the given order.
    ///
    /// Tasks whose project is not among `projects` are left out.
    #[must_use]
    pub fn group(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        let mut positions: HashMap<ProjectName, usize> = HashMap::with_capacity(projects.len());
        let mut groups = Vec::with_capacity(projects.len());
        for project in projects {
            positions
                .entry(project.name().clone())
                .or_insert(groups.len());
            groups.push(ProjectTasks {
                project,
                tasks: Vec::new(),
            });
        }

        for task in tasks {
            let owner = positions
                .get(task.project())
                .and_then(|position| groups.get_mut(*position));
            match owner {
                Some(group) => group.tasks.push(task),
                None => tracing::warn!(
                    task_id = %task.id(),
                    project = %task.project(),
                    "task references an unknown project"
                ),
            }
        }

        Self { groups }
    }

    /// Returns the groups in project creation order.
    #[must_use]
    pub fn groups(&self) -> &[ProjectTasks] {
        &self.groups
    }

    /// Returns the tasks of the named project, if the project is present.
    #[must_use]
    pub fn tasks_for(&self, name: &ProjectName) -> Option<&[Task]> {
        self.groups
            .iter()
            .find(|group| group.project.name() == name)
            .map(ProjectTasks::tasks)
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when no project exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over the groups in project creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectTasks> {
        self.groups.iter()
    }
}

impl IntoIterator for TasksByProject {
    type Item = ProjectTasks;
    type IntoIter = std::vec::IntoIter<ProjectTasks>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a TasksByProject {
    type Item = &'a ProjectTasks;
    type IntoIter = std::slice::Iter<'a, ProjectTasks>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Tasks grouped by due date.
///
/// Dated groups come first in ascending date order, followed by a single
/// [`Deadline::Unscheduled`] group when any task lacks a due date. Groups are
/// never empty and keep tasks in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksByDeadline {
    groups: BTreeMap<Deadline, Vec<Task>>,
}

impl TasksByDeadline {
    /// Partitions `tasks` by due date, keeping their relative order.
    #[must_use]
    pub fn group(tasks: Vec<Task>) -> Self {
        let mut groups: BTreeMap<Deadline, Vec<Task>> = BTreeMap::new();
        for task in tasks {
            groups.entry(task.deadline()).or_default().push(task);
        }
        Self { groups }
    }

    /// Returns the tasks in the given group, if present.
    #[must_use]
    pub fn get(&self, deadline: &Deadline) -> Option<&[Task]> {
        self.groups.get(deadline).map(Vec::as_slice)
    }

    /// Returns the group keys in display order.
    pub fn deadlines(&self) -> impl Iterator<Item = Deadline> + '_ {
        self.groups.keys().copied()
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when there are no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over `(deadline, tasks)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Deadline, &[Task])> + '_ {
        self.groups
            .iter()
            .map(|(deadline, tasks)| (*deadline, tasks.as_slice()))
    }
}

impl IntoIterator for TasksByDeadline {
    type Item = (Deadline, Vec<Task>);
    type IntoIter = std::collections::btree_map::IntoIter<Deadline, Vec<Task>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
