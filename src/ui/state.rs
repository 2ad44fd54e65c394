//! Task list state shared by the root and the list view.
//!
//! The root owns a single [`TaskCollection`]; creation results, edits,
//! deletions and full fetches are all applied here, and the list view renders
//! a snapshot of it. Nothing mutates the list behind this type.

use crate::backend::Task;

/// Load state of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    /// The first fetch has not completed yet
    #[default]
    Loading,
    /// At least one fetch has completed, successfully or not
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    phase: ListPhase,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replace the whole list with the result of a full fetch.
    pub fn load(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.phase = ListPhase::Ready;
    }

    /// A fetch failed: keep whatever is shown and stop loading.
    pub fn load_failed(&mut self) {
        self.phase = ListPhase::Ready;
    }

    /// Insert `task` as the first row.
    ///
    /// A row with the same id is removed first, so ids stay unique when a
    /// refetch already delivered the task.
    pub fn prepend(&mut self, task: Task) {
        self.tasks.retain(|existing| existing.id != task.id);
        self.tasks.insert(0, task);
    }

    /// Swap in the server's version of a task, matched by id.
    /// Returns false when no row has that id.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => {
                *existing = task;
                true
            }
            None => false,
        }
    }

    /// Remove the row with `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(position))
    }
}
