//! In-process task store.
//!
//! Used for `--offline` runs and as the store double in tests: it records how
//! many requests of each kind it has served and can be told to answer a given
//! operation with an error status.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{BackendError, CreateTaskArgs, Task, TaskBackend, UpdateTaskArgs};

/// Operations served by a task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    failures: HashMap<Operation, u16>,
    requests: HashMap<Operation, usize>,
}

/// Task store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records, in list order.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                tasks,
                ..Default::default()
            }),
        }
    }

    /// Answer every request for `operation` with `status` until cleared.
    pub fn fail_with_status(&self, operation: Operation, status: u16) {
        self.lock().failures.insert(operation, status);
    }

    pub fn clear_failure(&self, operation: Operation) {
        self.lock().failures.remove(&operation);
    }

    /// Number of requests received for `operation`, including failed ones.
    pub fn request_count(&self, operation: Operation) -> usize {
        self.lock().requests.get(&operation).copied().unwrap_or(0)
    }

    /// Snapshot of the stored records.
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock only means a test thread panicked mid-call.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count the request and return the injected failure, if any.
    fn begin(state: &mut MemoryState, operation: Operation) -> Result<(), BackendError> {
        *state.requests.entry(operation).or_insert(0) += 1;
        match state.failures.get(&operation) {
            Some(&status) => Err(BackendError::Status {
                status,
                body: format!("injected failure for {:?}", operation),
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: &str) -> BackendError {
        BackendError::Status {
            status: 404,
            body: format!("\"Task {} not found\"", id),
        }
    }
}

#[async_trait]
impl TaskBackend for MemoryBackend {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        let mut state = self.lock();
        Self::begin(&mut state, Operation::List)?;
        Ok(state.tasks.clone())
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        let mut state = self.lock();
        Self::begin(&mut state, Operation::Create)?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            name: args.name,
            description: args.description,
            active: args.active,
            created_at: Some(args.created_at),
            updated_at: None,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &str, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        let mut state = self.lock();
        Self::begin(&mut state, Operation::Update)?;

        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        task.name = args.name;
        task.description = args.description;
        task.active = args.active;
        task.updated_at = Some(args.updated_at);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        Self::begin(&mut state, Operation::Delete)?;

        let position = state
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        state.tasks.remove(position);
        Ok(())
    }
}
