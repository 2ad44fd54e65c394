//! Background execution of store round-trips.
//!
//! Every list/create/update/delete call and every title save runs as its own
//! tokio task. Nothing is queued, debounced or cancelled while the app runs;
//! outcomes are sent back as [`Action`]s in completion order.

use super::actions::Action;
use crate::backend::{CreateTaskArgs, SharedBackend, UpdateTaskArgs};
use crate::logger::Logger;
use crate::storage::LocalStorage;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type OperationId = u64;

#[derive(Debug)]
pub struct BackgroundOperation {
    pub id: OperationId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    operations: HashMap<OperationId, BackgroundOperation>,
    next_operation_id: OperationId,
    action_sender: mpsc::UnboundedSender<Action>,
    logger: Logger,
}

impl TaskManager {
    pub fn new(logger: Logger) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                operations: HashMap::new(),
                next_operation_id: 1,
                action_sender: tx,
                logger,
            },
            rx,
        )
    }

    /// Spawn `operation` and forward the action it resolves to.
    fn spawn_operation<Fut>(&mut self, description: String, operation: Fut) -> OperationId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let operation_id = self.next_operation_id;
        self.next_operation_id += 1;

        self.logger
            .log(format!("Background: Spawning operation #{} '{}'", operation_id, description));

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            // The receiver is gone only when the app is shutting down.
            let _ = action_sender.send(action);
        });

        self.operations.insert(
            operation_id,
            BackgroundOperation {
                id: operation_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        operation_id
    }

    /// `GET /Task`
    pub fn spawn_fetch(&mut self, backend: SharedBackend) -> OperationId {
        let logger = self.logger.clone();
        self.spawn_operation("Fetch tasks".to_string(), async move {
            match backend.fetch_tasks().await {
                Ok(tasks) => Action::TasksLoaded(tasks),
                Err(e) => {
                    logger.log(format!("Fetch: Failed to load tasks: {}", e));
                    Action::TasksLoadFailed(e.to_string())
                }
            }
        })
    }

    /// `POST /Task`
    pub fn spawn_create(&mut self, backend: SharedBackend, args: CreateTaskArgs) -> OperationId {
        let logger = self.logger.clone();
        let description = format!("Create task '{}'", args.name);
        self.spawn_operation(description, async move {
            match backend.create_task(args).await {
                Ok(task) => Action::TaskCreated(task),
                Err(e) => {
                    logger.log(format!("Create: Failed to create task: {}", e));
                    Action::TaskCreateFailed(e.to_string())
                }
            }
        })
    }

    /// `PUT /Task/{id}`
    pub fn spawn_update(&mut self, backend: SharedBackend, id: String, args: UpdateTaskArgs) -> OperationId {
        let logger = self.logger.clone();
        let description = format!("Update task {}", id);
        self.spawn_operation(description, async move {
            match backend.update_task(&id, args).await {
                Ok(task) => Action::TaskUpdated(task),
                Err(e) => {
                    logger.log(format!("Update: Failed to update task {}: {}", id, e));
                    Action::TaskUpdateFailed {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        })
    }

    /// `DELETE /Task/{id}`
    pub fn spawn_delete(&mut self, backend: SharedBackend, id: String) -> OperationId {
        let logger = self.logger.clone();
        let description = format!("Delete task {}", id);
        self.spawn_operation(description, async move {
            match backend.delete_task(&id).await {
                Ok(()) => Action::TaskDeleted(id),
                Err(e) => {
                    logger.log(format!("Delete: Failed to delete task {}: {}", id, e));
                    Action::TaskDeleteFailed {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        })
    }

    /// Persist the list title locally.
    pub fn spawn_title_save(&mut self, storage: LocalStorage, title: String) -> OperationId {
        let logger = self.logger.clone();
        self.spawn_operation("Save title".to_string(), async move {
            match storage.save_title(&title).await {
                Ok(()) => Action::TitleSaved,
                Err(e) => {
                    logger.log(format!("Title: Failed to save title: {:#}", e));
                    Action::TitleSaveFailed(e.to_string())
                }
            }
        })
    }

    /// Forget operations that have finished, returning their descriptions.
    pub fn cleanup_finished_operations(&mut self) -> Vec<String> {
        let finished: Vec<OperationId> = self
            .operations
            .iter()
            .filter(|(_, operation)| operation.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.operations.remove(&id))
            .map(|operation| {
                format!(
                    "#{} '{}' after {:?}",
                    operation.id,
                    operation.description,
                    operation.started_at.elapsed()
                )
            })
            .collect()
    }

    /// Abort everything still in flight
    pub fn cancel_all_operations(&mut self) {
        for (_, operation) in self.operations.drain() {
            operation.handle.abort();
        }
    }

    /// Get the number of operations not yet cleaned up
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all operations when the manager is dropped
        self.cancel_all_operations();
    }
}
