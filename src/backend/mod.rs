//! Remote task store abstraction.
//!
//! This module defines the interface the UI uses to list, create, update and
//! delete tasks, the canonical [`Task`] record, and the error taxonomy shared
//! by every store implementation.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::constants::NEW_TASK_DESCRIPTION;
use crate::utils::datetime;

pub mod memory;
pub mod mockapi;
pub mod wire;

/// Failures of a store round-trip.
///
/// The three variants match the ways a call can go wrong: the request never
/// completed, the server answered with a non-success status, or the body
/// could not be understood.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// A task as the rest of the application sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Arguments for creating a new task.
#[derive(Clone, Debug)]
pub struct CreateTaskArgs {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: String,
}

impl CreateTaskArgs {
    /// Arguments used by the inline creation control: fixed placeholder
    /// description, active, stamped with the current time.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: NEW_TASK_DESCRIPTION.to_string(),
            active: true,
            created_at: datetime::now_iso8601(),
        }
    }
}

/// Arguments for updating a task. Every update refreshes `updated_at`.
#[derive(Clone, Debug)]
pub struct UpdateTaskArgs {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub updated_at: String,
}

impl UpdateTaskArgs {
    pub fn new(name: impl Into<String>, description: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            active,
            updated_at: datetime::now_iso8601(),
        }
    }
}

/// Interface every task store must implement.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "mockapi", "memory").
    fn backend_type(&self) -> &str;

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError>;
    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError>;
    async fn update_task(&self, id: &str, args: UpdateTaskArgs) -> Result<Task, BackendError>;
    async fn delete_task(&self, id: &str) -> Result<(), BackendError>;
}

/// Backend handle shared between the UI and background operations.
pub type SharedBackend = Arc<dyn TaskBackend>;

/// Create a backend from the `[api]` configuration section.
///
/// `offline` forces the in-memory backend regardless of configuration.
pub fn create_backend(config: &ApiConfig, offline: bool) -> Result<SharedBackend> {
    let backend_type = if offline { "memory" } else { config.backend.as_str() };

    match backend_type {
        "mockapi" => {
            let backend = mockapi::MockApiBackend::with_timeout(&config.base_url, config.timeout())
                .map_err(|e| anyhow!("Failed to create mockapi backend: {}", e))?;
            Ok(Arc::new(backend))
        }
        "memory" => Ok(Arc::new(memory::MemoryBackend::new())),
        _ => Err(anyhow!("Unknown backend type: {}", backend_type)),
    }
}
