//! JSON shapes exchanged with the remote task store.
//!
//! The store is loose about the status flag: records may carry `isActive`,
//! `active`, both, or neither. Everything past this module only sees the
//! canonical [`Task::active`], resolved as `isActive`, else `active`, else `true`.

use serde::{Deserialize, Serialize};

use super::{BackendError, CreateTaskArgs, Task, UpdateTaskArgs};

/// Mock APIs hand out ids as strings, some servers use numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// A task record as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTask {
    id: RawId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<WireTask> for Task {
    fn from(wire: WireTask) -> Self {
        Task {
            id: wire.id.into_string(),
            name: wire.name.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            active: wire.is_active.or(wire.active).unwrap_or(true),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// Body of `POST /Task`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub active: bool,
    pub created_at: &'a str,
}

impl<'a> From<&'a CreateTaskArgs> for CreateTaskBody<'a> {
    fn from(args: &'a CreateTaskArgs) -> Self {
        Self {
            name: &args.name,
            description: &args.description,
            active: args.active,
            created_at: &args.created_at,
        }
    }
}

/// Body of `PUT /Task/{id}`. Both flag spellings are sent so records stay
/// readable by clients that only know one of them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub is_active: bool,
    pub active: bool,
    pub updated_at: &'a str,
}

impl<'a> From<&'a UpdateTaskArgs> for UpdateTaskBody<'a> {
    fn from(args: &'a UpdateTaskArgs) -> Self {
        Self {
            name: &args.name,
            description: &args.description,
            is_active: args.active,
            active: args.active,
            updated_at: &args.updated_at,
        }
    }
}

/// Parse a single task record.
pub fn parse_task(body: &str) -> Result<Task, BackendError> {
    serde_json::from_str::<WireTask>(body)
        .map(Task::from)
        .map_err(|e| BackendError::InvalidData(format!("failed to parse task: {e}")))
}

/// Parse the response of `GET /Task`.
pub fn parse_task_list(body: &str) -> Result<Vec<Task>, BackendError> {
    serde_json::from_str::<Vec<WireTask>>(body)
        .map(|tasks| tasks.into_iter().map(Task::from).collect())
        .map_err(|e| BackendError::InvalidData(format!("failed to parse task list: {e}")))
}
