use crate::backend::Task;

/// Which part of the main screen receives key presses when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Creation,
    Title,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FocusList,
    FocusCreation,

    // Title
    EditTitle,
    TitleCommitted(String),
    TitleSaved,
    TitleSaveFailed(String),

    // Task list
    RefreshTasks,
    TasksLoaded(Vec<Task>),
    TasksLoadFailed(String),

    // Task operations
    CreateTask {
        name: String,
    },
    TaskCreated(Task),
    TaskCreateFailed(String),
    UpdateTask {
        id: String,
        name: String,
        description: String,
        active: bool,
    },
    ToggleTask(String),
    TaskUpdated(Task),
    TaskUpdateFailed {
        id: String,
        error: String,
    },
    DeleteTask(String),
    TaskDeleted(String),
    TaskDeleteFailed {
        id: String,
        error: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    TaskEdit(Task),
    DeleteConfirmation(Task),
    Help,
    Logs,
}
