//! Constants used throughout the application
//!
//! This module centralizes user-facing text, storage keys and default values.

// Title widget
pub const DEFAULT_TITLE: &str = "Sem nome";
pub const TITLE_STORAGE_KEY: &str = "todo_list_title";

// Creation control
pub const ADD_TASK_LABEL: &str = "Adicionar tarefa";
pub const ADD_TASK_BUTTON: &str = "Add";
pub const NEW_TASK_DESCRIPTION: &str = "Nova tarefa criada pelo app";

// Toast messages
pub const SUCCESS_TASK_CREATED: &str = "Tarefa criada";
pub const SUCCESS_TASK_UPDATED: &str = "Tarefa atualizada";
pub const SUCCESS_TASK_DELETED: &str = "Tarefa deletada";
pub const ERROR_TASK_CREATE_FAILED: &str = "Erro ao criar tarefa";
pub const ERROR_TASK_UPDATE_FAILED: &str = "Erro ao atualizar tarefa";
pub const ERROR_TASK_DELETE_FAILED: &str = "Erro ao deletar tarefa";
pub const ERROR_TITLE_SAVE_FAILED: &str = "Erro ao salvar título";

// Dialogs
pub const DIALOG_TITLE_DELETE: &str = "Confirmar Exclusão";
pub const DIALOG_TITLE_EDIT: &str = "Editar Tarefa";
pub const DIALOG_TITLE_HELP: &str = "Ajuda";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Esc, G ou q para fechar";
pub const LABEL_NAME: &str = "Nome";
pub const LABEL_DESCRIPTION: &str = "Descrição";
pub const LABEL_ACTIVE: &str = "Ativa";
pub const LABEL_CREATED_AT: &str = "Criada em";
pub const BUTTON_CANCEL: &str = "Cancelar";
pub const BUTTON_SAVE: &str = "Salvar";
pub const BUTTON_DELETE: &str = "Deletar";
pub const SAVING: &str = "Salvando...";
pub const DELETING: &str = "Deletando...";

// Task list
pub const LIST_TITLE: &str = "Tarefas";
pub const LOADING_TASKS: &str = "⟳ Carregando tarefas...";
pub const EMPTY_LIST: &str = "Nenhuma tarefa. Pressione 'a' para adicionar.";
pub const INACTIVE_MARKER: &str = "inativa";

// Misc
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_NAME: &str = "taskpad";

// Defaults
/// Default base URL of the remote task store
pub const DEFAULT_API_BASE_URL: &str = "https://690531d5ee3d0d14c1321cc7.mockapi.io/api";
/// How long a toast stays fully visible
pub const TOAST_DWELL_MS: u64 = 1400;
/// Duration of the toast slide-in and slide-out
pub const TOAST_TRANSITION_MS: u64 = 250;
pub const TOAST_DWELL_MIN_MS: u64 = 100;
pub const TOAST_DWELL_MAX_MS: u64 = 10_000;
/// Upper bound for `api.timeout_secs`
pub const API_TIMEOUT_MAX_SECS: u64 = 300;
/// In-memory log entries kept for the logs dialog
pub const MAX_LOG_ENTRIES: usize = 1000;
/// Event loop tick, also the toast animation frame interval
pub const TICK_RATE_MS: u64 = 50;
