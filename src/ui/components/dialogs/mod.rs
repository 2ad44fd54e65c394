//! Dialog components module

pub mod common;
mod delete_confirmation_dialog;
pub mod system_dialogs;
mod task_edit_sidebar;

pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use task_edit_sidebar::{EditField, TaskEditSidebar};
