//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod task_creation_component;
pub mod task_list_component;
pub mod title_component;
pub mod toast;

// Component exports
pub use dialog_component::{ActiveDialog, DialogComponent};
pub use task_creation_component::TaskCreationComponent;
pub use task_list_component::TaskListComponent;
pub use title_component::TitleComponent;
pub use toast::{Toast, ToastPhase};
