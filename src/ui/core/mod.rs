//! Core UI functionality for the taskpad application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the [`Action`] vocabulary components use to talk to the root, the base
//! [`Component`] trait, terminal event polling, and the [`TaskManager`] that
//! runs store round-trips in the background.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn key presses
//!    into actions
//! 2. **Actions** flow through every component's `update` and then into the
//!    root, which owns the shared task list
//! 3. **Background operations** report their outcome as actions over a channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{OperationId, TaskManager};
