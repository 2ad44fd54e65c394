//! taskpad - A terminal to-do list client
//!
//! This library provides a terminal-based interface for managing a list of
//! tasks stored in a remote REST task store. It includes the store client,
//! local storage for the list title, and an interactive UI built with
//! Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Remote task store interface and implementations
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database for device-only settings
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Remote task store abstraction and its HTTP and in-memory implementations
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer for the list title
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::setting;
