//! Utility modules for the taskpad application.

pub mod datetime;
