//! Local device storage.
//!
//! A small SQLite database holding settings that never leave the device,
//! currently only the list title.

mod db;
mod title;

pub use db::LocalStorage;
