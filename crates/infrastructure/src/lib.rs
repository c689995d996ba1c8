//! Guess and Win infrastructure: SQLite-backed document store
pub mod database;
pub mod repositories;
