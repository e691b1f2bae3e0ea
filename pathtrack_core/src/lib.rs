// pathtrack_core/src/lib.rs

// This file defines the public modules of the library.
pub mod config;
pub mod control;
pub mod error;
pub mod models;
pub mod planning;
pub mod prelude;
pub mod simulation;
pub mod types;
pub mod utils;
