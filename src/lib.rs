pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prayer_times;
pub mod tui;
pub mod utils;
