pub mod catalog;
pub mod config;
pub mod conversion;
pub mod cost;
pub mod error;
pub mod formatter;
pub mod models;
pub mod session;
pub mod signal;
pub mod volume;
