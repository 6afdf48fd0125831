//! CLI command handlers

pub mod config;
pub mod control;
pub mod precheck;
pub mod report;
