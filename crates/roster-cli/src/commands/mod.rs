//! CLI command handlers

pub mod config;
pub mod employee;
pub mod status;
