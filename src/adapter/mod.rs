// src/adapter/mod.rs
pub mod cli;
pub mod prompt;
pub mod report;
