// src/application/mod.rs
pub mod usecase;

pub use usecase::RequestDriver;
