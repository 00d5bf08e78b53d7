// src/lib.rs

pub mod agents;
pub mod config;
pub mod cost;
pub mod error;
pub mod llm;
pub mod lookups;
pub mod prompts;
pub mod runner;
