// src/agents/mod.rs

pub mod optimizer;
pub mod reporter;

pub use optimizer::{GeneratedPlan, Optimizer};
pub use reporter::{Reporter, ScoreOrigin, Verdict};
