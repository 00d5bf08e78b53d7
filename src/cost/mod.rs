// src/cost/mod.rs

use tiktoken_rs::{get_bpe_from_model, CoreBPE};

use crate::error::PipelineError;

/// Per-1000-token rates for one model tier. Passed into the optimizer so a
/// different tier can be swapped in without touching the pipeline.
#[derive(Clone, Debug)]
pub struct PricingTable {
    pub model: String,
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl PricingTable {
    /// Reference tier rates.
    pub fn gpt4() -> Self {
        Self {
            model: "gpt-4".into(),
            input_per_1k: 0.03,
            output_per_1k: 0.06,
        }
    }

    /// Linear cost over token counts, rounded to 4 decimals.
    pub fn cost(&self, input_tokens: usize, output_tokens: usize) -> f64 {
        let raw = (input_tokens as f64 / 1000.0) * self.input_per_1k
            + (output_tokens as f64 / 1000.0) * self.output_per_1k;
        round_to(raw, 4)
    }
}

/// Deterministic tokenizer for the target model family.
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    pub fn for_model(model: &str) -> Result<Self, PipelineError> {
        let bpe = get_bpe_from_model(model)
            .map_err(|err| PipelineError::InvalidConfig(format!("no tokenizer for {model}: {err}")))?;
        Ok(Self { bpe })
    }

    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Token, cost, and latency figures for one generated plan.
#[derive(Clone, Debug)]
pub struct UsageMetrics {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub estimated_cost: f64,
    pub latency_secs: f64,
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
