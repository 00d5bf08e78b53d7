// src/agents/optimizer.rs

use std::time::Instant;

use crate::cost::{round_to, PricingTable, TokenCounter, UsageMetrics};
use crate::error::PipelineError;
use crate::llm::ChatModel;
use crate::prompts::RenderedPrompt;

/// One generated travel plan plus its diagnostics.
#[derive(Clone, Debug)]
pub struct GeneratedPlan {
    pub text: String,
    /// Fixed-format echo of the prompt that was sent. Observability only;
    /// never feeds back into scoring.
    pub scratchpad: String,
    pub usage: UsageMetrics,
}

/// Sends a rendered prompt to the model and accounts for what it cost.
pub struct Optimizer {
    pricing: PricingTable,
    counter: TokenCounter,
}

impl Optimizer {
    pub fn new(pricing: PricingTable, counter: TokenCounter) -> Self {
        Self { pricing, counter }
    }

    /// One outbound model call, timed across the call only. A failed or
    /// empty reply aborts this style's iteration; there is no retry here.
    pub fn generate(
        &self,
        chat: &dyn ChatModel,
        prompt: &RenderedPrompt,
    ) -> Result<GeneratedPlan, PipelineError> {
        let started = Instant::now();
        let text = chat
            .complete(&prompt.text)
            .map_err(PipelineError::Generation)?;
        let latency_secs = round_to(started.elapsed().as_secs_f64(), 3);

        let input_tokens = self.counter.count(&prompt.text);
        let output_tokens = self.counter.count(&text);
        let estimated_cost = self.pricing.cost(input_tokens, output_tokens);

        tracing::debug!(
            style = %prompt.style,
            input_tokens,
            output_tokens,
            estimated_cost,
            latency_secs,
            "plan generated"
        );

        Ok(GeneratedPlan {
            scratchpad: format!("[optimizer] received prompt: {}", prompt.text),
            text,
            usage: UsageMetrics {
                input_tokens,
                output_tokens,
                estimated_cost,
                latency_secs,
            },
        })
    }
}
