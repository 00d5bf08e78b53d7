// src/agents/reporter.rs

use regex::Regex;

use crate::error::PipelineError;
use crate::llm::ChatModel;

/// Whether the score came out of the model's reply or from the neutral
/// fallback applied when the reply did not match the mandated shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreOrigin {
    Parsed,
    Fallback,
}

/// A scored evaluation. The raw reply is kept alongside the extracted
/// score so a fallback verdict still shows what the model actually said.
#[derive(Clone, Debug)]
pub struct Verdict {
    pub score: u32,
    pub origin: ScoreOrigin,
    pub raw: String,
}

/// Asks the model to score a plan against the fixed rubric and extracts
/// the 1-5 score from the reply.
pub struct Reporter {
    score_pattern: Regex,
}

/// Applied when the reply carries no parseable score.
pub const NEUTRAL_SCORE: u32 = 3;

impl Reporter {
    pub fn new() -> Self {
        Self {
            score_pattern: Regex::new(r"Score:\s*(\d+)").unwrap(),
        }
    }

    /// One outbound model call. Only a failed call is an error; an
    /// ill-shaped reply degrades to the neutral fallback verdict.
    pub fn evaluate(
        &self,
        chat: &dyn ChatModel,
        plan_text: &str,
    ) -> Result<Verdict, PipelineError> {
        let prompt = rubric_prompt(plan_text);
        let raw = chat.complete(&prompt).map_err(PipelineError::Evaluation)?;
        Ok(self.parse_verdict(raw))
    }

    /// First integer after the literal "Score:" token. No clamping: an
    /// out-of-range score passes through as the model gave it.
    fn parse_verdict(&self, raw: String) -> Verdict {
        let parsed = self
            .score_pattern
            .captures(&raw)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        match parsed {
            Some(score) => Verdict {
                score,
                origin: ScoreOrigin::Parsed,
                raw,
            },
            None => {
                tracing::debug!("no score found in evaluation reply, using neutral fallback");
                Verdict {
                    score: NEUTRAL_SCORE,
                    origin: ScoreOrigin::Fallback,
                    raw,
                }
            }
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

fn rubric_prompt(plan_text: &str) -> String {
    format!(
        r#"Evaluate the following travel plan response.

Response:
{plan_text}

Criteria:
- Completeness
- Clarity
- Relevance
- Weather and POI considerations

Rate from 1 to 5 and explain. Format: Score: <1-5>. Reason: <...>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;

    struct CannedChat(&'static str);

    impl ChatModel for CannedChat {
        fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingChat;

    impl ChatModel for FailingChat {
        fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
            Err(ChatError::Transport("boom".into()))
        }
    }

    #[test]
    fn well_formed_reply_parses_score() {
        let verdict = Reporter::new()
            .evaluate(&CannedChat("Score: 4. Reason: clear and complete."), "plan")
            .unwrap();
        assert_eq!(verdict.score, 4);
        assert_eq!(verdict.origin, ScoreOrigin::Parsed);
        assert!(verdict.raw.contains("Reason"));
    }

    #[test]
    fn missing_score_falls_back_to_neutral() {
        let verdict = Reporter::new()
            .evaluate(&CannedChat("I would rather not rate this."), "plan")
            .unwrap();
        assert_eq!(verdict.score, NEUTRAL_SCORE);
        assert_eq!(verdict.origin, ScoreOrigin::Fallback);
        assert_eq!(verdict.raw, "I would rather not rate this.");
    }

    #[test]
    fn out_of_range_score_passes_unclamped() {
        let verdict = Reporter::new()
            .evaluate(&CannedChat("Score: 7. Reason: overenthusiastic."), "plan")
            .unwrap();
        assert_eq!(verdict.score, 7);
        assert_eq!(verdict.origin, ScoreOrigin::Parsed);
    }

    #[test]
    fn call_failure_is_an_evaluation_error() {
        let err = Reporter::new().evaluate(&FailingChat, "plan").unwrap_err();
        assert!(matches!(err, PipelineError::Evaluation(_)));
    }

    #[test]
    fn rubric_embeds_the_plan() {
        let prompt = rubric_prompt("Take the coast road.");
        assert!(prompt.contains("Take the coast road."));
        assert!(prompt.contains("Score: <1-5>"));
    }
}
