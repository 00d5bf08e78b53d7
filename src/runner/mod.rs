// src/runner/mod.rs

use crate::agents::{Optimizer, Reporter, Verdict};
use crate::cost::UsageMetrics;
use crate::error::PipelineError;
use crate::llm::ChatModel;
use crate::lookups::{MapsClient, Units, WeatherClient};
use crate::prompts::PromptCatalog;

/// Independently confirmed facts about one style's plan. Each flag is false
/// when its lookup failed, or when geocoding failed upstream.
#[derive(Clone, Copy, Debug)]
pub struct Feasibility {
    pub route_ok: bool,
    pub weather_ok: bool,
    pub poi_ok: bool,
}

/// Everything produced for one prompt style. Immutable once assembled;
/// reports come back in catalog definition order.
#[derive(Clone, Debug)]
pub struct StyleReport {
    pub style: String,
    pub prompt: String,
    pub plan: String,
    pub scratchpad: String,
    pub verdict: Verdict,
    pub usage: UsageMetrics,
    pub feasibility: Feasibility,
}

/// Drives the whole evaluation: per style, render → generate → evaluate,
/// then the three feasibility lookups, sequentially, one record per style.
pub struct Pipeline {
    catalog: PromptCatalog,
    chat: Box<dyn ChatModel>,
    optimizer: Optimizer,
    reporter: Reporter,
    maps: MapsClient,
    weather: WeatherClient,
}

impl Pipeline {
    pub fn new(
        catalog: PromptCatalog,
        chat: Box<dyn ChatModel>,
        optimizer: Optimizer,
        maps: MapsClient,
        weather: WeatherClient,
    ) -> Self {
        Self {
            catalog,
            chat,
            optimizer,
            reporter: Reporter::new(),
            maps,
            weather,
        }
    }

    /// Runs every configured style against one start/end pair.
    ///
    /// The destination is geocoded once and shared across styles; a failed
    /// geocode degrades every record's weather/POI flags but does not abort
    /// the run. A generation or evaluation failure does abort the run — the
    /// first error propagates and no partial sequence is returned.
    pub fn run(
        &self,
        start: &str,
        end: &str,
        units: Units,
    ) -> Result<Vec<StyleReport>, PipelineError> {
        let destination = self.maps.geocode(end);
        if !destination.ok {
            tracing::warn!(end, "geocoding failed; weather and POI checks degrade to false");
        }

        let mut reports = Vec::with_capacity(self.catalog.len());
        for style in self.catalog.styles() {
            tracing::info!(style, "evaluating prompt style");

            let prompt = self.catalog.render(style, start, end)?;
            let plan = self.optimizer.generate(self.chat.as_ref(), &prompt)?;
            let verdict = self.reporter.evaluate(self.chat.as_ref(), &plan.text)?;

            let route_ok = self.maps.route(start, end).ok;
            // Known-bad coordinates: skip the calls entirely rather than
            // issue requests that cannot succeed.
            let (weather_ok, poi_ok) = match destination.point {
                Some(point) if destination.ok => (
                    self.weather.current(point, units).ok,
                    self.maps
                        .places(point, MapsClient::DEFAULT_RADIUS, MapsClient::DEFAULT_CATEGORY)
                        .ok,
                ),
                _ => (false, false),
            };

            reports.push(StyleReport {
                style: prompt.style.clone(),
                prompt: prompt.text,
                plan: plan.text,
                scratchpad: plan.scratchpad,
                verdict,
                usage: plan.usage,
                feasibility: Feasibility {
                    route_ok,
                    weather_ok,
                    poi_ok,
                },
            });
        }

        Ok(reports)
    }
}
