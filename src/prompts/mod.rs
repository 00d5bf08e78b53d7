// src/prompts/mod.rs

use crate::error::PipelineError;

/// A prompt rendered for one style. The text is final once built; the
/// optimizer consumes it as-is.
#[derive(Clone, Debug)]
pub struct RenderedPrompt {
    pub style: String,
    pub text: String,
}

/// Ordered style → template table. Iteration order is definition order and
/// is observable in the run's output, so the catalog is a Vec, not a map.
#[derive(Clone, Debug)]
pub struct PromptCatalog {
    entries: Vec<(String, String)>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The shipped style table. Templates carry `{start}` and `{end}`
    /// placeholders.
    pub fn standard() -> Self {
        Self::new()
            .with_style(
                "basic",
                "Plan a road trip from {start} to {end}. List the main stops and a rough schedule.",
            )
            .with_style(
                "detailed",
                "You are a travel assistant. Create a detailed driving itinerary from {start} to {end}, \
                 including route overview, expected weather, and notable points of interest along the way.",
            )
            .with_style(
                "step_by_step",
                "Think step by step. First outline the driving route from {start} to {end}, then check \
                 what the weather implies for the trip, then pick attractions near {end}, and finally \
                 combine everything into a day-by-day plan.",
            )
    }

    pub fn with_style(mut self, name: &str, template: &str) -> Self {
        self.entries.push((name.into(), template.into()));
        self
    }

    /// Style names in definition order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitutes `{start}` / `{end}` into the named template. Pure: same
    /// inputs always yield the same text.
    pub fn render(
        &self,
        style: &str,
        start: &str,
        end: &str,
    ) -> Result<RenderedPrompt, PipelineError> {
        let template = self
            .entries
            .iter()
            .find(|(name, _)| name == style)
            .map(|(_, template)| template.as_str())
            .ok_or_else(|| PipelineError::UnknownStyle(style.to_string()))?;

        Ok(RenderedPrompt {
            style: style.to_string(),
            text: template.replace("{start}", start).replace("{end}", end),
        })
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let catalog = PromptCatalog::standard();
        let a = catalog.render("basic", "San Francisco, CA", "Los Angeles, CA").unwrap();
        let b = catalog.render("basic", "San Francisco, CA", "Los Angeles, CA").unwrap();
        assert_eq!(a.text, b.text);
        assert_eq!(a.style, "basic");
    }

    #[test]
    fn render_substitutes_both_placeholders() {
        let catalog = PromptCatalog::standard();
        for style in ["basic", "detailed", "step_by_step"] {
            let prompt = catalog.render(style, "Oslo", "Bergen").unwrap();
            assert!(prompt.text.contains("Oslo"), "{style} missing start");
            assert!(prompt.text.contains("Bergen"), "{style} missing end");
            assert!(!prompt.text.contains("{start}"));
            assert!(!prompt.text.contains("{end}"));
        }
    }

    #[test]
    fn unknown_style_is_an_error() {
        let catalog = PromptCatalog::standard();
        let err = catalog.render("haiku", "A", "B").unwrap_err();
        assert!(matches!(
            err,
            crate::error::PipelineError::UnknownStyle(ref s) if s == "haiku"
        ));
    }

    #[test]
    fn catalog_preserves_definition_order() {
        let catalog = PromptCatalog::new()
            .with_style("second_first", "{start} {end}")
            .with_style("alpha", "{start} {end}");
        let styles: Vec<_> = catalog.styles().collect();
        assert_eq!(styles, vec!["second_first", "alpha"]);
    }
}
