//! Two-step deck generation pipeline.
//!
//! `research` → `write_copy` → `assemble`. The copy step takes the typed
//! [`Research`] produced by the first step, so the ordering dependency is
//! carried by the types rather than by call order alone. Any upstream error
//! aborts the whole pipeline; no partial deck is ever produced.

use std::sync::Arc;

use pitchdeck_types::deck::{Deck, DECK_LEN};
use pitchdeck_types::idea::Idea;
use pitchdeck_types::llm::{CompletionRequest, LlmError};

use crate::llm::box_provider::BoxLlmProvider;
use crate::prompt::{copywriter_prompt, research_prompt};
use crate::usage::UsageTracker;

/// Slide text used when the upstream answer carries no generated text.
pub const MISSING_CONTENT: &str = "Error";

/// Closing slide text.
pub const CALL_TO_ACTION: &str = "Contact us to invest or join the team!";

/// Output of the research step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Research(String);

impl Research {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Output of the copywriting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchCopy(String);

impl PitchCopy {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A finished deck plus the tokens spent producing it.
#[derive(Debug, Clone)]
pub struct GeneratedDeck {
    pub deck: Deck,
    pub tokens_used: u64,
}

/// Runs the research and copywriting calls against one provider.
pub struct DeckGenerator {
    provider: Arc<BoxLlmProvider>,
    model: String,
    usage: Arc<UsageTracker>,
}

impl DeckGenerator {
    pub fn new(provider: Arc<BoxLlmProvider>, model: impl Into<String>, usage: Arc<UsageTracker>) -> Self {
        Self {
            provider,
            model: model.into(),
            usage,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run the full pipeline for a validated idea.
    #[tracing::instrument(name = "generate_deck", skip_all, fields(startup = %idea.name, model = %self.model))]
    pub async fn generate(&self, idea: &Idea) -> Result<GeneratedDeck, LlmError> {
        let summary = idea.summary();

        let (research, research_tokens) = self.research(&summary).await?;
        let (copy, copy_tokens) = self.write_copy(&summary, &research).await?;

        let deck = assemble(idea, &research, &copy);
        tracing::info!(slides = deck.slides.len(), "deck generated");

        Ok(GeneratedDeck {
            deck,
            tokens_used: research_tokens.saturating_add(copy_tokens),
        })
    }

    /// Step 1: market research for the idea summary.
    #[tracing::instrument(name = "research", skip_all)]
    pub async fn research(&self, summary: &str) -> Result<(Research, u64), LlmError> {
        let (text, tokens) = self.complete_text(research_prompt(summary)).await?;
        Ok((Research(text), tokens))
    }

    /// Step 2: pitch copy seeded with the research text.
    #[tracing::instrument(name = "write_copy", skip_all)]
    pub async fn write_copy(&self, summary: &str, research: &Research) -> Result<(PitchCopy, u64), LlmError> {
        let (text, tokens) = self
            .complete_text(copywriter_prompt(research.as_str(), summary))
            .await?;
        Ok((PitchCopy(text), tokens))
    }

    /// Send one prompt and extract its text, substituting [`MISSING_CONTENT`]
    /// when the answer has none. Reported token usage is recorded.
    async fn complete_text(&self, prompt: String) -> Result<(String, u64), LlmError> {
        let request = CompletionRequest::single_prompt(self.model.clone(), prompt);
        let response = self.provider.complete(&request).await?;

        let tokens = response.usage.as_ref().map_or(0, |u| u.total_tokens);
        if response.usage.is_some() {
            self.usage.record(tokens);
        }

        let text = match response.content.filter(|c| !c.is_empty()) {
            Some(text) => text,
            None => {
                tracing::warn!(provider = self.provider.name(), "completion carried no text");
                MISSING_CONTENT.to_string()
            }
        };
        Ok((text, tokens))
    }
}

/// Lay out the eight slides in their fixed order.
pub fn assemble(idea: &Idea, research: &Research, copy: &PitchCopy) -> Deck {
    let contents: [String; DECK_LEN] = [
        format!("{} – {}", idea.name, idea.oneliner),
        idea.problem.clone(),
        idea.features.clone(),
        research.as_str().to_string(),
        copy.as_str().to_string(),
        idea.business_model.clone(),
        idea.competitors_or_na().to_string(),
        CALL_TO_ACTION.to_string(),
    ];
    Deck::from_contents(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use pitchdeck_types::deck::SlideTitle;
    use pitchdeck_types::idea::IdeaFields;
    use pitchdeck_types::llm::{CompletionResponse, Usage};

    use crate::llm::provider::LlmProvider;

    // --- Mock provider ---

    enum Scripted {
        Text(&'static str, u64),
        NoContent,
        Fail,
    }

    /// Replays scripted answers in order and records every prompt it sees.
    struct ScriptedProvider {
        script: Mutex<VecDeque<Scripted>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Scripted>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    script: Mutex::new(script.into()),
                    prompts: Arc::clone(&prompts),
                },
                prompts,
            )
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push(request.prompt.clone());
            let next = self.script.lock().unwrap().pop_front();
            match next {
                Some(Scripted::Text(text, tokens)) => Ok(CompletionResponse {
                    content: Some(text.to_string()),
                    usage: Some(Usage {
                        total_tokens: tokens,
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                Some(Scripted::NoContent) => Ok(CompletionResponse::default()),
                Some(Scripted::Fail) | None => Err(LlmError::Provider {
                    message: "HTTP 500".to_string(),
                }),
            }
        }
    }

    fn idea(competitors: Option<&str>) -> Idea {
        IdeaFields {
            name: Some("Acme".into()),
            oneliner: Some("Rockets for everyone".into()),
            problem: Some("Rockets are expensive".into()),
            features: Some("Reusable boosters".into()),
            business_model: Some("Subscription".into()),
            competitors: competitors.map(str::to_string),
        }
        .validate()
        .unwrap()
    }

    fn generator(script: Vec<Scripted>) -> (DeckGenerator, Arc<Mutex<Vec<String>>>, Arc<UsageTracker>) {
        let (provider, prompts) = ScriptedProvider::new(script);
        let usage = Arc::new(UsageTracker::new(0.06));
        let generator = DeckGenerator::new(
            Arc::new(BoxLlmProvider::new(provider)),
            "gpt-4",
            Arc::clone(&usage),
        );
        (generator, prompts, usage)
    }

    #[tokio::test]
    async fn generates_eight_slides_in_fixed_order() {
        let (generator, _, _) = generator(vec![
            Scripted::Text("market is big", 10),
            Scripted::Text("catchy copy", 20),
        ]);

        let generated = generator.generate(&idea(Some("SpaceCo"))).await.unwrap();
        let titles: Vec<SlideTitle> = generated.deck.slides.iter().map(|s| s.title).collect();
        assert_eq!(titles, SlideTitle::ORDER.to_vec());

        let deck = &generated.deck;
        assert_eq!(deck.content(SlideTitle::Cover), Some("Acme – Rockets for everyone"));
        assert_eq!(deck.content(SlideTitle::Problem), Some("Rockets are expensive"));
        assert_eq!(deck.content(SlideTitle::Solution), Some("Reusable boosters"));
        assert_eq!(deck.content(SlideTitle::MarketResearch), Some("market is big"));
        assert_eq!(deck.content(SlideTitle::StoryAndUvp), Some("catchy copy"));
        assert_eq!(deck.content(SlideTitle::BusinessModel), Some("Subscription"));
        assert_eq!(deck.content(SlideTitle::Competitors), Some("SpaceCo"));
        assert_eq!(deck.content(SlideTitle::CallToAction), Some(CALL_TO_ACTION));
    }

    #[tokio::test]
    async fn second_prompt_is_seeded_with_research() {
        let (generator, prompts, _) = generator(vec![
            Scripted::Text("RESEARCH-OUTPUT", 1),
            Scripted::Text("copy", 1),
        ]);
        let idea = idea(None);

        generator.generate(&idea).await.unwrap();

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], research_prompt(&idea.summary()));
        assert_eq!(prompts[1], copywriter_prompt("RESEARCH-OUTPUT", &idea.summary()));
    }

    #[tokio::test]
    async fn missing_competitors_become_na() {
        let (generator, _, _) = generator(vec![Scripted::Text("r", 1), Scripted::Text("c", 1)]);
        let generated = generator.generate(&idea(None)).await.unwrap();
        assert_eq!(generated.deck.content(SlideTitle::Competitors), Some("N/A"));
    }

    #[tokio::test]
    async fn missing_choice_structure_yields_error_marker() {
        let (generator, prompts, _) = generator(vec![Scripted::NoContent, Scripted::NoContent]);
        let generated = generator.generate(&idea(None)).await.unwrap();

        assert_eq!(generated.deck.content(SlideTitle::MarketResearch), Some("Error"));
        assert_eq!(generated.deck.content(SlideTitle::StoryAndUvp), Some("Error"));
        // The copywriter still runs, seeded with the marker.
        assert!(prompts.lock().unwrap()[1].contains("Research: Error\n"));
    }

    #[tokio::test]
    async fn empty_text_yields_error_marker() {
        let (generator, _, _) = generator(vec![Scripted::Text("", 1), Scripted::Text("copy", 1)]);
        let generated = generator.generate(&idea(None)).await.unwrap();
        assert_eq!(generated.deck.content(SlideTitle::MarketResearch), Some("Error"));
        assert_eq!(generated.deck.content(SlideTitle::StoryAndUvp), Some("copy"));
    }

    #[tokio::test]
    async fn research_failure_aborts_before_copy() {
        let (generator, prompts, _) = generator(vec![Scripted::Fail, Scripted::Text("copy", 1)]);
        let result = generator.generate(&idea(None)).await;

        assert!(matches!(result, Err(LlmError::Provider { .. })));
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn copy_failure_returns_no_deck() {
        let (generator, prompts, _) = generator(vec![Scripted::Text("research", 1), Scripted::Fail]);
        let result = generator.generate(&idea(None)).await;

        assert!(result.is_err());
        assert_eq!(prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn token_usage_is_recorded() {
        let (generator, _, usage) = generator(vec![
            Scripted::Text("r", 120),
            Scripted::Text("c", 380),
        ]);
        let generated = generator.generate(&idea(None)).await.unwrap();

        assert_eq!(generated.tokens_used, 500);
        assert_eq!(usage.total(), 500);
    }

    #[tokio::test]
    async fn huge_token_counts_saturate() {
        let (generator, _, usage) = generator(vec![
            Scripted::Text("r", u64::MAX),
            Scripted::Text("c", 10),
        ]);
        let generated = generator.generate(&idea(None)).await.unwrap();

        assert_eq!(generated.tokens_used, u64::MAX);
        assert_eq!(usage.total(), u64::MAX);
        assert_eq!(generated.deck.slides.len(), DECK_LEN);
    }

    #[test]
    fn assemble_is_independent_of_provider() {
        let deck = assemble(
            &idea(Some("Rivals")),
            &Research("R".into()),
            &PitchCopy("C".into()),
        );
        assert_eq!(deck.slides.len(), DECK_LEN);
        assert_eq!(deck.content(SlideTitle::MarketResearch), Some("R"));
        assert_eq!(deck.content(SlideTitle::StoryAndUvp), Some("C"));
        assert_eq!(deck.content(SlideTitle::Competitors), Some("Rivals"));
    }
}
