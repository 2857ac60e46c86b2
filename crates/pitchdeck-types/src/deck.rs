//! Slide deck types.
//!
//! A [`Deck`] is always exactly eight slides in [`SlideTitle::ORDER`].
//! Decks have no identity beyond their position until stored, at which
//! point they receive a [`DeckId`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of slides in every deck.
pub const DECK_LEN: usize = 8;

/// The closed set of slide labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideTitle {
    #[serde(rename = "Cover Slide")]
    Cover,
    #[serde(rename = "Problem")]
    Problem,
    #[serde(rename = "Solution")]
    Solution,
    #[serde(rename = "Market Research")]
    MarketResearch,
    #[serde(rename = "Story & UVP")]
    StoryAndUvp,
    #[serde(rename = "Business Model")]
    BusinessModel,
    #[serde(rename = "Competitors")]
    Competitors,
    #[serde(rename = "Call to Action")]
    CallToAction,
}

impl SlideTitle {
    /// Deck order.
    pub const ORDER: [SlideTitle; DECK_LEN] = [
        SlideTitle::Cover,
        SlideTitle::Problem,
        SlideTitle::Solution,
        SlideTitle::MarketResearch,
        SlideTitle::StoryAndUvp,
        SlideTitle::BusinessModel,
        SlideTitle::Competitors,
        SlideTitle::CallToAction,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            SlideTitle::Cover => "Cover Slide",
            SlideTitle::Problem => "Problem",
            SlideTitle::Solution => "Solution",
            SlideTitle::MarketResearch => "Market Research",
            SlideTitle::StoryAndUvp => "Story & UVP",
            SlideTitle::BusinessModel => "Business Model",
            SlideTitle::Competitors => "Competitors",
            SlideTitle::CallToAction => "Call to Action",
        }
    }
}

impl fmt::Display for SlideTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single titled slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: SlideTitle,
    pub content: String,
}

/// An ordered, fixed-length slide deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from contents given in [`SlideTitle::ORDER`].
    pub fn from_contents(contents: [String; DECK_LEN]) -> Self {
        let slides = SlideTitle::ORDER
            .into_iter()
            .zip(contents)
            .map(|(title, content)| Slide { title, content })
            .collect();
        Self { slides }
    }

    /// Content of the slide with the given title.
    pub fn content(&self, title: SlideTitle) -> Option<&str> {
        self.slides
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.content.as_str())
    }
}

/// Server-issued deck identifier (UUID v7, time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(pub Uuid);

impl DeckId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for DeckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for DeckId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(DeckId)
    }
}

/// A deck held by the deck store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDeck {
    pub id: DeckId,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate token usage reported to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub total_tokens: u64,
    pub estimated_cost: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_has_eight_distinct_titles() {
        let mut labels: Vec<&str> = SlideTitle::ORDER.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), DECK_LEN);
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), DECK_LEN);
    }

    #[test]
    fn title_serializes_as_label() {
        for title in SlideTitle::ORDER {
            let json = serde_json::to_string(&title).unwrap();
            assert_eq!(json, format!("\"{}\"", title.label()));
        }
    }

    #[test]
    fn from_contents_pairs_titles_in_order() {
        let contents: [String; DECK_LEN] = std::array::from_fn(|i| format!("c{i}"));
        let deck = Deck::from_contents(contents);
        assert_eq!(deck.slides.len(), DECK_LEN);
        assert_eq!(deck.slides[0].title, SlideTitle::Cover);
        assert_eq!(deck.slides[7].title, SlideTitle::CallToAction);
        assert_eq!(deck.content(SlideTitle::MarketResearch), Some("c3"));
    }

    #[test]
    fn slide_json_shape() {
        let slide = Slide {
            title: SlideTitle::StoryAndUvp,
            content: "copy".into(),
        };
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Story & UVP", "content": "copy"}));
    }

    #[test]
    fn deck_id_parses_its_display_form() {
        let id = DeckId::new();
        let parsed: DeckId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<DeckId>().is_err());
    }

    #[test]
    fn usage_summary_is_camel_case() {
        let usage = UsageSummary {
            total_tokens: 42,
            estimated_cost: "$0.00".into(),
        };
        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["totalTokens"], 42);
        assert_eq!(json["estimatedCost"], "$0.00");
    }
}
