use crate::domain::model::QuoteRecord;
use crate::utils::error::{HubError, Result};
use rand::seq::SliceRandom;

const DEFAULT_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Strive not to be a success, but rather to be of value.",
        "Albert Einstein",
    ),
    (
        "The mind is everything. What you think you become.",
        "Buddha",
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
];

/// Fixed set of quotes served by `/api/quote`. Never changes after construction.
#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<QuoteRecord>,
}

impl QuoteBook {
    pub fn new(quotes: Vec<QuoteRecord>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    /// Picks one quote uniformly at random.
    pub fn pick(&self) -> Result<QuoteRecord> {
        self.quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                tracing::error!("Quote API error: quote book is empty");
                HubError::Internal {
                    message: "Failed to fetch quote from the server.".to_string(),
                }
            })
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::new(
            DEFAULT_QUOTES
                .iter()
                .map(|(text, author)| QuoteRecord {
                    text: text.to_string(),
                    author: author.to_string(),
                })
                .collect(),
        )
    }
}
