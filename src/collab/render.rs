//! Card artwork requests.
//!
//! A game can ask an image service for one picture per card. Rendering is
//! decoration only: a failed request is logged and play goes on.

use tracing::{info, warn};

use super::source::CatalogueSource;
use crate::cards::Catalogue;
use crate::core::GameError;

/// Produces artwork for a named card.
pub trait Renderer {
    fn render(&mut self, name: &str, description: &str) -> Result<(), GameError>;
}

/// Logs each request instead of drawing anything.
#[derive(Clone, Debug, Default)]
pub struct LogRenderer {
    requests: usize,
}

impl LogRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests logged so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, name: &str, description: &str) -> Result<(), GameError> {
        self.requests += 1;
        info!(card = name, description, "render requested");
        Ok(())
    }
}

/// Request artwork for every card in `catalogue`.
///
/// Descriptions come from `source` when it has one, otherwise the card's
/// category is used. Returns how many cards rendered successfully.
pub fn render_catalogue<S, R>(catalogue: &Catalogue, source: &mut S, renderer: &mut R) -> usize
where
    S: CatalogueSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut rendered = 0;
    for card in catalogue.cards() {
        let description = match source.describe(card.category, &card.name) {
            Ok(Some(text)) => text,
            Ok(None) => card.category.to_string(),
            Err(e) => {
                warn!(card = %card.name, error = %e, "no description, using category");
                card.category.to_string()
            }
        };
        match renderer.render(&card.name, &description) {
            Ok(()) => rendered += 1,
            Err(e) => warn!(card = %card.name, error = %e, "render failed"),
        }
    }
    rendered
}
