//! Where card names come from.
//!
//! The engine only needs three lists of names. A [`CatalogueSource`] supplies
//! them: a fixed list, or a text generator asked for comma-separated names.
//! Generators are unreliable, so [`RetryingSource`] re-asks a bounded number
//! of times and rejects malformed answers.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::cards::{Catalogue, Category};
use crate::core::GameError;

/// Supplies card names per category.
pub trait CatalogueSource {
    /// `n` names for `category`.
    fn names(&mut self, category: Category, n: usize) -> Result<Vec<String>, GameError>;

    fn characters(&mut self, n: usize) -> Result<Vec<String>, GameError> {
        self.names(Category::Character, n)
    }

    fn weapons(&mut self, n: usize) -> Result<Vec<String>, GameError> {
        self.names(Category::Weapon, n)
    }

    fn rooms(&mut self, n: usize) -> Result<Vec<String>, GameError> {
        self.names(Category::Room, n)
    }

    /// Short flavor text for a card, used by renderers. Optional.
    fn describe(&mut self, category: Category, name: &str) -> Result<Option<String>, GameError> {
        let _ = (category, name);
        Ok(None)
    }
}

impl<S: CatalogueSource + ?Sized> CatalogueSource for &mut S {
    fn names(&mut self, category: Category, n: usize) -> Result<Vec<String>, GameError> {
        (**self).names(category, n)
    }

    fn describe(&mut self, category: Category, name: &str) -> Result<Option<String>, GameError> {
        (**self).describe(category, name)
    }
}

/// Names from a catalogue held in memory.
#[derive(Clone, Debug, Default)]
pub struct FixedCatalogue {
    catalogue: Catalogue,
}

impl FixedCatalogue {
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }
}

impl CatalogueSource for FixedCatalogue {
    /// The first `n` names; fails if the catalogue has fewer.
    fn names(&mut self, category: Category, n: usize) -> Result<Vec<String>, GameError> {
        let names = self.catalogue.names(category);
        if names.len() < n {
            return Err(GameError::Collaborator(format!(
                "only {} {category} names available, {n} requested",
                names.len()
            )));
        }
        Ok(names[..n].to_vec())
    }

    /// A plain caption for cards in the catalogue.
    fn describe(&mut self, category: Category, name: &str) -> Result<Option<String>, GameError> {
        Ok(self
            .catalogue
            .contains(category, name)
            .then(|| format!("{name}, the {category} card of a murder mystery board game")))
    }
}

/// A free-text completion service.
pub trait TextGenerator {
    fn complete(&mut self, prompt: &str) -> Result<String, GameError>;
}

impl<F> TextGenerator for F
where
    F: FnMut(&str) -> Result<String, GameError>,
{
    fn complete(&mut self, prompt: &str) -> Result<String, GameError> {
        self(prompt)
    }
}

/// Asks a [`TextGenerator`] for comma-separated names.
///
/// The prompt steers away from the classic names so a generated game does
/// not just reproduce the built-in one.
#[derive(Clone, Debug)]
pub struct GeneratedCatalogue<G> {
    generator: G,
}

impl<G: TextGenerator> GeneratedCatalogue<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

/// Prompt asking for `n` names of `category`, none of them in `avoid`.
#[must_use]
pub fn list_prompt(category: Category, n: usize, avoid: &[String]) -> String {
    let noun = category.heading().to_lowercase();
    let mut prompt = format!("List {n} random {noun} suitable for a clue-like game");
    if !avoid.is_empty() {
        prompt.push_str(", but not ");
        prompt.push_str(&avoid.join(", "));
    }
    prompt.push_str(", separated by commas. Give me only the comma separated list, nothing else.");
    prompt
}

impl<G: TextGenerator> CatalogueSource for GeneratedCatalogue<G> {
    fn names(&mut self, category: Category, n: usize) -> Result<Vec<String>, GameError> {
        let classic = Catalogue::default();
        let prompt = list_prompt(category, n, classic.names(category));
        let reply = self.generator.complete(&prompt)?;
        Ok(parse_name_list(&reply))
    }

    fn describe(&mut self, category: Category, name: &str) -> Result<Option<String>, GameError> {
        let prompt = format!("Describe the {category} \"{name}\" from a clue-like game in one sentence.");
        let reply = self.generator.complete(&prompt)?;
        let reply = reply.trim();
        Ok((!reply.is_empty()).then(|| reply.to_string()))
    }
}

/// Split generator output on commas.
///
/// Surrounding whitespace, quotes and list brackets are stripped from each
/// item; empty items are dropped.
///
/// ```
/// use rust_clue::collab::parse_name_list;
///
/// let names = parse_name_list(r#"["Attic", "Wine Cellar" , 'Greenhouse']"#);
/// assert_eq!(names, vec!["Attic", "Wine Cellar", "Greenhouse"]);
/// ```
#[must_use]
pub fn parse_name_list(text: &str) -> Vec<String> {
    const TRIM: &[char] = &['[', ']', '"', '\'', '`', '.'];
    text.split([',', '\n'])
        .map(|item| item.trim().trim_matches(TRIM).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Retries a source until it returns a well-formed list.
///
/// A list is well-formed when it has exactly `n` non-blank names with no
/// duplicates (case-insensitive). Errors and malformed lists both count as
/// failed attempts.
#[derive(Clone, Debug)]
pub struct RetryingSource<S> {
    inner: S,
    attempts: u32,
}

impl<S: CatalogueSource> RetryingSource<S> {
    /// Wrap `inner`, trying each request up to `attempts` times (at least once).
    #[must_use]
    pub fn new(inner: S, attempts: u32) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

fn well_formed(names: &[String], n: usize) -> bool {
    if names.len() != n || names.iter().any(|name| name.trim().is_empty()) {
        return false;
    }
    let mut seen = FxHashSet::default();
    names.iter().all(|name| seen.insert(name.to_lowercase()))
}

impl<S: CatalogueSource> CatalogueSource for RetryingSource<S> {
    fn names(&mut self, category: Category, n: usize) -> Result<Vec<String>, GameError> {
        for attempt in 1..=self.attempts {
            match self.inner.names(category, n) {
                Ok(names) if well_formed(&names, n) => {
                    debug!(%category, attempt, "names acquired");
                    return Ok(names);
                }
                Ok(names) => {
                    warn!(%category, attempt, got = names.len(), wanted = n, "malformed name list");
                }
                Err(e) => {
                    warn!(%category, attempt, error = %e, "name source failed");
                }
            }
        }
        Err(GameError::CatalogueUnavailable {
            category,
            attempts: self.attempts,
        })
    }

    fn describe(&mut self, category: Category, name: &str) -> Result<Option<String>, GameError> {
        self.inner.describe(category, name)
    }
}
