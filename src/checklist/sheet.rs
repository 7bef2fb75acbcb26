//! Per-seat detective sheet.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Catalogue, Category};

/// Card name to "known to this seat" flag.
///
/// Names outside the game's catalogue are ignored rather than rejected:
/// disproof events can mention cards from any category, and a stray name
/// must never abort a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    known: FxHashMap<String, bool>,
    /// Names per category in catalogue order, for display.
    order: Vec<(Category, Vec<String>)>,
}

impl Checklist {
    /// Every catalogue card, all unknown.
    #[must_use]
    pub fn new(catalogue: &Catalogue) -> Self {
        let known = catalogue.cards().map(|c| (c.name, false)).collect();
        let order = Category::ALL
            .into_iter()
            .map(|cat| (cat, catalogue.names(cat).to_vec()))
            .collect();
        Self { known, order }
    }

    /// Mark a card as known. Idempotent; unknown names are a no-op.
    pub fn mark_known(&mut self, name: &str) {
        if let Some(flag) = self.known.get_mut(name) {
            *flag = true;
        }
    }

    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.known.get(name).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.values().filter(|&&k| k).count()
    }

    /// Cards of `category` not yet ruled out: the remaining suspects.
    pub fn unknown_in(&self, category: Category) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(move |(cat, _)| *cat == category)
            .flat_map(|(_, names)| names.iter())
            .filter(move |n| !self.is_known(n))
            .map(String::as_str)
    }

    /// Ordered view grouped by category.
    #[must_use]
    pub fn snapshot(&self) -> ChecklistSnapshot {
        let sections = self
            .order
            .iter()
            .map(|(category, names)| ChecklistSection {
                category: *category,
                entries: names.iter().map(|n| (n.clone(), self.is_known(n))).collect(),
            })
            .collect();
        ChecklistSnapshot { sections }
    }
}

/// One category's rows of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub category: Category,
    pub entries: Vec<(String, bool)>,
}

/// Read-only copy of a checklist for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSnapshot {
    pub sections: Vec<ChecklistSection>,
}

impl std::fmt::Display for ChecklistSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Checklist ---")?;
        for section in &self.sections {
            writeln!(f, "{}:", section.category.heading())?;
            for (name, known) in &section.entries {
                writeln!(f, "  [{}] {}", if *known { 'x' } else { ' ' }, name)?;
            }
        }
        Ok(())
    }
}
