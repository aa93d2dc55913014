use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use strsim::jaro_winkler;

use crate::error::Result;

/// Minimum similarity for a fuzzy suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Ingredient display names mapped to provider ingredient ids.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct IngredientVocabulary {
    /// `(name, id)` in file order.
    entries: Vec<(String, String)>,
    /// Lowercase name to index into `entries`.
    index: HashMap<String, usize>,
}

impl IngredientVocabulary {
    /// Load a header-less `name;id` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut vocab = Self::default();
        for record in rdr.records() {
            let record = record?;
            let name = record.get(0).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let id = record.get(1).map(str::trim).unwrap_or_default();
            vocab.insert(name, id);
        }

        Ok(vocab)
    }

    /// Add an entry; a repeated name (case-insensitive) replaces the earlier id.
    pub fn insert(&mut self, name: &str, id: &str) {
        let key = name.to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i] = (name.to_string(), id.to_string()),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((name.to_string(), id.to_string()));
            }
        }
    }

    /// Provider id for a name (case-insensitive).
    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Canonical display name for a name (case-insensitive).
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.entries[i].0.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Closest names to `input`, best first.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<&str> {
        let needle = input.trim().to_lowercase();

        let mut candidates: Vec<(&str, f64)> = self
            .entries
            .iter()
            .map(|(n, _)| (n.as_str(), jaro_winkler(&n.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(n, _)| n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
