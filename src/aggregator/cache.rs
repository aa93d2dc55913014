use std::collections::HashMap;

use tracing::debug;

use crate::client::{DetailOptions, RecipeApi};
use crate::models::{RecipeDetail, RecipeId};

/// Fetch-through cache of recipe details.
///
/// At most one successful fetch per id. Failed fetches are not remembered,
/// so the next lookup for that id tries the network again.
#[derive(Debug, Default)]
pub struct RecipeCache {
    entries: HashMap<RecipeId, RecipeDetail>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached detail for `id`, fetching it on a miss.
    pub fn resolve<A>(&mut self, api: &A, id: RecipeId) -> Option<&RecipeDetail>
    where
        A: RecipeApi + ?Sized,
    {
        if self.entries.contains_key(&id) {
            debug!("Recipe cache hit - id={}", id);
        } else {
            debug!("Recipe cache miss - id={}", id);
            let detail = api.recipe_detail(id, &DetailOptions::default())?;
            self.entries.insert(id, detail);
        }

        self.entries.get(&id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
