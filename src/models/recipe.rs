use serde::{Deserialize, Deserializer, Serialize};

/// Provider recipe identifier.
pub type RecipeId = u64;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Empty when the provider sent no name; such lines are left out of totals.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            unit: Some(unit.into()),
            amount,
        }
    }

    /// Unit used as the aggregation key; a missing unit is the empty string.
    #[inline]
    pub fn unit_key(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full recipe record, fetched per meal on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub id: RecipeId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub servings: Option<u32>,

    #[serde(default)]
    pub ready_in_minutes: Option<u32>,

    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
}

/// Summed amount for one `(name, unit)` pair.
///
/// The same ingredient in two units yields two rows; no conversion is attempted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientTotal {
    pub name: String,
    pub unit: String,
    pub amount: f64,
}
