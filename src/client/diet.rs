use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::PlannerError;

/// Diet filters the recipe API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    GlutenFree,
    Ketogenic,
    Vegetarian,
    LactoVegetarian,
    OvoVegetarian,
    Vegan,
    Pescetarian,
    Paleo,
    Primal,
    LowFodmap,
    Whole30,
}

impl Diet {
    pub const ALL: [Diet; 11] = [
        Diet::GlutenFree,
        Diet::Ketogenic,
        Diet::Vegetarian,
        Diet::LactoVegetarian,
        Diet::OvoVegetarian,
        Diet::Vegan,
        Diet::Pescetarian,
        Diet::Paleo,
        Diet::Primal,
        Diet::LowFodmap,
        Diet::Whole30,
    ];

    /// Identifier sent as the `diet` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Diet::GlutenFree => "gluten free",
            Diet::Ketogenic => "ketogenic",
            Diet::Vegetarian => "vegetarian",
            Diet::LactoVegetarian => "lacto-vegetarian",
            Diet::OvoVegetarian => "ovo-vegetarian",
            Diet::Vegan => "vegan",
            Diet::Pescetarian => "pescetarian",
            Diet::Paleo => "paleo",
            Diet::Primal => "primal",
            Diet::LowFodmap => "low fodmap",
            Diet::Whole30 => "whole30",
        }
    }

    /// Parse a diet, treating anything unsupported as "no filter".
    ///
    /// Never fails: an unknown diet is logged and dropped so the plan request
    /// still goes out unfiltered.
    pub fn parse_lenient(input: &str) -> Option<Diet> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse() {
            Ok(diet) => Some(diet),
            Err(_) => {
                warn!(
                    "Ignoring unsupported diet '{}'; requesting plan without a diet filter",
                    trimmed
                );
                None
            }
        }
    }
}

impl FromStr for Diet {
    type Err = PlannerError;

    /// Strict, case-insensitive parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Diet::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| PlannerError::InvalidDiet(s.to_string()))
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
