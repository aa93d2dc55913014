use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::client::Diet;
use crate::error::{PlannerError, Result};
use crate::profile::{ActivityLevel, Sex, UserProfile};
use crate::vocabulary::IngredientVocabulary;

/// Prompt for a positive number.
fn prompt_positive<T>(prompt: &str, default: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: T = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value <= T::default() {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be greater than zero",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for biological sex.
pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

/// Prompt for activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("How active are you?")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for an optional diet filter.
pub fn prompt_diet() -> Result<Option<Diet>> {
    let mut options = vec!["No preference"];
    options.extend(Diet::ALL.iter().map(|d| d.as_str()));

    let selection = Select::new()
        .with_prompt("Diet")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(selection.checked_sub(1).map(|i| Diet::ALL[i]))
}

/// Prompt for ingredients to exclude, matched against the vocabulary when one is loaded.
pub fn prompt_excludes(vocabulary: Option<&IngredientVocabulary>) -> Result<Vec<String>> {
    let mut excludes = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Exclude an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(vocab) = vocabulary else {
            excludes.push(input.to_string());
            continue;
        };

        if let Some(name) = vocab.canonical_name(input) {
            excludes.push(name.to_string());
            println!("Excluding: {}", name);
            continue;
        }

        let candidates = vocab.suggest(input, 5);
        match candidates.as_slice() {
            [] => println!("No matching ingredient found for '{}'", input),
            [only] => {
                if prompt_yes_no(&format!("Did you mean '{}'?", only), true)? {
                    excludes.push(only.to_string());
                    println!("Excluding: {}", only);
                }
            }
            many => {
                let mut options: Vec<&str> = many.to_vec();
                options.push("None of these");

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if selection < many.len() {
                    excludes.push(many[selection].to_string());
                    println!("Excluding: {}", many[selection]);
                }
            }
        }
    }

    Ok(excludes)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile from the user.
pub fn collect_profile(vocabulary: Option<&IngredientVocabulary>) -> Result<UserProfile> {
    let height: f64 = prompt_positive("Height (cm)", "175")?;
    let weight: f64 = prompt_positive("Weight (kg)", "70")?;
    let age: f64 = prompt_positive("Age (years)", "30")?;
    let sex = prompt_sex()?;
    let activity = prompt_activity()?;
    let diet = prompt_diet()?;
    let exclude = prompt_excludes(vocabulary)?;

    Ok(UserProfile::new(height, weight, age, sex, activity, diet, exclude))
}
