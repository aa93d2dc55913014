pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity, prompt_diet, prompt_excludes, prompt_sex, prompt_yes_no,
};
pub use render::{
    display_day, display_profile, display_projection, display_recipe, display_shopping_list,
    display_week_nutrients,
};
