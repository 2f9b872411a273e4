//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests category labels as the user types, so commands receive exactly the
//! labels `Category::from_str` accepts.

use crate::{
    bot::BotData,
    core::category::{ALL_CATEGORIES_LABEL, Category},
    errors::Error,
};

fn matching_categories(partial: &str) -> impl Iterator<Item = &'static str> {
    let partial_lower = partial.to_lowercase();
    Category::ALL
        .into_iter()
        .map(Category::label)
        .filter(move |label| label.to_lowercase().contains(&partial_lower))
}

/// Suggests receipt categories for the scan command.
pub async fn autocomplete_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching_categories(partial).map(str::to_string).collect()
}

/// Suggests categories plus the `All` sentinel for the vault command.
pub async fn autocomplete_category_filter(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let show_all = ALL_CATEGORIES_LABEL
        .to_lowercase()
        .contains(&partial.to_lowercase());

    show_all
        .then_some(ALL_CATEGORIES_LABEL)
        .into_iter()
        .chain(matching_categories(partial))
        .map(str::to_string)
        .collect()
}
