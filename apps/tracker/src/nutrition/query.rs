use std::fmt::Display;

use tracing::debug;

use crate::nutrition::adjustments::is_conditioned;

/// Builds the natural-language query sent to the nutrition API,
/// e.g. `"2 grams of chicken with skin"`.
///
/// The ingredient is lowercased. A non-empty condition is appended (lowercased)
/// only for conditioned ingredients. Nothing is validated: quantity and unit are
/// passed through as given.
pub fn format_query(
    quantity: impl Display,
    unit: impl Display,
    ingredient: &str,
    condition: Option<&str>,
) -> String {
    let mut phrase = ingredient.to_lowercase();

    if let Some(condition) = condition.filter(|c| !c.is_empty()) {
        if is_conditioned(&phrase) {
            phrase.push(' ');
            phrase.push_str(&condition.to_lowercase());
        }
    }

    let query = format!("{quantity} {unit} of {phrase}");
    debug!("Nutrition query: {query}");
    query
}
