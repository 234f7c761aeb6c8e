//! Calorie adjustments for ingredients whose calories depend on a variant
//! ("condition") the nutrition API cannot tell apart from the plain name.
//!
//! The table is the single source of truth for which ingredients are
//! conditioned and which condition labels each one offers.

/// Ingredient (lowercase) → ordered (condition label, multiplier) pairs.
const ADJUSTMENTS: &[(&str, &[(&str, f64)])] = &[
    (
        "chicken",
        &[
            ("With Skin", 1.2),
            ("Skinless", 0.85),
            ("Boneless", 0.9),
            ("With Bone", 0.85),
        ],
    ),
    (
        "rice",
        &[("White Rice", 1.0), ("Brown Rice", 0.9), ("Basmati Rice", 1.1)],
    ),
    (
        "milk",
        &[
            ("Whole Milk", 1.0),
            ("Skim Milk", 0.75),
            ("Almond Milk", 0.5),
            ("Soy Milk", 0.6),
        ],
    ),
    (
        "bread",
        &[("White Bread", 1.0), ("Whole Wheat", 0.9), ("Multigrain", 0.95)],
    ),
    (
        "fish",
        &[("Salmon", 1.2), ("Tuna", 1.0), ("Tilapia", 0.85), ("Cod", 0.8)],
    ),
    ("beef", &[("Lean", 0.9), ("Fatty", 1.2), ("Ground Beef", 1.1)]),
    (
        "cheese",
        &[
            ("Cheddar", 1.1),
            ("Mozzarella", 1.0),
            ("Parmesan", 1.3),
            ("Feta", 0.9),
        ],
    ),
];

fn entry(ingredient: &str) -> Option<&'static [(&'static str, f64)]> {
    let key = ingredient.to_lowercase();
    ADJUSTMENTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, conditions)| *conditions)
}

/// True when the ingredient (any casing) has condition-specific calories.
pub fn is_conditioned(ingredient: &str) -> bool {
    entry(ingredient).is_some()
}

/// Condition labels offered for an ingredient in picker order, or `None` if it
/// has no variants.
pub fn conditions_for(ingredient: &str) -> Option<Vec<&'static str>> {
    entry(ingredient).map(|conditions| conditions.iter().map(|(label, _)| *label).collect())
}

/// Multiplier for an (ingredient, condition) pair.
/// Ingredient matching ignores case; condition labels must match exactly.
pub fn multiplier(ingredient: &str, condition: &str) -> Option<f64> {
    entry(ingredient)?
        .iter()
        .find(|(label, _)| *label == condition)
        .map(|(_, factor)| *factor)
}

/// Scales `base_calories` by the table multiplier, or returns it unchanged when
/// the pair is unknown. Callers must apply this once per fetched result.
pub fn adjust_calories(ingredient: &str, condition: &str, base_calories: f64) -> f64 {
    match multiplier(ingredient, condition) {
        Some(factor) => base_calories * factor,
        None => base_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chicken_adjustments() {
        assert_eq!(adjust_calories("chicken", "With Skin", 100.0), 120.0);
        assert_eq!(adjust_calories("chicken", "Skinless", 100.0), 85.0);
    }

    #[test]
    fn test_ingredient_lookup_ignores_case() {
        assert_eq!(adjust_calories("CHICKEN", "With Skin", 100.0), 120.0);
        assert_eq!(adjust_calories("Rice", "Brown Rice", 100.0), 90.0);
    }

    #[test]
    fn test_condition_lookup_is_case_sensitive() {
        assert_eq!(adjust_calories("chicken", "skinless", 100.0), 100.0);
        assert_eq!(adjust_calories("chicken", "WITH SKIN", 250.0), 250.0);
    }

    #[test]
    fn test_unknown_pairs_pass_through() {
        for base in [0.0, 1.5, 100.0, 9999.0] {
            assert_eq!(adjust_calories("egg", "Boiled", base), base);
            assert_eq!(adjust_calories("chicken", "Fried", base), base);
            assert_eq!(adjust_calories("", "", base), base);
        }
    }

    #[test]
    fn test_no_rounding_applied() {
        let adjusted = adjust_calories("bread", "Multigrain", 123.0);
        assert!((adjusted - 116.85).abs() < 1e-9, "adjusted was {adjusted}");
    }

    #[test]
    fn test_multipliers_are_positive() {
        for (_, conditions) in ADJUSTMENTS {
            assert!(conditions.iter().all(|(_, factor)| *factor > 0.0));
        }
    }

    #[test]
    fn test_conditions_for() {
        assert_eq!(
            conditions_for("Beef"),
            Some(vec!["Lean", "Fatty", "Ground Beef"])
        );
        assert!(conditions_for("egg").is_none());
        assert!(is_conditioned("MILK"));
        assert!(!is_conditioned("egg"));
    }
}
