use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::nutrition::adjustments::{adjust_calories, multiplier};

/// Units offered by the quantity picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Grams,
    Ml,
    Lbs,
    L,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Grams, Unit::Ml, Unit::Lbs, Unit::L];

    /// Query token, as understood by the nutrition API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Grams => "grams",
            Unit::Ml => "ml",
            Unit::Lbs => "lbs",
            Unit::L => "l",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown unit '{0}' (expected one of: grams, ml, lbs, l)")]
pub struct UnknownUnit(String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Response body of the natural nutrients endpoint, as relayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientsResponse {
    pub foods: Vec<FoodItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub thumb: Option<String>,
    pub highres: Option<String>,
}

/// One matched food. Only the displayed fields are typed; everything else the
/// API sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub photo: Option<Photo>,
    #[serde(default)]
    pub nf_calories: Option<f64>,
    #[serde(default)]
    pub nf_total_fat: Option<f64>,
    #[serde(default)]
    pub nf_protein: Option<f64>,
    #[serde(default)]
    pub nf_cholesterol: Option<f64>,
    #[serde(default)]
    pub nf_total_carbohydrate: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Set once a calorie multiplier has been applied.
    #[serde(skip)]
    adjusted: bool,
}

impl FoodItem {
    pub fn image_url(&self) -> Option<&str> {
        self.photo.as_ref().and_then(|p| p.highres.as_deref())
    }

    pub fn is_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Scales `nf_calories` by the multiplier for (ingredient, condition).
    ///
    /// Returns `true` if calories changed. Once applied, later calls are no-ops,
    /// so a result can never be double-adjusted.
    pub fn apply_calorie_adjustment(&mut self, ingredient: &str, condition: &str) -> bool {
        if self.adjusted {
            return false;
        }
        let Some(calories) = self.nf_calories else {
            return false;
        };
        if multiplier(ingredient, condition).is_none() {
            return false;
        }
        self.nf_calories = Some(adjust_calories(ingredient, condition, calories));
        self.adjusted = true;
        true
    }
}

/// Rounds to two decimals and drops trailing zeros: `90.0` → `90`, `116.849` → `116.85`.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", (v * 100.0).round() / 100.0),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.food_name)?;
        if let Some(url) = self.image_url() {
            writeln!(f, "Image: {url}")?;
        }
        writeln!(f, "Calories: {} kcal", format_amount(self.nf_calories))?;
        writeln!(f, "Fat: {} g", format_amount(self.nf_total_fat))?;
        writeln!(f, "Protein: {} g", format_amount(self.nf_protein))?;
        writeln!(f, "Cholesterol: {} mg", format_amount(self.nf_cholesterol))?;
        write!(
            f,
            "Carbohydrates: {} g",
            format_amount(self.nf_total_carbohydrate)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_food() -> FoodItem {
        serde_json::from_value(json!({
            "food_name": "chicken",
            "serving_qty": 150,
            "serving_unit": "g",
            "nf_calories": 100.0,
            "nf_total_fat": 3.57,
            "nf_protein": 31.02,
            "nf_cholesterol": 85.0,
            "nf_total_carbohydrate": 0,
            "photo": {
                "thumb": "https://nix-tag-images.s3.amazonaws.com/9_thumb.jpg",
                "highres": "https://nix-tag-images.s3.amazonaws.com/9_highres.jpg",
                "is_user_uploaded": false
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("grams".parse::<Unit>().unwrap(), Unit::Grams);
        assert_eq!("ML".parse::<Unit>().unwrap(), Unit::Ml);
        assert_eq!(" lbs ".parse::<Unit>().unwrap(), Unit::Lbs);
        assert_eq!("l".parse::<Unit>().unwrap(), Unit::L);
        assert!("cups".parse::<Unit>().is_err());
        assert_eq!(Unit::default().to_string(), "grams");
    }

    #[test]
    fn test_food_item_keeps_unknown_fields() {
        let food = sample_food();
        assert_eq!(food.extra.get("serving_unit"), Some(&json!("g")));
        assert_eq!(food.nf_total_carbohydrate, Some(0.0));
        assert_eq!(
            food.image_url(),
            Some("https://nix-tag-images.s3.amazonaws.com/9_highres.jpg")
        );

        let back = serde_json::to_value(&food).unwrap();
        assert_eq!(back["serving_qty"], json!(150));
        assert!(back.get("adjusted").is_none());
    }

    #[test]
    fn test_response_without_foods_rejected() {
        let parsed = serde_json::from_value::<NutrientsResponse>(
            json!({ "message": "unexpected shape" }),
        );
        assert!(parsed.is_err());

        let empty: NutrientsResponse = serde_json::from_value(json!({ "foods": [] })).unwrap();
        assert!(empty.foods.is_empty());
    }

    #[test]
    fn test_null_nutrients_tolerated() {
        let food: FoodItem =
            serde_json::from_value(json!({ "food_name": "water", "nf_calories": null }))
                .unwrap();
        assert_eq!(food.nf_calories, None);
        assert!(food.photo.is_none());
    }

    #[test]
    fn test_adjustment_applies_once() {
        let mut food = sample_food();
        assert!(food.apply_calorie_adjustment("Chicken", "With Skin"));
        assert_eq!(food.nf_calories, Some(120.0));
        assert!(food.is_adjusted());

        assert!(!food.apply_calorie_adjustment("Chicken", "With Skin"));
        assert_eq!(food.nf_calories, Some(120.0));
    }

    #[test]
    fn test_unknown_condition_leaves_item_unadjusted() {
        let mut food = sample_food();
        assert!(!food.apply_calorie_adjustment("chicken", "Fried"));
        assert_eq!(food.nf_calories, Some(100.0));
        assert!(!food.is_adjusted());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(90.0)), "90");
        assert_eq!(format_amount(Some(116.849)), "116.85");
        assert_eq!(format_amount(Some(0.5)), "0.5");
        assert_eq!(format_amount(None), "n/a");
    }

    #[test]
    fn test_display_card() {
        let mut food = sample_food();
        food.apply_calorie_adjustment("rice", "Brown Rice");
        let card = food.to_string();
        assert!(card.starts_with("chicken\n"));
        assert!(card.contains("Image: https://nix-tag-images.s3.amazonaws.com/9_highres.jpg"));
        assert!(card.contains("Calories: 90 kcal"));
        assert!(card.contains("Fat: 3.57 g"));
        assert!(card.contains("Protein: 31.02 g"));
        assert!(card.contains("Cholesterol: 85 mg"));
        assert!(card.ends_with("Carbohydrates: 0 g"));
    }
}
