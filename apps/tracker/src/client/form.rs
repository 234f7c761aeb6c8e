use tracing::{info, warn};

use crate::client::NutritionLookup;
use crate::models::nutrition::{FoodItem, Unit};
use crate::nutrition::{conditions_for, format_query, is_conditioned};

pub const MISSING_INPUT: &str = "Please enter an ingredient and quantity.";
pub const NOT_FOUND: &str = "No nutrition data found for this condition.";
pub const FETCH_FAILED: &str = "Failed to fetch data. Please try again.";

/// State behind the lookup form: inputs, the last result, and status.
///
/// `submit` takes `&mut self`, so one form never has two lookups in flight.
#[derive(Debug, Default)]
pub struct NutritionForm {
    ingredient: String,
    quantity: String,
    unit: Unit,
    condition: Option<String>,
    result: Option<FoodItem>,
    loading: bool,
    error: Option<String>,
}

impl NutritionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the ingredient. A selected condition the new ingredient does not
    /// offer is dropped.
    pub fn set_ingredient(&mut self, ingredient: impl Into<String>) {
        self.ingredient = ingredient.into();
        let still_offered = match (&self.condition, self.available_conditions()) {
            (Some(condition), Some(offered)) => offered.iter().any(|o| *o == condition.as_str()),
            _ => false,
        };
        if !still_offered {
            self.condition = None;
        }
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Selects a condition label; an empty label clears the selection.
    pub fn select_condition(&mut self, condition: impl Into<String>) {
        let condition = condition.into();
        self.condition = (!condition.is_empty()).then_some(condition);
    }

    /// Condition picker options, shown only for conditioned ingredients.
    pub fn available_conditions(&self) -> Option<Vec<&'static str>> {
        conditions_for(&self.ingredient)
    }

    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn result(&self) -> Option<&FoodItem> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The query the next submission would send.
    pub fn query(&self) -> String {
        format_query(
            &self.quantity,
            self.unit,
            &self.ingredient,
            self.condition.as_deref(),
        )
    }

    /// Looks up the current inputs and stores the first matching food (with
    /// its calorie adjustment applied) or an error message.
    pub async fn submit(&mut self, lookup: &dyn NutritionLookup) {
        if self.ingredient.is_empty() || self.quantity.is_empty() {
            self.error = Some(MISSING_INPUT.to_string());
            return;
        }

        self.loading = true;
        self.error = None;

        let outcome = self.fetch(lookup).await;
        match outcome {
            Ok(food) => self.result = Some(food),
            Err(message) => self.error = Some(message.to_string()),
        }

        self.loading = false;
    }

    async fn fetch(&self, lookup: &dyn NutritionLookup) -> Result<FoodItem, &'static str> {
        let query = self.query();

        let response = lookup.lookup(&query).await.map_err(|e| {
            warn!("Nutrition lookup for '{query}' failed: {e}");
            FETCH_FAILED
        })?;

        let mut food = response.foods.into_iter().next().ok_or(NOT_FOUND)?;

        if let Some(condition) = self.condition.as_deref() {
            if is_conditioned(&self.ingredient) {
                food.apply_calorie_adjustment(&self.ingredient, condition);
            }
        }

        info!("Final calories for '{query}': {:?}", food.nf_calories);
        Ok(food)
    }
}
