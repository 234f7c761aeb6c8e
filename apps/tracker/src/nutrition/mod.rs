//! Query formatting and calorie adjustment. Pure functions over static data.

pub mod adjustments;
pub mod query;

pub use adjustments::{adjust_calories, conditions_for, is_conditioned};
pub use query::format_query;
