pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod nutrition;
pub mod nutritionix;
pub mod relay;
pub mod routes;
pub mod state;
