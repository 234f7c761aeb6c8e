//! Command-line front end for the nutrition form: fills the form from flags,
//! submits it to the relay, and prints the result card.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tracker::client::form::NutritionForm;
use tracker::client::{RelayClient, DEFAULT_RELAY_URL};
use tracker::models::nutrition::Unit;
use tracker::nutrition::conditions_for;

#[derive(Debug, Parser)]
#[command(name = "tracker-lookup", version, about = "Look up nutrition facts through the relay")]
struct Cli {
    /// Ingredient, e.g. "chicken" or "egg"
    #[arg(short, long, default_value = "")]
    ingredient: String,

    /// Quantity as entered, e.g. "150"
    #[arg(short, long, default_value = "")]
    quantity: String,

    /// One of: grams, ml, lbs, l
    #[arg(short, long, default_value = "grams")]
    unit: Unit,

    /// Variant of a conditioned ingredient, e.g. "Skinless"
    #[arg(short, long)]
    condition: Option<String>,

    /// Relay base address
    #[arg(long, env = "RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Print the condition options for the ingredient and exit
    #[arg(long)]
    list_conditions: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_conditions {
        match conditions_for(&cli.ingredient) {
            Some(conditions) => conditions.iter().for_each(|c| println!("{c}")),
            None => println!("'{}' has no condition variants", cli.ingredient),
        }
        return ExitCode::SUCCESS;
    }

    let mut form = NutritionForm::new();
    form.set_ingredient(cli.ingredient);
    form.set_quantity(cli.quantity);
    form.set_unit(cli.unit);
    if let Some(condition) = cli.condition {
        if let Some(offered) = form.available_conditions() {
            if !offered.iter().any(|o| *o == condition) {
                eprintln!(
                    "Unknown condition '{condition}' (options: {})",
                    offered.join(", ")
                );
                return ExitCode::FAILURE;
            }
        }
        form.select_condition(condition);
    }

    let relay = RelayClient::new(cli.relay_url);
    eprintln!("Looking up \"{}\" via {} ...", form.query(), relay.base_url());
    form.submit(&relay).await;

    if let Some(error) = form.error() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    if let Some(food) = form.result() {
        println!("{food}");
    }
    ExitCode::SUCCESS
}
