use std::future::Future;

use catalog_app::{
    client::{CatalogError, ClientConfig, DEFAULT_CATALOG_API_URL},
    context::AppContext,
    notifications::Notifications,
};
use clap::{Args, Parser, Subcommand};

mod categories;
mod coupons;
mod currencies;
mod deliverables;
mod guidelines;
mod modifier_types;
mod prices;
mod products;
mod table;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog backoffice CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct ConnectionArgs {
    /// Catalog service base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_CATALOG_API_URL, global = true)]
    api_url: String,

    /// Authorization header value sent to the catalog service
    #[arg(long, env = "CATALOG_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Categories(categories::CategoriesCommand),
    Currencies(currencies::CurrenciesCommand),
    Coupons(coupons::CouponsCommand),
    Deliverables(deliverables::DeliverablesCommand),
    Guidelines(guidelines::GuidelinesCommand),
    ModifierTypes(modifier_types::ModifierTypesCommand),
    Prices(prices::PricesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(ClientConfig {
            base_url: self.connection.api_url,
            authorization: self.connection.api_token,
        });

        match self.command {
            Commands::Products(command) => products::run(&context, command).await,
            Commands::Categories(command) => categories::run(&context, command).await,
            Commands::Currencies(command) => currencies::run(&context, command).await,
            Commands::Coupons(command) => coupons::run(&context, command).await,
            Commands::Deliverables(command) => deliverables::run(&context, command).await,
            Commands::Guidelines(command) => guidelines::run(&context, command).await,
            Commands::ModifierTypes(command) => modifier_types::run(&context, command).await,
            Commands::Prices(command) => prices::run(&context, command).await,
        }
    }
}

/// Run a query through the notification context, surfacing its error message.
async fn query<T, F>(notifications: &Notifications, operation: F) -> Result<T, String>
where
    F: Future<Output = Result<T, CatalogError>>,
{
    notifications
        .track(operation)
        .await
        .ok_or_else(|| failure(notifications))
}

/// Run a mutation through the notification context and print its success message.
async fn mutate<T, F>(
    notifications: &Notifications,
    operation: F,
    success_message: &str,
) -> Result<T, String>
where
    F: Future<Output = Result<T, CatalogError>>,
{
    let value = notifications
        .track_mutation(operation, success_message)
        .await
        .ok_or_else(|| failure(notifications))?;

    if let Some(message) = notifications.latest_success() {
        println!("{message}");
    }

    Ok(value)
}

fn failure(notifications: &Notifications) -> String {
    notifications
        .take_error()
        .unwrap_or_else(|| "unknown error".to_string())
}
