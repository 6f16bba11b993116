use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

use super::{query, table};

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CategoriesSubcommand {
    /// List categories
    List,
}

pub(crate) async fn run(context: &AppContext, command: CategoriesCommand) -> Result<(), String> {
    match command.command {
        CategoriesSubcommand::List => {
            let categories = query(&context.notifications, context.categories.list()).await?;

            table::print(
                ["ID", "Name", "Description"],
                categories
                    .into_iter()
                    .map(|category| [category.id.to_string(), category.name, category.description])
                    .collect(),
                "no categories found",
            );

            Ok(())
        }
    }
}
