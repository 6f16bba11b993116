use catalog::{
    guidelines::{GuidelineId, NewGuideline},
    products::ProductId,
};
use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct GuidelinesCommand {
    #[command(subcommand)]
    command: GuidelinesSubcommand,
}

#[derive(Debug, Subcommand)]
enum GuidelinesSubcommand {
    /// List guidelines
    List,

    /// Create a guideline
    Create(CreateGuidelineArgs),

    /// Delete a guideline
    Delete(DeleteGuidelineArgs),
}

#[derive(Debug, Args)]
struct CreateGuidelineArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: String,

    /// Product the guideline belongs to
    #[arg(long)]
    product_id: Option<ProductId>,
}

#[derive(Debug, Args)]
struct DeleteGuidelineArgs {
    /// Guideline ID
    id: GuidelineId,
}

pub(crate) async fn run(context: &AppContext, command: GuidelinesCommand) -> Result<(), String> {
    match command.command {
        GuidelinesSubcommand::List => {
            let guidelines = query(&context.notifications, context.guidelines.list()).await?;

            table::print(
                ["ID", "Name", "Product", "Updated"],
                guidelines
                    .into_iter()
                    .map(|guideline| {
                        [
                            guideline.id.to_string(),
                            guideline.name,
                            guideline.product_id.to_string(),
                            guideline.updated_at.to_string(),
                        ]
                    })
                    .collect(),
                "no guidelines found",
            );

            Ok(())
        }
        GuidelinesSubcommand::Create(args) => {
            let guideline = mutate(
                &context.notifications,
                context.guidelines.create(NewGuideline {
                    name: args.name,
                    description: args.description,
                    product_id: args.product_id,
                }),
                "Diretriz criada",
            )
            .await?;

            println!("guideline_id: {}", guideline.id);

            Ok(())
        }
        GuidelinesSubcommand::Delete(args) => {
            mutate(
                &context.notifications,
                context.guidelines.delete(&args.id),
                "Diretriz excluída",
            )
            .await
        }
    }
}
